// Copyright 2025 the Expandable Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for label settings and how they feed back into the variants.

use expandable_label::{
    Font, FontWeight, Granularity, StyleProperty, StyledText, font_at,
};

use crate::util::samples::WORDS;
use crate::util::{TestEnv, assert_link_is, font};

#[test]
fn properties_defaults() {
    let env = TestEnv::new(WORDS);
    let label = &env.label;
    assert!(label.is_collapsed());
    assert_eq!(label.max_collapsed_lines(), 3);
    assert_eq!(label.granularity(), Granularity::Word);
    assert_eq!(label.ellipsis().map(StyledText::as_str), Some("..."));
    assert_eq!(label.collapsed_link().as_str(), "More");
    assert_eq!(font_at(label.collapsed_link(), 0), Some(font().bold()));
    assert!(label.expanded_link().is_none());
    assert_eq!(font().bold().weight, FontWeight::BOLD);
}

#[test]
fn properties_link_font_is_bold() {
    let env = TestEnv::new(WORDS);
    let collapsed = env.label.render_state().collapsed_variant();
    assert_eq!(font_at(collapsed, 0), Some(font()));
    assert_eq!(font_at(collapsed, 54), Some(font().bold()));
}

#[test]
fn properties_width_recomputes() {
    let mut env = TestEnv::new(WORDS);
    // Three lines of eight words.
    env.label.set_width(200.0);
    assert_eq!(env.displayed(), WORDS);
    assert_eq!(env.label.line_count(), 3);
    assert_eq!(env.label.preferred_height(), 36.0);

    env.label.set_width(100.0);
    assert_link_is(env.label.render_state(), "... More");
    assert_eq!(env.label.preferred_height(), 36.0);
}

#[test]
fn properties_font_recomputes() {
    let mut env = TestEnv::new(WORDS);
    // Twice the advance: two words per line. The link keeps its own smaller font.
    env.label.set_font(Font::new(20.0).with_line_height(24.0));
    assert_eq!(
        env.displayed_lines(),
        ["w00x w01x ", "w02x w03x ", "w04x ... More"]
    );
    assert_eq!(env.label.preferred_height(), 72.0);
}

#[test]
fn properties_without_ellipsis() {
    let mut env = TestEnv::new(WORDS);
    env.label.set_ellipsis(None);
    assert!(env.displayed().ends_with("w08x w09x w10x More"));
    assert_eq!(env.label.render_state().collapsed_link_range(), Some(55..59));
    assert_link_is(env.label.render_state(), "More");
}

#[test]
fn properties_custom_ellipsis_and_link() {
    let mut env = TestEnv::new(WORDS);
    env.label.set_ellipsis(Some(StyledText::new("\u{2026}")));
    env.label.set_collapsed_link(StyledText::new("Read more"));
    assert_link_is(env.label.render_state(), "\u{2026} Read more");
    assert_eq!(env.displayed_lines().len(), 3);
}

#[test]
fn properties_empty_collapsed_link_is_rejected() {
    let mut env = TestEnv::new(WORDS);
    env.label.set_collapsed_link(StyledText::new(""));
    assert_eq!(env.label.collapsed_link().as_str(), "More");
    assert_link_is(env.label.render_state(), "... More");
}

#[test]
fn properties_expanded_link_attributes() {
    let mut env = TestEnv::new(WORDS);
    let link_font = Font::new(10.0).with_weight(FontWeight::new(600.0));
    env.label.set_expanded_link_text(
        "Show less",
        [
            StyleProperty::Font(link_font),
            StyleProperty::Underline(true),
        ],
        None,
    );
    let state = env.label.render_state();
    let expanded = state.expanded_variant();
    let range = state.expanded_link_range().expect("text is truncated");
    assert_eq!(&expanded.as_str()[range.clone()], "Show less");
    assert_eq!(font_at(expanded, range.start), Some(link_font));
    assert!(
        expanded
            .attributes_at(range.start)
            .any(|attr| *attr == StyleProperty::Underline(true))
    );
    // The separator is set in the label font.
    assert_eq!(font_at(expanded, range.start - 1), Some(font()));

    env.label.set_expanded_link(None);
    assert_eq!(env.label.render_state().expanded_link_range(), None);
}

#[test]
fn properties_styled_text_keeps_fonts() {
    let big = Font::new(20.0).with_line_height(24.0);
    let mut text = StyledText::new("big small");
    text.apply_attribute(0..3, StyleProperty::Font(big)).unwrap();
    let mut env = TestEnv::new("");
    env.label.set_styled_text(text);
    let shown = env.label.displayed_text().into_owned();
    assert_eq!(font_at(&shown, 0), Some(big));
    assert_eq!(font_at(&shown, 5), Some(font()));
    assert_eq!(env.label.preferred_height(), 24.0);
    assert_eq!(env.label.text().as_str(), "big small");
}

#[test]
fn properties_empty_text() {
    let mut env = TestEnv::new("");
    assert_eq!(env.displayed(), "");
    assert_eq!(env.label.line_count(), 0);
    assert_eq!(env.label.preferred_height(), 0.0);
    assert_eq!(env.label.render_state().collapsed_link_range(), None);
}
