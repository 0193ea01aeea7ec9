// Copyright 2025 the Expandable Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helpers to assert truths about render states.

use expandable_label::RenderState;

/// Assert that the displayed link range exists and covers exactly `link`.
pub(crate) fn assert_link_is(state: &RenderState, link: &str) {
    let range = state
        .displayed_link_range()
        .expect("displayed variant should have a link");
    let text = state.displayed_variant().as_str();
    assert_eq!(&text[range.clone()], link, "link range {range:?} of {text:?}");
    assert!(
        text.ends_with(link),
        "link {link:?} should end the displayed text {text:?}"
    );
}
