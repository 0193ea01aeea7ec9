// Copyright 2025 the Expandable Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The expandable label widget.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use core::fmt;

use peniko::kurbo::Point;

use crate::interaction::{InteractionController, RenderState, Transition};
use crate::layout::{HitTestOptions, LineLayout};
use crate::style::with_highlighted_range;
use crate::truncate::{TruncationConfig, TruncationRequest, Variants, compute_variants};
use crate::{Alignment, Font, Granularity, StyleProperty, StyledText};

/// Receives notifications around state changes of an [`ExpandableLabel`].
///
/// `will_*` hooks run before the state changes, `did_*` hooks once the new
/// variant is the one that will be drawn next. All hooks run synchronously.
pub trait LabelObserver<L: LineLayout> {
    /// Asked before expanding. Returning `false` cancels the transition.
    fn should_expand(&mut self, label: &ExpandableLabel<L>) -> bool {
        let _ = label;
        true
    }

    /// Asked before collapsing. Returning `false` cancels the transition.
    fn should_collapse(&mut self, label: &ExpandableLabel<L>) -> bool {
        let _ = label;
        true
    }

    /// Called before expanding.
    fn will_expand(&mut self, label: &ExpandableLabel<L>) {
        let _ = label;
    }

    /// Called after expanding.
    fn did_expand(&mut self, label: &ExpandableLabel<L>) {
        let _ = label;
    }

    /// Called before collapsing.
    fn will_collapse(&mut self, label: &ExpandableLabel<L>) {
        let _ = label;
    }

    /// Called after collapsing.
    fn did_collapse(&mut self, label: &ExpandableLabel<L>) {
        let _ = label;
    }
}

/// A host view that animates its layout alongside the label's transitions.
pub trait AnimationHost {
    /// Called right after the label switched variants.
    ///
    /// `height` is the label's new preferred height.
    fn animate_alongside(&mut self, transition: Transition, height: f32);
}

/// A label that truncates its text and appends a "more" link.
///
/// Both renderings are recomputed whenever the text, the width, the font or
/// any link setting changes. Nothing is computed until the label has been
/// given a positive width with [`ExpandableLabel::set_width`].
pub struct ExpandableLabel<L: LineLayout> {
    layout: L,
    font: Font,
    width: f32,
    alignment: Alignment,
    text: StyledText,
    config: TruncationConfig,
    collapsed_link: StyledText,
    expanded_link: Option<StyledText>,
    controller: InteractionController,
    state: RenderState,
    observer: Option<Box<dyn LabelObserver<L>>>,
    animation_host: Option<Box<dyn AnimationHost>>,
}

impl<L: LineLayout> fmt::Debug for ExpandableLabel<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpandableLabel")
            .field("font", &self.font)
            .field("width", &self.width)
            .field("alignment", &self.alignment)
            .field("text", &self.text)
            .field("config", &self.config)
            .field("collapsed_link", &self.collapsed_link)
            .field("expanded_link", &self.expanded_link)
            .field("controller", &self.controller)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<L: LineLayout> ExpandableLabel<L> {
    /// Creates an empty label.
    ///
    /// The collapsed link defaults to "More" in the bold variant of `font`, and
    /// the ellipsis to "...".
    pub fn new(layout: L, font: Font) -> Self {
        Self {
            layout,
            font,
            width: 0.0,
            alignment: Alignment::Start,
            text: StyledText::default(),
            config: TruncationConfig::default(),
            collapsed_link: StyledText::with_attribute("More", StyleProperty::Font(font.bold())),
            expanded_link: None,
            controller: InteractionController::new(),
            state: RenderState::default(),
            observer: None,
            animation_host: None,
        }
    }

    /// The line layout used by this label.
    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// The text as it was set, without links.
    pub fn text(&self) -> &StyledText {
        &self.text
    }

    /// Sets unstyled text. The label font is applied to it.
    pub fn set_text(&mut self, text: &str) {
        self.set_styled_text(StyledText::new(text));
    }

    /// Sets styled text. Ranges without a font get the label font.
    pub fn set_styled_text(&mut self, text: StyledText) {
        self.text = text;
        self.recompute();
    }

    /// The label font.
    pub fn font(&self) -> Font {
        self.font
    }

    /// Sets the label font.
    pub fn set_font(&mut self, font: Font) {
        if self.font != font {
            self.font = font;
            self.recompute();
        }
    }

    /// The width the text is laid out at.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Sets the width available to the text, typically from the host's layout pass.
    pub fn set_width(&mut self, width: f32) {
        if self.width != width {
            self.width = width;
            self.recompute();
        }
    }

    /// Alignment of lines without an alignment of their own.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Sets the alignment used for hit testing lines without an alignment of their own.
    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    /// Whether the collapsed variant is displayed.
    pub fn is_collapsed(&self) -> bool {
        self.state.is_collapsed()
    }

    /// Switches variants without notifying the observer.
    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.state.collapsed = collapsed;
        self.state.link_pressed = false;
    }

    /// Number of lines shown while collapsed.
    pub fn max_collapsed_lines(&self) -> usize {
        self.config.max_collapsed_lines
    }

    /// Sets the number of lines shown while collapsed. `0` disables truncation.
    pub fn set_max_collapsed_lines(&mut self, lines: usize) {
        self.config.max_collapsed_lines = lines;
        self.recompute();
    }

    /// How the last collapsed line is shortened.
    pub fn granularity(&self) -> Granularity {
        self.config.granularity
    }

    /// Sets how the last collapsed line is shortened.
    pub fn set_granularity(&mut self, granularity: Granularity) {
        self.config.granularity = granularity;
        self.recompute();
    }

    /// The link shown while collapsed.
    pub fn collapsed_link(&self) -> &StyledText {
        &self.collapsed_link
    }

    /// Sets the link shown while collapsed.
    ///
    /// The collapsed link is required; empty text is ignored.
    pub fn set_collapsed_link(&mut self, link: StyledText) {
        if link.is_empty() {
            log::warn!(
                "ignoring empty collapsed link, keeping {:?}",
                self.collapsed_link.as_str()
            );
            return;
        }
        self.collapsed_link = link;
        self.recompute();
    }

    /// The link shown while expanded, if any.
    pub fn expanded_link(&self) -> Option<&StyledText> {
        self.expanded_link.as_ref()
    }

    /// Sets the link shown while expanded. `None` makes the label expand-only.
    pub fn set_expanded_link(&mut self, link: Option<StyledText>) {
        self.expanded_link = link.filter(|link| !link.is_empty());
        self.recompute();
    }

    /// Configures the expanded link's text, attributes and alignment at once.
    ///
    /// With an `alignment`, the link is placed on its own line.
    pub fn set_expanded_link_text(
        &mut self,
        text: &str,
        attributes: impl IntoIterator<Item = StyleProperty>,
        alignment: Option<Alignment>,
    ) {
        let mut link = StyledText::new(text);
        for attribute in attributes {
            if let Err(err) = link.apply_attribute(0..text.len(), attribute) {
                log::warn!("cannot style expanded link: {err}");
            }
        }
        self.config.expanded_link_alignment = alignment;
        self.set_expanded_link(Some(link));
    }

    /// The ellipsis placed before the collapsed link.
    pub fn ellipsis(&self) -> Option<&StyledText> {
        self.config.ellipsis.as_ref()
    }

    /// Sets the ellipsis placed before the collapsed link.
    pub fn set_ellipsis(&mut self, ellipsis: Option<StyledText>) {
        self.config.ellipsis = ellipsis;
        self.recompute();
    }

    /// Sets whether tapping the collapsed link expands the text. Defaults to `true`.
    pub fn set_may_expand(&mut self, may_expand: bool) {
        self.controller.set_may_expand(may_expand);
    }

    /// Sets whether tapping the expanded link collapses the text. Defaults to `false`.
    pub fn set_may_collapse(&mut self, may_collapse: bool) {
        self.controller.set_may_collapse(may_collapse);
    }

    /// Replaces the interaction controller, e.g. to change the touch margin.
    pub fn set_controller(&mut self, controller: InteractionController) {
        self.controller = controller;
    }

    /// Sets the observer notified around transitions.
    pub fn set_observer(&mut self, observer: Option<Box<dyn LabelObserver<L>>>) {
        self.observer = observer;
    }

    /// Sets the host view animated alongside transitions.
    pub fn set_animation_host(&mut self, host: Option<Box<dyn AnimationHost>>) {
        self.animation_host = host;
    }

    /// The current render state.
    pub fn render_state(&self) -> &RenderState {
        &self.state
    }

    /// The text to draw, with the link highlighted while it is pressed.
    pub fn displayed_text(&self) -> Cow<'_, StyledText> {
        let text = self.state.displayed_variant();
        match self.state.displayed_link_range() {
            Some(range) if self.state.is_link_pressed() => {
                Cow::Owned(with_highlighted_range(text, range))
            }
            _ => Cow::Borrowed(text),
        }
    }

    /// Height of the displayed variant at the current width.
    pub fn preferred_height(&mut self) -> f32 {
        if self.width <= 0.0 {
            return 0.0;
        }
        self.layout
            .measure_height(self.state.displayed_variant(), self.width)
    }

    /// Number of lines of the displayed variant at the current width.
    pub fn line_count(&mut self) -> usize {
        if self.width <= 0.0 {
            return 0;
        }
        self.layout
            .shape_lines(self.state.displayed_variant(), self.width)
            .len()
    }

    /// Handles a finger going down. Returns whether it landed on the link.
    pub fn press(&mut self, point: Point) -> bool {
        let options = self.hit_test_options();
        self.controller
            .press(&mut self.state, &mut self.layout, point, &options)
    }

    /// Handles a finger moving. Returns whether it is over the link.
    pub fn drag(&mut self, point: Point) -> bool {
        let options = self.hit_test_options();
        self.controller
            .drag(&mut self.state, &mut self.layout, point, &options)
    }

    /// Handles a finger lifting. Returns the transition that was performed, if any.
    pub fn release(&mut self, point: Point) -> Option<Transition> {
        let options = self.hit_test_options();
        let transition =
            self.controller
                .release(&mut self.state, &mut self.layout, point, &options)?;
        let allowed = self.ask_observer(|observer, label| match transition {
            Transition::Expand => observer.should_expand(label),
            Transition::Collapse => observer.should_collapse(label),
        });
        if !allowed {
            log::debug!("observer declined {transition:?}");
            return None;
        }
        self.perform(transition);
        Some(transition)
    }

    /// Handles the touch sequence being cancelled.
    pub fn cancel(&mut self) {
        self.controller.cancel(&mut self.state);
    }

    fn perform(&mut self, transition: Transition) {
        self.notify(|observer, label| match transition {
            Transition::Expand => observer.will_expand(label),
            Transition::Collapse => observer.will_collapse(label),
        });
        self.controller.apply(&mut self.state, transition);
        log::debug!("label performed {transition:?}");
        if self.animation_host.is_some() {
            let height = self.preferred_height();
            if let Some(host) = self.animation_host.as_mut() {
                host.animate_alongside(transition, height);
            }
        }
        self.notify(|observer, label| match transition {
            Transition::Expand => observer.did_expand(label),
            Transition::Collapse => observer.did_collapse(label),
        });
    }

    fn notify(&mut self, hook: impl FnOnce(&mut dyn LabelObserver<L>, &Self)) {
        self.ask_observer(|observer, label| {
            hook(observer, label);
            true
        });
    }

    /// Runs `query` against the observer. Without an observer the answer is `true`.
    fn ask_observer(
        &mut self,
        query: impl FnOnce(&mut dyn LabelObserver<L>, &Self) -> bool,
    ) -> bool {
        let Some(mut observer) = self.observer.take() else {
            return true;
        };
        let answer = query(observer.as_mut(), self);
        // A hook may have installed a different observer; keep that one.
        if self.observer.is_none() {
            self.observer = Some(observer);
        }
        answer
    }

    fn hit_test_options(&self) -> HitTestOptions {
        let max_lines = if self.state.is_collapsed() {
            self.config.max_collapsed_lines
        } else {
            0
        };
        HitTestOptions::new(self.width)
            .with_alignment(self.alignment)
            .with_max_lines(max_lines)
    }

    fn recompute(&mut self) {
        if self.width <= 0.0 {
            log::trace!("label has no width yet; deferring truncation");
            self.state.replace_variants(Variants::default());
            return;
        }
        let variants = compute_variants(
            &mut self.layout,
            &TruncationRequest {
                text: &self.text,
                width: self.width,
                font: self.font,
                config: &self.config,
                collapsed_link: &self.collapsed_link,
                expanded_link: self.expanded_link.as_ref(),
            },
        );
        self.state.replace_variants(variants);
    }
}
