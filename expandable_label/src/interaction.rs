// Copyright 2025 the Expandable Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The collapsed/expanded state machine and link hit testing.

use core::ops::Range;

use peniko::kurbo::Point;

use crate::layout::{HitTestOptions, LineLayout};
use crate::truncate::Variants;
use crate::StyledText;

/// Default distance by which the link's hit region extends past its glyphs,
/// on every side. Gives a 44 by 44 pixel finger box.
pub const DEFAULT_TOUCH_MARGIN: f64 = 22.0;

/// A change between the collapsed and expanded states.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Transition {
    /// Collapsed to expanded.
    Expand,
    /// Expanded to collapsed.
    Collapse,
}

/// Everything that is rendered, plus the display state.
///
/// The variants are always replaced as a whole.
#[derive(Clone, PartialEq, Debug)]
pub struct RenderState {
    pub(crate) collapsed: bool,
    pub(crate) link_pressed: bool,
    pub(crate) variants: Variants,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            collapsed: true,
            link_pressed: false,
            variants: Variants::default(),
        }
    }
}

impl RenderState {
    /// Whether the collapsed variant is displayed.
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Whether a finger is currently down on the displayed link.
    pub fn is_link_pressed(&self) -> bool {
        self.link_pressed
    }

    /// Text shown while collapsed.
    pub fn collapsed_variant(&self) -> &StyledText {
        &self.variants.collapsed
    }

    /// Text shown while expanded.
    pub fn expanded_variant(&self) -> &StyledText {
        &self.variants.expanded
    }

    /// Link range within the collapsed variant.
    pub fn collapsed_link_range(&self) -> Option<Range<usize>> {
        self.variants.collapsed_link_range.clone()
    }

    /// Link range within the expanded variant.
    pub fn expanded_link_range(&self) -> Option<Range<usize>> {
        self.variants.expanded_link_range.clone()
    }

    /// The variant selected by the current state.
    pub fn displayed_variant(&self) -> &StyledText {
        if self.collapsed {
            &self.variants.collapsed
        } else {
            &self.variants.expanded
        }
    }

    /// The link range within [`RenderState::displayed_variant`].
    pub fn displayed_link_range(&self) -> Option<Range<usize>> {
        if self.collapsed {
            self.collapsed_link_range()
        } else {
            self.expanded_link_range()
        }
    }

    /// Installs new variants, keeping the collapsed state.
    pub(crate) fn replace_variants(&mut self, variants: Variants) {
        self.variants = variants;
        self.link_pressed = false;
    }
}

/// Routes touches to the displayed link and decides on transitions.
///
/// The controller only decides; the caller applies a returned
/// [`Transition`] with [`InteractionController::apply`] so that it can notify
/// observers around the change.
#[derive(Clone, Debug)]
pub struct InteractionController {
    may_expand: bool,
    may_collapse: bool,
    touch_margin: f64,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self {
            may_expand: true,
            may_collapse: false,
            touch_margin: DEFAULT_TOUCH_MARGIN,
        }
    }
}

impl InteractionController {
    /// Creates a controller that may expand but not collapse.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this controller with a different touch margin.
    #[must_use]
    pub fn with_touch_margin(self, touch_margin: f64) -> Self {
        Self {
            touch_margin,
            ..self
        }
    }

    /// Whether tapping the collapsed link expands the text.
    pub fn may_expand(&self) -> bool {
        self.may_expand
    }

    /// Sets whether tapping the collapsed link expands the text.
    pub fn set_may_expand(&mut self, may_expand: bool) {
        self.may_expand = may_expand;
    }

    /// Whether tapping the expanded link collapses the text.
    pub fn may_collapse(&self) -> bool {
        self.may_collapse
    }

    /// Sets whether tapping the expanded link collapses the text.
    pub fn set_may_collapse(&mut self, may_collapse: bool) {
        self.may_collapse = may_collapse;
    }

    /// Handles a finger going down. Returns whether it landed on the link.
    pub fn press<L: LineLayout + ?Sized>(
        &self,
        state: &mut RenderState,
        layout: &mut L,
        point: Point,
        options: &HitTestOptions,
    ) -> bool {
        state.link_pressed = self.near_link(state, layout, point, options);
        state.link_pressed
    }

    /// Handles a finger moving. Returns whether it is over the link.
    pub fn drag<L: LineLayout + ?Sized>(
        &self,
        state: &mut RenderState,
        layout: &mut L,
        point: Point,
        options: &HitTestOptions,
    ) -> bool {
        self.press(state, layout, point, options)
    }

    /// Handles a finger lifting. Returns the transition the tap asks for, if any.
    pub fn release<L: LineLayout + ?Sized>(
        &self,
        state: &mut RenderState,
        layout: &mut L,
        point: Point,
        options: &HitTestOptions,
    ) -> Option<Transition> {
        state.link_pressed = false;
        let range = state.displayed_link_range()?;
        let index = layout.index_at_point(state.displayed_variant(), point, options)?;
        if !range.contains(&index) {
            return None;
        }
        if state.collapsed {
            self.may_expand.then_some(Transition::Expand)
        } else {
            self.may_collapse.then_some(Transition::Collapse)
        }
    }

    /// Handles the touch sequence being cancelled.
    pub fn cancel(&self, state: &mut RenderState) {
        state.link_pressed = false;
    }

    /// Flips the state for `transition`.
    pub fn apply(&self, state: &mut RenderState, transition: Transition) {
        state.collapsed = transition == Transition::Collapse;
        state.link_pressed = false;
    }

    /// Whether `point` is within the touch margin of the displayed link.
    fn near_link<L: LineLayout + ?Sized>(
        &self,
        state: &RenderState,
        layout: &mut L,
        point: Point,
        options: &HitTestOptions,
    ) -> bool {
        let Some(range) = state.displayed_link_range() else {
            return false;
        };
        layout
            .range_rects(state.displayed_variant(), range, options)
            .iter()
            .any(|rect| rect.inflate(self.touch_margin, self.touch_margin).contains(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Font, MonospaceLayout};

    fn state() -> (RenderState, MonospaceLayout, HitTestOptions) {
        // "Short text ... More" fits on one 100px line; the link block is 11..19.
        let collapsed = StyledText::new("Short text ... More");
        let state = RenderState {
            collapsed: true,
            link_pressed: false,
            variants: Variants {
                collapsed,
                expanded: StyledText::new("Short text that goes on  Less"),
                collapsed_link_range: Some(11..19),
                expanded_link_range: Some(25..29),
            },
        };
        let layout = MonospaceLayout::new(Font::new(10.0).with_line_height(12.0));
        (state, layout, HitTestOptions::new(100.0))
    }

    #[test]
    fn release_on_link_expands() {
        let (mut state, mut layout, options) = state();
        let controller = InteractionController::new();
        let point = Point::new(80.0, 6.0);
        assert!(controller.press(&mut state, &mut layout, point, &options));
        assert!(state.is_link_pressed());
        let transition = controller.release(&mut state, &mut layout, point, &options);
        assert_eq!(transition, Some(Transition::Expand));
        assert!(!state.is_link_pressed());
        controller.apply(&mut state, Transition::Expand);
        assert!(!state.is_collapsed());
    }

    #[test]
    fn release_off_link_does_nothing() {
        let (mut state, mut layout, options) = state();
        let controller = InteractionController::new();
        let point = Point::new(10.0, 6.0);
        assert!(!controller.press(&mut state, &mut layout, point, &options));
        assert_eq!(controller.release(&mut state, &mut layout, point, &options), None);
        // Outside any glyph.
        let below = Point::new(80.0, 40.0);
        assert_eq!(controller.release(&mut state, &mut layout, below, &options), None);
    }

    #[test]
    fn press_margin_extends_past_glyphs() {
        let (mut state, mut layout, options) = state();
        let controller = InteractionController::new();
        // The link's glyphs end at y = 12; the margin reaches y = 34.
        assert!(controller.press(&mut state, &mut layout, Point::new(80.0, 30.0), &options));
        assert!(!controller.press(&mut state, &mut layout, Point::new(80.0, 40.0), &options));
        let tight = InteractionController::new().with_touch_margin(0.0);
        assert!(!tight.press(&mut state, &mut layout, Point::new(80.0, 30.0), &options));
        tight.press(&mut state, &mut layout, Point::new(80.0, 6.0), &options);
        tight.cancel(&mut state);
        assert!(!state.is_link_pressed());
    }

    #[test]
    fn collapse_is_opt_in() {
        let (mut state, mut layout, options) = state();
        let mut controller = InteractionController::new();
        controller.apply(&mut state, Transition::Expand);
        // The second line is "on  Less", so "Less" spans x = 20..40.
        let less = Point::new(25.0, 18.0);
        assert_eq!(controller.release(&mut state, &mut layout, less, &options), None);
        controller.set_may_collapse(true);
        assert_eq!(
            controller.release(&mut state, &mut layout, less, &options),
            Some(Transition::Collapse)
        );
    }

    #[test]
    fn may_expand_false_blocks_expansion() {
        let (mut state, mut layout, options) = state();
        let mut controller = InteractionController::new();
        controller.set_may_expand(false);
        let point = Point::new(80.0, 6.0);
        assert_eq!(controller.release(&mut state, &mut layout, point, &options), None);
        assert!(state.is_collapsed());
    }
}
