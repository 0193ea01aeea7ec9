// Copyright 2025 the Expandable Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The line layout contract the label is built on.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::ops::Range;

use peniko::kurbo::{Point, Rect};

use crate::{Alignment, StyledText};

/// One line of shaped text.
///
/// Lines returned by [`LineLayout::shape_lines`] are contiguous and cover the
/// whole text: each line starts where the previous one ended.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct LineSpan {
    /// Byte offset of the first character of the line.
    pub start: usize,
    /// Length of the line in bytes, including trailing whitespace and newlines.
    pub len: usize,
    /// Advance of the line excluding trailing whitespace, in pixels.
    pub width: f32,
}

impl LineSpan {
    /// Byte offset just past the end of the line.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// The byte range covered by the line.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Geometry used to map label-local points to text positions.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct HitTestOptions {
    /// Width of the label.
    pub width: f32,
    /// Alignment of lines that carry no [`StyleProperty::Alignment`] of their own.
    ///
    /// [`StyleProperty::Alignment`]: crate::StyleProperty::Alignment
    pub alignment: Alignment,
    /// Number of lines that are drawn. `0` means all of them.
    pub max_lines: usize,
}

impl HitTestOptions {
    /// Options for a label of the given width, start aligned, without a line limit.
    pub fn new(width: f32) -> Self {
        Self {
            width,
            alignment: Alignment::Start,
            max_lines: 0,
        }
    }

    /// Returns these options with the given default alignment.
    #[must_use]
    pub fn with_alignment(self, alignment: Alignment) -> Self {
        Self { alignment, ..self }
    }

    /// Returns these options with the given line limit.
    #[must_use]
    pub fn with_max_lines(self, max_lines: usize) -> Self {
        Self { max_lines, ..self }
    }
}

/// Text shaping and line breaking, as provided by the host.
///
/// Implementations must be deterministic: identical text, width and fonts
/// always produce identical results.
pub trait LineLayout {
    /// Breaks `text` into lines no wider than `width`.
    fn shape_lines(&mut self, text: &StyledText, width: f32) -> Vec<LineSpan>;

    /// Returns the total height of `text` laid out at `width`.
    fn measure_height(&mut self, text: &StyledText, width: f32) -> f32;

    /// Maps a label-local point to the byte offset of the character under it.
    ///
    /// Returns `None` when the point lies outside the laid out text or outside
    /// every glyph's box.
    fn index_at_point(
        &mut self,
        text: &StyledText,
        point: Point,
        options: &HitTestOptions,
    ) -> Option<usize>;

    /// Returns one rectangle per drawn line covering the glyphs of `range`.
    fn range_rects(
        &mut self,
        text: &StyledText,
        range: Range<usize>,
        options: &HitTestOptions,
    ) -> Vec<Rect>;
}

impl<L: LineLayout + ?Sized> LineLayout for Box<L> {
    fn shape_lines(&mut self, text: &StyledText, width: f32) -> Vec<LineSpan> {
        (**self).shape_lines(text, width)
    }

    fn measure_height(&mut self, text: &StyledText, width: f32) -> f32 {
        (**self).measure_height(text, width)
    }

    fn index_at_point(
        &mut self,
        text: &StyledText,
        point: Point,
        options: &HitTestOptions,
    ) -> Option<usize> {
        (**self).index_at_point(text, point, options)
    }

    fn range_rects(
        &mut self,
        text: &StyledText,
        range: Range<usize>,
        options: &HitTestOptions,
    ) -> Vec<Rect> {
        (**self).range_rects(text, range, options)
    }
}
