// Copyright 2025 the Expandable Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`LineLayout`] backed by Parley and the system fonts.

use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

use parley::{
    Alignment as ParleyAlignment, AlignmentOptions, FontContext, FontWeight, Layout,
    LayoutContext, LineHeight, StyleProperty as ParleyStyle,
};
use peniko::kurbo::{Point, Rect};

use crate::layout::{HitTestOptions, LineLayout, LineSpan};
use crate::segment::is_newline;
use crate::style::alignment_at;
use crate::{Font, StyleProperty, StyledText};

/// Shapes text with Parley.
///
/// Only the font size, weight and line height of [`Font`] are forwarded. The
/// font family is the system default.
pub struct ParleyLayout {
    font_cx: FontContext,
    layout_cx: LayoutContext<()>,
    default_font: Font,
    scale: f32,
}

impl fmt::Debug for ParleyLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParleyLayout")
            .field("default_font", &self.default_font)
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

/// A laid out line, in label coordinates before alignment.
struct ShapedLine {
    range: Range<usize>,
    width: f32,
    top: f32,
    bottom: f32,
    /// Text range and advance of each cluster, left to right.
    clusters: Vec<(Range<usize>, f32)>,
}

impl ParleyLayout {
    /// Creates a layout at display scale 1.
    pub fn new(default_font: Font) -> Self {
        Self {
            font_cx: FontContext::new(),
            layout_cx: LayoutContext::new(),
            default_font,
            scale: 1.0,
        }
    }

    /// Returns this layout with the given display scale.
    #[must_use]
    pub fn with_scale(self, scale: f32) -> Self {
        Self { scale, ..self }
    }

    fn build(&mut self, text: &StyledText, width: f32) -> Layout<()> {
        let source = text.as_str();
        let mut builder = self
            .layout_cx
            .ranged_builder(&mut self.font_cx, source, self.scale, true);
        let font = self.default_font;
        builder.push_default(ParleyStyle::FontSize(font.size));
        builder.push_default(ParleyStyle::FontWeight(FontWeight::new(font.weight.value())));
        builder.push_default(ParleyStyle::LineHeight(LineHeight::Absolute(
            font.line_height,
        )));
        for run in text.runs() {
            let Some(font) = run.attributes.iter().rev().find_map(|attr| match attr {
                StyleProperty::Font(font) => Some(*font),
                _ => None,
            }) else {
                continue;
            };
            builder.push(ParleyStyle::FontSize(font.size), run.range.clone());
            builder.push(
                ParleyStyle::FontWeight(FontWeight::new(font.weight.value())),
                run.range.clone(),
            );
            builder.push(
                ParleyStyle::LineHeight(LineHeight::Absolute(font.line_height)),
                run.range,
            );
        }
        let mut layout = builder.build(source);
        layout.break_all_lines(Some(width));
        layout.align(
            Some(width),
            ParleyAlignment::Start,
            AlignmentOptions::default(),
        );
        layout
    }

    fn shaped_lines(&mut self, text: &StyledText, width: f32) -> Vec<ShapedLine> {
        if text.is_empty() {
            return Vec::new();
        }
        let source = text.as_str();
        let layout = self.build(text, width);
        layout
            .lines()
            .map(|line| {
                let metrics = line.metrics();
                let mut clusters = Vec::new();
                for run in line.runs() {
                    for cluster in run.visual_clusters() {
                        let range = cluster.text_range();
                        let newline = source
                            .get(range.clone())
                            .is_some_and(|s| !s.is_empty() && s.chars().all(is_newline));
                        if !newline {
                            clusters.push((range, cluster.advance()));
                        }
                    }
                }
                ShapedLine {
                    range: line.text_range(),
                    width: metrics.advance - metrics.trailing_whitespace,
                    top: metrics.min_coord,
                    bottom: metrics.max_coord,
                    clusters,
                }
            })
            .collect()
    }
}

/// Lines drawn under `options`, each with its x offset.
fn drawn_lines<'a>(
    text: &StyledText,
    lines: &'a [ShapedLine],
    options: &HitTestOptions,
) -> impl Iterator<Item = (&'a ShapedLine, f32)> {
    let limit = if options.max_lines == 0 {
        lines.len()
    } else {
        options.max_lines.min(lines.len())
    };
    let offsets: Vec<f32> = lines[..limit]
        .iter()
        .map(|line| {
            let alignment = alignment_at(text, line.range.start).unwrap_or(options.alignment);
            alignment.flush_factor() * (options.width - line.width).max(0.0)
        })
        .collect();
    lines[..limit].iter().zip(offsets)
}

impl LineLayout for ParleyLayout {
    fn shape_lines(&mut self, text: &StyledText, width: f32) -> Vec<LineSpan> {
        self.shaped_lines(text, width)
            .into_iter()
            .map(|line| LineSpan {
                start: line.range.start,
                len: line.range.len(),
                width: line.width,
            })
            .collect()
    }

    fn measure_height(&mut self, text: &StyledText, width: f32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        self.build(text, width).height()
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "label coordinates are well within f32 range"
    )]
    fn index_at_point(
        &mut self,
        text: &StyledText,
        point: Point,
        options: &HitTestOptions,
    ) -> Option<usize> {
        let lines = self.shaped_lines(text, options.width);
        let (x, y) = (point.x as f32, point.y as f32);
        let (line, offset) =
            drawn_lines(text, &lines, options).find(|(line, _)| y >= line.top && y < line.bottom)?;
        let mut left = offset;
        for (range, advance) in &line.clusters {
            if x >= left && x < left + advance {
                return Some(range.start);
            }
            left += advance;
        }
        None
    }

    fn range_rects(
        &mut self,
        text: &StyledText,
        range: Range<usize>,
        options: &HitTestOptions,
    ) -> Vec<Rect> {
        let lines = self.shaped_lines(text, options.width);
        let mut rects = Vec::new();
        for (line, offset) in drawn_lines(text, &lines, options) {
            let mut left = offset;
            let mut covered: Option<(f32, f32)> = None;
            for (cluster, advance) in &line.clusters {
                let right = left + advance;
                if cluster.start >= range.start && cluster.end <= range.end {
                    covered = Some(covered.map_or((left, right), |(x0, _)| (x0, right)));
                }
                left = right;
            }
            if let Some((x0, x1)) = covered {
                rects.push(Rect::new(
                    f64::from(x0),
                    f64::from(line.top),
                    f64::from(x1),
                    f64::from(line.bottom),
                ));
            }
        }
        rects
    }
}
