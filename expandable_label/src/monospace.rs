// Copyright 2025 the Expandable Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A deterministic fixed-advance [`LineLayout`].
//!
//! Every grapheme cluster advances by the same fraction of its font size.
//! This makes layouts predictable to the pixel, which is what headless hosts
//! and tests need. Line breaking is greedy:
//!
//! - a break opportunity follows every run of whitespace,
//! - newline characters force a break,
//! - a word wider than the line is broken between grapheme clusters,
//! - trailing whitespace hangs past the end of the line.

use alloc::vec::Vec;
use core::ops::Range;

use peniko::kurbo::{Point, Rect};

use crate::layout::{HitTestOptions, LineLayout, LineSpan};
use crate::segment::{grapheme_ranges, is_newline};
use crate::style::{alignment_at, font_at};
use crate::{Font, StyledText};

/// Fixed-advance line layout.
#[derive(Clone, Debug)]
pub struct MonospaceLayout {
    default_font: Font,
    advance_ratio: f32,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum ClusterKind {
    Glyph,
    Space,
    Newline,
}

#[derive(Clone, Debug)]
struct Cluster {
    range: Range<usize>,
    advance: f32,
    line_height: f32,
    kind: ClusterKind,
}

#[derive(Clone, Debug)]
struct Line {
    clusters: Range<usize>,
    width: f32,
    height: f32,
    top: f32,
}

impl MonospaceLayout {
    /// Creates a layout where each cluster advances half its font size.
    ///
    /// `default_font` is used for text that carries no font.
    pub fn new(default_font: Font) -> Self {
        Self {
            default_font,
            advance_ratio: 0.5,
        }
    }

    /// Returns this layout with the given advance per cluster, as a fraction of
    /// the font size.
    #[must_use]
    pub fn with_advance_ratio(self, advance_ratio: f32) -> Self {
        Self {
            advance_ratio,
            ..self
        }
    }

    /// Returns the advance of one cluster set in `font`.
    pub fn advance(&self, font: &Font) -> f32 {
        font.size * self.advance_ratio
    }

    fn clusters(&self, text: &StyledText) -> Vec<Cluster> {
        let source = text.as_str();
        grapheme_ranges(source)
            .into_iter()
            .map(|range| {
                let font = font_at(text, range.start).unwrap_or(self.default_font);
                let cluster = &source[range.clone()];
                let kind = if cluster.chars().all(is_newline) {
                    ClusterKind::Newline
                } else if cluster.chars().all(char::is_whitespace) {
                    ClusterKind::Space
                } else {
                    ClusterKind::Glyph
                };
                let advance = match kind {
                    ClusterKind::Newline => 0.0,
                    _ => self.advance(&font),
                };
                Cluster {
                    range,
                    advance,
                    line_height: font.line_height,
                    kind,
                }
            })
            .collect()
    }

    fn lines(&self, clusters: &[Cluster], width: f32) -> Vec<Line> {
        let mut lines = Vec::new();
        let mut start = 0;
        let mut top = 0.0;
        while start < clusters.len() {
            let end = line_end(clusters, start, width);
            let line_clusters = &clusters[start..end];
            let content_end = line_clusters
                .iter()
                .rposition(|cluster| cluster.kind == ClusterKind::Glyph)
                .map_or(0, |last| last + 1);
            let width = line_clusters[..content_end]
                .iter()
                .map(|cluster| cluster.advance)
                .sum();
            let height = line_clusters
                .iter()
                .map(|cluster| cluster.line_height)
                .fold(0.0_f32, f32::max);
            lines.push(Line {
                clusters: start..end,
                width,
                height,
                top,
            });
            top += height;
            start = end;
        }
        lines
    }

    fn layout(&self, text: &StyledText, width: f32) -> (Vec<Cluster>, Vec<Line>) {
        let clusters = self.clusters(text);
        let lines = self.lines(&clusters, width);
        (clusters, lines)
    }
}

/// Lines that are drawn under `options`, each with its x offset.
fn drawn_lines<'a>(
    text: &StyledText,
    clusters: &[Cluster],
    lines: &'a [Line],
    options: &HitTestOptions,
) -> Vec<(&'a Line, f32)> {
    let limit = if options.max_lines == 0 {
        lines.len()
    } else {
        options.max_lines.min(lines.len())
    };
    lines[..limit]
        .iter()
        .map(|line| {
            let start = clusters[line.clusters.start].range.start;
            let alignment = alignment_at(text, start).unwrap_or(options.alignment);
            let offset = alignment.flush_factor() * (options.width - line.width).max(0.0);
            (line, offset)
        })
        .collect()
}

/// Returns the index one past the last cluster of the line starting at `start`.
fn line_end(clusters: &[Cluster], start: usize, width: f32) -> usize {
    let mut x = 0.0;
    let mut last_break = None;
    for (index, cluster) in clusters.iter().enumerate().skip(start) {
        match cluster.kind {
            ClusterKind::Newline => return index + 1,
            ClusterKind::Space => {
                x += cluster.advance;
                last_break = Some(index + 1);
            }
            ClusterKind::Glyph => {
                if x + cluster.advance > width && index > start {
                    return last_break.unwrap_or(index);
                }
                x += cluster.advance;
            }
        }
    }
    clusters.len()
}

impl LineLayout for MonospaceLayout {
    fn shape_lines(&mut self, text: &StyledText, width: f32) -> Vec<LineSpan> {
        let (clusters, lines) = self.layout(text, width);
        lines
            .iter()
            .map(|line| {
                let start = clusters[line.clusters.start].range.start;
                let end = clusters[line.clusters.end - 1].range.end;
                LineSpan {
                    start,
                    len: end - start,
                    width: line.width,
                }
            })
            .collect()
    }

    fn measure_height(&mut self, text: &StyledText, width: f32) -> f32 {
        let (_, lines) = self.layout(text, width);
        lines.iter().map(|line| line.height).sum()
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
        let (clusters, lines) = self.layout(text, options.width);
        let (x, y) = (point.x as f32, point.y as f32);
        let (line, offset) = drawn_lines(text, &clusters, &lines, options)
            .into_iter()
            .find(|(line, _)| y >= line.top && y < line.top + line.height)?;
        let mut left = offset;
        for cluster in &clusters[line.clusters.clone()] {
            if cluster.kind == ClusterKind::Newline {
                break;
            }
            if x >= left && x < left + cluster.advance {
                return Some(cluster.range.start);
            }
            left += cluster.advance;
        }
        None
    }

    fn range_rects(
        &mut self,
        text: &StyledText,
        range: Range<usize>,
        options: &HitTestOptions,
    ) -> Vec<Rect> {
        let (clusters, lines) = self.layout(text, options.width);
        let mut rects = Vec::new();
        for (line, offset) in drawn_lines(text, &clusters, &lines, options) {
            let mut left = offset;
            let mut covered: Option<(f32, f32)> = None;
            for cluster in &clusters[line.clusters.clone()] {
                let right = left + cluster.advance;
                let inside = cluster.range.start >= range.start && cluster.range.end <= range.end;
                if inside && cluster.kind != ClusterKind::Newline {
                    covered = Some(match covered {
                        Some((x0, _)) => (x0, right),
                        None => (left, right),
                    });
                }
                left = right;
            }
            if let Some((x0, x1)) = covered {
                rects.push(Rect::new(
                    f64::from(x0),
                    f64::from(line.top),
                    f64::from(x1),
                    f64::from(line.top + line.height),
                ));
            }
        }
        rects
    }
}
