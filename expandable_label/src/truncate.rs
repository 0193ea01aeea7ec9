// Copyright 2025 the Expandable Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Computes the collapsed and expanded variants of a label's text.
//!
//! The collapsed variant keeps at most [`TruncationConfig::max_collapsed_lines`]
//! lines. Its last line is shortened until the link block (ellipsis, a space
//! and the link) fits next to it. The expanded variant is the full text,
//! followed by the optional "less" link when there was something to collapse.

use alloc::string::String;
use core::ops::Range;

use crate::layout::{LineLayout, LineSpan};
use crate::segment::{grapheme_count, grapheme_prefix_len, is_newline, words};
use crate::style::{apply_valid, with_default_font};
use crate::{Alignment, Font, StyleProperty, StyledText};

/// The unit in which the last collapsed line is shortened.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub enum Granularity {
    /// Remove whole words until the link block fits.
    #[default]
    Word,
    /// Replace as many grapheme clusters as the link block has.
    ///
    /// This does not measure anything. With proportional fonts the result can
    /// be a few characters shorter or longer than what would actually fit.
    Character,
}

/// Truncation settings.
#[derive(Clone, PartialEq, Debug)]
pub struct TruncationConfig {
    /// Number of lines shown while collapsed. `0` disables truncation.
    pub max_collapsed_lines: usize,
    /// How the last collapsed line is shortened.
    pub granularity: Granularity,
    /// Text placed between the truncated line and the link.
    pub ellipsis: Option<StyledText>,
    /// When set, the expanded link is put on its own line with this alignment.
    pub expanded_link_alignment: Option<Alignment>,
}

impl Default for TruncationConfig {
    fn default() -> Self {
        Self {
            max_collapsed_lines: 3,
            granularity: Granularity::Word,
            ellipsis: Some(StyledText::new("...")),
            expanded_link_alignment: None,
        }
    }
}

impl TruncationConfig {
    /// Returns this config with the given collapsed line count.
    #[must_use]
    pub fn with_max_collapsed_lines(self, max_collapsed_lines: usize) -> Self {
        Self {
            max_collapsed_lines,
            ..self
        }
    }

    /// Returns this config with the given granularity.
    #[must_use]
    pub fn with_granularity(self, granularity: Granularity) -> Self {
        Self {
            granularity,
            ..self
        }
    }

    /// Returns this config with the given ellipsis.
    #[must_use]
    pub fn with_ellipsis(self, ellipsis: Option<StyledText>) -> Self {
        Self { ellipsis, ..self }
    }

    /// Returns this config with the given expanded link alignment.
    #[must_use]
    pub fn with_expanded_link_alignment(self, alignment: Option<Alignment>) -> Self {
        Self {
            expanded_link_alignment: alignment,
            ..self
        }
    }
}

/// Everything [`compute_variants`] needs.
#[derive(Clone, Debug)]
pub struct TruncationRequest<'a> {
    /// The full text.
    pub text: &'a StyledText,
    /// Width available to the label. Must be positive.
    pub width: f32,
    /// The label font, used for unstyled text and for the fit test.
    pub font: Font,
    /// Truncation settings.
    pub config: &'a TruncationConfig,
    /// Link appended to the collapsed variant. Must not be empty.
    pub collapsed_link: &'a StyledText,
    /// Link appended to the expanded variant, if collapsing back is offered.
    pub expanded_link: Option<&'a StyledText>,
}

/// The two renderings of a label's text and the link ranges inside them.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct Variants {
    /// Text shown while collapsed.
    pub collapsed: StyledText,
    /// Text shown while expanded.
    pub expanded: StyledText,
    /// Byte range of the link block within [`Variants::collapsed`].
    pub collapsed_link_range: Option<Range<usize>>,
    /// Byte range of the expanded link within [`Variants::expanded`].
    pub expanded_link_range: Option<Range<usize>>,
}

/// Computes both variants of `request.text`.
///
/// This is a pure function of its inputs: calling it twice with the same
/// request and layout yields identical variants.
pub fn compute_variants<L: LineLayout + ?Sized>(
    layout: &mut L,
    request: &TruncationRequest<'_>,
) -> Variants {
    debug_assert!(request.width > 0.0, "label width must be positive");
    debug_assert!(
        request.font.line_height > 0.0,
        "font line height must be positive"
    );
    if request.text.is_empty() {
        return Variants::default();
    }

    let font = request.font;
    let text = with_default_font(request.text, font);
    let lines = layout.shape_lines(&text, request.width);
    let max_lines = request.config.max_collapsed_lines;
    let truncated = max_lines > 0 && lines.len() > max_lines;
    log::trace!(
        "computing variants: {} bytes, {} lines at width {}, max {max_lines}",
        text.len(),
        lines.len(),
        request.width
    );

    let (collapsed, collapsed_link_range) = if truncated {
        let (collapsed, range) = collapse(layout, request, &text, &lines);
        (collapsed, Some(range))
    } else {
        (text.clone(), None)
    };

    let mut expanded = text;
    let mut expanded_link_range = None;
    if truncated {
        if let Some(link) = request.expanded_link {
            let link = with_default_font(link, font);
            let separator = match request.config.expanded_link_alignment {
                Some(_) => "\n",
                None => "  ",
            };
            expanded.append(&StyledText::with_attribute(
                separator,
                StyleProperty::Font(font),
            ));
            let range = expanded.len()..expanded.len() + link.len();
            expanded.append(&link);
            if let Some(alignment) = request.config.expanded_link_alignment {
                apply_valid(
                    &mut expanded,
                    range.clone(),
                    StyleProperty::Alignment(alignment),
                );
            }
            expanded_link_range = Some(range);
        }
    }

    Variants {
        collapsed,
        expanded,
        collapsed_link_range,
        expanded_link_range,
    }
}

/// Builds the block appended to the last collapsed line.
///
/// The block is the ellipsis, a space and the link. The whole block takes the
/// attributes of the start of the link; the ellipsis' own styling is dropped.
/// Without an ellipsis the block is the link alone.
pub fn link_block(ellipsis: Option<&StyledText>, link: &StyledText) -> StyledText {
    let Some(ellipsis) = ellipsis else {
        return link.clone();
    };
    let prefix_len = ellipsis.len() + 1;
    let mut source = String::with_capacity(prefix_len + link.len());
    source.push_str(ellipsis.as_str());
    source.push(' ');
    source.push_str(link.as_str());
    let mut block = StyledText::new(source);
    for (range, attr) in link.attributes_iter() {
        let start = if range.start == 0 {
            0
        } else {
            range.start + prefix_len
        };
        apply_valid(&mut block, start..range.end + prefix_len, attr.clone());
    }
    block
}

/// Produces the collapsed variant and the range of its link block.
fn collapse<L: LineLayout + ?Sized>(
    layout: &mut L,
    request: &TruncationRequest<'_>,
    text: &StyledText,
    lines: &[LineSpan],
) -> (StyledText, Range<usize>) {
    let font = request.font;
    let config = request.config;
    let mut cut = config.max_collapsed_lines - 1;
    if config.granularity == Granularity::Word {
        while cut > 0 && words(line_str(text, &lines[cut])).len() < 2 {
            cut -= 1;
        }
        if cut + 1 != config.max_collapsed_lines {
            log::debug!(
                "line {} has fewer than two words; truncating at line {cut} instead",
                config.max_collapsed_lines - 1
            );
        }
    }

    let ellipsis = config.ellipsis.as_ref().map(|e| with_default_font(e, font));
    let link = with_default_font(request.collapsed_link, font);
    let block = link_block(ellipsis.as_ref(), &link);

    let line = slice(text, lines[cut].range());
    let prefix_len = match config.granularity {
        Granularity::Word => fit_words(layout, request, &line, &block),
        Granularity::Character => fit_characters(&line, &block),
    };

    let mut collapsed = slice(text, 0..lines[cut].start);
    collapsed.append(&slice(&line, 0..prefix_len));
    let link_start = collapsed.len();
    collapsed.append(&block);
    (collapsed, link_start..link_start + block.len())
}

/// Returns how many bytes of `line` to keep in front of `block`.
///
/// Words are removed from the end of the line, one at a time, until the line
/// followed by the block fits on a single line.
fn fit_words<L: LineLayout + ?Sized>(
    layout: &mut L,
    request: &TruncationRequest<'_>,
    line: &StyledText,
    block: &StyledText,
) -> usize {
    for word in words(line.as_str()).iter().rev() {
        let mut candidate = slice(line, 0..word.start);
        candidate.append(block);
        if layout.measure_height(&candidate, request.width) <= request.font.line_height {
            return word.start;
        }
    }
    log::debug!(
        "link block {:?} does not fit next to any prefix of {:?}; showing the link alone",
        block.as_str(),
        line.as_str()
    );
    0
}

/// Returns how many bytes of `line` to keep in front of `block`.
///
/// Trailing newlines are dropped, then as many grapheme clusters as the block
/// holds are removed from the end.
fn fit_characters(line: &StyledText, block: &StyledText) -> usize {
    let trimmed = line.as_str().trim_end_matches(is_newline);
    let keep = grapheme_count(trimmed).saturating_sub(grapheme_count(block.as_str()));
    grapheme_prefix_len(trimmed, keep)
}

fn line_str<'a>(text: &'a StyledText, line: &LineSpan) -> &'a str {
    text.as_str().get(line.range()).unwrap_or_default()
}

/// Slices a range that comes from the layout. Invalid ranges produce an empty slice.
fn slice(text: &StyledText, range: Range<usize>) -> StyledText {
    text.slice(range).unwrap_or_else(|err| {
        log::warn!("line layout produced an invalid range: {err}");
        StyledText::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MonospaceLayout;
    use crate::style::font_at;

    fn font() -> Font {
        Font::new(10.0).with_line_height(12.0)
    }

    #[test]
    fn link_block_takes_link_attributes() {
        let link = StyledText::with_attribute("More", StyleProperty::Font(font().bold()));
        let mut ellipsis = StyledText::new("...");
        ellipsis
            .apply_attribute(0..3, StyleProperty::Underline(true))
            .unwrap();

        let block = link_block(Some(&ellipsis), &link);
        assert_eq!(block.as_str(), "... More");
        assert_eq!(font_at(&block, 0), Some(font().bold()));
        assert_eq!(font_at(&block, 3), Some(font().bold()));
        assert!(!block
            .attributes_at(0)
            .any(|attr| *attr == StyleProperty::Underline(true)));

        assert_eq!(link_block(None, &link).as_str(), "More");
    }

    #[test]
    fn character_fit_strips_newlines_and_counts_clusters() {
        let line = StyledText::new("abcdefghij\n");
        let block = StyledText::new("... X");
        assert_eq!(fit_characters(&line, &block), 5);
        let short = StyledText::new("ab");
        assert_eq!(fit_characters(&short, &block), 0);
    }

    #[test]
    fn empty_text_has_no_variants() {
        let mut layout = MonospaceLayout::new(font());
        let text = StyledText::new("");
        let config = TruncationConfig::default();
        let link = StyledText::new("More");
        let variants = compute_variants(
            &mut layout,
            &TruncationRequest {
                text: &text,
                width: 100.0,
                font: font(),
                config: &config,
                collapsed_link: &link,
                expanded_link: Some(&link),
            },
        );
        assert_eq!(variants, Variants::default());
    }

    #[test]
    fn word_mode_falls_back_to_earlier_line() {
        // The third line is a single word, so the cut moves to the second line.
        let mut layout = MonospaceLayout::new(font());
        let text = StyledText::new("aaaa bbbb\ncccc dddd\neeee\nffff");
        let config = TruncationConfig::default();
        let link = StyledText::new("More");
        let variants = compute_variants(
            &mut layout,
            &TruncationRequest {
                text: &text,
                width: 100.0,
                font: font(),
                config: &config,
                collapsed_link: &link,
                expanded_link: None,
            },
        );
        assert_eq!(variants.collapsed.as_str(), "aaaa bbbb\ncccc ... More");
        assert_eq!(variants.collapsed_link_range, Some(15..23));
    }
}
