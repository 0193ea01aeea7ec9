// Copyright 2025 the Expandable Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style properties carried by a [`StyledText`].

use core::ops::Range;

use attributed_text::AttributedText;
use peniko::Color;

/// Styled text as consumed and produced by the label.
pub type StyledText = AttributedText<StyleProperty>;

/// Visual weight class of a font.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
pub struct FontWeight(f32);

impl FontWeight {
    /// Weight value of 400.
    pub const NORMAL: Self = Self(400.0);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700.0);

    /// Creates a new font weight from the given value.
    pub const fn new(weight: f32) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value.
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// A font together with the metrics the truncation engine relies on.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Font {
    /// Font size in pixels.
    pub size: f32,
    /// Font weight.
    pub weight: FontWeight,
    /// Height of one line set in this font, in pixels.
    pub line_height: f32,
}

impl Font {
    /// Creates a regular weight font with a line height of 1.2 times the size.
    pub fn new(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::NORMAL,
            line_height: size * 1.2,
        }
    }

    /// Returns this font with the given weight.
    #[must_use]
    pub fn with_weight(self, weight: FontWeight) -> Self {
        Self { weight, ..self }
    }

    /// Returns this font with the given line height.
    #[must_use]
    pub fn with_line_height(self, line_height: f32) -> Self {
        Self {
            line_height,
            ..self
        }
    }

    /// Returns the bold variant of this font.
    #[must_use]
    pub fn bold(self) -> Self {
        self.with_weight(FontWeight::BOLD)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(17.0)
    }
}

/// Horizontal alignment of lines within the label.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub enum Alignment {
    /// Align to the start edge (left for left-to-right text).
    #[default]
    Start,
    /// Center lines.
    Center,
    /// Align to the end edge.
    End,
    /// Justified lines. Hit testing treats these like `Start`.
    Justified,
}

impl Alignment {
    /// Fraction of the free horizontal space placed before a line.
    pub fn flush_factor(self) -> f32 {
        match self {
            Self::Start | Self::Justified => 0.0,
            Self::Center => 0.5,
            Self::End => 1.0,
        }
    }
}

/// A single style attribute.
#[derive(Clone, PartialEq, Debug)]
pub enum StyleProperty {
    /// Font and font metrics.
    Font(Font),
    /// Foreground color.
    Brush(Color),
    /// Underline decoration.
    Underline(bool),
    /// Alignment of the line(s) containing the attributed range.
    Alignment(Alignment),
}

impl StyleProperty {
    /// Returns `true` for [`StyleProperty::Font`].
    pub fn is_font(&self) -> bool {
        matches!(self, Self::Font(_))
    }

    /// Returns `true` for [`StyleProperty::Brush`].
    pub fn is_brush(&self) -> bool {
        matches!(self, Self::Brush(_))
    }

    /// Returns `true` for [`StyleProperty::Alignment`].
    pub fn is_alignment(&self) -> bool {
        matches!(self, Self::Alignment(_))
    }
}

/// Returns the font in effect at `index`, if any.
pub fn font_at(text: &StyledText, index: usize) -> Option<Font> {
    text.attributes_at(index)
        .filter_map(|attr| match attr {
            StyleProperty::Font(font) => Some(*font),
            _ => None,
        })
        .last()
}

/// Returns the foreground color in effect at `index`, if any.
pub fn brush_at(text: &StyledText, index: usize) -> Option<Color> {
    text.attributes_at(index)
        .filter_map(|attr| match attr {
            StyleProperty::Brush(color) => Some(*color),
            _ => None,
        })
        .last()
}

/// Returns the alignment override in effect at `index`, if any.
pub fn alignment_at(text: &StyledText, index: usize) -> Option<Alignment> {
    text.attributes_at(index)
        .filter_map(|attr| match attr {
            StyleProperty::Alignment(alignment) => Some(*alignment),
            _ => None,
        })
        .last()
}

/// Returns a copy of `text` where every range without a font carries `font`.
///
/// Ranges that already have a font are left untouched, so applying this twice
/// gives the same result as applying it once.
pub fn with_default_font(text: &StyledText, font: Font) -> StyledText {
    let mut styled = text.clone();
    for gap in text.uncovered_ranges(StyleProperty::is_font) {
        apply_valid(&mut styled, gap, StyleProperty::Font(font));
    }
    styled
}

/// Returns a copy of `text` with the foreground color over `range` replaced by
/// its half-transparent variant.
///
/// Text without a color is treated as black.
pub fn with_highlighted_range(text: &StyledText, range: Range<usize>) -> StyledText {
    let base = brush_at(text, range.start).unwrap_or(peniko::color::palette::css::BLACK);
    let mut highlighted = text.clone();
    let result = highlighted.replace_attribute(
        range,
        StyleProperty::is_brush,
        StyleProperty::Brush(base.with_alpha(0.5)),
    );
    if let Err(err) = result {
        log::warn!("cannot highlight link: {err}");
        return text.clone();
    }
    highlighted
}

/// Applies an attribute over a range derived from the text's own boundaries.
pub(crate) fn apply_valid(text: &mut StyledText, range: Range<usize>, property: StyleProperty) {
    let result = text.apply_attribute(range, property);
    debug_assert!(result.is_ok(), "range should be valid: {result:?}");
}
