// Copyright 2025 the Expandable Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use crate::text_range::validate_range;
use crate::{Error, Runs};

/// A block of text with attributes applied to ranges within the text.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributedText<Attr> {
    text: String,
    attributes: Vec<(Range<usize>, Attr)>,
}

impl<Attr> Default for AttributedText<Attr> {
    fn default() -> Self {
        Self {
            text: String::new(),
            attributes: Vec::new(),
        }
    }
}

impl<Attr> AttributedText<Attr> {
    /// Create an `AttributedText` with no attributes applied.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attributes: Vec::new(),
        }
    }

    /// Create an `AttributedText` with `attribute` applied to the whole text.
    pub fn with_attribute(text: impl Into<String>, attribute: Attr) -> Self {
        let text = text.into();
        let mut attributes = Vec::new();
        if !text.is_empty() {
            attributes.push((0..text.len(), attribute));
        }
        Self { text, attributes }
    }

    /// Borrow the underlying text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the length of the underlying text, in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the underlying text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Apply an `attribute` to a `range` within the text.
    ///
    /// Empty ranges are accepted and ignored.
    pub fn apply_attribute(&mut self, range: Range<usize>, attribute: Attr) -> Result<(), Error> {
        validate_range(&self.text, &range)?;
        if !range.is_empty() {
            self.attributes.push((range, attribute));
        }
        Ok(())
    }

    /// Iterate over all attributes and the ranges they apply to.
    ///
    /// Attributes are yielded in the order they were applied.
    pub fn attributes_iter(&self) -> impl ExactSizeIterator<Item = (&Range<usize>, &Attr)> {
        self.attributes.iter().map(|(range, attr)| (range, attr))
    }

    /// Get an iterator over the attributes that apply at the given `index`.
    ///
    /// Attributes are yielded in application order, so for conflicting
    /// attributes the last one yielded wins.
    pub fn attributes_at(&self, index: usize) -> impl Iterator<Item = &Attr> {
        self.attributes.iter().filter_map(move |(attr_span, attr)| {
            if attr_span.contains(&index) {
                Some(attr)
            } else {
                None
            }
        })
    }

    /// Returns the number of attribute spans applied to the text.
    pub fn attributes_len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns the sub-ranges of the text not covered by any attribute for
    /// which `matches` returns `true`.
    ///
    /// The ranges are sorted and non-empty.
    pub fn uncovered_ranges(&self, matches: impl Fn(&Attr) -> bool) -> Vec<Range<usize>> {
        let mut covered: Vec<Range<usize>> = self
            .attributes
            .iter()
            .filter(|(_, attr)| matches(attr))
            .map(|(range, _)| range.clone())
            .collect();
        covered.sort_unstable_by_key(|range| range.start);

        let mut gaps = Vec::new();
        let mut cursor = 0;
        for range in covered {
            if range.start > cursor {
                gaps.push(cursor..range.start);
            }
            cursor = cursor.max(range.end);
        }
        if cursor < self.text.len() {
            gaps.push(cursor..self.text.len());
        }
        gaps
    }

    /// Iterate over the text as non-overlapping runs, each paired with the
    /// attributes active over it.
    pub fn runs(&self) -> Runs<'_, Attr> {
        Runs::new(&self.text, &self.attributes)
    }
}

impl<Attr: Clone> AttributedText<Attr> {
    /// Copy the given `range` into a new `AttributedText`.
    ///
    /// Attribute spans are clipped to the range and shifted so that they are
    /// relative to the start of the slice.
    pub fn slice(&self, range: Range<usize>) -> Result<Self, Error> {
        validate_range(&self.text, &range)?;
        let attributes = self
            .attributes
            .iter()
            .filter_map(|(span, attr)| {
                let start = span.start.max(range.start);
                let end = span.end.min(range.end);
                (start < end).then(|| (start - range.start..end - range.start, attr.clone()))
            })
            .collect();
        Ok(Self {
            text: String::from(&self.text[range]),
            attributes,
        })
    }

    /// Append `other`, keeping its attributes.
    pub fn append(&mut self, other: &Self) {
        let offset = self.text.len();
        self.text.push_str(&other.text);
        self.attributes.extend(
            other
                .attributes
                .iter()
                .map(|(span, attr)| (span.start + offset..span.end + offset, attr.clone())),
        );
    }

    /// Replace every attribute for which `matches` returns `true` over `range`
    /// with `attribute`.
    ///
    /// Matching spans partially covered by `range` are split so that the parts
    /// outside of it keep their original value.
    pub fn replace_attribute(
        &mut self,
        range: Range<usize>,
        matches: impl Fn(&Attr) -> bool,
        attribute: Attr,
    ) -> Result<(), Error> {
        validate_range(&self.text, &range)?;
        if range.is_empty() {
            return Ok(());
        }
        let mut attributes = Vec::with_capacity(self.attributes.len() + 2);
        for (span, attr) in self.attributes.drain(..) {
            let overlaps = span.start < range.end && span.end > range.start;
            if !overlaps || !matches(&attr) {
                attributes.push((span, attr));
                continue;
            }
            if span.start < range.start {
                attributes.push((span.start..range.start, attr.clone()));
            }
            if span.end > range.end {
                attributes.push((range.end..span.end, attr));
            }
        }
        attributes.push((range, attribute));
        self.attributes = attributes;
        Ok(())
    }
}

impl<Attr> From<&str> for AttributedText<Attr> {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl<Attr> From<String> for AttributedText<Attr> {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
