// Copyright 2025 the Expandable Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Run segmentation for [`AttributedText`].
//!
//! Overlapping attribute spans are flattened into contiguous, non-overlapping
//! runs. Each run reports every span active over it, in application order.
//!
//! [`AttributedText`]: crate::AttributedText

use alloc::vec::Vec;
use core::ops::Range;

/// A contiguous piece of attributed text with uniform attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct Run<'a, Attr> {
    /// Byte range of the run in the source text.
    pub range: Range<usize>,
    /// The text of the run.
    pub text: &'a str,
    /// Attributes active over the whole run, in application order.
    pub attributes: Vec<&'a Attr>,
}

/// Iterator over the [`Run`]s of an [`AttributedText`].
///
/// # Examples
///
/// ```
/// use attributed_text::AttributedText;
///
/// let mut text = AttributedText::new("hello");
/// text.apply_attribute(0..2, 'r').unwrap();
/// text.apply_attribute(1..5, 'b').unwrap();
///
/// let runs: Vec<_> = text.runs().map(|run| (run.text, run.attributes)).collect();
/// assert_eq!(runs, vec![("h", vec![&'r']), ("e", vec![&'r', &'b']), ("llo", vec![&'b'])]);
/// ```
///
/// [`AttributedText`]: crate::AttributedText
#[derive(Clone, Debug)]
pub struct Runs<'a, Attr> {
    text: &'a str,
    attributes: &'a [(Range<usize>, Attr)],
    boundaries: Vec<usize>,
    index: usize,
}

impl<'a, Attr> Runs<'a, Attr> {
    pub(crate) fn new(text: &'a str, attributes: &'a [(Range<usize>, Attr)]) -> Self {
        let mut boundaries = Vec::with_capacity(2 + attributes.len() * 2);
        boundaries.push(0);
        boundaries.push(text.len());
        for (range, _) in attributes {
            boundaries.push(range.start);
            boundaries.push(range.end);
        }
        boundaries.sort_unstable();
        boundaries.dedup();
        Self {
            text,
            attributes,
            boundaries,
            index: 0,
        }
    }
}

impl<'a, Attr> Iterator for Runs<'a, Attr> {
    type Item = Run<'a, Attr>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = *self.boundaries.get(self.index)?;
        let end = *self.boundaries.get(self.index + 1)?;
        self.index += 1;
        let attributes = self
            .attributes
            .iter()
            .filter(|(span, _)| span.start <= start && span.end >= end)
            .map(|(_, attr)| attr)
            .collect();
        Some(Run {
            range: start..end,
            text: &self.text[start..end],
            attributes,
        })
    }
}
