// Copyright 2025 the Expandable Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Word and grapheme cluster segmentation.

use alloc::vec::Vec;
use core::ops::Range;

use icu_segmenter::options::WordBreakInvariantOptions;
use icu_segmenter::{GraphemeClusterSegmenter, WordSegmenter};
use smallvec::SmallVec;

/// Word ranges of a single line. Lines rarely hold more than a dozen words.
pub(crate) type Words = SmallVec<[Range<usize>; 16]>;

/// Returns the byte ranges of the word-like segments of `text`.
///
/// Whitespace and punctuation between words are not included.
pub(crate) fn words(text: &str) -> Words {
    let segmenter = WordSegmenter::new_auto(WordBreakInvariantOptions::default());
    let mut iter = segmenter.segment_str(text);
    let mut words = Words::new();
    let mut start = 0;
    while let Some(end) = iter.next() {
        if end > start && iter.is_word_like() {
            words.push(start..end);
        }
        start = end;
    }
    words
}

/// Returns the byte ranges of the grapheme clusters of `text`.
pub(crate) fn grapheme_ranges(text: &str) -> Vec<Range<usize>> {
    let boundaries: Vec<usize> = GraphemeClusterSegmenter::new().segment_str(text).collect();
    boundaries
        .windows(2)
        .map(|pair| pair[0]..pair[1])
        .collect()
}

/// Returns the number of user-perceived characters in `text`.
pub(crate) fn grapheme_count(text: &str) -> usize {
    GraphemeClusterSegmenter::new()
        .segment_str(text)
        .filter(|&boundary| boundary > 0)
        .count()
}

/// Returns the byte length of the first `count` grapheme clusters of `text`.
pub(crate) fn grapheme_prefix_len(text: &str, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    GraphemeClusterSegmenter::new()
        .segment_str(text)
        .filter(|&boundary| boundary > 0)
        .nth(count - 1)
        .unwrap_or(text.len())
}

/// Returns `true` for characters that end a paragraph.
pub(crate) fn is_newline(c: char) -> bool {
    matches!(
        c,
        '\n' | '\u{b}' | '\u{c}' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
