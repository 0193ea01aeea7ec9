// Copyright 2025 the Expandable Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::Range;

/// Error returned by range-taking operations on [`AttributedText`].
///
/// Carries a non-exhaustive [`ErrorKind`], the range the caller asked for, the
/// text length at the time, and for boundary failures the enclosing character.
///
/// [`AttributedText`]: crate::AttributedText
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    start: usize,
    end: usize,
    len: usize,
    boundary: Option<BoundaryInfo>,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports source text length context; an `is_empty` method would be misleading and unused."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The start byte index of the range provided by the caller.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end byte index of the range provided by the caller.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The length in bytes of the text the range was checked against.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Extra details for boundary-related errors, if available.
    pub fn boundary(&self) -> Option<BoundaryInfo> {
        self.boundary
    }

    fn new(kind: ErrorKind, start: usize, end: usize, len: usize) -> Self {
        Self {
            kind,
            start,
            end,
            len,
            boundary: None,
        }
    }

    pub(crate) fn invalid_bounds(start: usize, end: usize, len: usize) -> Self {
        Self::new(ErrorKind::InvalidBounds, start, end, len)
    }

    pub(crate) fn invalid_range(start: usize, end: usize, len: usize) -> Self {
        Self::new(ErrorKind::InvalidRange, start, end, len)
    }

    pub(crate) fn not_on_char_boundary(
        text: &str,
        range: &Range<usize>,
        which: Endpoint,
        index: usize,
    ) -> Self {
        let (char_start, char_end) = enclosing_char_span(text, index);
        Self {
            boundary: Some(BoundaryInfo {
                which,
                index,
                char_start,
                char_end,
            }),
            ..Self::new(ErrorKind::NotOnCharBoundary, range.start, range.end, text.len())
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.boundary) {
            (ErrorKind::InvalidBounds, _) => write!(
                f,
                "range {}..{} out of bounds for len {}",
                self.start, self.end, self.len
            ),
            (ErrorKind::InvalidRange, _) => {
                write!(f, "invalid range {}..{}: start > end", self.start, self.end)
            }
            (ErrorKind::NotOnCharBoundary, Some(b)) => {
                let which = match b.which {
                    Endpoint::Start => "start",
                    Endpoint::End => "end",
                };
                write!(
                    f,
                    "range {}..{}: {} index {} not on UTF-8 boundary (char {}..{})",
                    self.start, self.end, which, b.index, b.char_start, b.char_end
                )
            }
            (ErrorKind::NotOnCharBoundary, None) => write!(
                f,
                "range {}..{} not on UTF-8 boundary",
                self.start, self.end
            ),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Provided range indices were out of bounds relative to the text length.
    InvalidBounds,

    /// The provided range had `start > end`.
    InvalidRange,

    /// Either `start` or `end` was not aligned to a UTF-8 character boundary.
    NotOnCharBoundary,
}

/// Identifies which endpoint of a range failed boundary validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The `start` endpoint of the range.
    Start,

    /// The `end` endpoint of the range.
    End,
}

/// Details about an offending index that was not on a UTF-8 character boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundaryInfo {
    /// Which endpoint (`start` or `end`) was invalid.
    pub which: Endpoint,

    /// The offending byte index.
    pub index: usize,

    /// The start byte index of the enclosing UTF-8 codepoint.
    pub char_start: usize,

    /// The end byte index (exclusive) of the enclosing UTF-8 codepoint.
    pub char_end: usize,
}

/// Returns the byte span of the codepoint that contains `index`.
///
/// `index` must be inside the text and not on a boundary.
fn enclosing_char_span(text: &str, index: usize) -> (usize, usize) {
    let start = (0..index)
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0);
    let end = (index + 1..=text.len())
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(text.len());
    (start, end)
}
