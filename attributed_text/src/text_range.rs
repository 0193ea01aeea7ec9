// Copyright 2025 the Expandable Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{Endpoint, Error};

/// Checks that `range` is ordered, in bounds and on UTF-8 codepoint boundaries
/// of `text`.
#[inline]
pub(crate) fn validate_range(text: &str, range: &Range<usize>) -> Result<(), Error> {
    let text_len = text.len();
    if range.start > range.end {
        return Err(Error::invalid_range(range.start, range.end, text_len));
    }
    if range.end > text_len {
        return Err(Error::invalid_bounds(range.start, range.end, text_len));
    }
    for (which, index) in [(Endpoint::Start, range.start), (Endpoint::End, range.end)] {
        if !text.is_char_boundary(index) {
            return Err(Error::not_on_char_boundary(text, range, which, index));
        }
    }
    Ok(())
}
