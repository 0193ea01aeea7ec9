// Copyright 2025 the Expandable Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attributed Text is an owned UTF-8 string with attributes applied to byte ranges.
//!
//! It is the styled string type used by `expandable_label`: the label slices it
//! line by line, appends links to it, and replaces attributes on sub-ranges
//! while keeping the rest of the styling intact.
//!
//! Attributes may overlap. When two spans of the same kind cover an index, the
//! one applied later wins; resolving that is left to the consumer.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod attributed_text;
mod error;
mod runs;
mod text_range;

pub use crate::attributed_text::AttributedText;
pub use crate::error::{BoundaryInfo, Endpoint, Error, ErrorKind};
pub use crate::runs::{Run, Runs};
