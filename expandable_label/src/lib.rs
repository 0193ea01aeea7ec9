// Copyright 2025 the Expandable Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A text label that collapses to a fixed number of lines and ends with a "More" link.
//!
//! When the text needs more lines than [`ExpandableLabel::max_collapsed_lines`],
//! the last visible line is shortened and followed by an ellipsis and the
//! link. Tapping the link expands the label to show the full text, optionally
//! followed by a "Less" link that collapses it again.
//!
//! The crate does not draw anything. Hosts feed it a width and touches, and
//! draw [`ExpandableLabel::displayed_text`] with their own renderer. Shaping and
//! line breaking are delegated to a [`LineLayout`]:
//!
//! - [`MonospaceLayout`] is a fixed-advance layout, useful for terminals and tests.
//! - `ParleyLayout` (behind the `parley` feature) shapes with system fonts.
//!
//! ```
//! use expandable_label::{ExpandableLabel, Font, MonospaceLayout, Point, Transition};
//!
//! let font = Font::new(10.0).with_line_height(12.0);
//! let mut label = ExpandableLabel::new(MonospaceLayout::new(font), font);
//! label.set_max_collapsed_lines(1);
//! label.set_text("A label with more text than fits on one line");
//! label.set_width(100.0);
//!
//! assert_eq!(label.displayed_text().as_str(), "A label ... More");
//! let link = Point::new(60.0, 6.0);
//! label.press(link);
//! assert_eq!(label.release(link), Some(Transition::Expand));
//! assert!(!label.is_collapsed());
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Use the standard library.
//! - `libm`: Use `libm` for floating point math in `no_std` builds.
//! - `parley`: Provide `ParleyLayout`. Implies `std`.

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
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("expandable_label requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

mod interaction;
mod label;
mod layout;
mod monospace;
#[cfg(feature = "parley")]
mod parley_layout;
mod segment;
mod style;
mod truncate;

pub use attributed_text;
pub use peniko::kurbo::{Point, Rect};

pub use interaction::{DEFAULT_TOUCH_MARGIN, InteractionController, RenderState, Transition};
pub use label::{AnimationHost, ExpandableLabel, LabelObserver};
pub use layout::{HitTestOptions, LineLayout, LineSpan};
pub use monospace::MonospaceLayout;
#[cfg(feature = "parley")]
pub use parley_layout::ParleyLayout;
pub use style::{
    Alignment, Font, FontWeight, StyleProperty, StyledText, alignment_at, brush_at, font_at,
    with_default_font, with_highlighted_range,
};
pub use truncate::{
    Granularity, TruncationConfig, TruncationRequest, Variants, compute_variants, link_block,
};
