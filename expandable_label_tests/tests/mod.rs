// Copyright 2025 the Expandable Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `expandable_label`.
//!
//! - The `util` module contains the shared test environment and sample texts.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so that every topic module can share `util`.
//! - Put new tests into the module of their topic, and start the test name with that topic.
//!   For example, a test about tapping the link is `interaction_tap_expands`, not
//!   `tap_expands_interaction`.
//!
//! All tests use [`expandable_label::MonospaceLayout`] with a 10px font on 12px lines.
//! Every cluster advances 5px, so a 100px label holds exactly 20 clusters per line.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod properties;
mod util;
