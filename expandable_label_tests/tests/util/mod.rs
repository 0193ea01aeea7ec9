// Copyright 2025 the Expandable Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions and types shared across tests.

mod asserts;
pub(crate) mod env;
pub(crate) mod samples;

pub(crate) use asserts::assert_link_is;
pub(crate) use env::{Event, TestEnv, font};
