// Copyright 2026 the Hyperlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `hyperlabel`.
//!
//! - The `util` module contains the recording host and label constructors shared by
//!   the tests.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so that the shared utilities are compiled once.
//! - If you want to add new tests, put them into the module for their "topic" (content,
//!   styles, hit testing, interaction, highlight, config), or create a new one.
//! - For test naming, put the topic at the start of the name, e.g. `interaction_tap_on_link`
//!   rather than `tap_on_link_interaction`.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod content;
mod interaction;
mod util;
