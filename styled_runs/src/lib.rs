// Copyright 2026 the Hyperlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styled Runs stores a UTF-8 text together with a contiguous partition of that
//! text into runs, each of which carries exactly one attribute value.
//!
//! Unlike span-based attributed text, runs never overlap and never leave gaps:
//! every byte of the text belongs to exactly one run. Runs are only ever split,
//! never merged, so a run boundary observed by a caller stays a run boundary
//! until the caller replaces the buffer.
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

mod error;
mod run_buffer;
mod text_range;
mod text_storage;

pub use crate::error::{Error, ErrorKind};
pub use crate::run_buffer::RunBuffer;
pub use crate::text_range::TextRange;
pub use crate::text_storage::TextStorage;
