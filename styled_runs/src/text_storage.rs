// Copyright 2026 the Hyperlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;

/// A contiguous UTF-8 text that can back a [`RunBuffer`].
///
/// [`RunBuffer`]: crate::RunBuffer
pub trait TextStorage: AsRef<str> {
    /// The length of the underlying text, in bytes.
    fn len(&self) -> usize {
        self.as_ref().len()
    }

    /// Return `true` if the underlying text is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return whether `index` is a UTF-8 character boundary in the text.
    fn is_char_boundary(&self, index: usize) -> bool {
        self.as_ref().is_char_boundary(index)
    }
}

impl TextStorage for String {}

impl TextStorage for &str {}

impl TextStorage for Arc<str> {}
