// Copyright 2026 the Hyperlabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error type for label configuration and content operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    property: Option<&'static str>,
    range: Option<styled_runs::Error>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The name of the rejected property, for configuration errors.
    pub fn property(&self) -> Option<&'static str> {
        self.property
    }

    pub(crate) fn unsupported(property: &'static str) -> Self {
        Self {
            kind: ErrorKind::UnsupportedConfiguration,
            property: Some(property),
            range: None,
        }
    }
}

impl From<styled_runs::Error> for Error {
    fn from(value: styled_runs::Error) -> Self {
        Self {
            kind: ErrorKind::InvalidRange,
            property: None,
            range: Some(value),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match (self.kind, self.property, &self.range) {
            (ErrorKind::UnsupportedConfiguration, Some(property), _) => {
                write!(f, "unsupported configuration: `{property}` cannot be enabled")
            }
            (ErrorKind::InvalidRange, _, Some(range)) => write!(f, "invalid text range: {range}"),
            (kind, _, _) => write!(f, "{kind:?}"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.range
            .as_ref()
            .map(|range| range as &(dyn core::error::Error + 'static))
    }
}

/// The non-exhaustive category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A property was set to a value the engine does not implement.
    UnsupportedConfiguration,

    /// A byte range did not fit the text it was applied to.
    InvalidRange,
}
