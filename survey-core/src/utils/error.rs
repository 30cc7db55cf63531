#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt::{Display, Formatter};

/// An error with a human readable message only. Used where data enters or leaves the engine:
/// address construction, importers, exporters and command line handling.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl GenericError {
    /// Prepends context, such as a row number or a file name, to the message.
    pub fn with_context(self, context: &str) -> Self {
        Self(format!("{context}: {}", self.0))
    }

    /// Returns error message.
    pub fn message(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(message: String) -> Self {
        Self(message)
    }
}

impl From<&str> for GenericError {
    fn from(message: &str) -> Self {
        Self(message.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(err: std::io::Error) -> Self {
        Self(err.to_string())
    }
}
