use crate::utils::GenericError;
use std::fmt::{Display, Formatter};

/// Specifies an error which stops the grouping pipeline.
/// Data quality issues, such as missing coordinates, are never reported as errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GroupingError {
    /// Configuration is malformed, e.g. size bounds are not ordered. Reported before any processing.
    Configuration(String),
    /// An internal invariant, such as the partition property, is violated. Signals a bug.
    InvariantViolation(String),
}

impl Display for GroupingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupingError::Configuration(msg) => write!(f, "invalid configuration: {msg}"),
            GroupingError::InvariantViolation(msg) => write!(f, "internal invariant violation: {msg}"),
        }
    }
}

impl std::error::Error for GroupingError {}

impl From<GroupingError> for GenericError {
    fn from(value: GroupingError) -> Self {
        GenericError::from(value.to_string())
    }
}
