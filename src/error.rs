use thiserror::Error;
use crate::address::Address;

/// The input string does not have the `BLOCK, STREET, UNIT, POSTAL_CODE` shape.
///
/// Displays as the address constraints message. The rejected input is kept
/// for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", Address::MESSAGE_CONSTRAINTS)]
pub struct ValidationError {
    input: String,
}

impl ValidationError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// the raw string that failed validation
    pub fn input(&self) -> &str {
        &self.input
    }
}
