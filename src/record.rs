use serde::{Deserialize, Serialize};
use crate::address::Address;
use crate::error::ValidationError;

/// One row of the batch input: `address,private`
#[derive(Debug, Clone, Deserialize)]
pub struct InputRow {
    pub address: String,
    /// missing or unreadable values count as `false`
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub private: Option<bool>,
}

impl InputRow {
    pub fn is_private(&self) -> bool {
        self.private.unwrap_or(false)
    }
}

/// The final struct written to the report, one per input row
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Record {
    /// 1-based position of the row in the input, header excluded
    #[serde(rename = "line")]
    pub row: usize,
    pub valid: bool,
    /// canonical form when valid, raw input otherwise
    pub address: String,
    block: Option<String>,
    street: Option<String>,
    unit: Option<String>,
    postal_code: Option<String>,
    private: bool,
    error: Option<String>,
}

impl Record {
    /// validate `input` and turn the outcome into a report line
    pub fn from_row(row: usize, input: InputRow) -> Self {
        let private = input.is_private();
        match Address::new(&input.address, private) {
            Ok(address) => Self::from_address(row, address),
            Err(err) => Self::from_error(row, err, private),
        }
    }

    pub fn from_address(row: usize, address: Address) -> Self {
        Self {
            row,
            valid: true,
            address: address.canonical(),
            block: Some(address.block().to_string()),
            street: Some(address.street().to_string()),
            unit: Some(address.unit().to_string()),
            postal_code: Some(address.postal_code().to_string()),
            private: address.is_private(),
            error: None,
        }
    }

    pub fn from_error(row: usize, err: ValidationError, private: bool) -> Self {
        Self {
            row,
            valid: false,
            error: Some(err.to_string()),
            address: err.input().to_owned(),
            block: None,
            street: None,
            unit: None,
            postal_code: None,
            private,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
