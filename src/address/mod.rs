use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;
use log::{debug, trace};
use regex::Regex;
use serde::{Deserialize, Serialize};
use crate::address::part::{trim_segment, Block, PostalCode, Street, Unit};
use crate::error::ValidationError;

pub mod part;

static ADDRESS_REG: LazyLock<Regex> = LazyLock::new(|| Regex::new(Address::VALIDATION_REGEX).unwrap());

const SEGMENT_COUNT: usize = 4;

/// A person's address in the address book.
///
/// Built from a `BLOCK, STREET, UNIT, POSTAL_CODE` string and immutable
/// afterwards. Equality, hashing and ordering go through the canonical form
/// (see [`Address::canonical`]); the privacy flag takes no part in them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawAddress", into = "RawAddress")]
pub struct Address {
    block: Block,
    street: Street,
    unit: Unit,
    postal_code: PostalCode,
    is_private: bool,
}

impl Address {
    pub const EXAMPLE: &'static str = "123, some street,  #0-00, 999999";
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Person addresses can be in the format a/BLOCK, STREET, UNIT, POSTAL_CODE";
    /// four comma separated segments on a single line; `\r`, `\n`, NEL and the
    /// unicode line/paragraph separators all end a line
    pub const VALIDATION_REGEX: &'static str = concat!(
        r"^[^,\r\n\x{85}\x{2028}\x{2029}]+",
        r",[^,\r\n\x{85}\x{2028}\x{2029}]+",
        r",[^,\r\n\x{85}\x{2028}\x{2029}]+",
        r",[^,\r\n\x{85}\x{2028}\x{2029}]+$",
    );

    /// Validate and split `address` into its four parts.
    ///
    /// * `address` - raw input, e.g. `123, some street, #0-00, 999999`
    /// * `is_private` - stored as is, never validated
    pub fn new(address: &str, is_private: bool) -> Result<Self, ValidationError> {
        let Some([block, street, unit, postal_code]) = Self::chop_by_comma(address) else {
            trace!("rejected address [{}]", address);
            return Err(ValidationError::new(address));
        };
        let address = Self {
            block: Block::new(block),
            street: Street::new(street),
            unit: Unit::new(unit),
            postal_code: PostalCode::new(postal_code),
            is_private,
        };
        debug!("parsed address [{}]", address);
        Ok(address)
    }

    /// whether `test` is accepted by [`Address::new`]
    pub fn is_valid(test: &str) -> bool {
        Self::chop_by_comma(test).is_some()
    }

    /// Split into exactly four segments, or `None` when the shape is wrong.
    ///
    /// The regex and the segment count must both agree, and no segment may be
    /// blank once trimmed.
    fn chop_by_comma(address: &str) -> Option<[&str; SEGMENT_COUNT]> {
        if !ADDRESS_REG.is_match(address) {
            return None;
        }
        let segments: [&str; SEGMENT_COUNT] = address.split(',').collect::<Vec<_>>().try_into().ok()?;
        if segments.iter().any(|s| trim_segment(s).is_empty()) {
            return None;
        }
        Some(segments)
    }

    pub fn block(&self) -> &Block {
        &self.block
    }

    pub fn street(&self) -> &Street {
        &self.street
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn postal_code(&self) -> &PostalCode {
        &self.postal_code
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }

    /// the four trimmed parts joined by `", "`
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.block, self.street, self.unit, self.postal_code)
    }
}

// parts never contain a comma, so comparing them is the same as comparing
// canonical forms
impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
            || (&self.block, &self.street, &self.unit, &self.postal_code)
                == (&other.block, &other.street, &other.unit, &other.postal_code)
    }
}

impl Eq for Address {}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Address {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().cmp(&other.canonical())
    }
}

/// serde shape of an [`Address`]
#[derive(Serialize, Deserialize)]
struct RawAddress {
    address: String,
    #[serde(default)]
    private: bool,
}

impl TryFrom<RawAddress> for Address {
    type Error = ValidationError;

    fn try_from(raw: RawAddress) -> Result<Self, Self::Error> {
        Address::new(&raw.address, raw.private)
    }
}

impl From<Address> for RawAddress {
    fn from(address: Address) -> Self {
        Self {
            address: address.canonical(),
            private: address.is_private,
        }
    }
}
