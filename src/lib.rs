//! Address value object for a personal address book.
//!
//! An [`Address`] is parsed from a `BLOCK, STREET, UNIT, POSTAL_CODE` string,
//! validated once, and immutable afterwards.
//!
//! ```
//! use addressbook::Address;
//!
//! let address = Address::new("123, some street,  #0-00, 999999", false).unwrap();
//! assert_eq!(address.to_string(), "123, some street, #0-00, 999999");
//! assert!(!address.is_private());
//! ```

pub mod address;
pub mod error;
pub mod record;

pub use address::part::{Block, PostalCode, Street, Unit};
pub use address::Address;
pub use error::ValidationError;
