use std::fmt;

/// Strip leading and trailing ASCII whitespace and control characters.
///
/// Everything up to and including U+0020 goes; other unicode whitespace such
/// as NBSP is kept as part of the segment.
pub(crate) fn trim_segment(value: &str) -> &str {
    value.trim_matches(|c: char| c <= ' ')
}

/// Declares a trimmed text wrapper for one segment of an address.
macro_rules! address_part {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// only `Address` construction hands out parts, already trimmed
            pub(crate) fn new(value: &str) -> Self {
                Self(trim_segment(value).to_owned())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<$name> for String {
            fn from(part: $name) -> Self {
                part.0
            }
        }
    };
}

address_part!(
    /// block number, e.g. `123`
    Block
);
address_part!(
    /// street name
    Street
);
address_part!(
    /// unit number, e.g. `#0-00`
    Unit
);
address_part!(
    /// postal code, e.g. `999999`
    PostalCode
);
