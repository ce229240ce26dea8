use thiserror::Error;

/// Failure to turn text into an enum value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("cannot parse `{type_name}` from empty input")]
    Empty { type_name: &'static str },
    #[error("input of {len} bytes does not name any `{type_name}` entry")]
    Unknown { type_name: &'static str, len: usize },
    #[error("range {start}..{end} is out of bounds for a buffer of {len} bytes")]
    InvalidRange { start: usize, end: usize, len: usize },
}

/// A malformed enum schema.
///
/// The declaration macros evaluate schemas in `const` items, where these errors become compile
/// errors through [`SchemaError::abort()`]. Indices refer to declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("entries {first} and {second} have the same name")]
    DuplicateName { first: usize, second: usize },
    #[error("entry {index} has an empty name")]
    EmptyName { index: usize },
    #[error("implicit value of entry {index} overflows")]
    Overflow { index: usize },
    #[error("value of entry {index} does not fit the enum representation")]
    OutOfRange { index: usize },
}

impl SchemaError {
    /// Panics with a fixed message. Usable in const evaluation, which cannot format arguments.
    pub const fn abort(self) -> ! {
        match self {
            Self::DuplicateName { .. } => panic!("enum schema declares the same name twice"),
            Self::EmptyName { .. } => panic!("enum schema declares an empty name"),
            Self::Overflow { .. } => panic!("implicit enum value overflows"),
            Self::OutOfRange { .. } => {
                panic!("enum value does not fit the representation type")
            }
        }
    }
}
