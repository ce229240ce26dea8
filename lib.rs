#![doc = include_str!("README.md")]

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}

mod error;
pub mod schema;
#[cfg(feature = "serde")]
pub mod serde_name;
mod table;

pub use error::{ParseError, SchemaError};
pub use table::{Entry, LookupTable};

use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::marker::PhantomData;
use core::ops::Range;

/// Declares a new enum together with its name table.
///
/// Entries are bare identifiers or `(identifier, value)` pairs. The first entry defaults to `0`
/// and every implicit entry continues from its predecessor, so an explicit value moves the
/// baseline for the entries after it. The representation defaults to `i32` and can be set with
/// `Name: repr`.
///
/// ```
/// # use rich_enum::{declare_enum, EnumTraits};
/// declare_enum!(pub TestEnum, state0, (state1, 4), (state2, 97), state3);
///
/// assert_eq!(TestEnum::state3 as i32, 98);
/// assert_eq!(EnumTraits::<TestEnum>::to_string(TestEnum::state2), Some("state2"));
/// assert_eq!(EnumTraits::<TestEnum>::parse("state2"), Ok(TestEnum::state2));
/// ```
///
/// The generated enum derives `Clone`, `Copy`, `Debug`, `PartialEq`, `Eq`, `PartialOrd`, `Ord`
/// and `Hash`, and implements `Display` and `FromStr` through the name table. Attributes placed
/// before the visibility are forwarded to the enum, attributes before an entry to its variant.
///
/// Names must be unique:
///
/// ```compile_fail
/// # use rich_enum::declare_enum;
/// declare_enum!(Twice, a, b, (a, 4));
/// ```
///
/// and values must fit the representation:
///
/// ```compile_fail
/// # use rich_enum::declare_enum;
/// declare_enum!(Small: u8, a, (b, 255), c);
/// ```
///
/// Every entry becomes a variant, so two entries cannot share a value. Bind an existing enum with
/// [`register_enum!`] to give one value several names.
///
/// ```compile_fail
/// # use rich_enum::declare_enum;
/// declare_enum!(Same, a, (b, 0));
/// ```
///
/// You can specify the crate path using `@` syntax, like `declare_enum!(Name, a, b @
/// my_crate::rich_enum)`.
pub use rich_enum_macro::declare_enum;

/// Binds an existing fieldless enum to a name table.
///
/// Each mapping associates a constant `&str` expression with a variant. The enum must be `Copy`.
///
/// ```
/// # use rich_enum::{register_enum, EnumTraits};
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// enum Custom {
///     Field0,
///     Field1 = 37,
///     Field2,
/// }
///
/// mod names {
///     pub const FIELD0: &str = "field0";
///     pub const FIELD1: &str = "field1";
/// }
///
/// register_enum!(Custom {
///     names::FIELD0 => Custom::Field0,
///     names::FIELD1 => Custom::Field1,
///     "field2" => Custom::Field2,
/// });
///
/// assert_eq!(EnumTraits::<Custom>::repr_to_string(38), Some("field2"));
/// assert_eq!(EnumTraits::<Custom>::parse("field1"), Ok(Custom::Field1));
/// ```
///
/// Keys are checked at compile time, so a repeated name is rejected even when it hides behind
/// a constant:
///
/// ```compile_fail
/// # use rich_enum::register_enum;
/// #[derive(Clone, Copy)]
/// enum Custom { A, B }
/// const A: &str = "a";
/// register_enum!(Custom { A => Custom::A, "a" => Custom::B });
/// ```
///
/// Empty names are rejected as well:
///
/// ```compile_fail
/// # use rich_enum::register_enum;
/// #[derive(Clone, Copy)]
/// enum Custom { A }
/// register_enum!(Custom { "" => Custom::A });
/// ```
///
/// and so is a variant whose value does not fit the chosen representation:
///
/// ```compile_fail
/// # use rich_enum::register_enum;
/// #[derive(Clone, Copy)]
/// enum Custom { A, B = 300 }
/// register_enum!(Custom: u8 { "a" => Custom::A, "b" => Custom::B });
/// ```
pub use rich_enum_macro::register_enum;

mod private {
    pub trait Sealed {}
}

/// Integer types an enum can be represented by.
pub trait Repr:
    private::Sealed + Copy + Ord + Hash + Debug + Display + Send + Sync + 'static
{
    const MIN_I128: i128;
    const MAX_I128: i128;
}

macro_rules! reprs {
    () => {};
    ($ty:ident $($rem:tt)*) => {
        impl private::Sealed for $ty {}
        impl Repr for $ty {
            const MIN_I128: i128 = $ty::MIN as i128;
            const MAX_I128: i128 = $ty::MAX as i128;
        }
        reprs!($($rem)*);
    };
}
reprs! { i8 i16 i32 i64 isize u8 u16 u32 u64 usize }

/// Binds an enum type to its names.
///
/// Implemented by [`declare_enum!`] and [`register_enum!`]. The table returned by
/// [`RichEnum::lookup_table()`] is built once, on first use, and shared by every caller for the
/// rest of the process.
pub trait RichEnum: Copy + Send + Sync + 'static {
    type Repr: Repr;

    const TYPE_NAME: &'static str;

    /// Entries in declaration order.
    const ENTRIES: &'static [Entry<Self>];

    fn to_repr(self) -> Self::Repr;

    fn lookup_table() -> &'static LookupTable<Self>;
}

/// Conversions between an enum and its names.
///
/// Every function is a read of the table bound to `E`; none of them lock or allocate.
pub struct EnumTraits<E>(PhantomData<fn() -> E>);

impl<E: RichEnum> EnumTraits<E> {
    /// The name of `value`, or `None` if it has none.
    pub fn to_string(value: E) -> Option<&'static str> {
        Self::repr_to_string(value.to_repr())
    }

    /// The name of `value`, or `default` if it has none.
    pub fn to_string_or(value: E, default: &str) -> &str {
        Self::to_string(value).unwrap_or(default)
    }

    /// The name declared for an underlying value. Values with no entry yield `None`.
    pub fn repr_to_string(raw: E::Repr) -> Option<&'static str> {
        E::lookup_table().name_for(raw)
    }

    pub fn repr_to_string_or(raw: E::Repr, default: &str) -> &str {
        Self::repr_to_string(raw).unwrap_or(default)
    }

    pub fn from_repr(raw: E::Repr) -> Option<E> {
        E::lookup_table().value_for_repr(raw)
    }

    /// Parses a complete name.
    ///
    /// The whole input has to equal a declared name: empty input, unknown names, and anything
    /// with missing or trailing characters are rejected.
    pub fn parse<T: AsRef<[u8]> + ?Sized>(text: &T) -> Result<E, ParseError> {
        let text = text.as_ref();
        if text.is_empty() {
            return Err(ParseError::Empty {
                type_name: E::TYPE_NAME,
            });
        }
        E::lookup_table()
            .value_for(text)
            .ok_or(ParseError::Unknown {
                type_name: E::TYPE_NAME,
                len: text.len(),
            })
    }

    /// Parses the name stored at `range` within `buffer`, with the same rules as
    /// [`EnumTraits::parse()`].
    pub fn parse_range(buffer: &[u8], range: Range<usize>) -> Result<E, ParseError> {
        match buffer.get(range.clone()) {
            Some(span) => Self::parse(span),
            None => Err(ParseError::InvalidRange {
                start: range.start,
                end: range.end,
                len: buffer.len(),
            }),
        }
    }

    /// Stores the parsed value in `out` and returns `true`, or leaves `out` alone and returns
    /// `false`.
    pub fn try_parse<T: AsRef<[u8]> + ?Sized>(out: &mut E, text: &T) -> bool {
        Self::store(out, Self::parse(text))
    }

    pub fn try_parse_range(out: &mut E, buffer: &[u8], range: Range<usize>) -> bool {
        Self::store(out, Self::parse_range(buffer, range))
    }

    /// Entries in declaration order.
    pub fn entries() -> &'static [Entry<E>] {
        E::ENTRIES
    }

    fn store(out: &mut E, parsed: Result<E, ParseError>) -> bool {
        match parsed {
            Ok(value) => {
                *out = value;
                true
            }
            Err(_) => false,
        }
    }
}

/// Same as [`EnumTraits::to_string()`], without naming the facade.
pub fn enum_to_string<E: RichEnum>(value: E) -> Option<&'static str> {
    EnumTraits::<E>::to_string(value)
}

/// Same as [`EnumTraits::to_string_or()`], without naming the facade.
pub fn enum_to_string_or<E: RichEnum>(value: E, default: &str) -> &str {
    EnumTraits::<E>::to_string_or(value, default)
}
