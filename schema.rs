//! Compile-time schema resolution.
//!
//! Both declaration macros lower their input to arrays of [`Resolved`] rows inside `const` items,
//! so every function here is a `const fn` and schema errors surface as compile errors through
//! [`SchemaError::abort()`].

use crate::SchemaError;

/// One declared entry, before its value is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Item {
    /// A bare name. Its value is the predecessor's value plus one, or `0` for the first entry.
    Implicit(&'static str),
    /// A name with an explicit value. Later implicit entries continue from here.
    Explicit(&'static str, i128),
}

impl Item {
    pub const fn name(&self) -> &'static str {
        match *self {
            Item::Implicit(name) | Item::Explicit(name, _) => name,
        }
    }
}

/// A schema row with its final value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolved {
    pub name: &'static str,
    pub value: i128,
}

impl Resolved {
    pub const fn new(name: &'static str, value: i128) -> Self {
        Self { name, value }
    }
}

/// Assigns a value to every item.
///
/// A running counter starts at `0`. An explicit value is taken as is and moves the counter to
/// `value + 1`; an implicit entry takes the counter and bumps it.
///
/// ```
/// # use rich_enum::schema::{resolve, Item, Resolved};
/// const SCHEMA: [Resolved; 4] = match resolve([
///     Item::Implicit("a"),
///     Item::Explicit("b", 4),
///     Item::Explicit("c", 97),
///     Item::Implicit("d"),
/// ]) {
///     Ok(resolved) => resolved,
///     Err(err) => err.abort(),
/// };
/// assert_eq!(SCHEMA[3], Resolved::new("d", 98));
/// ```
pub const fn resolve<const N: usize>(items: [Item; N]) -> Result<[Resolved; N], SchemaError> {
    let mut out = [Resolved::new("", 0); N];
    let mut next = Some(0i128);
    let mut i = 0;
    while i < N {
        let item = items[i];
        let value = match item {
            Item::Explicit(_, value) => value,
            Item::Implicit(_) => match next {
                Some(value) => value,
                None => return Err(SchemaError::Overflow { index: i }),
            },
        };
        out[i] = Resolved::new(item.name(), value);
        next = value.checked_add(1);
        i += 1;
    }
    match check_names(&out) {
        Ok(()) => Ok(out),
        Err(err) => Err(err),
    }
}

/// Rejects empty names and names declared more than once.
pub const fn check_names(rows: &[Resolved]) -> Result<(), SchemaError> {
    let mut i = 0;
    while i < rows.len() {
        if rows[i].name.is_empty() {
            return Err(SchemaError::EmptyName { index: i });
        }
        let mut j = 0;
        while j < i {
            if str_eq(rows[j].name, rows[i].name) {
                return Err(SchemaError::DuplicateName {
                    first: j,
                    second: i,
                });
            }
            j += 1;
        }
        i += 1;
    }
    Ok(())
}

/// Rejects values outside `min..=max`, the bounds of the enum's representation.
pub const fn check_range(rows: &[Resolved], min: i128, max: i128) -> Result<(), SchemaError> {
    let mut i = 0;
    while i < rows.len() {
        if rows[i].value < min || rows[i].value > max {
            return Err(SchemaError::OutOfRange { index: i });
        }
        i += 1;
    }
    Ok(())
}

const fn str_eq(lhs: &str, rhs: &str) -> bool {
    let (lhs, rhs) = (lhs.as_bytes(), rhs.as_bytes());
    if lhs.len() != rhs.len() {
        return false;
    }
    let mut i = 0;
    while i < lhs.len() {
        if lhs[i] != rhs[i] {
            return false;
        }
        i += 1;
    }
    true
}
