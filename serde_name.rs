//! (De)serializes an enum as its declared name.
//!
//! ```
//! # use rich_enum::declare_enum;
//! # use serde::{Deserialize, Serialize};
//! declare_enum!(Level, debug, info, (warn, 10), error);
//!
//! #[derive(Serialize, Deserialize)]
//! struct Config {
//!     #[serde(with = "rich_enum::serde_name")]
//!     level: Level,
//! }
//!
//! let config: Config = serde_json::from_str(r#"{"level":"warn"}"#).unwrap();
//! assert_eq!(config.level, Level::warn);
//! assert_eq!(serde_json::to_string(&config).unwrap(), r#"{"level":"warn"}"#);
//! ```

use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, Unexpected, Visitor};
use serde::ser::Error as _;
use serde::{Deserializer, Serializer};

use crate::{EnumTraits, RichEnum};

pub fn serialize<E: RichEnum, S: Serializer>(value: &E, serializer: S) -> Result<S::Ok, S::Error> {
    match EnumTraits::<E>::to_string(*value) {
        Some(name) => serializer.serialize_str(name),
        None => Err(S::Error::custom(format_args!(
            "value {} of `{}` has no name",
            value.to_repr(),
            E::TYPE_NAME
        ))),
    }
}

pub fn deserialize<'de, E: RichEnum, D: Deserializer<'de>>(deserializer: D) -> Result<E, D::Error> {
    deserializer.deserialize_str(NameVisitor(PhantomData))
}

struct NameVisitor<E>(PhantomData<E>);

impl<'de, E: RichEnum> Visitor<'de> for NameVisitor<E> {
    type Value = E;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a `{}` name", E::TYPE_NAME)
    }

    fn visit_str<Er: de::Error>(self, v: &str) -> Result<E, Er> {
        EnumTraits::<E>::parse(v).map_err(|_| Er::invalid_value(Unexpected::Str(v), &self))
    }

    fn visit_bytes<Er: de::Error>(self, v: &[u8]) -> Result<E, Er> {
        EnumTraits::<E>::parse(v).map_err(|_| Er::invalid_value(Unexpected::Bytes(v), &self))
    }
}
