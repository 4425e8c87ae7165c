mod artwork;
mod page;

pub use artwork::{Artwork, RowKey};
pub use page::{Page, PageView};

use serde::{Deserialize, Deserializer};

/// Helper to deserialize a row key sent as either an integer or a numeric string
pub(crate) fn deserialize_row_key<'de, D>(deserializer: D) -> Result<RowKey, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct KeyVisitor;

    impl<'de> Visitor<'de> for KeyVisitor {
        type Value = RowKey;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a non-negative integer or numeric string")
        }

        fn visit_str<E>(self, value: &str) -> Result<RowKey, E>
        where
            E: de::Error,
        {
            value
                .trim()
                .parse::<u64>()
                .map(RowKey)
                .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
        }

        fn visit_i64<E>(self, value: i64) -> Result<RowKey, E>
        where
            E: de::Error,
        {
            u64::try_from(value)
                .map(RowKey)
                .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
        }

        fn visit_u64<E>(self, value: u64) -> Result<RowKey, E>
        where
            E: de::Error,
        {
            Ok(RowKey(value))
        }
    }

    deserializer.deserialize_any(KeyVisitor)
}

/// Helper to deserialize nullable strings as empty string
/// Handles both missing fields and explicit null values
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}
