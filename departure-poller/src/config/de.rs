//! Lenient field decoders for host-supplied JSON.
//!
//! The host configuration is hand-written, so ids and direction codes show
//! up as numbers or as strings.

use serde::{Deserialize, Deserializer};

use crate::domain::Direction;

/// Accepts a direction as a number, a numeric string, an empty string or null.
pub(super) fn optional_direction<'de, D>(deserializer: D) -> Result<Option<Direction>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDirection {
        Code(u8),
        Text(String),
    }

    match Option::<RawDirection>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawDirection::Code(code)) => Ok(Some(Direction::new(code))),
        Some(RawDirection::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(RawDirection::Text(text)) => text
            .trim()
            .parse::<u8>()
            .map(|code| Some(Direction::new(code)))
            .map_err(|_| serde::de::Error::custom(format!("invalid direction {text:?}"))),
    }
}

/// Accepts a string or an unsigned number, yielding a string.
pub(super) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(u64),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}
