//! JSON boundary of the Management API records.
//!
//! Records are mapped from and to JSON with [serde](https://docs.rs/serde/) and
//! [serde_json](https://docs.rs/serde_json/). Dates follow the API pattern
//! `yyyy-MM-dd'T'HH:mm:ss.SSS'Z'`, and are always expressed in UTC.

use chrono::DateTime;
use chrono::ParseError;
use chrono::offset::{TimeZone, Utc};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// The chrono pattern of every date exchanged with the Management API.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unable to decode json: {0}")]
    Decode(serde_json::Error),
    #[error("unable to encode json: {0}")]
    Encode(serde_json::Error),
    #[error("invalid date {value:?}: {source}")]
    Date {
        value: String,
        source: ParseError,
    },
}

/// Parse a date written with the API pattern.
pub fn parse_date(value: &str) -> Result<DateTime<Utc>, Error> {
    Utc.datetime_from_str(value, DATE_FORMAT).map_err(|source| Error::Date {
        value: value.to_string(),
        source: source,
    })
}

/// Write a date with the API pattern, with millisecond precision.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Decode a record from its JSON representation. Unknown fields are ignored.
pub fn from_json<T: DeserializeOwned>(input: &str) -> Result<T, Error> {
    serde_json::from_str(input).map_err(|error| {
        debug!("Unable to decode json payload: {}.", error);

        Error::Decode(error)
    })
}

/// Encode a record into its JSON representation. Unset attributes are omitted.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, Error> {
    serde_json::to_string(value).map_err(Error::Encode)
}

/// Serde adapter for optional API dates, to be used with `#[serde(default, with = "...")]`.
///
/// Both `null` and an empty string decode to `None`.
pub mod date {
    use chrono::DateTime;
    use chrono::offset::Utc;
    use serde::de::Error as _;
    use serde::Deserialize;
    use serde::Deserializer;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(date: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.serialize_str(&super::format_date(date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(value) if !value.is_empty() => super::parse_date(&value)
                .map(Some)
                .map_err(D::Error::custom),
            _ => Ok(None),
        }
    }
}
