//! Deserializers for the API's stringly-typed fields.

use std::fmt::Debug;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Str(String),
    Num(serde_json::Number),
    Bool(bool),
}

impl Raw {
    fn into_string(self) -> String {
        match self {
            Raw::Str(s) => s,
            Raw::Num(n) => n.to_string(),
            Raw::Bool(b) => (b as u8).to_string(),
        }
    }
}

fn parse<T, E>(s: &str) -> Result<T, E>
where
    T: FromStr,
    T::Err: Debug,
    E: serde::de::Error,
{
    s.trim()
        .parse()
        .map_err(|e| E::custom(format!("invalid value {:?}: {:?}", s, e)))
}

/// A value sent either as a string or as a bare JSON number.
pub(crate) fn from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Debug,
{
    let raw = Raw::deserialize(deserializer)?.into_string();
    parse(&raw)
}

/// Like [`from_str`], with `null` and `""` mapping to `None`.
pub(crate) fn option_from_str<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Debug,
{
    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => {
            let raw = raw.into_string();
            if raw.is_empty() {
                Ok(None)
            } else {
                parse(&raw).map(Some)
            }
        }
    }
}

/// `"0"`/`"1"` flags.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Raw::deserialize(deserializer)?.into_string();
    match raw.as_str() {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(D::Error::custom(format!("invalid flag {:?}", other))),
    }
}

/// `YYYY-MM-DD hh:mm:ss` timestamps, always UTC.
pub(crate) fn datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, DATE_FORMAT).map_err(D::Error::custom)
}

pub(crate) fn option_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.is_empty() => NaiveDateTime::parse_from_str(&raw, DATE_FORMAT)
            .map(Some)
            .map_err(D::Error::custom),
        _ => Ok(None),
    }
}
