//! `dd-MM-yyyy` wire format for operation dates.
//!
//! Use with `#[serde(with = "crm_app::domain::sales::date_format")]`.

use jiff::civil::Date;
use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

/// strftime pattern for `dd-MM-yyyy`.
pub const OPERATION_DATE_FORMAT: &str = "%d-%m-%Y";

/// Render a date as `dd-MM-yyyy`.
#[must_use]
pub fn format(date: Date) -> String {
    date.strftime(OPERATION_DATE_FORMAT).to_string()
}

/// Parse a `dd-MM-yyyy` date.
///
/// # Errors
///
/// Returns an error when `value` is not a valid calendar date in that format.
pub fn parse(value: &str) -> Result<Date, jiff::Error> {
    Date::strptime(OPERATION_DATE_FORMAT, value)
}

/// Serde serializer.
///
/// # Errors
///
/// Propagates serializer errors.
pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(*date))
}

/// Serde deserializer.
///
/// # Errors
///
/// Fails when the value is not a `dd-MM-yyyy` string.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
    let value = String::deserialize(deserializer)?;

    parse(&value).map_err(D::Error::custom)
}
