//! Person ↔ serde_json::Value conversions.
//!
//! napi's `serde-json` feature handles serde_json::Value ↔ JsObject.

use mylib_core::Person;

use super::error_codes;

/// Serialize a Person to `{ name }` for JS consumption.
pub fn person_to_json(person: &Person) -> napi::Result<serde_json::Value> {
    person.to_json().map_err(error_codes::conversion_error)
}

/// Deserialize a Person from a value received from JS.
pub fn person_from_json(value: serde_json::Value) -> napi::Result<Person> {
    Person::from_json(value).map_err(error_codes::conversion_error)
}
