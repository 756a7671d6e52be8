//! Tests for the `Person` payload and `hello`.

use mylib_core::errors::MylibErrorCode;
use mylib_core::{hello, Person};
use proptest::prelude::*;
use serde_json::json;

#[test]
fn hello_returns_fixed_greeting_every_time() {
    for _ in 0..100 {
        assert_eq!(hello(), "Hi, Leo Proko!");
    }
}

#[test]
fn default_person_has_empty_name() {
    let person = Person::default();
    assert_eq!(person.get_name(), "");
}

#[test]
fn ada_becomes_grace() {
    let mut person = Person::new("Ada");
    assert_eq!(person.get_name(), "Ada");
    person.set_name("Grace");
    assert_eq!(person.get_name(), "Grace");
}

#[test]
fn set_name_accepts_empty_string() {
    let mut person = Person::new("Ada");
    person.set_name("");
    assert_eq!(person.get_name(), "");
}

#[test]
fn into_name_returns_owned_name() {
    let person = Person::from("Linus");
    assert_eq!(person.into_name(), "Linus");
}

#[test]
fn display_quotes_name() {
    assert_eq!(Person::new("Ada").to_string(), "Person(\"Ada\")");
}

// --- JSON shape ---

#[test]
fn to_json_has_name_key() {
    let value = Person::new("Ada").to_json().unwrap();
    assert_eq!(value, json!({ "name": "Ada" }));
}

#[test]
fn from_json_reads_name() {
    let person = Person::from_json(json!({ "name": "Grace" })).unwrap();
    assert_eq!(person.get_name(), "Grace");
}

#[test]
fn from_json_missing_name_is_empty() {
    let person = Person::from_json(json!({})).unwrap();
    assert_eq!(person, Person::default());
}

#[test]
fn from_json_ignores_unknown_keys() {
    let person = Person::from_json(json!({ "name": "Ada", "age": 36 })).unwrap();
    assert_eq!(person.get_name(), "Ada");
}

#[test]
fn from_json_rejects_non_string_name() {
    let err = Person::from_json(json!({ "name": 5 })).unwrap_err();
    assert_eq!(err.error_code(), "CONVERSION_ERROR");
    assert!(err.to_string().contains("Person"));
}

#[test]
fn from_json_rejects_non_object() {
    assert!(Person::from_json(json!("Ada")).is_err());
}

// --- Properties ---

proptest! {
    #[test]
    fn constructed_name_is_returned(name in ".*") {
        let person = Person::new(name.clone());
        prop_assert_eq!(person.get_name(), name.as_str());
    }

    #[test]
    fn last_write_wins(first in ".*", second in ".*") {
        let mut person = Person::new(first);
        person.set_name(second.clone());
        prop_assert_eq!(person.get_name(), second.as_str());
    }

    #[test]
    fn get_name_is_idempotent(name in ".*") {
        let person = Person::new(name);
        let a = person.get_name().to_string();
        let b = person.get_name().to_string();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn json_preserves_name(name in ".*") {
        let person = Person::new(name);
        let back = Person::from_json(person.to_json().unwrap()).unwrap();
        prop_assert_eq!(back, person);
    }
}
