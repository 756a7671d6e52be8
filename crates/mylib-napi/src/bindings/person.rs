//! The `Person` class exported to JavaScript.
//!
//! JS has no constructor overloading, so `new Person()` and
//! `new Person(name)` share one constructor with an optional argument.

use mylib_core::Person;
use napi_derive::napi;

use crate::conversions::person_types;

/// JS-facing wrapper owning a core `Person`.
#[napi(js_name = "Person")]
pub struct JsPerson {
    inner: Person,
}

#[napi]
impl JsPerson {
    /// `new Person()` gives the empty name; `new Person(name)` stores `name`.
    #[napi(constructor)]
    pub fn new(name: Option<String>) -> Self {
        let inner = name.map(Person::new).unwrap_or_default();
        Self { inner }
    }

    #[napi]
    pub fn set_name(&mut self, new_name: String) {
        self.inner.set_name(new_name);
    }

    #[napi]
    pub fn get_name(&self) -> String {
        self.inner.get_name().to_string()
    }

    /// Called by `JSON.stringify`.
    #[napi(js_name = "toJSON")]
    pub fn to_json(&self) -> napi::Result<serde_json::Value> {
        person_types::person_to_json(&self.inner)
    }

    /// `Person.fromJson({ name })`.
    #[napi(factory)]
    pub fn from_json(value: serde_json::Value) -> napi::Result<Self> {
        let inner = person_types::person_from_json(value)?;
        Ok(Self { inner })
    }
}

impl JsPerson {
    /// Borrow the wrapped core value.
    pub fn as_person(&self) -> &Person {
        &self.inner
    }
}

impl From<Person> for JsPerson {
    fn from(inner: Person) -> Self {
        Self { inner }
    }
}
