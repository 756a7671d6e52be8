//! Greeting bindings: hello().

use napi_derive::napi;

/// Always returns "Hi, Leo Proko!".
#[napi]
pub fn hello() -> String {
    mylib_core::hello().to_string()
}
