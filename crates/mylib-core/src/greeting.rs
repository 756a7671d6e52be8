//! The free function exposed next to `Person`.

use crate::constants::GREETING;

/// Returns the fixed greeting. Pure and total.
pub fn hello() -> &'static str {
    tracing::trace!("hello called");
    GREETING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_is_stable() {
        assert_eq!(hello(), "Hi, Leo Proko!");
        assert_eq!(hello(), hello());
    }
}
