//! Scalar values held by literal nodes.
//!
//! Numbers are `f64`, so only integer types that convert losslessly get a
//! `From` impl. Wider integers must be converted by the caller:
//!
//! ```compile_fail
//! let value = falsy_core::ScalarValue::from(9_007_199_254_740_993i64);
//! ```

use std::fmt;

/// The runtime value of a literal.
///
/// A value is fixed when the owning literal is built; there is no setter.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScalarValue {
    Number(f64),
    String(String),
    Boolean(bool),
    #[default]
    Undefined,
}

impl ScalarValue {
    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, ScalarValue::Undefined)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            ScalarValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ScalarValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Name of the value's type, as a script would report it.
    pub fn type_name(&self) -> &'static str {
        match self {
            ScalarValue::Number(_) => "number",
            ScalarValue::String(_) => "string",
            ScalarValue::Boolean(_) => "boolean",
            ScalarValue::Undefined => "undefined",
        }
    }
}

/// Numbers print in decimal, strings raw, booleans as `true`/`false`.
impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Number(n) => write!(f, "{}", n),
            ScalarValue::String(s) => f.write_str(s),
            ScalarValue::Boolean(b) => write!(f, "{}", b),
            ScalarValue::Undefined => f.write_str("undefined"),
        }
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        ScalarValue::Number(value)
    }
}

impl From<i32> for ScalarValue {
    fn from(value: i32) -> Self {
        ScalarValue::Number(value.into())
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Boolean(value)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::String(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::String(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_undefined() {
        let value = ScalarValue::default();
        assert!(value.is_undefined());
        assert_eq!(value.to_string(), "undefined");
        assert_eq!(value.type_name(), "undefined");
    }

    #[test]
    fn test_display() {
        assert_eq!(ScalarValue::from(12).to_string(), "12");
        assert_eq!(ScalarValue::from(0.5).to_string(), "0.5");
        assert_eq!(ScalarValue::from(-3).to_string(), "-3");
        assert_eq!(ScalarValue::from("users").to_string(), "users");
        assert_eq!(ScalarValue::from(true).to_string(), "true");
        assert_eq!(ScalarValue::from(false).to_string(), "false");
    }

    #[test]
    fn test_integer_bounds_are_exact() {
        assert_eq!(ScalarValue::from(i32::MAX).to_string(), "2147483647");
        assert_eq!(ScalarValue::from(i32::MIN).to_string(), "-2147483648");
        assert_eq!(ScalarValue::from(i32::MAX).as_number(), Some(2147483647.0));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(ScalarValue::from(18).as_number(), Some(18.0));
        assert_eq!(ScalarValue::from("x").as_str(), Some("x"));
        assert_eq!(ScalarValue::from(true).as_bool(), Some(true));
        assert_eq!(ScalarValue::from(true).as_number(), None);
        assert_eq!(ScalarValue::Undefined.as_str(), None);
    }
}
