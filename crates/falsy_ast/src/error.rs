//! Errors raised at the raw-value boundary of the AST.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AstError {
    /// A raw discriminant or keyword outside a closed enumeration.
    #[error("invalid {enum_name} value: {value}")]
    InvalidEnumValue {
        enum_name: &'static str,
        value: String,
    },
}

impl AstError {
    pub(crate) fn invalid(enum_name: &'static str, value: impl ToString) -> Self {
        AstError::InvalidEnumValue {
            enum_name,
            value: value.to_string(),
        }
    }
}
