//! falsy_core: Core types shared by the falsy front end.
//!
//! Provides source ranges carried by AST nodes and the scalar values held
//! by literals.

pub mod text;
pub mod value;

// Re-export commonly used types
pub use text::{TextPos, TextRange};
pub use value::ScalarValue;
