//! falsy_ast: Abstract Syntax Tree definitions for the falsy language.
//!
//! This crate defines the node kinds, the node variants produced by a
//! front end for variable declarations, and a visitor for walking trees.

pub mod error;
pub mod generated;
pub mod node;
pub mod syntax_kind;
pub mod visitor;

// Re-export key types
pub use error::AstError;
pub use falsy_core::{ScalarValue, TextRange};
pub use generated::NodeRef;
pub use node::*;
pub use syntax_kind::{declaration_keyword, kind_name, DeclarationKind, NodeKind};
pub use visitor::{AstVisitor, NodeCounter};
