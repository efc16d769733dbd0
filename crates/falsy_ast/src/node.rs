//! AST node definitions for the falsy language.
//!
//! Every composite node owns its children by value. A child handed to
//! `append` is moved into its parent, so the same instance can never sit
//! under two parents and no node can reach itself.
//!
//! ```compile_fail
//! use falsy_ast::{DeclarationKind, Program, VariableDeclaration};
//!
//! let mut program = Program::new();
//! let declaration = VariableDeclaration::new(DeclarationKind::Let);
//! program.append(declaration);
//! program.append(declaration); // use of moved value
//! ```

use crate::syntax_kind::{DeclarationKind, NodeKind};
use falsy_core::text::{TextPos, TextRange};
use falsy_core::value::ScalarValue;

// ============================================================================
// Core Node Data
// ============================================================================

/// Common data shared by all AST nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    /// The kind of this node, fixed at construction.
    kind: NodeKind,
    /// Source bounds, when the builder knows them.
    range: Option<TextRange>,
}

impl NodeData {
    pub fn new(kind: NodeKind) -> Self {
        Self { kind, range: None }
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    #[inline]
    pub fn range(&self) -> Option<TextRange> {
        self.range
    }

    fn set_range(&mut self, start: TextPos, end: TextPos) {
        self.range = Some(TextRange::new(start, end));
    }
}

/// The contract every node variant fulfils.
pub trait AstNode {
    fn data(&self) -> &NodeData;

    /// Label printed in the `[...]:` header of a dump.
    fn type_name(&self) -> &'static str;

    #[inline]
    fn kind(&self) -> NodeKind {
        self.data().kind()
    }

    #[inline]
    fn range(&self) -> Option<TextRange> {
        self.data().range()
    }
}

macro_rules! impl_ast_node {
    ($($ty:ident),* $(,)?) => {
        $(
            impl AstNode for $ty {
                #[inline]
                fn data(&self) -> &NodeData {
                    &self.data
                }

                #[inline]
                fn type_name(&self) -> &'static str {
                    stringify!($ty)
                }
            }

            impl $ty {
                /// Attach source bounds to this node.
                pub fn with_range(mut self, start: TextPos, end: TextPos) -> Self {
                    self.data.set_range(start, end);
                    self
                }
            }

            impl From<$ty> for Node {
                fn from(value: $ty) -> Node {
                    Node::$ty(value)
                }
            }
        )*
    };
}

impl_ast_node!(
    Program,
    VariableDeclaration,
    VariableDeclarator,
    Identifier,
    Expression,
    Literal,
);

/// Any node, as stored in a program body.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Program(Program),
    VariableDeclaration(VariableDeclaration),
    VariableDeclarator(VariableDeclarator),
    Identifier(Identifier),
    Expression(Expression),
    Literal(Literal),
}

// ============================================================================
// Leaves
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    data: NodeData,
    name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            data: NodeData::new(NodeKind::Identifier),
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for Identifier {
    fn default() -> Self {
        Self::new(String::new())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    data: NodeData,
    value: ScalarValue,
}

impl Literal {
    pub fn new(value: impl Into<ScalarValue>) -> Self {
        Self {
            data: NodeData::new(NodeKind::Literal),
            value: value.into(),
        }
    }

    /// A literal standing in for a missing initializer.
    pub fn undefined() -> Self {
        Self::new(ScalarValue::Undefined)
    }

    pub fn value(&self) -> &ScalarValue {
        &self.value
    }
}

impl Default for Literal {
    fn default() -> Self {
        Self::undefined()
    }
}

/// A generic expression position. Carries nothing beyond its kind yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    data: NodeData,
}

impl Expression {
    pub fn new() -> Self {
        Self {
            data: NodeData::new(NodeKind::Expression),
        }
    }
}

impl Default for Expression {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Declarations
// ============================================================================

/// A single `name = init` binding.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarator {
    data: NodeData,
    id: Identifier,
    init: Literal,
}

impl VariableDeclarator {
    pub fn new(id: Identifier, init: Literal) -> Self {
        Self {
            data: NodeData::new(NodeKind::VariableDeclarator),
            id,
            init,
        }
    }

    /// A declarator without an initializer; `init` is the undefined literal.
    pub fn with_id(id: Identifier) -> Self {
        Self::new(id, Literal::undefined())
    }

    pub fn id(&self) -> &Identifier {
        &self.id
    }

    pub fn init(&self) -> &Literal {
        &self.init
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    data: NodeData,
    kind: DeclarationKind,
    declarations: Vec<VariableDeclarator>,
}

impl VariableDeclaration {
    pub fn new(kind: DeclarationKind) -> Self {
        Self {
            data: NodeData::new(NodeKind::VariableDeclaration),
            kind,
            declarations: Vec::new(),
        }
    }

    /// The keyword this declaration was introduced with.
    ///
    /// Not to be confused with [`AstNode::kind`], the node's own tag.
    pub fn declaration_kind(&self) -> DeclarationKind {
        self.kind
    }

    /// Move a declarator to the end of this declaration.
    pub fn append(&mut self, declarator: VariableDeclarator) {
        self.declarations.push(declarator);
    }

    /// Builder form of [`append`](Self::append).
    pub fn with(mut self, declarator: VariableDeclarator) -> Self {
        self.append(declarator);
        self
    }

    pub fn declarations(&self) -> &[VariableDeclarator] {
        &self.declarations
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

// ============================================================================
// Program
// ============================================================================

/// The root of a tree. Holds top-level nodes in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    data: NodeData,
    body: Vec<Node>,
}

impl Program {
    pub fn new() -> Self {
        Self {
            data: NodeData::new(NodeKind::Program),
            body: Vec::new(),
        }
    }

    /// Move a node of any kind to the end of the body.
    pub fn append(&mut self, node: impl Into<Node>) {
        self.body.push(node.into());
    }

    /// Builder form of [`append`](Self::append).
    pub fn with(mut self, node: impl Into<Node>) -> Self {
        self.append(node);
        self
    }

    pub fn body(&self) -> &[Node] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}
