//! Dispatch helpers for the `Node` sum type.
//!
//! Each helper is an exhaustive match, so adding a variant to `Node` fails
//! to compile until every helper handles it.

use crate::node::*;

impl AstNode for Node {
    fn data(&self) -> &NodeData {
        match self {
            Node::Program(n) => n.data(),
            Node::VariableDeclaration(n) => n.data(),
            Node::VariableDeclarator(n) => n.data(),
            Node::Identifier(n) => n.data(),
            Node::Expression(n) => n.data(),
            Node::Literal(n) => n.data(),
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Node::Program(n) => n.type_name(),
            Node::VariableDeclaration(n) => n.type_name(),
            Node::VariableDeclarator(n) => n.type_name(),
            Node::Identifier(n) => n.type_name(),
            Node::Expression(n) => n.type_name(),
            Node::Literal(n) => n.type_name(),
        }
    }
}

/// A borrowed child of some node.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Program(&'a Program),
    VariableDeclaration(&'a VariableDeclaration),
    VariableDeclarator(&'a VariableDeclarator),
    Identifier(&'a Identifier),
    Expression(&'a Expression),
    Literal(&'a Literal),
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    fn from(node: &'a Node) -> Self {
        match node {
            Node::Program(n) => NodeRef::Program(n),
            Node::VariableDeclaration(n) => NodeRef::VariableDeclaration(n),
            Node::VariableDeclarator(n) => NodeRef::VariableDeclarator(n),
            Node::Identifier(n) => NodeRef::Identifier(n),
            Node::Expression(n) => NodeRef::Expression(n),
            Node::Literal(n) => NodeRef::Literal(n),
        }
    }
}

impl<'a> NodeRef<'a> {
    /// Call `f` on each direct child, in insertion order.
    pub fn for_each_child(self, mut f: impl FnMut(NodeRef<'a>)) {
        match self {
            NodeRef::Program(n) => n.body().iter().for_each(|child| f(child.into())),
            NodeRef::VariableDeclaration(n) => n
                .declarations()
                .iter()
                .for_each(|child| f(NodeRef::VariableDeclarator(child))),
            NodeRef::VariableDeclarator(n) => {
                f(NodeRef::Identifier(n.id()));
                f(NodeRef::Literal(n.init()));
            }
            NodeRef::Identifier(_) | NodeRef::Expression(_) | NodeRef::Literal(_) => {}
        }
    }
}

impl Node {
    /// Call `f` on each direct child, in insertion order.
    pub fn for_each_child<'a>(&'a self, f: impl FnMut(NodeRef<'a>)) {
        NodeRef::from(self).for_each_child(f)
    }

    pub fn is_declaration(&self) -> bool {
        matches!(self, Node::VariableDeclaration(_))
    }

    pub fn as_variable_declaration(&self) -> Option<&VariableDeclaration> {
        match self {
            Node::VariableDeclaration(n) => Some(n),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax_kind::{DeclarationKind, NodeKind};

    #[test]
    fn test_node_dispatch() {
        let node = Node::from(Literal::new(true).with_range(0, 4));
        assert_eq!(node.kind(), NodeKind::Literal);
        assert_eq!(node.type_name(), "Literal");
        assert_eq!(node.range().map(|r| r.len()), Some(4));
        assert!(!node.is_declaration());
    }

    #[test]
    fn test_for_each_child() {
        let node = Node::from(VariableDeclarator::new(Identifier::new("age"), Literal::new(18)));
        let mut fields = Vec::new();
        node.for_each_child(|child| match child {
            NodeRef::Identifier(id) => fields.push(id.name().to_string()),
            NodeRef::Literal(lit) => fields.push(lit.value().to_string()),
            other => panic!("unexpected declarator child: {:?}", other),
        });
        assert_eq!(fields, vec!["age", "18"]);

        let leaf = Node::from(Identifier::new("x"));
        let mut count = 0;
        leaf.for_each_child(|_| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_as_variable_declaration() {
        let node = Node::from(VariableDeclaration::new(DeclarationKind::Var));
        assert!(node.is_declaration());
        assert_eq!(
            node.as_variable_declaration().map(|d| d.declaration_kind()),
            Some(DeclarationKind::Var)
        );
    }
}
