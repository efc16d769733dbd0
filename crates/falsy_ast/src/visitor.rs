//! AST visitor trait for traversing the syntax tree.
//!
//! Default implementations walk into children in insertion order, so an
//! implementor only overrides the node kinds it cares about.

use crate::node::*;

pub trait AstVisitor {
    fn visit_program(&mut self, node: &Program) {
        for child in node.body() {
            self.visit_node(child);
        }
    }

    fn visit_node(&mut self, node: &Node) {
        match node {
            Node::Program(n) => self.visit_program(n),
            Node::VariableDeclaration(n) => self.visit_variable_declaration(n),
            Node::VariableDeclarator(n) => self.visit_variable_declarator(n),
            Node::Identifier(n) => self.visit_identifier(n),
            Node::Expression(n) => self.visit_expression(n),
            Node::Literal(n) => self.visit_literal(n),
        }
    }

    fn visit_variable_declaration(&mut self, node: &VariableDeclaration) {
        for decl in node.declarations() {
            self.visit_variable_declarator(decl);
        }
    }

    fn visit_variable_declarator(&mut self, node: &VariableDeclarator) {
        self.visit_identifier(node.id());
        self.visit_literal(node.init());
    }

    fn visit_identifier(&mut self, _node: &Identifier) {}

    fn visit_expression(&mut self, _node: &Expression) {}

    fn visit_literal(&mut self, _node: &Literal) {}
}

/// Counts every node reachable from the visited root, the root included.
#[derive(Debug, Default)]
pub struct NodeCounter {
    pub count: usize,
}

impl AstVisitor for NodeCounter {
    fn visit_program(&mut self, node: &Program) {
        self.count += 1;
        for child in node.body() {
            self.visit_node(child);
        }
    }

    fn visit_variable_declaration(&mut self, node: &VariableDeclaration) {
        self.count += 1;
        for decl in node.declarations() {
            self.visit_variable_declarator(decl);
        }
    }

    fn visit_variable_declarator(&mut self, node: &VariableDeclarator) {
        self.count += 1;
        self.visit_identifier(node.id());
        self.visit_literal(node.init());
    }

    fn visit_identifier(&mut self, _node: &Identifier) {
        self.count += 1;
    }

    fn visit_expression(&mut self, _node: &Expression) {
        self.count += 1;
    }

    fn visit_literal(&mut self, _node: &Literal) {
        self.count += 1;
    }
}
