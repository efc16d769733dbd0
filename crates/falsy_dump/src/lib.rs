//! falsy_dump: Indented text dumps of falsy AST nodes.
//!
//! The dumper walks a node top-down and writes one line per field to a
//! [`LineSink`]. A line written while visiting depth `d` starts with the
//! indent string repeated `d` times. For a node at depth `d`:
//!
//! ```text
//! [Identifier]:            d
//!   type: Identifier       d + 1
//!   name: <name>           d + 1
//! [Literal]:               d
//!   type: Literal          d + 1
//!   value: <value>         d + 1
//! [VariableDeclarator]:    d
//!   type: ...              d + 1
//!   id:                    d + 1, Identifier at d + 2
//!   init:                  d + 1, Literal at d + 2
//! [VariableDeclaration]:   d
//! type: ...                d
//! kind: <let|const|var>    d
//! declarations:            d, each declarator at d + 1
//! [Program]:               d
//! type: Program            d
//!   body:                  d + 1, each node at d + 2
//! ```
//!
//! Child depths saturate at `u32::MAX` instead of overflowing.
//!
//! The first failed write stops the walk; lines already written stay.

pub mod error;
pub mod sink;

pub use error::{DumpError, SinkError};
pub use sink::{FmtSink, IoSink, LineSink};

use falsy_ast::node::*;
use falsy_ast::syntax_kind::NodeKind;

/// Options for the dumper.
#[derive(Debug, Clone)]
pub struct DumpOptions {
    /// Indentation for one depth level.
    pub indent_str: String,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            indent_str: "  ".to_string(),
        }
    }
}

impl DumpOptions {
    /// Options indenting each level by `width` spaces.
    pub fn with_indent_width(width: usize) -> Self {
        Self {
            indent_str: " ".repeat(width),
        }
    }
}

/// Writes node dumps to a borrowed sink.
pub struct Dumper<'s, S: LineSink + ?Sized> {
    sink: &'s mut S,
    options: DumpOptions,
    buf: String,
    lines: usize,
}

impl<'s, S: LineSink + ?Sized> Dumper<'s, S> {
    pub fn new(sink: &'s mut S) -> Self {
        Self::with_options(sink, DumpOptions::default())
    }

    pub fn with_options(sink: &'s mut S, options: DumpOptions) -> Self {
        Self {
            sink,
            options,
            buf: String::with_capacity(64),
            lines: 0,
        }
    }

    /// Lines written so far.
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    /// Dump `node` and its subtree, starting at `depth`.
    pub fn dump<N: Render + ?Sized>(&mut self, node: &N, depth: u32) -> Result<(), DumpError> {
        tracing::debug!(kind = %node.kind(), depth, "dump started");
        let start = self.lines;
        node.render_with(self, depth)?;
        tracing::debug!(kind = %node.kind(), lines = self.lines - start, "dump finished");
        Ok(())
    }

    // ========================================================================
    // Per-kind rendering
    // ========================================================================

    pub fn dump_node(&mut self, node: &Node, depth: u32) -> Result<(), DumpError> {
        match node {
            Node::Program(n) => self.dump_program(n, depth),
            Node::VariableDeclaration(n) => self.dump_variable_declaration(n, depth),
            Node::VariableDeclarator(n) => self.dump_variable_declarator(n, depth),
            Node::Identifier(n) => self.dump_identifier(n, depth),
            Node::Expression(n) => self.dump_expression(n, depth),
            Node::Literal(n) => self.dump_literal(n, depth),
        }
    }

    pub fn dump_program(&mut self, node: &Program, depth: u32) -> Result<(), DumpError> {
        self.write_header(node, depth)?;
        self.write_type(NodeKind::Program, depth)?;
        self.write_line(nested(depth, 1), &["body:"])?;
        for child in node.body() {
            self.dump_node(child, nested(depth, 2))?;
        }
        Ok(())
    }

    pub fn dump_variable_declaration(
        &mut self,
        node: &VariableDeclaration,
        depth: u32,
    ) -> Result<(), DumpError> {
        self.write_header(node, depth)?;
        self.write_type(node.kind(), depth)?;
        self.write_line(depth, &["kind: ", node.declaration_kind().keyword()])?;
        self.write_line(depth, &["declarations:"])?;
        for decl in node.declarations() {
            self.dump_variable_declarator(decl, nested(depth, 1))?;
        }
        Ok(())
    }

    pub fn dump_variable_declarator(
        &mut self,
        node: &VariableDeclarator,
        depth: u32,
    ) -> Result<(), DumpError> {
        self.write_header(node, depth)?;
        self.write_type(node.kind(), nested(depth, 1))?;
        self.write_line(nested(depth, 1), &["id:"])?;
        self.dump_identifier(node.id(), nested(depth, 2))?;
        self.write_line(nested(depth, 1), &["init:"])?;
        self.dump_literal(node.init(), nested(depth, 2))
    }

    pub fn dump_identifier(&mut self, node: &Identifier, depth: u32) -> Result<(), DumpError> {
        self.write_header(node, depth)?;
        self.write_type(node.kind(), nested(depth, 1))?;
        self.write_line(nested(depth, 1), &["name: ", node.name()])
    }

    pub fn dump_literal(&mut self, node: &Literal, depth: u32) -> Result<(), DumpError> {
        self.write_header(node, depth)?;
        self.write_type(node.kind(), nested(depth, 1))?;
        let value = node.value().to_string();
        self.write_line(nested(depth, 1), &["value: ", &value])
    }

    pub fn dump_expression(&mut self, node: &Expression, depth: u32) -> Result<(), DumpError> {
        self.write_header(node, depth)?;
        self.write_type(node.kind(), nested(depth, 1))
    }

    // ========================================================================
    // Line output
    // ========================================================================

    fn write_header(&mut self, node: &dyn AstNode, depth: u32) -> Result<(), DumpError> {
        self.write_line(depth, &["[", node.type_name(), "]:"])
    }

    fn write_type(&mut self, kind: NodeKind, depth: u32) -> Result<(), DumpError> {
        self.write_line(depth, &["type: ", kind.name()])
    }

    fn write_line(&mut self, depth: u32, parts: &[&str]) -> Result<(), DumpError> {
        self.buf.clear();
        self.buf.push_str(&self.options.indent_str.repeat(depth as usize));
        for part in parts {
            self.buf.push_str(part);
        }
        match self.sink.write_line(&self.buf) {
            Ok(()) => {
                self.lines += 1;
                Ok(())
            }
            Err(source) => {
                tracing::warn!(line = self.lines, error = %source, "sink rejected dump line");
                Err(DumpError::Write {
                    line: self.lines,
                    source,
                })
            }
        }
    }
}

#[inline]
fn nested(depth: u32, levels: u32) -> u32 {
    depth.saturating_add(levels)
}

/// A node that can be dumped as indented text.
pub trait Render: AstNode {
    /// Render through an existing dumper, at `depth`.
    fn render_with<S: LineSink + ?Sized>(
        &self,
        dumper: &mut Dumper<'_, S>,
        depth: u32,
    ) -> Result<(), DumpError>;

    /// Render this node and its subtree into `sink`, starting at `depth`.
    fn render<S: LineSink + ?Sized>(&self, sink: &mut S, depth: u32) -> Result<(), DumpError> {
        Dumper::new(sink).dump(self, depth)
    }

    /// Render to stdout at depth 0.
    fn dump(&self) -> Result<(), DumpError> {
        let stdout = std::io::stdout();
        let mut sink = IoSink::new(stdout.lock());
        self.render(&mut sink, 0)?;
        sink.flush().map_err(DumpError::Flush)
    }

    /// Render into a newline-terminated string, starting at `depth`.
    fn dump_to_string(&self, depth: u32) -> Result<String, DumpError> {
        let mut out = String::new();
        self.render(&mut out, depth)?;
        Ok(out)
    }
}

macro_rules! impl_render {
    ($($ty:ty => $method:ident),* $(,)?) => {
        $(
            impl Render for $ty {
                fn render_with<S: LineSink + ?Sized>(
                    &self,
                    dumper: &mut Dumper<'_, S>,
                    depth: u32,
                ) -> Result<(), DumpError> {
                    dumper.$method(self, depth)
                }
            }
        )*
    };
}

impl_render!(
    Node => dump_node,
    Program => dump_program,
    VariableDeclaration => dump_variable_declaration,
    VariableDeclarator => dump_variable_declarator,
    Identifier => dump_identifier,
    Expression => dump_expression,
    Literal => dump_literal,
);

#[cfg(test)]
mod tests {
    use super::*;
    use falsy_ast::syntax_kind::DeclarationKind;

    fn lines(node: &impl Render, depth: u32) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        node.render(&mut out, depth).unwrap();
        out
    }

    #[test]
    fn test_identifier() {
        assert_eq!(
            lines(&Identifier::new("users"), 0),
            vec!["[Identifier]:", "  type: Identifier", "  name: users"]
        );
    }

    #[test]
    fn test_literal_renders_actual_value() {
        assert_eq!(
            lines(&Literal::new(12), 1),
            vec!["  [Literal]:", "    type: Literal", "    value: 12"]
        );
        assert_eq!(lines(&Literal::new("hi"), 0)[2], "  value: hi");
        assert_eq!(lines(&Literal::new(false), 0)[2], "  value: false");
        assert_eq!(lines(&Literal::default(), 0)[2], "  value: undefined");
    }

    #[test]
    fn test_expression() {
        assert_eq!(
            lines(&Expression::new(), 2),
            vec!["    [Expression]:", "      type: Expression"]
        );
    }

    #[test]
    fn test_declarator_always_has_id_and_init() {
        let out = lines(&VariableDeclarator::with_id(Identifier::new("x")), 0);
        assert_eq!(
            out,
            vec![
                "[VariableDeclarator]:",
                "  type: VariableDeclarator",
                "  id:",
                "    [Identifier]:",
                "      type: Identifier",
                "      name: x",
                "  init:",
                "    [Literal]:",
                "      type: Literal",
                "      value: undefined",
            ]
        );
    }

    #[test]
    fn test_empty_declaration() {
        assert_eq!(
            lines(&VariableDeclaration::new(DeclarationKind::Const), 1),
            vec![
                "  [VariableDeclaration]:",
                "  type: VariableDeclaration",
                "  kind: const",
                "  declarations:",
            ]
        );
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(
            lines(&Program::new(), 0),
            vec!["[Program]:", "type: Program", "  body:"]
        );
    }

    #[test]
    fn test_custom_indent() {
        let mut out: Vec<String> = Vec::new();
        let mut dumper = Dumper::with_options(&mut out, DumpOptions::with_indent_width(4));
        dumper.dump(&Identifier::new("x"), 1).unwrap();
        assert_eq!(dumper.lines_written(), 3);
        assert_eq!(out, vec!["    [Identifier]:", "        type: Identifier", "        name: x"]);
    }

    #[test]
    fn test_dump_to_string() {
        let text = Identifier::new("age").dump_to_string(0).unwrap();
        assert_eq!(text, "[Identifier]:\n  type: Identifier\n  name: age\n");
    }

    #[test]
    fn test_nested_depth_saturates() {
        assert_eq!(nested(3, 2), 5);
        assert_eq!(nested(u32::MAX - 1, 2), u32::MAX);
        assert_eq!(nested(u32::MAX, 1), u32::MAX);
    }

    #[test]
    fn test_dump_at_max_depth() {
        let mut out: Vec<String> = Vec::new();
        let options = DumpOptions {
            indent_str: String::new(),
        };
        let mut dumper = Dumper::with_options(&mut out, options);
        dumper
            .dump(&VariableDeclarator::with_id(Identifier::new("x")), u32::MAX)
            .unwrap();
        assert_eq!(dumper.lines_written(), 10);
        assert_eq!(out[0], "[VariableDeclarator]:");
        assert_eq!(out[5], "name: x");
    }
}
