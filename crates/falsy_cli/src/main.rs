//! falsy: Dump a sample falsy syntax tree.
//!
//! Usage:
//!   falsy [--depth N] [--root program|declaration] [--indent N]
//!
//! There is no parser yet; the tree is built in code, the way a parser
//! would build it, and dumped to stdout. Logs go to stderr.

use clap::{Parser as ClapParser, ValueEnum};
use falsy_ast::{
    AstVisitor, DeclarationKind, Identifier, Literal, NodeCounter, Program, VariableDeclaration,
    VariableDeclarator,
};
use falsy_dump::{DumpOptions, Dumper, IoSink};
use miette::{miette, IntoDiagnostic, Result, WrapErr};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser, Debug)]
#[command(name = "falsy", about = "Dump a sample falsy syntax tree")]
struct Cli {
    /// Depth the root node is dumped at.
    #[arg(long, default_value_t = 1)]
    depth: u32,

    /// Which node of the sample tree to dump.
    #[arg(long, value_enum, default_value_t = Root::Program)]
    root: Root,

    /// Spaces per indentation level.
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long = "log-level", default_value = "warn")]
    log_level: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Root {
    Program,
    Declaration,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let program = sample_program();
    let mut counter = NodeCounter::default();
    counter.visit_program(&program);
    tracing::info!(nodes = counter.count, "built sample tree");

    let stdout = io::stdout();
    let mut sink = IoSink::new(stdout.lock());
    let mut dumper = Dumper::with_options(&mut sink, DumpOptions::with_indent_width(cli.indent));
    let dumped = match cli.root {
        Root::Program => dumper.dump(&program, cli.depth),
        Root::Declaration => dumper.dump(first_declaration(&program)?, cli.depth),
    };
    dumped.into_diagnostic().wrap_err("failed to dump syntax tree")?;

    sink.flush().into_diagnostic()
}

fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// `let users = 12, age = 18;`, appended to the program twice.
fn sample_program() -> Program {
    let mut declaration = VariableDeclaration::new(DeclarationKind::Let);
    declaration.append(VariableDeclarator::new(Identifier::new("users"), Literal::new(12)));
    declaration.append(VariableDeclarator::new(Identifier::new("age"), Literal::new(18)));

    let mut program = Program::new();
    program.append(declaration.clone());
    program.append(declaration);
    program
}

fn first_declaration(program: &Program) -> Result<&VariableDeclaration> {
    program
        .body()
        .iter()
        .find_map(|node| node.as_variable_declaration())
        .ok_or_else(|| miette!("sample program has no variable declaration"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use falsy_dump::Render;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["falsy"]);
        assert_eq!(cli.depth, 1);
        assert_eq!(cli.root, Root::Program);
        assert_eq!(cli.indent, 2);
    }

    #[test]
    fn test_cli_root_declaration() {
        let cli = Cli::parse_from(["falsy", "--root", "declaration", "--depth", "0"]);
        assert_eq!(cli.root, Root::Declaration);
        assert_eq!(cli.depth, 0);
    }

    #[test]
    fn test_sample_program() {
        let program = sample_program();
        assert_eq!(program.len(), 2);
        let declaration = first_declaration(&program).unwrap();
        assert_eq!(declaration.len(), 2);

        let text = declaration.dump_to_string(1).unwrap();
        assert!(text.starts_with("  [VariableDeclaration]:\n  type: VariableDeclaration\n  kind: let\n"));
        assert!(text.contains("          name: users\n"));
        assert!(text.contains("          value: 18\n"));
    }
}
