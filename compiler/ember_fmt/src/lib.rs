//! Ember tree dumps
//!
//! Renders statements, expressions and patterns as indented
//! s-expressions. The output is a pure function of tree shape and token
//! lexemes, which makes it the format of choice for golden tests and for
//! eyeballing what the parser built.
//!
//! ```text
//! (Stmt::Function add ((a int) (b int)) int (
//!     (+ a b)))
//! ```
//!
//! # Modules
//!
//! - [`config`]: indentation settings
//! - [`printer`]: the printing visitor and its indentation guard

pub mod config;
pub mod printer;

use ember_ir::{Expr, Pattern, Stmt};

pub use config::{PrinterConfig, INDENT_WIDTH};
pub use printer::{AstPrinter, IndentGuard};

/// Dump a statement with the default configuration.
#[tracing::instrument(level = "trace", skip_all, fields(kind = stmt.kind_name()))]
pub fn dump_stmt(stmt: &Stmt) -> String {
    AstPrinter::new().print_stmt(stmt)
}

/// Dump an expression with the default configuration.
#[tracing::instrument(level = "trace", skip_all, fields(kind = expr.kind_name()))]
pub fn dump_expr(expr: &Expr) -> String {
    AstPrinter::new().print_expr(expr)
}

/// Dump a pattern with the default configuration.
#[tracing::instrument(level = "trace", skip_all, fields(kind = pattern.kind_name()))]
pub fn dump_pattern(pattern: &Pattern) -> String {
    AstPrinter::new().print_pattern(pattern)
}

/// Dump a whole program, one top-level statement per line.
#[tracing::instrument(level = "trace", skip_all, fields(stmts = stmts.len()))]
pub fn dump_program(stmts: &[Stmt]) -> String {
    let mut printer = AstPrinter::new();
    let mut out = String::new();
    for stmt in stmts {
        out.push_str(&printer.print_stmt(stmt));
        out.push('\n');
    }
    tracing::trace!(bytes = out.len(), "program dumped");
    out
}
