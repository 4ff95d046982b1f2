//! The s-expression printer.
//!
//! `AstPrinter` is a value-returning visitor (`R = String`) over all three
//! node families. Leaves and short forms print on one line:
//!
//! ```text
//! (Stmt::Expression (+ 1 (() f x)))
//! ```
//!
//! Composite nodes (declarations, blocks, control flow) print a header,
//! then each child on its own line one level deeper, then close both
//! parentheses on the last child's line:
//!
//! ```text
//! (Expr::If (< n 2) (
//!     n
//!     (+ (() fib (- n 1)) (() fib (- n 2)))))
//! ```

mod exprs;
mod indent;
mod stmts;

pub use indent::IndentGuard;

use ember_ir::{ensure_sufficient_stack, Expr, Pattern, PatternVisitor, Stmt};
use ember_ir::{ValuePattern, WildcardPattern};

use crate::PrinterConfig;

/// Renders trees as indented s-expressions.
///
/// The printer carries only its configuration and the current depth, so
/// one instance can print any number of trees; output for a tree never
/// depends on what was printed before.
#[derive(Debug, Default)]
pub struct AstPrinter {
    config: PrinterConfig,
    depth: usize,
}

impl AstPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PrinterConfig) -> Self {
        Self { config, depth: 0 }
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Current nesting level. Zero between top-level prints.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn print_stmt(&mut self, stmt: &Stmt) -> String {
        ensure_sufficient_stack(|| stmt.accept(self))
    }

    pub fn print_expr(&mut self, expr: &Expr) -> String {
        ensure_sufficient_stack(|| expr.accept(self))
    }

    pub fn print_pattern(&mut self, pattern: &Pattern) -> String {
        pattern.accept(self)
    }

    /// Leading whitespace for a line at the current depth.
    fn pad(&self) -> String {
        " ".repeat(self.depth * self.config.indent_width)
    }

    /// Print `header (` followed by the children `render` produces, each on
    /// its own line one level deeper, then `))`.
    fn nested(
        &mut self,
        header: &str,
        render: impl FnOnce(&mut AstPrinter) -> Vec<String>,
    ) -> String {
        let mut out = String::with_capacity(header.len() + 4);
        out.push_str(header);
        out.push_str(" (");

        let mut inner = self.indented();
        let pad = inner.pad();
        for child in render(&mut *inner) {
            out.push('\n');
            out.push_str(&pad);
            out.push_str(&child);
        }
        drop(inner);

        out.push_str("))");
        out
    }
}

impl PatternVisitor<String> for AstPrinter {
    fn visit_value_pattern(&mut self, pattern: &ValuePattern) -> String {
        self.print_expr(&pattern.value)
    }

    fn visit_wildcard_pattern(&mut self, _pattern: &WildcardPattern) -> String {
        "_".to_owned()
    }
}
