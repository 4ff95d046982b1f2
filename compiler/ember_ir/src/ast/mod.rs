//! Owned AST trees.
//!
//! Three node families, each a closed enum over per-kind structs:
//!
//! - `stmt`: declarations and bindings ([`Stmt`])
//! - `expr`: everything that yields a value ([`Expr`])
//! - `pattern`: switch-case patterns ([`Pattern`])
//!
//! Parents own their children outright (`Box`/`Vec`), so a tree has no
//! sharing and no cycles, and `clone` copies a whole subtree.
//!
//! Passes consume trees through the visitor traits generated next to each
//! family (`StmtVisitor<R>`, `ExprVisitor<R>`, `PatternVisitor<R>` and
//! their `*Mut` twins). A node's `accept` performs a single dispatch; the
//! visitor decides whether and how to descend.

mod expr;
mod macros;
mod pattern;
mod stmt;

pub use expr::{
    AssignExpr, BinaryExpr, BlockExpr, BooleanExpr, CallExpr, Expr, ExprVisitor, ExprVisitorMut,
    FieldExpr, FloatExpr, ForExpr, IfExpr, IntegerExpr, LogicalExpr, StringExpr, SwitchCase,
    SwitchExpr, SymbolExpr, UnaryExpr, UnitExpr, WhileExpr,
};
pub use pattern::{Pattern, PatternVisitor, PatternVisitorMut, ValuePattern, WildcardPattern};
pub use stmt::{
    BreakStmt, ContinueStmt, EnumStmt, EnumVariant, ExpressionStmt, FunctionStmt, ImplStmt, Param,
    ReturnStmt, Stmt, StmtVisitor, StmtVisitorMut, StructField, StructStmt, TraitStmt,
    VariableStmt,
};

#[cfg(test)]
mod tests;
