//! Ember IR - front-end trees
//!
//! This crate contains the data structures the Ember parser produces and
//! every later pass consumes:
//! - Spans and tokens for source locations
//! - Typenames (parsed type expressions with canonical names)
//! - Statement, expression and pattern ASTs with visitor dispatch
//! - A side-effect walker and a typename collector built on it
//!
//! # Design Philosophy
//!
//! - **Own Everything**: trees own their children; `clone` is a deep copy
//! - **Closed Families**: each node family is one enum generated from a
//!   schema, so adding a kind breaks every pass that forgot it
//! - **Open Passes**: new analyses implement a visitor trait; node types
//!   never change
//!
//! Typenames compare by canonical name, so equal names mean equal types.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod collect;
mod span;
mod stack;
mod token;
mod traits;
mod typename;
pub mod visitor;

pub use ast::{
    AssignExpr, BinaryExpr, BlockExpr, BooleanExpr, BreakStmt, CallExpr, ContinueStmt, EnumStmt,
    EnumVariant, Expr, ExprVisitor, ExprVisitorMut, ExpressionStmt, FieldExpr, FloatExpr, ForExpr,
    FunctionStmt, IfExpr, ImplStmt, IntegerExpr, LogicalExpr, Param, Pattern, PatternVisitor,
    PatternVisitorMut, ReturnStmt, Stmt, StmtVisitor, StmtVisitorMut, StringExpr, StructField,
    StructStmt, SwitchCase, SwitchExpr, SymbolExpr, TraitStmt, UnaryExpr, UnitExpr, ValuePattern,
    VariableStmt, WhileExpr, WildcardPattern,
};
pub use collect::TypenameCollector;
pub use span::{Span, SpanError};
pub use stack::ensure_sufficient_stack;
pub use token::Token;
pub use traits::Spanned;
pub use typename::{Typename, TypenameKind};
pub use visitor::Visitor;
