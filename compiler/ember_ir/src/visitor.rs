//! Side-effect AST walker.
//!
//! The per-family `*Visitor<R>` traits in [`ast`](crate::ast) are for
//! passes that compute a value per node and decide their own descent. This
//! module covers the other common case: passes that only accumulate state
//! (collect names, count nodes, check invariants) and want every child
//! visited without spelling out each kind.
//!
//! Default `visit_*` methods call the matching `walk_*` function. Override
//! a `visit_*` method to act at a node; call the `walk_*` function from the
//! override to keep descending, or skip it to prune the subtree.
//!
//! # Example
//!
//! ```text
//! struct CountCalls {
//!     count: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for CountCalls {
//!     fn visit_expr(&mut self, expr: &'ast Expr) {
//!         if let Expr::Call(_) = expr {
//!             self.count += 1;
//!         }
//!         walk_expr(self, expr);
//!     }
//! }
//! ```

use crate::ast::{BlockExpr, Expr, FunctionStmt, Pattern, Stmt};
use crate::{ensure_sufficient_stack, Typename};

/// Tree walker with overridable hooks.
///
/// The tree is only borrowed; the visitor may mutate its own state.
pub trait Visitor<'ast> {
    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &'ast Expr) {
        walk_expr(self, expr);
    }

    fn visit_pattern(&mut self, pattern: &'ast Pattern) {
        walk_pattern(self, pattern);
    }

    /// Visit a block body (function bodies, loop bodies, block expressions).
    fn visit_block(&mut self, block: &'ast BlockExpr) {
        walk_block(self, block);
    }

    /// Visit a function declaration, free-standing or a method.
    fn visit_function(&mut self, function: &'ast FunctionStmt) {
        walk_function(self, function);
    }

    /// Visit a typename annotation and, by default, its component typenames.
    fn visit_typename(&mut self, typename: &'ast Typename) {
        walk_typename(self, typename);
    }
}

// Walk Functions
//
// Children are visited depth-first, left-to-right in source order.
// Annotations come before the code they annotate: a parameter's typename
// before the body, a binding's typename before its initializer.

/// Walk every statement of a program in order.
pub fn walk_program<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, stmts: &'ast [Stmt]) {
    for stmt in stmts {
        visitor.visit_stmt(stmt);
    }
}

/// Walk a statement's children.
pub fn walk_stmt<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, stmt: &'ast Stmt) {
    match stmt {
        Stmt::Break(_) | Stmt::Continue(_) => {}
        Stmt::Enum(stmt) => {
            for variant in &stmt.variants {
                visitor.visit_typename(&variant.typename);
            }
        }
        Stmt::Expression(stmt) => visitor.visit_expr(&stmt.expr),
        Stmt::Function(function) => visitor.visit_function(function),
        Stmt::Impl(stmt) => {
            if let Some(trait_typename) = &stmt.trait_typename {
                visitor.visit_typename(trait_typename);
            }
            visitor.visit_typename(&stmt.typename);
            for method in &stmt.methods {
                visitor.visit_function(method);
            }
        }
        Stmt::Return(stmt) => visitor.visit_expr(&stmt.value),
        Stmt::Struct(stmt) => {
            for field in &stmt.fields {
                visitor.visit_typename(&field.typename);
            }
        }
        Stmt::Trait(stmt) => {
            for method in &stmt.methods {
                visitor.visit_function(method);
            }
        }
        Stmt::Variable(stmt) => {
            if let Some(typename) = &stmt.typename {
                visitor.visit_typename(typename);
            }
            visitor.visit_expr(&stmt.initializer);
        }
    }
}

/// Walk a function: parameter typenames, return typename, then the body.
pub fn walk_function<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    function: &'ast FunctionStmt,
) {
    for param in &function.params {
        visitor.visit_typename(&param.typename);
    }
    visitor.visit_typename(&function.return_typename);
    visitor.visit_block(&function.body);
}

/// Walk a block's statements, then its trailing expression.
pub fn walk_block<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, block: &'ast BlockExpr) {
    for stmt in &block.stmts {
        visitor.visit_stmt(stmt);
    }
    visitor.visit_expr(&block.expr);
}

/// Walk an expression's children.
pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, expr: &'ast Expr) {
    ensure_sufficient_stack(|| match expr {
        // Leaves
        Expr::Boolean(_)
        | Expr::Float(_)
        | Expr::Integer(_)
        | Expr::String(_)
        | Expr::Symbol(_)
        | Expr::Unit(_) => {}

        Expr::Unary(expr) => visitor.visit_expr(&expr.operand),
        Expr::Field(expr) => visitor.visit_expr(&expr.object),

        Expr::Assign(expr) => {
            visitor.visit_expr(&expr.target);
            visitor.visit_expr(&expr.value);
        }
        Expr::Binary(expr) => {
            visitor.visit_expr(&expr.left);
            visitor.visit_expr(&expr.right);
        }
        Expr::Logical(expr) => {
            visitor.visit_expr(&expr.left);
            visitor.visit_expr(&expr.right);
        }
        Expr::Call(expr) => {
            visitor.visit_expr(&expr.callee);
            for argument in &expr.arguments {
                visitor.visit_expr(argument);
            }
        }

        Expr::Block(block) => visitor.visit_block(block),
        Expr::If(expr) => {
            visitor.visit_expr(&expr.condition);
            visitor.visit_expr(&expr.then_body);
            visitor.visit_expr(&expr.else_body);
        }
        Expr::For(expr) => {
            visitor.visit_expr(&expr.object);
            visitor.visit_block(&expr.body);
        }
        Expr::While(expr) => {
            visitor.visit_expr(&expr.condition);
            visitor.visit_block(&expr.body);
        }
        Expr::Switch(expr) => {
            visitor.visit_expr(&expr.value);
            for case in &expr.cases {
                visitor.visit_pattern(&case.pattern);
                visitor.visit_expr(&case.predicate);
                visitor.visit_expr(&case.body);
            }
        }
    });
}

/// Walk a pattern's children.
pub fn walk_pattern<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, pattern: &'ast Pattern) {
    match pattern {
        Pattern::Value(pattern) => visitor.visit_expr(&pattern.value),
        Pattern::Wildcard(_) => {}
    }
}

/// Walk a typename's component typenames in [`Typename::children`] order.
pub fn walk_typename<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, typename: &'ast Typename) {
    ensure_sufficient_stack(|| {
        for child in typename.children() {
            visitor.visit_typename(child);
        }
    });
}
