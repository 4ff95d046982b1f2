//! Statement nodes.
//!
//! Declarations (functions, structs, enums, traits, impls) and the few
//! things that really are statements (`let`, `return`, `break`). Anything
//! that yields a value lives in [`Expr`](super::Expr).

use super::expr::{BlockExpr, Expr};
use super::macros::ast_family;
use crate::{Span, Spanned, Token, Typename};

ast_family! {
    /// A statement.
    family Stmt;
    /// Read-only pass over statements, one method per statement kind.
    visitor StmtVisitor;
    /// Rewriting pass over statements.
    visitor_mut StmtVisitorMut;
    {
        Break(BreakStmt) => visit_break_stmt;
        Continue(ContinueStmt) => visit_continue_stmt;
        Enum(EnumStmt) => visit_enum_stmt;
        /// An expression evaluated for its effect: `print(x);`
        Expression(ExpressionStmt) => visit_expression_stmt;
        Function(FunctionStmt) => visit_function_stmt;
        Impl(ImplStmt) => visit_impl_stmt;
        Return(ReturnStmt) => visit_return_stmt;
        Struct(StructStmt) => visit_struct_stmt;
        Trait(TraitStmt) => visit_trait_stmt;
        /// `let` / `const` binding.
        Variable(VariableStmt) => visit_variable_stmt;
    }
}

#[derive(Clone, Debug)]
pub struct BreakStmt {
    pub keyword: Token,
}

#[derive(Clone, Debug)]
pub struct ContinueStmt {
    pub keyword: Token,
}

#[derive(Clone, Debug)]
pub struct EnumStmt {
    pub name: Token,
    pub variants: Vec<EnumVariant>,
}

/// `Name(Typename)` inside an enum declaration. Unit variants carry `()`.
#[derive(Clone, Debug)]
pub struct EnumVariant {
    pub name: Token,
    pub typename: Typename,
}

#[derive(Clone, Debug)]
pub struct ExpressionStmt {
    pub expr: Box<Expr>,
}

#[derive(Clone, Debug)]
pub struct FunctionStmt {
    pub name: Token,
    pub params: Vec<Param>,
    pub return_typename: Typename,
    pub body: BlockExpr,
}

#[derive(Clone, Debug)]
pub struct Param {
    pub name: Token,
    pub typename: Typename,
}

/// `impl Type { ... }` or `impl Trait for Type { ... }`.
#[derive(Clone, Debug)]
pub struct ImplStmt {
    pub typename: Typename,
    pub trait_typename: Option<Typename>,
    pub methods: Vec<FunctionStmt>,
}

#[derive(Clone, Debug)]
pub struct ReturnStmt {
    pub keyword: Token,
    pub value: Box<Expr>,
}

#[derive(Clone, Debug)]
pub struct StructStmt {
    pub name: Token,
    pub fields: Vec<StructField>,
}

#[derive(Clone, Debug)]
pub struct StructField {
    pub name: Token,
    pub typename: Typename,
}

#[derive(Clone, Debug)]
pub struct TraitStmt {
    pub name: Token,
    pub methods: Vec<FunctionStmt>,
}

#[derive(Clone, Debug)]
pub struct VariableStmt {
    /// `let` or `const`.
    pub keyword: Token,
    pub name: Token,
    /// Explicit annotation, if any.
    pub typename: Option<Typename>,
    pub initializer: Box<Expr>,
}

impl VariableStmt {
    /// A `const` binding; every other keyword binds a mutable variable.
    pub fn is_const(&self) -> bool {
        self.keyword.lexeme == "const"
    }
}

// Builders

impl Stmt {
    pub fn expression(expr: Expr) -> Self {
        Stmt::Expression(ExpressionStmt {
            expr: Box::new(expr),
        })
    }

    /// A binding; constness follows the keyword.
    pub fn variable(
        keyword: Token,
        name: Token,
        typename: Option<Typename>,
        initializer: Expr,
    ) -> Self {
        Stmt::Variable(VariableStmt {
            keyword,
            name,
            typename,
            initializer: Box::new(initializer),
        })
    }

    pub fn return_value(keyword: Token, value: Expr) -> Self {
        Stmt::Return(ReturnStmt {
            keyword,
            value: Box::new(value),
        })
    }
}

impl Spanned for Stmt {
    fn span(&self) -> Span {
        match self {
            Stmt::Break(stmt) => stmt.keyword.span,
            Stmt::Continue(stmt) => stmt.keyword.span,
            Stmt::Enum(stmt) => stmt.name.span,
            Stmt::Expression(stmt) => stmt.expr.span(),
            Stmt::Function(stmt) => stmt.name.span,
            Stmt::Impl(stmt) => stmt.typename.span(),
            Stmt::Return(stmt) => stmt.keyword.span.merge(stmt.value.span()),
            Stmt::Struct(stmt) => stmt.name.span,
            Stmt::Trait(stmt) => stmt.name.span,
            Stmt::Variable(stmt) => stmt.keyword.span.merge(stmt.initializer.span()),
        }
    }
}
