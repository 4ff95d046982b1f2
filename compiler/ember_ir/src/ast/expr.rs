//! Expression nodes.
//!
//! Control flow is expression-based: blocks, `if`, `switch`, `for` and
//! `while` all yield exactly one value when evaluated. A block yields its
//! trailing expression, which the parser fills with a unit literal when
//! the source has none.
//!
//! Dropping an expression never recurses: children are moved onto a work
//! list and freed one at a time, so long operator chains and deeply nested
//! blocks release without exhausting the stack.

use super::macros::ast_family;
use super::pattern::{Pattern, ValuePattern};
use super::stmt::{ExpressionStmt, ImplStmt, ReturnStmt, Stmt, TraitStmt, VariableStmt};
use crate::{Span, Spanned, Token};

ast_family! {
    /// An expression.
    family Expr;
    /// Read-only pass over expressions, one method per expression kind.
    visitor ExprVisitor;
    /// Rewriting pass over expressions.
    visitor_mut ExprVisitorMut;
    {
        Assign(AssignExpr) => visit_assign_expr;
        /// Arithmetic, comparison and bitwise operators.
        Binary(BinaryExpr) => visit_binary_expr;
        Block(BlockExpr) => visit_block_expr;
        Boolean(BooleanExpr) => visit_boolean_expr;
        Call(CallExpr) => visit_call_expr;
        Field(FieldExpr) => visit_field_expr;
        Float(FloatExpr) => visit_float_expr;
        For(ForExpr) => visit_for_expr;
        If(IfExpr) => visit_if_expr;
        Integer(IntegerExpr) => visit_integer_expr;
        /// Short-circuiting `and` / `or`.
        Logical(LogicalExpr) => visit_logical_expr;
        String(StringExpr) => visit_string_expr;
        Switch(SwitchExpr) => visit_switch_expr;
        Symbol(SymbolExpr) => visit_symbol_expr;
        Unary(UnaryExpr) => visit_unary_expr;
        Unit(UnitExpr) => visit_unit_expr;
        While(WhileExpr) => visit_while_expr;
    }
}

#[derive(Clone, Debug)]
pub struct AssignExpr {
    pub target: Box<Expr>,
    pub oper: Token,
    pub value: Box<Expr>,
}

#[derive(Clone, Debug)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub oper: Token,
    pub right: Box<Expr>,
}

/// `{ stmts...; expr }`
#[derive(Clone, Debug)]
pub struct BlockExpr {
    pub brace: Token,
    pub stmts: Vec<Stmt>,
    pub expr: Box<Expr>,
}

#[derive(Clone, Debug)]
pub struct BooleanExpr {
    pub token: Token,
    pub value: bool,
}

#[derive(Clone, Debug)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub paren: Token,
    pub arguments: Vec<Expr>,
}

/// `object.name`
#[derive(Clone, Debug)]
pub struct FieldExpr {
    pub object: Box<Expr>,
    pub name: Token,
}

#[derive(Clone, Debug)]
pub struct FloatExpr {
    pub token: Token,
    pub value: f64,
}

/// `for name in object { body }`
#[derive(Clone, Debug)]
pub struct ForExpr {
    pub keyword: Token,
    pub name: Token,
    pub object: Box<Expr>,
    pub body: BlockExpr,
}

/// `if condition then_body else else_body`. The else body is another `if`
/// for `else if` chains and a unit block when the source omits it.
#[derive(Clone, Debug)]
pub struct IfExpr {
    pub keyword: Token,
    pub condition: Box<Expr>,
    pub then_body: Box<Expr>,
    pub else_body: Box<Expr>,
}

#[derive(Clone, Debug)]
pub struct IntegerExpr {
    pub token: Token,
    pub value: i64,
}

#[derive(Clone, Debug)]
pub struct LogicalExpr {
    pub left: Box<Expr>,
    pub oper: Token,
    pub right: Box<Expr>,
}

/// String literal. `value` holds the contents without quotes.
#[derive(Clone, Debug)]
pub struct StringExpr {
    pub token: Token,
    pub value: String,
}

#[derive(Clone, Debug)]
pub struct SwitchExpr {
    pub keyword: Token,
    pub value: Box<Expr>,
    pub cases: Vec<SwitchCase>,
}

/// `case pattern when predicate => body`. A case without a guard carries a
/// `true` predicate.
#[derive(Clone, Debug)]
pub struct SwitchCase {
    pub pattern: Pattern,
    pub predicate: Box<Expr>,
    pub body: Box<Expr>,
}

#[derive(Clone, Debug)]
pub struct SymbolExpr {
    pub name: Token,
}

#[derive(Clone, Debug)]
pub struct UnaryExpr {
    pub oper: Token,
    pub operand: Box<Expr>,
}

#[derive(Clone, Debug)]
pub struct UnitExpr {
    pub token: Token,
}

#[derive(Clone, Debug)]
pub struct WhileExpr {
    pub keyword: Token,
    pub condition: Box<Expr>,
    pub body: BlockExpr,
}

// Builders

impl Expr {
    pub fn integer(token: Token, value: i64) -> Self {
        Expr::Integer(IntegerExpr { token, value })
    }

    pub fn float(token: Token, value: f64) -> Self {
        Expr::Float(FloatExpr { token, value })
    }

    pub fn boolean(token: Token, value: bool) -> Self {
        Expr::Boolean(BooleanExpr { token, value })
    }

    pub fn string(token: Token, value: impl Into<String>) -> Self {
        Expr::String(StringExpr {
            token,
            value: value.into(),
        })
    }

    pub fn symbol(name: Token) -> Self {
        Expr::Symbol(SymbolExpr { name })
    }

    pub fn unit(token: Token) -> Self {
        Expr::Unit(UnitExpr { token })
    }

    pub fn binary(left: Expr, oper: Token, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            left: Box::new(left),
            oper,
            right: Box::new(right),
        })
    }

    pub fn logical(left: Expr, oper: Token, right: Expr) -> Self {
        Expr::Logical(LogicalExpr {
            left: Box::new(left),
            oper,
            right: Box::new(right),
        })
    }

    pub fn unary(oper: Token, operand: Expr) -> Self {
        Expr::Unary(UnaryExpr {
            oper,
            operand: Box::new(operand),
        })
    }

    pub fn assign(target: Expr, oper: Token, value: Expr) -> Self {
        Expr::Assign(AssignExpr {
            target: Box::new(target),
            oper,
            value: Box::new(value),
        })
    }

    pub fn call(callee: Expr, paren: Token, arguments: Vec<Expr>) -> Self {
        Expr::Call(CallExpr {
            callee: Box::new(callee),
            paren,
            arguments,
        })
    }

    pub fn field(object: Expr, name: Token) -> Self {
        Expr::Field(FieldExpr {
            object: Box::new(object),
            name,
        })
    }

    pub fn block(block: BlockExpr) -> Self {
        Expr::Block(block)
    }

    pub fn if_else(keyword: Token, condition: Expr, then_body: Expr, else_body: Expr) -> Self {
        Expr::If(IfExpr {
            keyword,
            condition: Box::new(condition),
            then_body: Box::new(then_body),
            else_body: Box::new(else_body),
        })
    }
}

impl BlockExpr {
    pub fn new(brace: Token, stmts: Vec<Stmt>, expr: Expr) -> Self {
        BlockExpr {
            brace,
            stmts,
            expr: Box::new(expr),
        }
    }
}

// Dropping

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

/// Take the expression out of `slot`, leaving a unit in its place.
fn detach(slot: &mut Expr) -> Expr {
    std::mem::replace(
        slot,
        Expr::Unit(UnitExpr {
            token: Token::default(),
        }),
    )
}

fn detach_block(block: &mut BlockExpr, pending: &mut Vec<Expr>) {
    for stmt in block.stmts.drain(..) {
        detach_stmt(stmt, pending);
    }
    pending.push(detach(&mut block.expr));
}

/// Move every expression a statement owns onto `pending`. Typenames and
/// tokens stay behind and drop with the statement.
fn detach_stmt(stmt: Stmt, pending: &mut Vec<Expr>) {
    match stmt {
        Stmt::Expression(ExpressionStmt { expr }) => pending.push(*expr),
        Stmt::Return(ReturnStmt { value, .. }) => pending.push(*value),
        Stmt::Variable(VariableStmt { initializer, .. }) => pending.push(*initializer),
        Stmt::Function(function) => pending.push(Expr::Block(function.body)),
        Stmt::Impl(ImplStmt { methods, .. }) | Stmt::Trait(TraitStmt { methods, .. }) => {
            pending.extend(methods.into_iter().map(|method| Expr::Block(method.body)));
        }
        Stmt::Break(_) | Stmt::Continue(_) | Stmt::Enum(_) | Stmt::Struct(_) => {}
    }
}

impl Expr {
    /// Move the direct children onto `pending`, so dropping `self`
    /// afterwards frees only this node.
    fn detach_children(&mut self, pending: &mut Vec<Expr>) {
        match self {
            Expr::Assign(AssignExpr {
                target: left,
                value: right,
                ..
            })
            | Expr::Binary(BinaryExpr { left, right, .. })
            | Expr::Logical(LogicalExpr { left, right, .. }) => {
                pending.push(detach(left));
                pending.push(detach(right));
            }
            Expr::Block(block) => detach_block(block, pending),
            Expr::Call(call) => {
                pending.push(detach(&mut call.callee));
                pending.append(&mut call.arguments);
            }
            Expr::Field(field) => pending.push(detach(&mut field.object)),
            Expr::For(for_expr) => {
                pending.push(detach(&mut for_expr.object));
                detach_block(&mut for_expr.body, pending);
            }
            Expr::If(if_expr) => {
                pending.push(detach(&mut if_expr.condition));
                pending.push(detach(&mut if_expr.then_body));
                pending.push(detach(&mut if_expr.else_body));
            }
            Expr::Switch(switch) => {
                pending.push(detach(&mut switch.value));
                for SwitchCase {
                    pattern,
                    predicate,
                    body,
                } in switch.cases.drain(..)
                {
                    if let Pattern::Value(ValuePattern { value }) = pattern {
                        pending.push(*value);
                    }
                    pending.push(*predicate);
                    pending.push(*body);
                }
            }
            Expr::Unary(unary) => pending.push(detach(&mut unary.operand)),
            Expr::While(while_expr) => {
                pending.push(detach(&mut while_expr.condition));
                detach_block(&mut while_expr.body, pending);
            }
            Expr::Boolean(_)
            | Expr::Float(_)
            | Expr::Integer(_)
            | Expr::String(_)
            | Expr::Symbol(_)
            | Expr::Unit(_) => {}
        }
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        match self {
            Expr::Assign(expr) => expr.target.span().merge(expr.value.span()),
            Expr::Binary(expr) => expr.left.span().merge(expr.right.span()),
            Expr::Logical(expr) => expr.left.span().merge(expr.right.span()),
            Expr::Block(expr) => expr.brace.span,
            Expr::Boolean(expr) => expr.token.span,
            Expr::Call(expr) => expr.callee.span().merge(expr.paren.span),
            Expr::Field(expr) => expr.object.span().merge(expr.name.span),
            Expr::Float(expr) => expr.token.span,
            Expr::For(expr) => expr.keyword.span,
            Expr::If(expr) => expr.keyword.span,
            Expr::Integer(expr) => expr.token.span,
            Expr::String(expr) => expr.token.span,
            Expr::Switch(expr) => expr.keyword.span,
            Expr::Symbol(expr) => expr.name.span,
            Expr::Unary(expr) => expr.oper.span.merge(expr.operand.span()),
            Expr::Unit(expr) => expr.token.span,
            Expr::While(expr) => expr.keyword.span,
        }
    }
}
