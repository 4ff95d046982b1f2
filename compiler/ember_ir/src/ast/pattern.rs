//! Switch-case patterns.

use super::expr::Expr;
use super::macros::ast_family;
use crate::{Span, Spanned, Token};

ast_family! {
    /// A pattern in a `switch` case.
    family Pattern;
    /// Read-only pass over patterns.
    visitor PatternVisitor;
    /// Rewriting pass over patterns.
    visitor_mut PatternVisitorMut;
    {
        /// Matches when the scrutinee equals the value.
        Value(ValuePattern) => visit_value_pattern;
        /// `_`, matches anything.
        Wildcard(WildcardPattern) => visit_wildcard_pattern;
    }
}

#[derive(Clone, Debug)]
pub struct ValuePattern {
    pub value: Box<Expr>,
}

#[derive(Clone, Debug)]
pub struct WildcardPattern {
    pub token: Token,
}

impl Pattern {
    pub fn value(value: Expr) -> Self {
        Pattern::Value(ValuePattern {
            value: Box::new(value),
        })
    }

    pub fn wildcard(token: Token) -> Self {
        Pattern::Wildcard(WildcardPattern { token })
    }
}

impl Spanned for Pattern {
    fn span(&self) -> Span {
        match self {
            Pattern::Value(pattern) => pattern.value.span(),
            Pattern::Wildcard(pattern) => pattern.token.span,
        }
    }
}
