//! Tokens as handed over by the lexer.
//!
//! The front end only needs the lexeme text and where it came from, so a
//! token here is deliberately opaque: no kind tag, no interning.

use std::fmt;
use std::ops::Range;

use crate::{Span, SpanError};

/// A lexeme with its source position.
///
/// Tokens are immutable once created and are cloned freely into AST nodes
/// and typenames.
#[derive(Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub lexeme: String,
    pub span: Span,
    /// 1-based source line, `0` for synthesized tokens.
    pub line: u32,
}

impl Token {
    #[inline]
    pub fn new(lexeme: impl Into<String>, span: Span, line: u32) -> Self {
        Token {
            lexeme: lexeme.into(),
            span,
            line,
        }
    }

    /// Token for the lexeme at byte `range` of its source, as a lexer
    /// reports it.
    pub fn at(
        lexeme: impl Into<String>,
        range: Range<usize>,
        line: u32,
    ) -> Result<Self, SpanError> {
        Ok(Token::new(lexeme, Span::try_from_range(range)?, line))
    }

    /// Token that has no source position (generated code, tests, builtins).
    pub fn synthetic(lexeme: impl Into<String>) -> Self {
        Token::new(lexeme, Span::DUMMY, 0)
    }

    /// An absent optional token, e.g. an omitted reference region.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lexeme.is_empty()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.lexeme
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}:{}", self.lexeme, self.line, self.span)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lexeme)
    }
}
