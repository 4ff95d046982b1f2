//! Focused capability traits.

use crate::{Span, Token};

/// Anything with a source location.
pub trait Spanned {
    fn span(&self) -> Span;
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanned_via_dyn() {
        let token = Token::new("true", Span::new(10, 14), 1);
        let spanned: &dyn Spanned = &token;
        assert_eq!(spanned.span(), Span::new(10, 14));
    }
}
