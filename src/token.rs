use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    VariableOrConstant,
    BinaryOperator,
    UnaryOperator,
    Function,
    OpenParen,
    CloseParen,
    Comma,
    /// Resolved argument count of the function that follows it in RPN.
    ArgCount,
    Unknown,
}

/// A piece of an expression: the literal text plus its classification.
///
/// Tokens compare by value, so two `(` tokens from different places in an
/// expression are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub text: Cow<'static, str>,
    pub kind: TokenKind,
}

impl Token {
    pub const OPEN_PAREN: Token = Token {
        text: Cow::Borrowed("("),
        kind: TokenKind::OpenParen,
    };

    pub const CLOSE_PAREN: Token = Token {
        text: Cow::Borrowed(")"),
        kind: TokenKind::CloseParen,
    };

    pub const COMMA: Token = Token {
        text: Cow::Borrowed(","),
        kind: TokenKind::Comma,
    };

    pub fn new(text: impl Into<Cow<'static, str>>, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn number(value: f64) -> Self {
        Self::new(value.to_string(), TokenKind::Number)
    }

    pub fn arg_count(count: usize) -> Self {
        Self::new(count.to_string(), TokenKind::ArgCount)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// The count carried by an `ArgCount` marker.
    pub fn arg_count_value(&self) -> Option<usize> {
        match self.kind {
            TokenKind::ArgCount => self.text.parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::ArgCount => write!(f, "#{}", self.text),
            _ => f.write_str(&self.text),
        }
    }
}

/// Joins token texts with single spaces. `ArgCount` markers are skipped, so
/// the output of an infix token stream can be tokenized again.
pub fn to_expression_string(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter(|token| !token.is(TokenKind::ArgCount))
        .map(Token::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_compare_by_value() {
        let paren = Token::new("(", TokenKind::OpenParen);
        assert_eq!(paren, Token::OPEN_PAREN);
        assert_ne!(Token::new("(", TokenKind::Unknown), Token::OPEN_PAREN);
    }

    #[test]
    fn test_arg_count_marker() {
        let marker = Token::arg_count(3);
        assert_eq!(marker.kind, TokenKind::ArgCount);
        assert_eq!(marker.arg_count_value(), Some(3));
        assert_eq!(marker.to_string(), "#3");
        assert_eq!(Token::number(3.0).arg_count_value(), None);
    }

    #[test]
    fn test_expression_string_skips_markers() {
        let tokens = vec![
            Token::new("10", TokenKind::Number),
            Token::new("4", TokenKind::Number),
            Token::new("-", TokenKind::BinaryOperator),
            Token::arg_count(1),
            Token::new("max", TokenKind::Function),
        ];
        assert_eq!(to_expression_string(&tokens), "10 4 - max");
        assert_eq!(to_expression_string(&[]), "");
    }
}
