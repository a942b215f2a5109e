use crate::token::{to_expression_string, Token};
use std::fmt;
use thiserror::Error;

/// Which symbol table a lookup or registration was aimed at.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Function,
    BinaryOperator,
    UnaryOperator,
    Value,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SymbolKind::Function => "function",
            SymbolKind::BinaryOperator => "binary operator",
            SymbolKind::UnaryOperator => "unary operator",
            SymbolKind::Value => "variable or constant",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("No {kind} named '{name}' is registered")]
    NotFound { kind: SymbolKind, name: String },

    #[error("A {kind} named '{name}' is already registered")]
    DuplicateSymbol { kind: SymbolKind, name: String },

    #[error("Invalid token '{token}'")]
    InvalidToken { token: String },

    #[error("Parentheses mismatch in: {}", to_expression_string(.tokens))]
    ParenthesesMismatch { tokens: Vec<Token> },

    #[error("Unary operator '{token}' has no operand to apply to")]
    MisplacedUnaryOperator { token: String },

    #[error("Comma outside of a function call in: {}", to_expression_string(.tokens))]
    MisplacedComma { tokens: Vec<Token> },

    #[error("Argument count marker {token} is not followed by a function")]
    DanglingArgCount { token: String },

    #[error("Function '{name}' expects {expected} arguments, but got {actual}")]
    ArgumentCount {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("Function '{name}' expects {expected} arguments, but got {actual}")]
    ArgumentRange {
        name: String,
        expected: String,
        actual: usize,
    },

    #[error("Variadic function '{name}' was used without an argument list")]
    UnresolvedArity { name: String },

    #[error("Not enough operands for '{token}' (stack: {stack:?}, remaining: {})", to_expression_string(.remaining))]
    StackUnderflow {
        token: String,
        stack: Vec<f64>,
        remaining: Vec<Token>,
    },

    #[error("'{text}' is not a valid number")]
    Format { text: String },

    #[error("{operation}: {message}")]
    Domain { operation: String, message: String },

    #[error("Evaluation did not reduce to a single value (stack: {stack:?}, tokens: {})", to_expression_string(.tokens))]
    Evaluation { stack: Vec<f64>, tokens: Vec<Token> },
}

impl ExpressionError {
    pub fn domain(operation: impl Into<String>, message: impl Into<String>) -> Self {
        ExpressionError::Domain {
            operation: operation.into(),
            message: message.into(),
        }
    }

    pub fn not_found(kind: SymbolKind, name: impl Into<String>) -> Self {
        ExpressionError::NotFound {
            kind,
            name: name.into(),
        }
    }

    /// True for the errors that come from malformed input rather than from
    /// the arithmetic itself.
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            ExpressionError::InvalidToken { .. }
                | ExpressionError::ParenthesesMismatch { .. }
                | ExpressionError::MisplacedUnaryOperator { .. }
                | ExpressionError::MisplacedComma { .. }
                | ExpressionError::DanglingArgCount { .. }
        )
    }
}

pub type ExpressionResult<T> = Result<T, ExpressionError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    #[test]
    fn test_not_found_message_names_kind() {
        let err = ExpressionError::not_found(SymbolKind::Function, "foo");
        assert_eq!(err.to_string(), "No function named 'foo' is registered");
    }

    #[test]
    fn test_mismatch_message_lists_tokens() {
        let err = ExpressionError::ParenthesesMismatch {
            tokens: vec![
                Token::OPEN_PAREN,
                Token::new("3", TokenKind::Number),
                Token::arg_count(1),
            ],
        };
        assert_eq!(err.to_string(), "Parentheses mismatch in: ( 3");
        assert!(err.is_syntax_error());
    }

    #[test]
    fn test_domain_is_not_syntax() {
        let err = ExpressionError::domain("divide", "division by zero");
        assert_eq!(err.to_string(), "divide: division by zero");
        assert!(!err.is_syntax_error());
    }
}
