mod cursor;

use crate::context::{MathContext, Notation};
use crate::token::{to_expression_string, Token, TokenKind};
use cursor::CharCursor;
use log::{debug, trace};

/// Splits an expression into classified tokens.
///
/// Tokenizing never fails: text that cannot be classified against `context`
/// becomes a [`TokenKind::Unknown`] token and is rejected when the tokens are
/// converted or evaluated.
pub fn tokenize(expression: &str, context: &MathContext) -> Vec<Token> {
    let mut cursor = CharCursor::new(expression);
    let mut tokens: Vec<Token> = Vec::new();

    loop {
        cursor.skip_whitespace();
        let Some(current) = cursor.current() else {
            break;
        };

        let token = if current.is_alphabetic() {
            let word = cursor.take_while(|c| c.is_alphabetic() || c.is_ascii_digit());
            classify_word(word, context)
        } else if current.is_ascii_digit() || current == '.' {
            classify_number(scan_number(&mut cursor))
        } else {
            let token = match current {
                '(' => Token::OPEN_PAREN,
                ')' => Token::CLOSE_PAREN,
                ',' => Token::COMMA,
                symbol => classify_symbol(symbol, tokens.last(), cursor.next_significant(), context),
            };
            cursor.advance();
            token
        };

        trace!("token {:?} '{}'", token.kind, token.text);
        tokens.push(token);
    }

    debug!(
        "tokenized '{}' into [{}]",
        expression,
        to_expression_string(&tokens)
    );
    tokens
}

/// Digits with at most one decimal point.
fn scan_number(cursor: &mut CharCursor) -> String {
    let mut seen_point = false;
    cursor.take_while(|c| {
        if c == '.' {
            !std::mem::replace(&mut seen_point, true)
        } else {
            c.is_ascii_digit()
        }
    })
}

fn classify_number(run: String) -> Token {
    if run.starts_with('.') || run.ends_with('.') {
        Token::new(run, TokenKind::Unknown)
    } else {
        Token::new(run, TokenKind::Number)
    }
}

fn classify_word(word: String, context: &MathContext) -> Token {
    let kind = if context.is_function(word.as_str()) {
        TokenKind::Function
    } else if context.is_value(word.as_str()) {
        TokenKind::VariableOrConstant
    } else {
        TokenKind::Unknown
    };
    Token::new(word, kind)
}

fn classify_symbol(
    symbol: char,
    previous: Option<&Token>,
    next: Option<char>,
    context: &MathContext,
) -> Token {
    if let Some(operator) = context.try_get_unary_operator(symbol) {
        let is_unary = match operator.notation {
            Notation::Prefix => is_prefix_position(previous, next, context),
            Notation::Postfix => is_postfix_position(previous),
        };
        if is_unary {
            return Token::new(symbol.to_string(), TokenKind::UnaryOperator);
        }
    }

    let kind = if context.is_binary_operator(symbol) {
        TokenKind::BinaryOperator
    } else {
        TokenKind::Unknown
    };
    Token::new(symbol.to_string(), kind)
}

/// A prefix operator needs something to apply to on its right, and nothing
/// on its left that could be the left operand of a binary operator.
fn is_prefix_position(previous: Option<&Token>, next: Option<char>, context: &MathContext) -> bool {
    let left_is_free = match previous {
        None => true,
        Some(token) => match token.kind {
            TokenKind::CloseParen | TokenKind::Number | TokenKind::VariableOrConstant => false,
            TokenKind::UnaryOperator => context.is_binary_operator(token.as_str()),
            _ => true,
        },
    };

    let right_is_operand = next.is_some_and(|c| c.is_alphanumeric() || c == '(' || c == '.');

    left_is_free && right_is_operand
}

fn is_postfix_position(previous: Option<&Token>) -> bool {
    previous.is_some_and(|token| {
        matches!(
            token.kind,
            TokenKind::CloseParen | TokenKind::Number | TokenKind::VariableOrConstant
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::default_context;

    fn kinds(expression: &str) -> Vec<(String, TokenKind)> {
        tokenize(expression, &default_context())
            .into_iter()
            .map(|token| (token.text.into_owned(), token.kind))
            .collect()
    }

    fn pair(text: &str, kind: TokenKind) -> (String, TokenKind) {
        (text.to_string(), kind)
    }

    #[test]
    fn test_tokenize_simple_arithmetic() {
        assert_eq!(
            kinds("10 + 5 * 2"),
            vec![
                pair("10", TokenKind::Number),
                pair("+", TokenKind::BinaryOperator),
                pair("5", TokenKind::Number),
                pair("*", TokenKind::BinaryOperator),
                pair("2", TokenKind::Number),
            ]
        );
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("", &default_context()).is_empty());
        assert!(tokenize("  \t ", &default_context()).is_empty());
    }

    #[test]
    fn test_minus_after_operator_is_unary() {
        assert_eq!(
            kinds("5 + - 2"),
            vec![
                pair("5", TokenKind::Number),
                pair("+", TokenKind::BinaryOperator),
                pair("-", TokenKind::UnaryOperator),
                pair("2", TokenKind::Number),
            ]
        );
    }

    #[test]
    fn test_minus_after_operand_is_binary() {
        let tokens = kinds("x-2");
        assert_eq!(tokens[1], pair("-", TokenKind::BinaryOperator));

        let tokens = kinds("(1)-2");
        assert_eq!(tokens[3], pair("-", TokenKind::BinaryOperator));
    }

    #[test]
    fn test_unregistered_symbol_is_unknown() {
        assert_eq!(
            kinds("5 > -2"),
            vec![
                pair("5", TokenKind::Number),
                pair(">", TokenKind::Unknown),
                pair("-", TokenKind::UnaryOperator),
                pair("2", TokenKind::Number),
            ]
        );
    }

    #[test]
    fn test_unregistered_identifier_is_unknown() {
        assert_eq!(
            kinds("5any2-2"),
            vec![
                pair("5", TokenKind::Number),
                pair("any2", TokenKind::Unknown),
                pair("-", TokenKind::UnaryOperator),
                pair("2", TokenKind::Number),
            ]
        );
    }

    #[test]
    fn test_postfix_then_binary() {
        assert_eq!(
            kinds("1+5!-2"),
            vec![
                pair("1", TokenKind::Number),
                pair("+", TokenKind::BinaryOperator),
                pair("5", TokenKind::Number),
                pair("!", TokenKind::UnaryOperator),
                pair("-", TokenKind::BinaryOperator),
                pair("2", TokenKind::Number),
            ]
        );
    }

    #[test]
    fn test_postfix_without_operand_is_unknown() {
        assert_eq!(kinds("!3")[0], pair("!", TokenKind::Unknown));
    }

    #[test]
    fn test_words_are_classified_by_registry() {
        assert_eq!(
            kinds("Max(pi, 2) plus e"),
            vec![
                pair("Max", TokenKind::Function),
                pair("(", TokenKind::OpenParen),
                pair("pi", TokenKind::VariableOrConstant),
                pair(",", TokenKind::Comma),
                pair("2", TokenKind::Number),
                pair(")", TokenKind::CloseParen),
                pair("plus", TokenKind::Function),
                pair("e", TokenKind::VariableOrConstant),
            ]
        );
    }

    #[test]
    fn test_numbers_with_decimal_point() {
        assert_eq!(kinds("1.25"), vec![pair("1.25", TokenKind::Number)]);
        assert_eq!(kinds(".5"), vec![pair(".5", TokenKind::Unknown)]);
        assert_eq!(kinds("5."), vec![pair("5.", TokenKind::Unknown)]);
        assert_eq!(
            kinds("1.2.3"),
            vec![pair("1.2", TokenKind::Number), pair(".3", TokenKind::Unknown)]
        );
    }

    #[test]
    fn test_custom_context_values() {
        let context = default_context().with_variables([("x", 10.0), ("y", -25.0)]);
        let tokens = tokenize("x * y", &context);
        assert_eq!(tokens[0].kind, TokenKind::VariableOrConstant);
        assert_eq!(tokens[2].kind, TokenKind::VariableOrConstant);
    }
}
