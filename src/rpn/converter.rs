use crate::context::{Arity, BinaryOperator, MathContext, Notation};
use crate::error::{ExpressionError, ExpressionResult};
use crate::token::{to_expression_string, Token, TokenKind};
use log::{debug, trace};

/// An entry waiting on the operator stack.
#[derive(Debug)]
enum Pending {
    OpenParen,
    /// A prefix operator, ranked like the binary operator sharing its symbol
    /// when there is one.
    Prefix {
        token: Token,
        precedence: Option<u8>,
    },
    Binary {
        token: Token,
        precedence: u8,
    },
    /// A function call and the number of commas seen inside its parentheses.
    Call {
        token: Token,
        commas: usize,
        arity: Arity,
    },
}

impl Pending {
    fn into_token(self) -> Option<Token> {
        match self {
            Pending::OpenParen => None,
            Pending::Prefix { token, .. }
            | Pending::Binary { token, .. }
            | Pending::Call { token, .. } => Some(token),
        }
    }
}

/// Reorders infix tokens into reverse polish notation.
///
/// Every function call written with parentheses is emitted as
/// `ArgCount(n)` followed by the function token, where `n` is the number of
/// arguments actually supplied.
pub fn to_rpn(tokens: &[Token], context: &MathContext) -> ExpressionResult<Vec<Token>> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut pending: Vec<Pending> = Vec::new();
    let mut previous: Option<&Token> = None;

    for token in tokens {
        trace!("rpn <- '{}' (output: [{}])", token, to_expression_string(&output));

        match token.kind {
            TokenKind::Number | TokenKind::VariableOrConstant => {
                output.push(token.clone());
                // A prefix operator written directly before a bare operand
                // applies to that operand alone.
                while matches!(pending.last(), Some(Pending::Prefix { .. })) {
                    if let Some(entry) = pending.pop() {
                        output.extend(entry.into_token());
                    }
                }
            }

            TokenKind::Function => {
                let function = context.get_function(token.as_str())?;
                if function.is_infix() {
                    let operator = context.get_binary_operator(token.as_str())?;
                    push_binary(token, operator, &mut pending, &mut output);
                } else {
                    pending.push(Pending::Call {
                        token: token.clone(),
                        commas: 0,
                        arity: function.arity,
                    });
                }
            }

            TokenKind::UnaryOperator => {
                let operator = context.get_unary_operator(token.as_str())?;
                match operator.notation {
                    Notation::Prefix => pending.push(Pending::Prefix {
                        token: token.clone(),
                        precedence: context
                            .try_get_binary_operator(token.as_str())
                            .map(|binary| binary.precedence),
                    }),
                    Notation::Postfix => {
                        if output.is_empty() {
                            return Err(ExpressionError::MisplacedUnaryOperator {
                                token: token.text.to_string(),
                            });
                        }
                        output.push(token.clone());
                    }
                }
            }

            TokenKind::BinaryOperator => {
                let operator = context.get_binary_operator(token.as_str())?;
                push_binary(token, operator, &mut pending, &mut output);
            }

            TokenKind::OpenParen => pending.push(Pending::OpenParen),

            TokenKind::CloseParen => {
                if previous.is_some_and(|t| t.is(TokenKind::Comma)) {
                    return Err(ExpressionError::MisplacedComma {
                        tokens: tokens.to_vec(),
                    });
                }

                loop {
                    match pending.pop() {
                        Some(Pending::OpenParen) => break,
                        Some(entry) => output.extend(entry.into_token()),
                        None => {
                            return Err(ExpressionError::ParenthesesMismatch {
                                tokens: tokens.to_vec(),
                            })
                        }
                    }
                }

                if matches!(pending.last(), Some(Pending::Call { .. })) {
                    if let Some(Pending::Call {
                        token: function,
                        commas,
                        arity,
                    }) = pending.pop()
                    {
                        let empty = previous.is_some_and(|t| t.is(TokenKind::OpenParen));
                        let count = if empty { 0 } else { commas + 1 };
                        if let Arity::Fixed(expected) = arity {
                            if expected != count {
                                return Err(ExpressionError::ArgumentCount {
                                    name: function.text.to_string(),
                                    expected,
                                    actual: count,
                                });
                            }
                        }
                        output.push(Token::arg_count(count));
                        output.push(function);
                    }
                }
            }

            TokenKind::Comma => {
                let follows_argument = previous
                    .is_some_and(|t| !t.is(TokenKind::OpenParen) && !t.is(TokenKind::Comma));
                if !follows_argument {
                    return Err(ExpressionError::MisplacedComma {
                        tokens: tokens.to_vec(),
                    });
                }

                while !matches!(pending.last(), Some(Pending::OpenParen)) {
                    match pending.pop() {
                        Some(entry) => output.extend(entry.into_token()),
                        None => {
                            return Err(ExpressionError::MisplacedComma {
                                tokens: tokens.to_vec(),
                            })
                        }
                    }
                }

                let call = pending
                    .len()
                    .checked_sub(2)
                    .and_then(|index| pending.get_mut(index));
                match call {
                    Some(Pending::Call { commas, .. }) => *commas += 1,
                    _ => {
                        return Err(ExpressionError::MisplacedComma {
                            tokens: tokens.to_vec(),
                        })
                    }
                }
            }

            TokenKind::Unknown | TokenKind::ArgCount => {
                return Err(ExpressionError::InvalidToken {
                    token: token.text.to_string(),
                })
            }
        }

        previous = Some(token);
    }

    while let Some(entry) = pending.pop() {
        match entry.into_token() {
            Some(token) => output.push(token),
            None => {
                return Err(ExpressionError::ParenthesesMismatch {
                    tokens: tokens.to_vec(),
                })
            }
        }
    }

    debug!("rpn: [{}]", to_expression_string(&output));
    Ok(output)
}

/// Pops everything that binds at least as tightly as `operator`, then
/// parks `operator` on the stack. A pending prefix operator with no binary
/// twin always yields.
fn push_binary(
    token: &Token,
    operator: &BinaryOperator,
    pending: &mut Vec<Pending>,
    output: &mut Vec<Token>,
) {
    loop {
        let should_pop = match pending.last() {
            Some(Pending::Call { .. }) => true,
            Some(Pending::Prefix {
                precedence: None, ..
            }) => true,
            Some(Pending::Prefix {
                precedence: Some(precedence),
                ..
            })
            | Some(Pending::Binary { precedence, .. }) => {
                *precedence > operator.precedence
                    || (*precedence == operator.precedence && operator.is_left_associative())
            }
            Some(Pending::OpenParen) | None => false,
        };
        if !should_pop {
            break;
        }
        if let Some(entry) = pending.pop() {
            output.extend(entry.into_token());
        }
    }

    pending.push(Pending::Binary {
        token: token.clone(),
        precedence: operator.precedence,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::default_context;
    use crate::tokenizer::tokenize;

    fn rpn(expression: &str) -> ExpressionResult<Vec<Token>> {
        let context = default_context();
        to_rpn(&tokenize(expression, &context), &context)
    }

    fn rpn_string(expression: &str) -> String {
        to_expression_string(&rpn(expression).unwrap())
    }

    #[test]
    fn test_precedence() {
        assert_eq!(rpn_string("10 + 5 * 2"), "10 5 2 * +");
        assert_eq!(rpn_string("(10 + 5) * 2"), "10 5 + 2 *");
    }

    #[test]
    fn test_associativity() {
        assert_eq!(rpn_string("8 - 4 - 2"), "8 4 - 2 -");
        assert_eq!(rpn_string("2 ^ 3 ^ 2"), "2 3 2 ^ ^");
    }

    #[test]
    fn test_constants_and_unary() {
        assert_eq!(rpn_string("e^2+1"), "e 2 ^ 1 +");
        assert_eq!(rpn_string("(10+(-5*2))"), "10 5 - 2 * +");
    }

    #[test]
    fn test_prefix_placement() {
        assert_eq!(rpn_string("-2 ^ 2"), "2 - 2 ^");
        assert_eq!(rpn_string("-(2) ^ 2"), "2 2 ^ -");
        assert_eq!(rpn_string("-sqrt(4) ^ 2"), "4 sqrt 2 ^ -");
        assert_eq!(rpn_string("2 ^ -1 + 1"), "2 1 - ^ 1 +");
    }

    #[test]
    fn test_prefix_without_binary_twin_yields_to_any_operator() {
        let mut builder = crate::context::MathContextBuilder::with_defaults();
        builder
            .add_unary_operator("~", Notation::Prefix, |x| Ok(1.0 / x))
            .unwrap();
        let context = builder.build();
        let tokens = to_rpn(&tokenize("~(4) ^ 2", &context), &context).unwrap();
        assert_eq!(to_expression_string(&tokens), "4 ~ 2 ^");
    }

    #[test]
    fn test_function_call_emits_arg_count() {
        let tokens = rpn("max(10 - 4, 2 + 6)").unwrap();
        assert_eq!(to_expression_string(&tokens), "10 4 - 2 6 + max");
        assert_eq!(tokens[6], Token::arg_count(2));
        assert_eq!(tokens[7].kind, TokenKind::Function);
    }

    #[test]
    fn test_nested_calls_count_their_own_arguments() {
        let tokens = rpn("Sum(4, Sqrt(25), Max(1, 2, 3))").unwrap();
        let counts: Vec<usize> = tokens.iter().filter_map(Token::arg_count_value).collect();
        assert_eq!(counts, vec![1, 3, 3]);
    }

    #[test]
    fn test_empty_call_has_zero_arguments() {
        let tokens = rpn("random()").unwrap();
        assert_eq!(tokens, vec![Token::arg_count(0), Token::new("random", TokenKind::Function)]);
    }

    #[test]
    fn test_fixed_arity_mismatch() {
        assert_eq!(
            rpn("sqrt(1, 2)").unwrap_err(),
            ExpressionError::ArgumentCount {
                name: "sqrt".to_string(),
                expected: 1,
                actual: 2
            }
        );
    }

    #[test]
    fn test_call_without_parentheses_has_no_marker() {
        assert_eq!(rpn_string("sqrt 16 + 1"), "16 sqrt 1 +");
        assert!(rpn("sqrt 16")
            .unwrap()
            .iter()
            .all(|token| !token.is(TokenKind::ArgCount)));
    }

    #[test]
    fn test_infix_functions_use_operator_precedence() {
        assert_eq!(rpn_string("(3 plus 2) times 10 divided 2"), "3 2 plus 10 times 2 divided");
        assert_eq!(rpn_string("2 pow 3 pow 2"), "2 3 2 pow pow");
    }

    #[test]
    fn test_parentheses_mismatch() {
        assert!(matches!(
            rpn("((3)"),
            Err(ExpressionError::ParenthesesMismatch { .. })
        ));
        assert!(matches!(
            rpn("3)"),
            Err(ExpressionError::ParenthesesMismatch { .. })
        ));
    }

    #[test]
    fn test_comma_outside_call() {
        assert!(matches!(rpn("1, 2"), Err(ExpressionError::MisplacedComma { .. })));
        assert!(matches!(rpn("(1, 2)"), Err(ExpressionError::MisplacedComma { .. })));
    }

    #[test]
    fn test_comma_in_nested_group_of_call() {
        assert!(matches!(
            rpn("max((1, 2))"),
            Err(ExpressionError::MisplacedComma { .. })
        ));
    }

    #[test]
    fn test_comma_without_argument() {
        assert!(matches!(
            rpn("max(1, 2,)"),
            Err(ExpressionError::MisplacedComma { .. })
        ));
        assert!(matches!(
            rpn("max(, 1)"),
            Err(ExpressionError::MisplacedComma { .. })
        ));
        assert!(matches!(
            rpn("max(1,, 2)"),
            Err(ExpressionError::MisplacedComma { .. })
        ));
    }

    #[test]
    fn test_unknown_token_is_rejected() {
        assert_eq!(
            rpn("5 > 2").unwrap_err(),
            ExpressionError::InvalidToken {
                token: ">".to_string()
            }
        );
    }

    #[test]
    fn test_postfix_without_operand() {
        let context = default_context();
        let tokens = vec![Token::new("!", TokenKind::UnaryOperator)];
        assert_eq!(
            to_rpn(&tokens, &context).unwrap_err(),
            ExpressionError::MisplacedUnaryOperator {
                token: "!".to_string()
            }
        );
    }
}
