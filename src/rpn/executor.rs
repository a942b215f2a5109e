use crate::context::{Arity, MathContext};
use crate::error::{ExpressionError, ExpressionResult};
use crate::token::{to_expression_string, Token, TokenKind};
use log::{debug, trace};

/// Evaluates a postfix token stream produced by [`to_rpn`](super::to_rpn).
pub fn evaluate_rpn(rpn: &[Token], context: &MathContext) -> ExpressionResult<f64> {
    RpnExecutor::new(context).execute(rpn)
}

/// Single-use value stack machine. A fresh one is created per evaluation.
struct RpnExecutor<'a> {
    context: &'a MathContext,
    stack: Vec<f64>,
}

impl<'a> RpnExecutor<'a> {
    fn new(context: &'a MathContext) -> Self {
        Self {
            context,
            stack: Vec::new(),
        }
    }

    fn execute(mut self, rpn: &[Token]) -> ExpressionResult<f64> {
        // Set by an ArgCount marker and consumed by the function right after it.
        let mut arg_count: Option<(usize, &Token)> = None;

        for (index, token) in rpn.iter().enumerate() {
            if let Some((_, marker)) = arg_count {
                if !token.is(TokenKind::Function) {
                    return Err(ExpressionError::DanglingArgCount {
                        token: marker.to_string(),
                    });
                }
            }
            let remaining = &rpn[index + 1..];

            match token.kind {
                TokenKind::ArgCount => {
                    let count = token
                        .arg_count_value()
                        .ok_or_else(|| ExpressionError::Format {
                            text: token.text.to_string(),
                        })?;
                    arg_count = Some((count, token));
                }

                TokenKind::Number => {
                    let value = token
                        .as_str()
                        .parse::<f64>()
                        .map_err(|_| ExpressionError::Format {
                            text: token.text.to_string(),
                        })?;
                    self.stack.push(value);
                }

                TokenKind::VariableOrConstant => {
                    let value = self.context.get_value(token.as_str())?;
                    self.stack.push(value);
                }

                TokenKind::UnaryOperator => {
                    let operator = self.context.get_unary_operator(token.as_str())?;
                    let operand = self.pop_value(token, remaining)?;
                    self.stack.push(operator.evaluate(operand)?);
                }

                TokenKind::BinaryOperator => {
                    let operator = self.context.get_binary_operator(token.as_str())?;
                    let right = self.pop_value(token, remaining)?;
                    let left = self.pop_value(token, remaining)?;
                    self.stack.push(operator.evaluate(left, right)?);
                }

                TokenKind::Function => {
                    let function = self.context.get_function(token.as_str())?;
                    let count = match (arg_count.take(), function.arity) {
                        (Some((actual, _)), Arity::Fixed(expected)) if actual != expected => {
                            return Err(ExpressionError::ArgumentCount {
                                name: function.name.clone(),
                                expected,
                                actual,
                            })
                        }
                        (Some((actual, _)), _) => actual,
                        (None, Arity::Fixed(expected)) => expected,
                        (None, Arity::Variadic) => {
                            return Err(ExpressionError::UnresolvedArity {
                                name: function.name.clone(),
                            })
                        }
                    };

                    let mut arguments = Vec::with_capacity(count);
                    for _ in 0..count {
                        arguments.push(self.pop_value(token, remaining)?);
                    }
                    arguments.reverse();
                    self.stack.push(function.call(&arguments)?);
                }

                TokenKind::OpenParen | TokenKind::CloseParen | TokenKind::Comma | TokenKind::Unknown => {
                    return Err(ExpressionError::InvalidToken {
                        token: token.text.to_string(),
                    })
                }
            }

            trace!("{} => {:?}", token, self.stack);
        }

        if let Some((_, marker)) = arg_count {
            return Err(ExpressionError::DanglingArgCount {
                token: marker.to_string(),
            });
        }

        if self.stack.len() != 1 {
            return Err(ExpressionError::Evaluation {
                stack: self.stack,
                tokens: rpn.to_vec(),
            });
        }

        let result = self.stack[0];
        debug!("[{}] = {}", to_expression_string(rpn), result);
        Ok(result)
    }

    fn pop_value(&mut self, token: &Token, remaining: &[Token]) -> ExpressionResult<f64> {
        self.stack.pop().ok_or_else(|| ExpressionError::StackUnderflow {
            token: token.text.to_string(),
            stack: self.stack.clone(),
            remaining: remaining.to_vec(),
        })
    }
}
