extern crate self as mathengine_rs;

pub mod context;
pub mod error;
pub mod evaluator;
pub mod functions;
pub mod rpn;
pub mod token;
pub mod tokenizer;

pub use context::{
    default_context, precedence, Arity, Associativity, BinaryOperator, Function, MathContext,
    MathContextBuilder, Notation, UnaryOperator,
};
pub use error::{ExpressionError, ExpressionResult, SymbolKind};
pub use evaluator::MathEvaluator;
pub use rpn::{evaluate_rpn, to_rpn};
pub use token::{to_expression_string, Token, TokenKind};
pub use tokenizer::tokenize;

/// Evaluates `expression` against the default context.
pub fn evaluate(expression: &str) -> ExpressionResult<f64> {
    evaluate_with(expression, &default_context())
}

pub fn evaluate_with(expression: &str, context: &MathContext) -> ExpressionResult<f64> {
    let tokens = tokenize(expression, context);
    let rpn = to_rpn(&tokens, context)?;
    evaluate_rpn(&rpn, context)
}

/// Evaluates `expression` with `variables` layered over the default context.
/// A variable named like a built-in constant shadows it.
pub fn evaluate_with_variables(expression: &str, variables: &[(&str, f64)]) -> ExpressionResult<f64> {
    let context = default_context().with_variables(variables.iter().copied());
    evaluate_with(expression, &context)
}
