use crate::context::precedence::{HIGH, LOW, NORMAL};
use crate::context::{Associativity, BinaryOperator, MathContextBuilder, Notation, UnaryOperator};
use crate::error::{ExpressionError, ExpressionResult};
use std::sync::Arc;

pub fn register(builder: &mut MathContextBuilder) {
    let binary: [(&str, &str, u8, Associativity, fn(f64, f64) -> ExpressionResult<f64>); 6] = [
        ("+", "plus", LOW, Associativity::Left, add),
        ("-", "minus", LOW, Associativity::Left, subtract),
        ("*", "times", NORMAL, Associativity::Left, multiply),
        ("/", "divided", NORMAL, Associativity::Left, divide),
        ("%", "mod", NORMAL, Associativity::Left, modulo),
        ("^", "pow", HIGH, Associativity::Right, power),
    ];

    for (symbol, word, precedence, associativity, evaluate) in binary {
        builder.set_binary_operator(BinaryOperator::new(symbol, precedence, associativity, evaluate));
        builder.set_infix_function(word, precedence, associativity, Arc::new(evaluate));
    }

    builder.set_unary_operator(UnaryOperator::new("+", Notation::Prefix, identity));
    builder.set_unary_operator(UnaryOperator::new("-", Notation::Prefix, negate));
    builder.set_unary_operator(UnaryOperator::new("!", Notation::Postfix, factorial));
}

pub fn add(left: f64, right: f64) -> ExpressionResult<f64> {
    Ok(left + right)
}

pub fn subtract(left: f64, right: f64) -> ExpressionResult<f64> {
    Ok(left - right)
}

pub fn multiply(left: f64, right: f64) -> ExpressionResult<f64> {
    Ok(left * right)
}

pub fn divide(left: f64, right: f64) -> ExpressionResult<f64> {
    if right == 0.0 {
        return Err(ExpressionError::domain("divide", "division by zero"));
    }
    Ok(left / right)
}

pub fn modulo(left: f64, right: f64) -> ExpressionResult<f64> {
    if right == 0.0 {
        return Err(ExpressionError::domain("mod", "modulo by zero"));
    }
    Ok(left % right)
}

pub fn power(base: f64, exponent: f64) -> ExpressionResult<f64> {
    Ok(base.powf(exponent))
}

pub fn identity(value: f64) -> ExpressionResult<f64> {
    Ok(value)
}

pub fn negate(value: f64) -> ExpressionResult<f64> {
    Ok(-value)
}

/// `n * (n - 1) * ...` for as long as the factor stays positive. Fractional
/// inputs are accepted and multiply down the same way.
pub fn factorial(value: f64) -> ExpressionResult<f64> {
    if value < 0.0 {
        return Err(ExpressionError::domain(
            "factorial",
            format!("{} is negative", value),
        ));
    }

    let mut result: f64 = 1.0;
    let mut factor = value;
    while factor > 0.0 && result.is_finite() {
        result *= factor;
        factor -= 1.0;
    }
    Ok(result)
}
