use mathengine_macros::math_fn;
use mathengine_rs::{
    precedence, Arity, Associativity, ExpressionError, ExpressionResult, MathContextBuilder,
    MathEvaluator, Notation,
};

#[math_fn]
fn hypot(a: f64, b: f64) -> ExpressionResult<f64> {
    Ok(a.hypot(b))
}

#[math_fn]
fn clamp01(x: f64) -> ExpressionResult<f64> {
    Ok(x.clamp(0.0, 1.0))
}

fn main() -> Result<(), ExpressionError> {
    pretty_env_logger::init();

    let mut builder = MathContextBuilder::with_defaults();
    builder
        .add_function("hypot", Arity::Fixed(2), hypot)?
        .add_function("clamp01", Arity::Fixed(1), clamp01)?
        .add_infix_function("avg", precedence::LOW, Associativity::Left, |a, b| {
            Ok((a + b) / 2.0)
        })?
        .add_unary_operator("~", Notation::Prefix, |x| Ok(1.0 / x))?
        .add_constant("g", 9.81)?
        .add_or_update_variable("t", 2.0);

    let evaluator = MathEvaluator::new(builder.build());

    // Convert once, evaluate the same RPN against the stored context.
    let tokens = evaluator.tokenize("hypot(3, 4) avg ~4");
    let rpn = evaluator.to_rpn(&tokens)?;
    println!("hypot(3, 4) avg ~4 = {}", evaluator.evaluate_rpn(&rpn)?);

    println!("g * t ^ 2 / 2 = {}", evaluator.evaluate("g * t ^ 2 / 2")?);
    println!("clamp01(1.7) = {}", evaluator.evaluate("clamp01(1.7)")?);

    if let Err(err) = builder.add_constant("G", 1.0) {
        println!("Error: {}", err);
    }
    Ok(())
}
