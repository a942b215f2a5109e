use crate::context::{default_context, MathContext};
use crate::error::ExpressionResult;
use crate::rpn;
use crate::token::Token;
use crate::tokenizer;
use log::debug;
use rayon::prelude::*;
use std::sync::Arc;

/// Runs the tokenize, convert and evaluate stages against one shared context.
#[derive(Debug, Clone)]
pub struct MathEvaluator {
    context: Arc<MathContext>,
}

impl MathEvaluator {
    pub fn new(context: MathContext) -> Self {
        Self::with_shared(Arc::new(context))
    }

    pub fn with_shared(context: Arc<MathContext>) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &MathContext {
        &self.context
    }

    pub fn tokenize(&self, expression: &str) -> Vec<Token> {
        tokenizer::tokenize(expression, &self.context)
    }

    pub fn to_rpn(&self, tokens: &[Token]) -> ExpressionResult<Vec<Token>> {
        rpn::to_rpn(tokens, &self.context)
    }

    pub fn evaluate_rpn(&self, postfix: &[Token]) -> ExpressionResult<f64> {
        rpn::evaluate_rpn(postfix, &self.context)
    }

    /// Evaluates a single expression.
    ///
    /// # Arguments
    ///
    /// * `expression` - infix expression text, e.g. `"max(1, 2) * pi"`.
    ///
    /// # Returns
    ///
    /// * `Ok(f64)` if every stage succeeds.
    /// * `Err(ExpressionError)` from the first stage that fails.
    pub fn evaluate(&self, expression: &str) -> ExpressionResult<f64> {
        let tokens = self.tokenize(expression);
        let postfix = self.to_rpn(&tokens)?;
        self.evaluate_rpn(&postfix)
    }

    /// Evaluates independent expressions in parallel. Results keep the order
    /// of `expressions`.
    pub fn evaluate_many(&self, expressions: &[&str]) -> Vec<ExpressionResult<f64>> {
        debug!("evaluating {} expressions", expressions.len());
        expressions
            .par_iter()
            .map(|expression| self.evaluate(expression))
            .collect()
    }
}

impl Default for MathEvaluator {
    fn default() -> Self {
        Self::with_shared(default_context())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Arity, MathContextBuilder};
    use crate::error::ExpressionError;

    #[test]
    fn test_evaluate_stages_match_evaluate() {
        let evaluator = MathEvaluator::default();
        let tokens = evaluator.tokenize("(3 + 2) * 10 / 2");
        let rpn = evaluator.to_rpn(&tokens).unwrap();
        assert_eq!(evaluator.evaluate_rpn(&rpn).unwrap(), 25.0);
        assert_eq!(evaluator.evaluate("(3 + 2) * 10 / 2").unwrap(), 25.0);
    }

    #[test]
    fn test_evaluate_many_keeps_order() {
        let evaluator = MathEvaluator::default();
        let results = evaluator.evaluate_many(&["1 + 1", "5 / 0", "2 ^ 10", "((3)"]);

        assert_eq!(results.len(), 4);
        assert_eq!(results[0], Ok(2.0));
        assert!(matches!(results[1], Err(ExpressionError::Domain { .. })));
        assert_eq!(results[2], Ok(1024.0));
        assert!(matches!(
            results[3],
            Err(ExpressionError::ParenthesesMismatch { .. })
        ));
    }

    #[test]
    fn test_custom_context() {
        let mut builder = MathContextBuilder::with_defaults();
        builder
            .add_function("square", Arity::Fixed(1), |args| Ok(args[0] * args[0]))
            .unwrap()
            .add_or_update_variable("side", 4.0);
        let evaluator = MathEvaluator::new(builder.build());

        assert_eq!(evaluator.evaluate("square(side) + 1").unwrap(), 17.0);
        assert!(evaluator.context().is_function("square"));
    }
}
