use mathengine_rs::{evaluate_with_variables, MathEvaluator};

fn main() {
    pretty_env_logger::init();

    let contexts = vec![
        vec![("price", 120.0), ("volume", 3000.0)],
        vec![("price", 80.0), ("volume", 6000.0)],
    ];

    let expression = "price * volume / 1000 + max(price, 100)";

    for (i, variables) in contexts.iter().enumerate() {
        let result = evaluate_with_variables(expression, variables);
        println!("Result {}: {:?}", i, result);
    }

    let evaluator = MathEvaluator::default();
    let expressions = ["2 ^ 10", "sin(pi / 2)", "log(8, 2)", "sum()", "round(2.5)"];
    for (expression, result) in expressions.iter().zip(evaluator.evaluate_many(&expressions)) {
        println!("{} => {:?}", expression, result);
    }
}
