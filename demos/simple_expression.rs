use log::debug;
use mathengine_rs::{evaluate, tokenize, to_expression_string, to_rpn, default_context};

fn main() {
    pretty_env_logger::init();

    let expr = "Sum(4, Sqrt(25), Max(1, 2, 3)) * 2 ^ 3";
    let context = default_context();

    let tokens = tokenize(expr, &context);
    debug!("tokens: {tokens:?}");

    match to_rpn(&tokens, &context) {
        Ok(rpn) => println!("rpn: {}", to_expression_string(&rpn)),
        Err(err) => println!("Error: {}", err),
    }

    for expression in [expr, "1 + 6! - 2", "(3 plus 2) times 10 divided 2", "5 / 0", "((3)"] {
        match evaluate(expression) {
            Ok(result) => println!("{} = {}", expression, result),
            Err(err) => println!("{} -> Error: {}", expression, err),
        }
    }
}
