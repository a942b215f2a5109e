mod converter;
mod executor;

pub use converter::to_rpn;
pub use executor::evaluate_rpn;
