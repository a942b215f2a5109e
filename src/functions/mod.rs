pub mod numeric;
pub mod operators;
pub mod trigonometric;
pub mod variadic;

use crate::context::MathContextBuilder;

/// Installs the built-in operators and functions. Registration replaces any
/// symbol of the same name already in `builder`.
pub fn register_functions(builder: &mut MathContextBuilder) {
    operators::register(builder);
    numeric::register(builder);
    trigonometric::register(builder);
    variadic::register(builder);
}
