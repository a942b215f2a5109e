use crate::error::{ExpressionError, ExpressionResult};
use std::fmt;
use std::sync::Arc;

pub type BinaryFn = Arc<dyn Fn(f64, f64) -> ExpressionResult<f64> + Send + Sync>;
pub type UnaryFn = Arc<dyn Fn(f64) -> ExpressionResult<f64> + Send + Sync>;
pub type FunctionFn = Arc<dyn Fn(&[f64]) -> ExpressionResult<f64> + Send + Sync>;

/// Binding strength of binary operators. Higher binds tighter.
pub mod precedence {
    pub const VERY_LOW: u8 = 0;
    pub const LOW: u8 = 1;
    pub const NORMAL: u8 = 2;
    pub const HIGH: u8 = 3;
    pub const VERY_HIGH: u8 = 4;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Notation {
    Prefix,
    Postfix,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Arity {
    Fixed(usize),
    Variadic,
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            Arity::Fixed(expected) => *expected == count,
            Arity::Variadic => true,
        }
    }
}

#[derive(Clone)]
pub struct BinaryOperator {
    pub symbol: String,
    pub precedence: u8,
    pub associativity: Associativity,
    evaluate: BinaryFn,
}

impl BinaryOperator {
    pub fn new<F>(symbol: &str, precedence: u8, associativity: Associativity, evaluate: F) -> Self
    where
        F: Fn(f64, f64) -> ExpressionResult<f64> + Send + Sync + 'static,
    {
        Self::from_arc(symbol, precedence, associativity, Arc::new(evaluate))
    }

    pub(crate) fn from_arc(
        symbol: &str,
        precedence: u8,
        associativity: Associativity,
        evaluate: BinaryFn,
    ) -> Self {
        Self {
            symbol: symbol.to_lowercase(),
            precedence,
            associativity,
            evaluate,
        }
    }

    pub fn evaluate(&self, left: f64, right: f64) -> ExpressionResult<f64> {
        (self.evaluate)(left, right)
    }

    pub fn is_left_associative(&self) -> bool {
        self.associativity == Associativity::Left
    }
}

impl fmt::Debug for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryOperator")
            .field("symbol", &self.symbol)
            .field("precedence", &self.precedence)
            .field("associativity", &self.associativity)
            .finish()
    }
}

#[derive(Clone)]
pub struct UnaryOperator {
    pub symbol: String,
    pub notation: Notation,
    evaluate: UnaryFn,
}

impl UnaryOperator {
    pub fn new<F>(symbol: &str, notation: Notation, evaluate: F) -> Self
    where
        F: Fn(f64) -> ExpressionResult<f64> + Send + Sync + 'static,
    {
        Self {
            symbol: symbol.to_lowercase(),
            notation,
            evaluate: Arc::new(evaluate),
        }
    }

    pub fn evaluate(&self, operand: f64) -> ExpressionResult<f64> {
        (self.evaluate)(operand)
    }

    pub fn is_prefix(&self) -> bool {
        self.notation == Notation::Prefix
    }
}

impl fmt::Debug for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnaryOperator")
            .field("symbol", &self.symbol)
            .field("notation", &self.notation)
            .finish()
    }
}

/// A named callable. Infix functions (`plus`, `mod`) are also registered as
/// binary operators under the same name and always take two arguments.
#[derive(Clone)]
pub struct Function {
    pub name: String,
    pub arity: Arity,
    infix: bool,
    call: FunctionFn,
}

impl Function {
    pub fn new<F>(name: &str, arity: Arity, call: F) -> Self
    where
        F: Fn(&[f64]) -> ExpressionResult<f64> + Send + Sync + 'static,
    {
        Self {
            name: name.to_lowercase(),
            arity,
            infix: false,
            call: Arc::new(call),
        }
    }

    pub(crate) fn infix(name: &str, evaluate: BinaryFn) -> Self {
        let fn_name = name.to_lowercase();
        let error_name = fn_name.clone();
        Self {
            name: fn_name,
            arity: Arity::Fixed(2),
            infix: true,
            call: Arc::new(move |args: &[f64]| match args {
                [left, right] => evaluate(*left, *right),
                _ => Err(ExpressionError::ArgumentCount {
                    name: error_name.clone(),
                    expected: 2,
                    actual: args.len(),
                }),
            }),
        }
    }

    pub fn call(&self, args: &[f64]) -> ExpressionResult<f64> {
        (self.call)(args)
    }

    pub fn is_infix(&self) -> bool {
        self.infix
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("infix", &self.infix)
            .finish()
    }
}
