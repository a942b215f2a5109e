use super::symbols::*;
use super::{MathContext, SymbolName, SymbolTable};
use crate::error::{ExpressionError, ExpressionResult, SymbolKind};
use crate::functions::register_functions;
use std::collections::HashMap;
use std::sync::Arc;

/// Mutable staging area for a [`MathContext`].
///
/// The `add_*` methods refuse to replace a symbol that is already registered
/// in the same table. `add_or_update_variable` is the one exception and
/// overwrites silently.
#[derive(Clone, Default)]
pub struct MathContextBuilder {
    symbols: SymbolTable,
    values: HashMap<String, f64>,
}

impl MathContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-populated with the built-in operators, functions and the
    /// `pi`, `e` and `infinity` constants.
    pub fn with_defaults() -> Self {
        let mut builder = Self::new();
        register_functions(&mut builder);
        builder.set_value("pi", std::f64::consts::PI);
        builder.set_value("e", std::f64::consts::E);
        builder.set_value("infinity", f64::INFINITY);
        builder
    }

    /// Starts from a copy of an existing context's symbols and values.
    pub fn from_context(context: &MathContext) -> Self {
        Self {
            symbols: (*context.symbols).clone(),
            values: context.values.clone(),
        }
    }

    pub fn add_or_update_variable<N: SymbolName>(&mut self, name: N, value: f64) -> &mut Self {
        self.values.insert(name.symbol_key().into_owned(), value);
        self
    }

    pub fn add_constant<N: SymbolName>(&mut self, name: N, value: f64) -> ExpressionResult<&mut Self> {
        let key = name.symbol_key().into_owned();
        ensure_vacant(&self.values, SymbolKind::Value, &key)?;
        self.values.insert(key, value);
        Ok(self)
    }

    pub fn add_binary_operator<F>(
        &mut self,
        symbol: &str,
        precedence: u8,
        associativity: Associativity,
        evaluate: F,
    ) -> ExpressionResult<&mut Self>
    where
        F: Fn(f64, f64) -> ExpressionResult<f64> + Send + Sync + 'static,
    {
        let operator = BinaryOperator::new(symbol, precedence, associativity, evaluate);
        ensure_vacant(
            &self.symbols.binary_operators,
            SymbolKind::BinaryOperator,
            &operator.symbol,
        )?;
        self.set_binary_operator(operator);
        Ok(self)
    }

    pub fn add_unary_operator<F>(
        &mut self,
        symbol: &str,
        notation: Notation,
        evaluate: F,
    ) -> ExpressionResult<&mut Self>
    where
        F: Fn(f64) -> ExpressionResult<f64> + Send + Sync + 'static,
    {
        let operator = UnaryOperator::new(symbol, notation, evaluate);
        ensure_vacant(
            &self.symbols.unary_operators,
            SymbolKind::UnaryOperator,
            &operator.symbol,
        )?;
        self.set_unary_operator(operator);
        Ok(self)
    }

    pub fn add_function<F>(&mut self, name: &str, arity: Arity, call: F) -> ExpressionResult<&mut Self>
    where
        F: Fn(&[f64]) -> ExpressionResult<f64> + Send + Sync + 'static,
    {
        let function = Function::new(name, arity, call);
        ensure_vacant(&self.symbols.functions, SymbolKind::Function, &function.name)?;
        self.set_function(function);
        Ok(self)
    }

    /// Registers a word operator such as `plus`. It is added both as a
    /// two-argument function and as a binary operator.
    pub fn add_infix_function<F>(
        &mut self,
        name: &str,
        precedence: u8,
        associativity: Associativity,
        evaluate: F,
    ) -> ExpressionResult<&mut Self>
    where
        F: Fn(f64, f64) -> ExpressionResult<f64> + Send + Sync + 'static,
    {
        let key = name.to_lowercase();
        ensure_vacant(&self.symbols.functions, SymbolKind::Function, &key)?;
        ensure_vacant(&self.symbols.binary_operators, SymbolKind::BinaryOperator, &key)?;
        self.set_infix_function(name, precedence, associativity, Arc::new(evaluate));
        Ok(self)
    }

    pub fn clear(&mut self) -> &mut Self {
        self.symbols = SymbolTable::default();
        self.values.clear();
        self
    }

    pub fn build(&self) -> MathContext {
        MathContext {
            symbols: Arc::new(self.symbols.clone()),
            values: self.values.clone(),
        }
    }

    // Unchecked inserts used while registering the built-in library.

    pub(crate) fn set_value(&mut self, name: &str, value: f64) {
        self.values.insert(name.to_lowercase(), value);
    }

    pub(crate) fn set_binary_operator(&mut self, operator: BinaryOperator) {
        self.symbols
            .binary_operators
            .insert(operator.symbol.clone(), operator);
    }

    pub(crate) fn set_unary_operator(&mut self, operator: UnaryOperator) {
        self.symbols
            .unary_operators
            .insert(operator.symbol.clone(), operator);
    }

    pub(crate) fn set_function(&mut self, function: Function) {
        self.symbols.functions.insert(function.name.clone(), function);
    }

    pub(crate) fn set_infix_function(
        &mut self,
        name: &str,
        precedence: u8,
        associativity: Associativity,
        evaluate: BinaryFn,
    ) {
        self.set_binary_operator(BinaryOperator::from_arc(
            name,
            precedence,
            associativity,
            Arc::clone(&evaluate),
        ));
        self.set_function(Function::infix(name, evaluate));
    }
}

fn ensure_vacant<V>(table: &HashMap<String, V>, kind: SymbolKind, name: &str) -> ExpressionResult<()> {
    if table.contains_key(name) {
        return Err(ExpressionError::DuplicateSymbol {
            kind,
            name: name.to_string(),
        });
    }
    Ok(())
}
