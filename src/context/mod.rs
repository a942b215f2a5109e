mod builder;
mod symbols;

pub use builder::MathContextBuilder;
pub use symbols::*;

use crate::error::{ExpressionError, ExpressionResult, SymbolKind};
use lazy_static::lazy_static;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

lazy_static! {
    static ref DEFAULT_CONTEXT: Arc<MathContext> =
        Arc::new(MathContextBuilder::with_defaults().build());
}

/// The registry every evaluation starts from when no context is supplied.
/// Built once on first use and shared afterwards.
pub fn default_context() -> Arc<MathContext> {
    Arc::clone(&DEFAULT_CONTEXT)
}

/// Anything that can name a symbol. Lookups are case-insensitive, so every
/// name is folded to lowercase before it reaches a table.
pub trait SymbolName {
    fn symbol_key(&self) -> Cow<'_, str>;
}

fn fold_case(name: &str) -> Cow<'_, str> {
    if name.chars().any(char::is_uppercase) {
        Cow::Owned(name.to_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}

impl SymbolName for &str {
    fn symbol_key(&self) -> Cow<'_, str> {
        fold_case(self)
    }
}

impl SymbolName for String {
    fn symbol_key(&self) -> Cow<'_, str> {
        fold_case(self)
    }
}

impl SymbolName for &String {
    fn symbol_key(&self) -> Cow<'_, str> {
        fold_case(self)
    }
}

impl SymbolName for char {
    fn symbol_key(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_lowercase().collect())
    }
}

/// Operator, function and value tables. Shared by reference between a
/// context and every context derived from it.
#[derive(Clone, Default)]
pub(crate) struct SymbolTable {
    pub(crate) functions: HashMap<String, Function>,
    pub(crate) binary_operators: HashMap<String, BinaryOperator>,
    pub(crate) unary_operators: HashMap<String, UnaryOperator>,
}

/// Read-only symbol registry consulted by the tokenizer, the converter and
/// the evaluator.
#[derive(Clone)]
pub struct MathContext {
    pub(crate) symbols: Arc<SymbolTable>,
    pub(crate) values: HashMap<String, f64>,
}

impl MathContext {
    pub fn builder() -> MathContextBuilder {
        MathContextBuilder::new()
    }

    pub fn is_function<N: SymbolName>(&self, name: N) -> bool {
        self.symbols.functions.contains_key(name.symbol_key().as_ref())
    }

    pub fn is_binary_operator<N: SymbolName>(&self, symbol: N) -> bool {
        self.symbols
            .binary_operators
            .contains_key(symbol.symbol_key().as_ref())
    }

    pub fn is_unary_operator<N: SymbolName>(&self, symbol: N) -> bool {
        self.symbols
            .unary_operators
            .contains_key(symbol.symbol_key().as_ref())
    }

    pub fn is_value<N: SymbolName>(&self, name: N) -> bool {
        self.values.contains_key(name.symbol_key().as_ref())
    }

    pub fn try_get_function<N: SymbolName>(&self, name: N) -> Option<&Function> {
        self.symbols.functions.get(name.symbol_key().as_ref())
    }

    pub fn try_get_binary_operator<N: SymbolName>(&self, symbol: N) -> Option<&BinaryOperator> {
        self.symbols
            .binary_operators
            .get(symbol.symbol_key().as_ref())
    }

    pub fn try_get_unary_operator<N: SymbolName>(&self, symbol: N) -> Option<&UnaryOperator> {
        self.symbols
            .unary_operators
            .get(symbol.symbol_key().as_ref())
    }

    pub fn try_get_value<N: SymbolName>(&self, name: N) -> Option<f64> {
        self.values.get(name.symbol_key().as_ref()).copied()
    }

    pub fn get_function<N: SymbolName>(&self, name: N) -> ExpressionResult<&Function> {
        let key = name.symbol_key();
        self.symbols
            .functions
            .get(key.as_ref())
            .ok_or_else(|| ExpressionError::not_found(SymbolKind::Function, key.as_ref()))
    }

    pub fn get_binary_operator<N: SymbolName>(&self, symbol: N) -> ExpressionResult<&BinaryOperator> {
        let key = symbol.symbol_key();
        self.symbols
            .binary_operators
            .get(key.as_ref())
            .ok_or_else(|| ExpressionError::not_found(SymbolKind::BinaryOperator, key.as_ref()))
    }

    pub fn get_unary_operator<N: SymbolName>(&self, symbol: N) -> ExpressionResult<&UnaryOperator> {
        let key = symbol.symbol_key();
        self.symbols
            .unary_operators
            .get(key.as_ref())
            .ok_or_else(|| ExpressionError::not_found(SymbolKind::UnaryOperator, key.as_ref()))
    }

    pub fn get_value<N: SymbolName>(&self, name: N) -> ExpressionResult<f64> {
        let key = name.symbol_key();
        self.values
            .get(key.as_ref())
            .copied()
            .ok_or_else(|| ExpressionError::not_found(SymbolKind::Value, key.as_ref()))
    }

    /// Derives a context with extra values layered on top. Existing names are
    /// overwritten. Operators and functions stay shared with `self`.
    pub fn with_variables<N, I>(&self, variables: I) -> MathContext
    where
        N: SymbolName,
        I: IntoIterator<Item = (N, f64)>,
    {
        let mut values = self.values.clone();
        for (name, value) in variables {
            values.insert(name.symbol_key().into_owned(), value);
        }
        MathContext {
            symbols: Arc::clone(&self.symbols),
            values,
        }
    }

    /// Like [`MathContext::with_variables`], but refuses to shadow a name
    /// that already holds a value.
    pub fn with_constants<N, I>(&self, constants: I) -> ExpressionResult<MathContext>
    where
        N: SymbolName,
        I: IntoIterator<Item = (N, f64)>,
    {
        let mut values = self.values.clone();
        for (name, value) in constants {
            let key = name.symbol_key().into_owned();
            if values.contains_key(&key) {
                return Err(ExpressionError::DuplicateSymbol {
                    kind: SymbolKind::Value,
                    name: key,
                });
            }
            values.insert(key, value);
        }
        Ok(MathContext {
            symbols: Arc::clone(&self.symbols),
            values,
        })
    }

    pub fn variables(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.symbols.functions.keys().map(String::as_str)
    }

    pub fn binary_operator_symbols(&self) -> impl Iterator<Item = &str> {
        self.symbols.binary_operators.keys().map(String::as_str)
    }

    pub fn unary_operator_symbols(&self) -> impl Iterator<Item = &str> {
        self.symbols.unary_operators.keys().map(String::as_str)
    }

    /// True when `other` was derived from the same symbol tables.
    pub fn shares_symbols_with(&self, other: &MathContext) -> bool {
        Arc::ptr_eq(&self.symbols, &other.symbols)
    }
}

impl Default for MathContext {
    fn default() -> Self {
        (*default_context()).clone()
    }
}

impl std::fmt::Debug for MathContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MathContext")
            .field("functions", &self.symbols.functions.len())
            .field("binary_operators", &self.symbols.binary_operators.len())
            .field("unary_operators", &self.symbols.unary_operators.len())
            .field("values", &self.values)
            .finish()
    }
}
