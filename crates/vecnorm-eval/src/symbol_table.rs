//! Named bindings visible to expressions
//!
//! Vectors and scalars are stored as [`Shared`] handles so the host
//! application keeps ownership and can update values between evaluations.
//! Vectors, scalars and functions share a single namespace.

use crate::error::EvalError;
use crate::function::GenericFunction;
use crate::registry::FunctionRegistry;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::trace;
use vecnorm_types::{shared, Shared};

/// Names that the parser reads as numeric literals
const RESERVED: &[&str] = &["NaN", "inf", "Infinity"];

pub struct SymbolTable<T> {
    vectors: HashMap<String, Shared<Vec<T>>>,
    scalars: HashMap<String, Shared<T>>,
    functions: FunctionRegistry<T>,
}

impl<T> SymbolTable<T> {
    pub fn new() -> Self {
        Self {
            vectors: HashMap::new(),
            scalars: HashMap::new(),
            functions: FunctionRegistry::new(),
        }
    }

    /// Bind a vector and return the handle the host keeps
    pub fn add_vector(&mut self, name: &str, values: Vec<T>) -> Result<Shared<Vec<T>>, EvalError> {
        let handle = shared(values);
        self.add_shared_vector(name, Arc::clone(&handle))?;
        Ok(handle)
    }

    /// Bind storage the host already owns
    pub fn add_shared_vector(&mut self, name: &str, handle: Shared<Vec<T>>) -> Result<(), EvalError> {
        self.check_new_name(name)?;
        trace!(symbol = name, len = handle.read().len(), "bind vector");
        self.vectors.insert(name.to_string(), handle);
        Ok(())
    }

    /// Bind a scalar and return the handle the host keeps
    pub fn add_scalar(&mut self, name: &str, value: T) -> Result<Shared<T>, EvalError> {
        self.check_new_name(name)?;
        trace!(symbol = name, "bind scalar");
        let handle = shared(value);
        self.scalars.insert(name.to_string(), Arc::clone(&handle));
        Ok(handle)
    }

    /// Register a function under `name`
    pub fn add_function(
        &mut self,
        name: &str,
        func: Arc<dyn GenericFunction<T>>,
    ) -> Result<(), EvalError> {
        self.check_new_name(name)?;
        let id = self.functions.register(name, func)?;
        trace!(symbol = name, id, "register function");
        Ok(())
    }

    pub fn vector(&self, name: &str) -> Option<&Shared<Vec<T>>> {
        self.vectors.get(name)
    }

    pub fn scalar(&self, name: &str) -> Option<&Shared<T>> {
        self.scalars.get(name)
    }

    pub fn function(&self, name: &str) -> Option<&Arc<dyn GenericFunction<T>>> {
        self.functions.get_by_name(name).map(|entry| &entry.func)
    }

    pub fn functions(&self) -> &FunctionRegistry<T> {
        &self.functions
    }

    pub fn symbol_exists(&self, name: &str) -> bool {
        self.vectors.contains_key(name)
            || self.scalars.contains_key(name)
            || self.functions.contains(name)
    }

    fn check_new_name(&self, name: &str) -> Result<(), EvalError> {
        if !is_valid_symbol_name(name) {
            return Err(EvalError::InvalidSymbolName(name.to_string()));
        }
        if self.symbol_exists(name) {
            return Err(EvalError::DuplicateSymbol(name.to_string()));
        }
        Ok(())
    }
}

impl<T> Default for SymbolTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifier rules of the call grammar, minus the numeric keywords
pub fn is_valid_symbol_name(name: &str) -> bool {
    let mut chars = name.chars();
    let head_ok = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');

    head_ok
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !RESERVED.contains(&name)
}
