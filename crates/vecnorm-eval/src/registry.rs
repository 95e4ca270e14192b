//! Function registry for the evaluator
//!
//! Functions are looked up by name when a call is resolved and kept in
//! registration order so listings are stable.

use crate::error::EvalError;
use crate::function::GenericFunction;
use std::collections::HashMap;
use std::sync::Arc;

/// A registered function together with its name
pub struct FunctionEntry<T> {
    /// Function name
    pub name: String,
    /// Shared callable
    pub func: Arc<dyn GenericFunction<T>>,
}

impl<T> Clone for FunctionEntry<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            func: Arc::clone(&self.func),
        }
    }
}

/// Registry of callable functions
///
/// Provides O(1) lookup by both name and numeric ID
pub struct FunctionRegistry<T> {
    /// Name to index mapping
    name_to_id: HashMap<String, u16>,
    /// Index to function mapping
    functions: Vec<FunctionEntry<T>>,
}

impl<T> FunctionRegistry<T> {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            name_to_id: HashMap::new(),
            functions: Vec::new(),
        }
    }

    /// Register a function under a unique name
    ///
    /// Returns the numeric ID assigned to the function.
    pub fn register(
        &mut self,
        name: &str,
        func: Arc<dyn GenericFunction<T>>,
    ) -> Result<u16, EvalError> {
        if self.name_to_id.contains_key(name) {
            return Err(EvalError::DuplicateSymbol(name.to_string()));
        }
        if func.parameter_sequence().is_empty() {
            return Err(EvalError::EmptySignature(name.to_string()));
        }

        let id = u16::try_from(self.functions.len()).map_err(|_| EvalError::RegistryFull)?;

        self.name_to_id.insert(name.to_string(), id);
        self.functions.push(FunctionEntry {
            name: name.to_string(),
            func,
        });
        Ok(id)
    }

    /// Get function by ID
    #[inline]
    pub fn get(&self, id: u16) -> Option<&FunctionEntry<T>> {
        self.functions.get(id as usize)
    }

    /// Get function ID by name
    #[inline]
    pub fn get_id(&self, name: &str) -> Option<u16> {
        self.name_to_id.get(name).copied()
    }

    /// Get function by name
    pub fn get_by_name(&self, name: &str) -> Option<&FunctionEntry<T>> {
        self.get_id(name).and_then(|id| self.get(id))
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.name_to_id.contains_key(name)
    }

    /// Registered functions in registration order
    pub fn iter(&self) -> impl Iterator<Item = &FunctionEntry<T>> {
        self.functions.iter()
    }

    /// Get number of registered functions
    #[inline]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Check if registry is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl<T> Default for FunctionRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::ParameterSequence;
    use vecnorm_types::GenericParam;

    struct Count {
        signatures: ParameterSequence,
    }

    impl Count {
        fn new(pattern: &str) -> Self {
            Self {
                signatures: ParameterSequence::parse(pattern).unwrap(),
            }
        }
    }

    impl GenericFunction<f64> for Count {
        fn parameter_sequence(&self) -> &ParameterSequence {
            &self.signatures
        }

        fn call(&self, _signature_index: usize, params: &[GenericParam<'_, f64>]) -> f64 {
            params.len() as f64
        }
    }

    #[test]
    fn test_registry_basic() {
        let mut registry: FunctionRegistry<f64> = FunctionRegistry::new();
        assert_eq!(registry.len(), 0);
        assert!(registry.is_empty());

        let id = registry.register("count", Arc::new(Count::new("V"))).unwrap();
        assert_eq!(id, 0);
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());

        assert_eq!(registry.get_id("count"), Some(0));
        assert_eq!(registry.get_id("nonexistent"), None);
        assert!(registry.contains("count"));
    }

    #[test]
    fn test_registry_multiple() {
        let mut registry: FunctionRegistry<f64> = FunctionRegistry::new();

        registry.register("a", Arc::new(Count::new("V"))).unwrap();
        registry.register("b", Arc::new(Count::new("V|VT"))).unwrap();
        registry.register("c", Arc::new(Count::new("TT"))).unwrap();

        assert_eq!(registry.get_id("a"), Some(0));
        assert_eq!(registry.get_id("b"), Some(1));
        assert_eq!(registry.get_id("c"), Some(2));

        let b = registry.get_by_name("b").unwrap();
        assert_eq!(b.name, "b");
        assert_eq!(b.func.parameter_sequence().to_string(), "V|VT");

        let names: Vec<&str> = registry.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_duplicate_registration() {
        let mut registry: FunctionRegistry<f64> = FunctionRegistry::new();
        registry.register("test", Arc::new(Count::new("V"))).unwrap();

        let err = registry
            .register("test", Arc::new(Count::new("V")))
            .unwrap_err();
        assert_eq!(err, EvalError::DuplicateSymbol("test".to_string()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_reject_empty_signature() {
        struct Nothing(ParameterSequence);

        impl GenericFunction<f64> for Nothing {
            fn parameter_sequence(&self) -> &ParameterSequence {
                &self.0
            }

            fn call(&self, _: usize, _: &[GenericParam<'_, f64>]) -> f64 {
                0.0
            }
        }

        let mut registry: FunctionRegistry<f64> = FunctionRegistry::new();
        let err = registry
            .register("nothing", Arc::new(Nothing(ParameterSequence::new(vec![]))))
            .unwrap_err();
        assert_eq!(err, EvalError::EmptySignature("nothing".to_string()));
    }
}
