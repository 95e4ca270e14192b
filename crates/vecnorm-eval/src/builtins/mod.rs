//! Built-in functions
//!
//! - norm: generalized p-norm of a vector, `norm(v)` / `norm(v, p)`

pub mod norm;

use crate::config::NormConfig;
use crate::error::EvalError;
use crate::function::GenericFunction;
use crate::signature::ParameterSequence;
use crate::symbol_table::SymbolTable;
use norm::Norm;
use num_traits::Float;
use std::sync::Arc;

/// Register every built-in function in `symbols`
pub fn register_builtins<T: Float + 'static>(
    symbols: &mut SymbolTable<T>,
    config: &NormConfig,
) -> Result<(), EvalError> {
    let policy = config.exponent_policy;
    register_with_pattern(symbols, "norm", norm::SIGNATURE, |signatures| {
        Norm::new(signatures, policy)
    })
}

/// Parse `pattern` and register the function `build` makes from it
///
/// Nothing is registered when the pattern is malformed.
fn register_with_pattern<T, F, B>(
    symbols: &mut SymbolTable<T>,
    name: &str,
    pattern: &str,
    build: B,
) -> Result<(), EvalError>
where
    F: GenericFunction<T> + 'static,
    B: FnOnce(ParameterSequence) -> F,
{
    let signatures = ParameterSequence::parse(pattern)?;
    symbols.add_function(name, Arc::new(build(signatures)))
}
