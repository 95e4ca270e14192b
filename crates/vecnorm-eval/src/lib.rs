//! Host evaluator boundary for vecnorm
//!
//! Functions are registered in a [`SymbolTable`] together with the call
//! shapes they accept. The [`Evaluator`] parses a call, matches its argument
//! kinds against those shapes, binds borrowed views over the host's storage
//! and invokes the function with the index of the matched shape.

pub mod builtins;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod function;
pub mod registry;
pub mod signature;
pub mod symbol_table;

// Re-exports
pub use builtins::norm::Norm;
pub use config::{ExponentPolicy, NormConfig};
pub use error::{EvalError, SignatureError};
pub use evaluator::Evaluator;
pub use function::GenericFunction;
pub use signature::ParameterSequence;
pub use symbol_table::SymbolTable;
