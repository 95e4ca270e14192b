//! Call evaluation
//!
//! One evaluation runs: parse, resolve the function, bind the arguments,
//! match the argument kinds against the function's signature, invoke.
//! Bound variables are read through recursive read guards held for the
//! duration of the call, so the host must not hold a write guard on a
//! binding while evaluating an expression that uses it.

use crate::error::EvalError;
use crate::function::GenericFunction;
use crate::symbol_table::SymbolTable;
use num_traits::Float;
use std::sync::Arc;
use tracing::{debug, instrument};
use vecnorm_parser::{Arg, Call};
use vecnorm_types::sync::RwLockReadGuard;
use vecnorm_types::{kinds_token, GenericParam, ParamKind, ScalarView, VectorView};

/// Storage behind one argument while a call runs
enum Bound<'s, T> {
    SharedVector(RwLockReadGuard<'s, Vec<T>>),
    SharedScalar(RwLockReadGuard<'s, T>),
    LiteralVector(Vec<T>),
    LiteralScalar(T),
}

impl<'s, T: Copy> Bound<'s, T> {
    fn view(&self) -> GenericParam<'_, T> {
        match self {
            Bound::SharedVector(guard) => GenericParam::Vector(VectorView::new(guard.as_slice())),
            Bound::SharedScalar(guard) => GenericParam::Scalar(ScalarView::new(&**guard)),
            Bound::LiteralVector(values) => GenericParam::Vector(VectorView::new(values)),
            Bound::LiteralScalar(value) => GenericParam::Scalar(ScalarView::new(value)),
        }
    }
}

/// Evaluates call expressions against a symbol table
pub struct Evaluator<T> {
    symbols: SymbolTable<T>,
}

impl<T: Float + 'static> Evaluator<T> {
    pub fn new(symbols: SymbolTable<T>) -> Self {
        Self { symbols }
    }

    pub fn symbols(&self) -> &SymbolTable<T> {
        &self.symbols
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolTable<T> {
        &mut self.symbols
    }

    /// Parse and evaluate `source`
    #[instrument(level = "debug", skip(self))]
    pub fn evaluate(&self, source: &str) -> Result<T, EvalError> {
        let call = vecnorm_parser::parse(source).map_err(EvalError::Parse)?;
        self.evaluate_call(&call)
    }

    /// Evaluate an already parsed call
    pub fn evaluate_call(&self, call: &Call) -> Result<T, EvalError> {
        let function: &Arc<dyn GenericFunction<T>> = self
            .symbols
            .function(&call.name)
            .ok_or_else(|| EvalError::UnknownFunction(call.name.clone()))?;

        let bound = call
            .args
            .iter()
            .map(|arg| self.bind(arg))
            .collect::<Result<Vec<_>, _>>()?;
        let params: Vec<GenericParam<'_, T>> = bound.iter().map(Bound::view).collect();
        let kinds: Vec<ParamKind> = params.iter().map(GenericParam::kind).collect();

        let signatures = function.parameter_sequence();
        let index = signatures
            .resolve(&kinds)
            .ok_or_else(|| EvalError::NoMatchingSignature {
                function: call.name.clone(),
                got: kinds_token(&kinds),
                expected: signatures.to_string(),
            })?;

        debug!(
            function = %call.name,
            signature = %kinds_token(&kinds),
            index,
            "resolved call"
        );
        Ok(function.call(index, &params))
    }

    fn bind(&self, arg: &Arg) -> Result<Bound<'_, T>, EvalError> {
        match arg {
            Arg::Number(n) => Ok(Bound::LiteralScalar(literal(*n))),
            Arg::Vector(values) => Ok(Bound::LiteralVector(
                values.iter().map(|v| literal(*v)).collect(),
            )),
            Arg::Identifier(name) => {
                if let Some(handle) = self.symbols.vector(name) {
                    Ok(Bound::SharedVector(handle.read_recursive()))
                } else if let Some(handle) = self.symbols.scalar(name) {
                    Ok(Bound::SharedScalar(handle.read_recursive()))
                } else {
                    Err(EvalError::UndefinedVariable(name.clone()))
                }
            }
        }
    }
}

/// Literals are read as f64; narrower types saturate to +/-inf
fn literal<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}
