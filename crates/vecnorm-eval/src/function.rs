//! The callable interface registered functions implement

use crate::signature::ParameterSequence;
use vecnorm_types::GenericParam;

/// A function callable with a mix of vector and scalar operands
///
/// The host matches each call against [`parameter_sequence`] before
/// invoking [`call`], so implementations can trust that `params` has the
/// shape of alternative `signature_index`. Failures inside the function are
/// reported through the numeric result (NaN), never by panicking.
///
/// [`parameter_sequence`]: GenericFunction::parameter_sequence
/// [`call`]: GenericFunction::call
pub trait GenericFunction<T>: Send + Sync {
    /// Accepted call shapes, in the order their indices are reported
    fn parameter_sequence(&self) -> &ParameterSequence;

    /// Evaluate once with the bound parameter list
    fn call(&self, signature_index: usize, params: &[GenericParam<'_, T>]) -> T;
}
