//! Generalized vector norm
//!
//! `norm(v)` is the Euclidean norm and `norm(v, p)` the p-norm
//! `(Σ v_i^p)^(1/p)`. Integer exponents up to [`MAX_FIXED_EXPONENT`] go
//! through a table of routines specialized per exponent; every other
//! accepted exponent uses `powf`.
//!
//! Element powers are summed as they are, without taking absolute values:
//! `norm(v, 1)` is the signed sum of `v`, and an odd `p` over negative
//! entries can leave a negative sum whose fractional root is NaN.

use crate::config::ExponentPolicy;
use crate::function::GenericFunction;
use crate::signature::ParameterSequence;
use num_traits::Float;
use tracing::debug;
use vecnorm_types::{GenericParam, VectorView};

/// Largest exponent with a specialized routine
pub const MAX_FIXED_EXPONENT: usize = 32;

/// Exponent used by the vector-only form
pub const DEFAULT_EXPONENT: usize = 2;

/// Call shapes accepted by `norm`: a vector, or a vector and an exponent
pub const SIGNATURE: &str = "V|VT";

/// Signature index of `norm(v)`
pub const SIG_VECTOR: usize = 0;

/// Signature index of `norm(v, p)`
pub const SIG_VECTOR_EXPONENT: usize = 1;

type FixedNorm<T> = for<'a> fn(VectorView<'a, T>) -> T;

/// `x^N` by repeated squaring
///
/// `N` is a constant, so each instantiation unrolls into a fixed chain of
/// multiplications.
#[inline(always)]
pub fn fast_pow<T: Float, const N: usize>(x: T) -> T {
    let mut result = T::one();
    let mut base = x;
    let mut n = N;

    while n > 0 {
        if n & 1 == 1 {
            result = result * base;
        }
        n >>= 1;
        if n > 0 {
            base = base * base;
        }
    }

    result
}

/// p-norm for the constant exponent `N`
pub fn norm_fixed<T: Float, const N: usize>(vector: VectorView<'_, T>) -> T {
    let sum = vector
        .iter()
        .fold(T::zero(), |acc, x| acc + fast_pow::<T, N>(x));

    match N {
        1 => sum,
        2 => sum.sqrt(),
        _ => sum.powf(T::one() / as_float::<T>(N)),
    }
}

/// p-norm for an arbitrary exponent
pub fn norm_general<T: Float>(vector: VectorView<'_, T>, p: T) -> T {
    let sum = vector.iter().fold(T::zero(), |acc, x| acc + x.powf(p));
    sum.powf(T::one() / p)
}

fn as_float<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::nan)
}

macro_rules! fixed_norm_table {
    ($t:ty; $($n:literal)+) => {
        [$(norm_fixed::<$t, $n> as FixedNorm<$t>),+]
    };
}

fn build_fixed_table<T: Float>() -> [FixedNorm<T>; MAX_FIXED_EXPONENT] {
    fixed_norm_table!(T;
         1  2  3  4  5  6  7  8
         9 10 11 12 13 14 15 16
        17 18 19 20 21 22 23 24
        25 26 27 28 29 30 31 32
    )
}

/// Where a validated exponent is computed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Exponent<T> {
    /// Integer in `1..=MAX_FIXED_EXPONENT`
    Fixed(usize),
    /// Anything else that passed validation
    General(T),
}

impl<T> Exponent<T> {
    pub fn path(&self) -> &'static str {
        match self {
            Exponent::Fixed(_) => "fixed",
            Exponent::General(_) => "general",
        }
    }
}

/// Validate `p` and pick its computation path
///
/// Returns `None` when the call must yield NaN: `p` is NaN, infinite,
/// below 1, or non-integral under [`ExponentPolicy::IntegerOnly`].
pub fn classify_exponent<T: Float>(p: T, policy: ExponentPolicy) -> Option<Exponent<T>> {
    if !p.is_finite() || p < T::one() {
        return None;
    }

    let integral = p.fract() == T::zero();
    if !integral {
        return match policy {
            ExponentPolicy::IntegerOnly => None,
            ExponentPolicy::AllowFractional => Some(Exponent::General(p)),
        };
    }

    match p.to_usize() {
        Some(n) if n <= MAX_FIXED_EXPONENT => Some(Exponent::Fixed(n)),
        _ => Some(Exponent::General(p)),
    }
}

/// The `norm` builtin
///
/// Registered with the pattern [`SIGNATURE`]; the signature indices it
/// receives follow that pattern's order. Stateless apart from the dispatch
/// table, which is built once when the function is constructed.
pub struct Norm<T> {
    signatures: ParameterSequence,
    policy: ExponentPolicy,
    fixed: [FixedNorm<T>; MAX_FIXED_EXPONENT],
}

impl<T: Float> Norm<T> {
    /// `signatures` is the parsed [`SIGNATURE`]
    pub fn new(signatures: ParameterSequence, policy: ExponentPolicy) -> Self {
        Self {
            signatures,
            policy,
            fixed: build_fixed_table(),
        }
    }

    pub fn policy(&self) -> ExponentPolicy {
        self.policy
    }

    /// Norm of `vector` for an already validated exponent
    pub fn compute(&self, vector: VectorView<'_, T>, exponent: Exponent<T>) -> T {
        match exponent {
            Exponent::Fixed(n) => match self.fixed.get(n.wrapping_sub(1)) {
                Some(routine) => routine(vector),
                None => norm_general(vector, as_float(n)),
            },
            Exponent::General(p) => norm_general(vector, p),
        }
    }
}

impl<T: Float> GenericFunction<T> for Norm<T> {
    fn parameter_sequence(&self) -> &ParameterSequence {
        &self.signatures
    }

    fn call(&self, signature_index: usize, params: &[GenericParam<'_, T>]) -> T {
        let Some(vector) = params.first().and_then(GenericParam::as_vector) else {
            return T::nan();
        };

        let exponent = match signature_index {
            SIG_VECTOR => Exponent::Fixed(DEFAULT_EXPONENT),
            SIG_VECTOR_EXPONENT => {
                let classified = params
                    .get(1)
                    .and_then(GenericParam::as_scalar)
                    .and_then(|p| classify_exponent(p, self.policy));
                match classified {
                    Some(exponent) => exponent,
                    None => {
                        debug!("norm: exponent rejected");
                        return T::nan();
                    }
                }
            }
            _ => return T::nan(),
        };

        debug!(len = vector.len(), path = exponent.path(), "norm: dispatch");
        self.compute(vector, exponent)
    }
}
