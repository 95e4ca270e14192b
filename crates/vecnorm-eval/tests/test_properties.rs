//! Property tests for the norm computation paths

use approx::relative_eq;
use proptest::prelude::*;
use vecnorm_eval::builtins::norm::{
    norm_general, Exponent, Norm, MAX_FIXED_EXPONENT, SIGNATURE, SIG_VECTOR, SIG_VECTOR_EXPONENT,
};
use vecnorm_eval::{ExponentPolicy, GenericFunction, ParameterSequence};
use vecnorm_types::{GenericParam, ScalarView, VectorView};

fn call(norm: &Norm<f64>, data: &[f64], p: Option<f64>) -> f64 {
    match p {
        None => norm.call(SIG_VECTOR, &[GenericParam::Vector(VectorView::new(data))]),
        Some(p) => norm.call(
            SIG_VECTOR_EXPONENT,
            &[
                GenericParam::Vector(VectorView::new(data)),
                GenericParam::Scalar(ScalarView::new(&p)),
            ],
        ),
    }
}

fn norm_with(policy: ExponentPolicy) -> Norm<f64> {
    Norm::new(ParameterSequence::parse(SIGNATURE).unwrap(), policy)
}

fn same_or_both_nan(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}

fn vector() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-100.0f64..100.0, 0..64)
}

fn positive_vector() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..10.0, 1..64)
}

proptest! {
    #[test]
    fn prop_default_exponent_is_two(v in vector()) {
        let norm = norm_with(ExponentPolicy::IntegerOnly);
        prop_assert!(same_or_both_nan(call(&norm, &v, None), call(&norm, &v, Some(2.0))));
    }

    #[test]
    fn prop_p1_is_signed_sum(v in vector()) {
        let norm = norm_with(ExponentPolicy::IntegerOnly);
        let sum = v.iter().fold(0.0, |acc, x| acc + x);
        prop_assert_eq!(call(&norm, &v, Some(1.0)), sum);
    }

    #[test]
    fn prop_p2_is_root_of_squares(v in vector()) {
        let norm = norm_with(ExponentPolicy::IntegerOnly);
        let expected = v.iter().map(|x| x * x).sum::<f64>().sqrt();
        prop_assert!(relative_eq!(call(&norm, &v, Some(2.0)), expected, max_relative = 1e-12));
    }

    #[test]
    fn prop_fast_path_matches_general(
        v in positive_vector(),
        p in 1usize..=MAX_FIXED_EXPONENT,
    ) {
        let norm = norm_with(ExponentPolicy::IntegerOnly);
        let fast = norm.compute(VectorView::new(&v), Exponent::Fixed(p));
        let general = norm_general(VectorView::new(&v), p as f64);
        prop_assert!(
            relative_eq!(fast, general, max_relative = 1e-10),
            "p = {}: fast {} vs general {}", p, fast, general
        );
    }

    #[test]
    fn prop_below_one_is_nan(v in vector(), p in -1e6f64..1.0) {
        let norm = norm_with(ExponentPolicy::IntegerOnly);
        prop_assert!(call(&norm, &v, Some(p)).is_nan());
    }

    #[test]
    fn prop_fractional_rejected_by_default(v in vector(), whole in 1u32..64, frac in 0.01f64..0.99) {
        let norm = norm_with(ExponentPolicy::IntegerOnly);
        let p = whole as f64 + frac;
        prop_assert!(call(&norm, &v, Some(p)).is_nan());
    }

    #[test]
    fn prop_fractional_allowed_matches_general(v in positive_vector(), p in 1.0f64..40.0) {
        let norm = norm_with(ExponentPolicy::AllowFractional);
        let expected = if p.fract() == 0.0 && p <= MAX_FIXED_EXPONENT as f64 {
            norm.compute(VectorView::new(&v), Exponent::Fixed(p as usize))
        } else {
            norm_general(VectorView::new(&v), p)
        };
        prop_assert!(same_or_both_nan(call(&norm, &v, Some(p)), expected));
    }

    #[test]
    fn prop_repeated_calls_are_bit_identical(v in vector(), p in 1u32..48) {
        let norm = norm_with(ExponentPolicy::IntegerOnly);
        let first = call(&norm, &v, Some(p as f64));
        for _ in 0..3 {
            prop_assert!(same_or_both_nan(first, call(&norm, &v, Some(p as f64))));
        }
    }
}
