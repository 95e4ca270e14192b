//! Configuration for the built-in functions

use serde::{Deserialize, Serialize};

/// Which exponents `norm(v, p)` accepts besides the default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExponentPolicy {
    /// Only integral `p >= 1`; anything else yields NaN
    #[default]
    IntegerOnly,
    /// Any finite `p >= 1`; non-integral exponents take the general path
    AllowFractional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NormConfig {
    pub exponent_policy: ExponentPolicy,
}

impl NormConfig {
    pub fn with_exponent_policy(mut self, policy: ExponentPolicy) -> Self {
        self.exponent_policy = policy;
        self
    }
}
