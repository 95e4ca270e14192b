//! Signature patterns for generic functions
//!
//! A pattern lists the call shapes a function accepts, separated by `|`.
//! Each shape is a sequence of kind tokens: `V` for a vector operand and
//! `T` for a scalar operand. `"V|VT"` accepts `f(v)` and `f(v, s)`.
//!
//! The index of the matching shape is what the function receives at call
//! time, so alternatives keep their declaration order.

use crate::error::SignatureError;
use std::fmt;
use vecnorm_types::{kinds_token, ParamKind};

/// Ordered set of accepted call shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSequence {
    alternatives: Vec<Vec<ParamKind>>,
}

impl ParameterSequence {
    /// Build from already-typed alternatives
    pub fn new(alternatives: Vec<Vec<ParamKind>>) -> Self {
        Self { alternatives }
    }

    /// Parse a pattern such as `"V|VT"`
    pub fn parse(pattern: &str) -> Result<Self, SignatureError> {
        let mut alternatives: Vec<Vec<ParamKind>> = Vec::new();
        let mut position = 0;

        for alternative in pattern.split('|') {
            if alternative.is_empty() {
                return Err(SignatureError::EmptyAlternative(pattern.to_string()));
            }

            let mut kinds = Vec::with_capacity(alternative.len());
            for token in alternative.chars() {
                let kind = ParamKind::from_token(token).ok_or_else(|| {
                    SignatureError::InvalidToken {
                        pattern: pattern.to_string(),
                        token,
                        position,
                    }
                })?;
                kinds.push(kind);
                position += token.len_utf8();
            }
            // Skip the separator
            position += 1;

            if alternatives.contains(&kinds) {
                return Err(SignatureError::DuplicateAlternative {
                    pattern: pattern.to_string(),
                    alternative: alternative.to_string(),
                });
            }
            alternatives.push(kinds);
        }

        Ok(Self { alternatives })
    }

    /// Index of the first alternative matching `kinds` exactly
    pub fn resolve(&self, kinds: &[ParamKind]) -> Option<usize> {
        self.alternatives.iter().position(|alt| alt.as_slice() == kinds)
    }

    pub fn alternatives(&self) -> &[Vec<ParamKind>] {
        &self.alternatives
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}

impl fmt::Display for ParameterSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.alternatives.iter().map(|a| kinds_token(a)).collect();
        write!(f, "{}", rendered.join("|"))
    }
}
