//! Error types for registration and evaluation
//!
//! Domain errors inside registered functions never show up here: those are
//! NaN results. These errors cover everything the host rejects before a
//! function is invoked.

use thiserror::Error;

/// Malformed signature pattern
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    #[error("Invalid token '{token}' at position {position} in signature '{pattern}'")]
    InvalidToken {
        pattern: String,
        token: char,
        position: usize,
    },

    #[error("Empty alternative in signature '{0}'")]
    EmptyAlternative(String),

    #[error("Duplicate alternative '{alternative}' in signature '{pattern}'")]
    DuplicateAlternative { pattern: String, alternative: String },
}

/// Registration and evaluation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("Undefined variable: {0}")]
    UndefinedVariable(String),

    /// Argument kinds match none of the registered alternatives
    #[error("No signature of {function}() accepts ({got}), expected one of: {expected}")]
    NoMatchingSignature {
        function: String,
        got: String,
        expected: String,
    },

    #[error("Invalid symbol name: '{0}'")]
    InvalidSymbolName(String),

    #[error("Symbol already defined: {0}")]
    DuplicateSymbol(String),

    #[error("Too many functions registered (max 65536)")]
    RegistryFull,

    #[error("Function '{0}' registered without any accepted call shape")]
    EmptySignature(String),

    #[error(transparent)]
    Signature(#[from] SignatureError),
}
