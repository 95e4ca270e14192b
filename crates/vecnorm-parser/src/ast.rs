//! Syntax tree for call expressions

/// A parsed call such as `norm(x, 3)`
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub name: String,
    pub args: Vec<Arg>,
}

/// A single call argument
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Numeric literal: `3`, `-0.5`, `1e3`, `NaN`
    Number(f64),
    /// Vector literal: `[1, 2, 3]`
    Vector(Vec<f64>),
    /// Reference to a bound vector or scalar
    Identifier(String),
}
