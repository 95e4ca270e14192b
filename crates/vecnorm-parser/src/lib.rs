pub mod ast;
pub mod parser;
pub mod pest_parser;

// Re-export commonly used items
pub use ast::{Arg, Call};
pub use parser::parse;
