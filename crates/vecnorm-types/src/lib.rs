pub mod sync;
pub mod view;

// Re-exports
pub use sync::{shared, Shared};
pub use view::{kinds_token, GenericParam, ParamKind, ScalarView, VectorView};
