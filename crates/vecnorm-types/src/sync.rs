//! Shared storage for host bindings.
//!
//! Bindings live behind parking_lot locks:
//! - No poisoning, so a panicking writer elsewhere never wedges evaluation.
//! - Read guards are cheap when uncontended, which is the common case.
//!
//! The evaluator holds read guards for exactly one call, so a host thread
//! that wants to update a vector simply takes the write lock between
//! evaluations.

pub use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
pub use std::sync::Arc;

/// Alias for the common pattern Arc<RwLock<T>>
pub type Shared<T> = Arc<RwLock<T>>;

/// Helper to create Shared<T> easily
pub fn shared<T>(value: T) -> Shared<T> {
    Arc::new(RwLock::new(value))
}
