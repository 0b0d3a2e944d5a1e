//! Conditional synchronization primitives
//!
//! The process-wide order registry is the only shared mutable state in the
//! crate. Its lock switches on the `threading` feature:
//!
//! - With `threading`: parking_lot (const-constructible, no poisoning)
//! - Without `threading`: std::sync

#[cfg(feature = "threading")]
pub use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[cfg(not(feature = "threading"))]
pub use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Build an RwLock usable in a `static`
#[cfg(feature = "threading")]
#[inline]
pub const fn const_rwlock<T>(value: T) -> RwLock<T> {
    parking_lot::const_rwlock(value)
}

#[cfg(not(feature = "threading"))]
#[inline]
pub const fn const_rwlock<T>(value: T) -> RwLock<T> {
    RwLock::new(value)
}

/// Read lock an RwLock, handling both parking_lot and std::sync APIs
#[cfg(feature = "threading")]
#[inline]
pub fn read_lock<T>(rwlock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    rwlock.read()
}

/// Read lock an RwLock, recovering the guard if a writer panicked
#[cfg(not(feature = "threading"))]
#[inline]
pub fn read_lock<T>(rwlock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    rwlock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Write lock an RwLock, handling both parking_lot and std::sync APIs
#[cfg(feature = "threading")]
#[inline]
pub fn write_lock<T>(rwlock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    rwlock.write()
}

/// Write lock an RwLock, recovering the guard if a writer panicked
#[cfg(not(feature = "threading"))]
#[inline]
pub fn write_lock<T>(rwlock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    rwlock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}
