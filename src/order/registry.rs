//! Process-wide Default Order
//!
//! The default order is shared state with an explicit lifecycle: absent at
//! process start, then set or cleared by any caller at any time. It is not
//! validated when set; each coordinate checks it against its own key set at
//! resolution time and ignores it on mismatch.
//!
//! [`OrderRegistry::global`] is the registry every coordinate consults by
//! default. Registries can also be built locally and injected into
//! resolution and construction, which keeps tests independent of the
//! process-wide value.

use super::sequence::Order;
use crate::sync::{const_rwlock, read_lock, write_lock, RwLock};

static GLOBAL: OrderRegistry = OrderRegistry::new();

/// Holder of a default order shared by every coordinate that consults it
#[derive(Debug)]
pub struct OrderRegistry {
    default: RwLock<Option<Order>>,
}

impl OrderRegistry {
    /// Empty registry (no default order)
    pub const fn new() -> Self {
        Self {
            default: const_rwlock(None),
        }
    }

    /// The process-wide registry
    pub fn global() -> &'static OrderRegistry {
        &GLOBAL
    }

    /// Current default order, if any
    pub fn default_order(&self) -> Option<Order> {
        read_lock(&self.default).clone()
    }

    /// Replace the default order, returning the previous one
    pub fn set_default_order(&self, order: impl Into<Order>) -> Option<Order> {
        let order = order.into();
        tracing::debug!(order = %order, "default order set");
        write_lock(&self.default).replace(order)
    }

    /// Remove the default order, returning the previous one
    pub fn clear_default_order(&self) -> Option<Order> {
        tracing::debug!("default order cleared");
        write_lock(&self.default).take()
    }

    /// Set the default order to `order`, or clear it when `None`
    pub fn replace_default_order(&self, order: Option<Order>) -> Option<Order> {
        match order {
            Some(order) => self.set_default_order(order),
            None => self.clear_default_order(),
        }
    }
}

impl Default for OrderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
