//! Order Resolution
//!
//! First available wins:
//! 1. the instance's explicit order
//! 2. the variant's declared order
//! 3. the registry's default order, if it names exactly the instance's keys
//! 4. the keys in reverse lexicographic order

use super::registry::OrderRegistry;
use super::sequence::Order;

/// Inputs to resolution for one coordinate
#[derive(Debug, Clone, Copy)]
pub struct OrderSources<'a> {
    /// Order set on the instance itself
    pub explicit: Option<&'a Order>,
    /// Order declared by the instance's fixed-key variant
    pub declared: Option<&'a [&'static str]>,
}

/// Resolve the order for a coordinate holding `keys`
pub fn resolve_order<'a, I>(sources: OrderSources<'_>, registry: &OrderRegistry, keys: I) -> Order
where
    I: IntoIterator<Item = &'a str> + Clone,
{
    if let Some(order) = sources.explicit {
        return order.clone();
    }

    if let Some(declared) = sources.declared {
        let order = Order::new(declared.iter().copied());
        if order.is_permutation_of(keys.clone()) {
            return order;
        }
    }

    if let Some(order) = registry.default_order() {
        if order.is_permutation_of(keys.clone()) {
            return order;
        }
        tracing::trace!(order = %order, "default order does not match keys, ignored");
    }

    Order::reverse_lexicographic(keys)
}

/// Order available to name positional values before any keys exist:
/// explicit, then declared, then the registry default
pub fn positional_order(
    explicit: Option<&Order>,
    declared: Option<&'static [&'static str]>,
    registry: &OrderRegistry,
) -> Option<Order> {
    explicit
        .cloned()
        .or_else(|| declared.map(|keys| Order::new(keys.iter().copied())))
        .or_else(|| registry.default_order())
}
