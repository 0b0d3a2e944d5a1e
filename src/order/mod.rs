//! Key Ordering
//!
//! Orders only affect presentation: extraction as lists, key/value/item
//! sequences and rendering. Equality and hashing never consult them.

pub mod registry;
pub mod resolve;
pub mod sequence;

pub use registry::OrderRegistry;
pub use resolve::{positional_order, resolve_order, OrderSources};
pub use sequence::Order;
