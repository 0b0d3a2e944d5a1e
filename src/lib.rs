//! Coordinates
//!
//! Immutable labeled coordinates: a mapping from axis labels to numeric
//! values that behaves like a dictionary (key lookup, equality, hashing) and
//! like a vector (elementwise arithmetic, comparisons, norms).
//!
//! # Architecture
//!
//! - **Order**: axis orders, the process-wide default registry and the
//!   resolution chain (instance order, declared order, process default,
//!   reverse lexicographic)
//! - **Space**: key-set constraints and [`declare_space!`] for fixed-key
//!   variants
//! - **Coordinate**: the immutable mapping core, ordered extraction and
//!   rendering
//! - **Construct**: normalizing every construction call shape into one
//!   canonical store
//! - **Algebra**: elementwise arithmetic, comparisons, operator overloads
//!   and reductions
//! - **Config**: loading the default order from TOML
//!
//! # Example
//!
//! ```rust
//! use coordinates::prelude::*;
//!
//! let a = coordinate!(x = 1.0, y = 2.0);
//! let b = Coordinate::<f64>::from_pairs([("x", 3.0), ("y", 4.0)])?;
//!
//! let sum = (&a + &b)?;
//! assert_eq!(sum, coordinate!(x = 4.0, y = 6.0));
//! assert_eq!(sum.to_list_in("yx")?, vec![6.0, 4.0]);
//! assert_eq!(coordinate!(x = 3.0, y = 4.0).magnitude(), 5.0);
//! # Ok::<(), coordinates::Error>(())
//! ```

#![warn(missing_docs)]

pub mod algebra;
pub mod config;
pub mod construct;
pub mod coordinate;
pub mod error;
pub mod order;
pub mod scalar;
pub mod space;

pub(crate) mod sync;

pub use algebra::Operand;
pub use config::{ConfigError, OrderingConfig};
pub use construct::{CoordinateBuilder, FromSources, Source};
pub use coordinate::{Coordinate, Iter};
pub use error::{Error, Result};
pub use order::{Order, OrderRegistry};
pub use scalar::Scalar;
pub use space::{AnyKeys, KeySpace};

/// Prelude - commonly used types, traits and macros
pub mod prelude {
    pub use crate::config::OrderingConfig;
    pub use crate::construct::{CoordinateBuilder, Source};
    pub use crate::coordinate::Coordinate;
    pub use crate::error::{Error, Result};
    pub use crate::order::{Order, OrderRegistry};
    pub use crate::scalar::Scalar;
    pub use crate::space::{AnyKeys, KeySpace};
    pub use crate::{coordinate, declare_space};
}
