//! Error types for coordinates

use thiserror::Error;

/// Result type alias for coordinate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, reading or combining coordinates
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Lookup of a key the coordinate does not hold
    #[error("Key not found: '{0}'")]
    KeyNotFound(String),

    /// Attribute-style lookup with a name that is not identifier-shaped
    #[error("'{0}' is not a valid attribute name")]
    InvalidIdentifier(String),

    /// More than one source of keys was supplied to a single construction
    #[error("Ambiguous construction: {0}")]
    AmbiguousConstruction(String),

    /// Positional construction with no order available to name the values
    #[error("Cannot parse positional values with no order")]
    OrderUnresolved,

    /// Positional values do not line up with the order naming them
    #[error("Length mismatch: order has {expected} keys but {actual} values were given")]
    LengthMismatch {
        /// Number of keys in the resolved order
        expected: usize,
        /// Number of positional values supplied
        actual: usize,
    },

    /// Two key sets that must be identical are not
    #[error("Key set mismatch: {left:?} and {right:?} do not have the same keys")]
    KeySetMismatch {
        /// Keys of the coordinate being operated on
        left: Vec<String>,
        /// Keys of the other operand, or of the requested order
        right: Vec<String>,
    },

    /// An instance order that is not an exact permutation of the keys
    #[error("Invalid order {order:?}: must be a permutation of {keys:?}")]
    InvalidOrderAssignment {
        /// The rejected order
        order: Vec<String>,
        /// Keys of the coordinate
        keys: Vec<String>,
    },

    /// Fixed-key variant built with the wrong key set
    #[error("{space} needs keys {expected:?} and got {actual:?}")]
    FixedKeySetViolation {
        /// Declared name of the variant
        space: &'static str,
        /// Declared key set
        expected: Vec<String>,
        /// Keys that construction produced
        actual: Vec<String>,
    },

    /// Norm requested with a non-positive or NaN order
    #[error("Invalid norm order: {0} (must be a positive real or infinity)")]
    InvalidNormOrder(f64),
}

impl Error {
    /// Key set mismatch between two key iterators, keeping their native order
    pub(crate) fn key_set_mismatch<'a, L, R>(left: L, right: R) -> Self
    where
        L: IntoIterator<Item = &'a str>,
        R: IntoIterator<Item = &'a str>,
    {
        Error::KeySetMismatch {
            left: left.into_iter().map(str::to_owned).collect(),
            right: right.into_iter().map(str::to_owned).collect(),
        }
    }
}
