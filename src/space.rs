//! Fixed-Key Variants
//!
//! A [`KeySpace`] is a marker type parameter on [`Coordinate`](crate::Coordinate)
//! that constrains which keys an instance may hold. [`AnyKeys`] accepts any
//! key set; [`declare_space!`](crate::declare_space) declares a named space
//! with a fixed key set and, optionally, a default order.
//!
//! Validation happens once, at construction. Elementwise operations preserve
//! the key set, so their results stay valid without re-checking.

use crate::error::{Error, Result};
use ahash::HashSet;

/// Key constraints and declared order shared by every coordinate of a type
pub trait KeySpace: 'static {
    /// Name used in rendering and error messages
    const NAME: &'static str;

    /// The exact key set instances must hold, or `None` for any keys
    const KEYS: Option<&'static [&'static str]>;

    /// Order used when an instance has none of its own, ahead of the
    /// process-wide default
    const DEFAULT_ORDER: Option<&'static [&'static str]> = None;
}

/// Unconstrained key space: any keys, no declared order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AnyKeys;

impl KeySpace for AnyKeys {
    const NAME: &'static str = "Coordinate";
    const KEYS: Option<&'static [&'static str]> = None;
}

/// Check that `keys` is exactly the key set declared by `S`
pub(crate) fn check_keys<'a, S, I>(keys: I) -> Result<()>
where
    S: KeySpace,
    I: IntoIterator<Item = &'a str> + Clone,
{
    let Some(expected) = S::KEYS else {
        return Ok(());
    };

    let declared: HashSet<&str> = expected.iter().copied().collect();
    let actual: HashSet<&str> = keys.clone().into_iter().collect();
    if declared == actual {
        return Ok(());
    }

    Err(Error::FixedKeySetViolation {
        space: S::NAME,
        expected: expected.iter().map(|k| k.to_string()).collect(),
        actual: keys.into_iter().map(str::to_owned).collect(),
    })
}

/// Declare a coordinate type restricted to a fixed key set.
///
/// Generates a marker type implementing [`KeySpace`] and a type alias
/// `Alias<V = f64> = Coordinate<V, Marker>`.
///
/// ```
/// use coordinates::declare_space;
///
/// // Any order falls back through the process-wide default
/// declare_space!(pub Spatial(SpatialKeys), ["x", "y", "z"]);
///
/// // Declared order taken from the key list
/// declare_space!(pub CoordinateCab(CabKeys), ["c", "a", "b"], ordered);
///
/// // Declared order given separately
/// declare_space!(pub LatLon(LatLonKeys), ["lat", "lon"], order = ["lon", "lat"]);
///
/// let p = CoordinateCab::<i64>::builder().kwarg("a", 1).kwarg("b", 2).kwarg("c", 3).build()?;
/// assert_eq!(p.to_list(), vec![3, 1, 2]);
///
/// assert!(Spatial::<f64>::from_pairs([("x", 1.0), ("y", 2.0)]).is_err());
/// # Ok::<(), coordinates::Error>(())
/// ```
#[macro_export]
macro_rules! declare_space {
    (@space $(#[$meta:meta])* $vis:vis $alias:ident($space:ident), [$($key:literal),+], $order:expr) => {
        #[doc = concat!("Key space of [`", stringify!($alias), "`]")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $space;

        impl $crate::KeySpace for $space {
            const NAME: &'static str = stringify!($alias);
            const KEYS: Option<&'static [&'static str]> = Some(&[$($key),+] as &'static [&'static str]);
            const DEFAULT_ORDER: Option<&'static [&'static str]> = $order;
        }

        $(#[$meta])*
        $vis type $alias<V = f64> = $crate::Coordinate<V, $space>;
    };
    ($(#[$meta:meta])* $vis:vis $alias:ident($space:ident), [$($key:literal),+ $(,)?], ordered $(,)?) => {
        $crate::declare_space!(@space $(#[$meta])* $vis $alias($space), [$($key),+], Some(&[$($key),+] as &'static [&'static str]));
    };
    ($(#[$meta:meta])* $vis:vis $alias:ident($space:ident), [$($key:literal),+ $(,)?], order = [$($ord:literal),+ $(,)?] $(,)?) => {
        $crate::declare_space!(@space $(#[$meta])* $vis $alias($space), [$($key),+], Some(&[$($ord),+] as &'static [&'static str]));
    };
    ($(#[$meta:meta])* $vis:vis $alias:ident($space:ident), [$($key:literal),+ $(,)?] $(,)?) => {
        $crate::declare_space!(@space $(#[$meta])* $vis $alias($space), [$($key),+], None);
    };
}
