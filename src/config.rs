//! Configuration file support for the process-wide default order
//!
//! # Config File Locations
//!
//! [`OrderingConfig::find_and_load`] searches, in order:
//! 1. `./coordinates.toml`
//! 2. `./.coordinates.toml`
//!
//! # Example Config File
//!
//! ```toml
//! [coordinates]
//! # One key per character
//! default_order = "xyz"
//!
//! # Or explicit multi-character keys
//! # default_order = ["lat", "lon"]
//! ```

use crate::order::{Order, OrderRegistry};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration that can contain sections for different tools
///
/// Supports two formats:
///
/// 1. **Sectioned format**:
/// ```toml
/// [coordinates]
/// default_order = "xyz"
/// ```
///
/// 2. **Direct format**:
/// ```toml
/// default_order = "xyz"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct RootConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    coordinates: Option<OrderingConfig>,

    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    direct: Option<OrderingConfig>,
}

/// An order as written in a config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderSpec {
    /// `"xyz"`: one key per character
    Chars(String),
    /// `["lat", "lon"]`
    Keys(Vec<String>),
}

impl OrderSpec {
    /// The order written here; empty entries name none
    pub fn to_order(&self) -> Option<Order> {
        let order = match self {
            OrderSpec::Chars(chars) => Order::from_chars(chars),
            OrderSpec::Keys(keys) => Order::new(keys.iter().cloned()),
        };
        (!order.is_empty()).then_some(order)
    }
}

/// Ordering configuration loaded from a TOML file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OrderingConfig {
    /// Process-wide default order; absent means no default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_order: Option<OrderSpec>,
}

impl OrderingConfig {
    /// Load config from a TOML file in sectioned or direct format
    ///
    /// # Example
    ///
    /// ```no_run
    /// use coordinates::config::OrderingConfig;
    ///
    /// let config = OrderingConfig::load("coordinates.toml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(path.to_path_buf(), e))?;
        let root: RootConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError(path.to_path_buf(), e))?;
        Ok(root.coordinates.or(root.direct).unwrap_or_default())
    }

    /// Parse config from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let root: RootConfig = toml::from_str(contents).map_err(ConfigError::InvalidToml)?;
        Ok(root.coordinates.or(root.direct).unwrap_or_default())
    }

    /// Find and load config from the current directory
    ///
    /// Returns `None` if no config file is found.
    pub fn find_and_load() -> Result<Option<Self>, ConfigError> {
        for candidate in ["./coordinates.toml", "./.coordinates.toml"] {
            let path = PathBuf::from(candidate);
            if path.exists() {
                return Ok(Some(Self::load(&path)?));
            }
        }
        Ok(None)
    }

    /// Save config to a TOML file in direct format
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self).map_err(ConfigError::SerializeError)?;
        std::fs::write(path.as_ref(), contents)
            .map_err(|e| ConfigError::IoError(path.as_ref().to_path_buf(), e))?;
        Ok(())
    }

    /// Config naming `order` as the default
    pub fn with_default_order(order: &Order) -> Self {
        Self {
            default_order: Some(OrderSpec::Keys(order.iter().map(str::to_owned).collect())),
        }
    }

    /// The configured default order, if any
    pub fn order(&self) -> Option<Order> {
        self.default_order.as_ref().and_then(OrderSpec::to_order)
    }

    /// Set or clear `registry`'s default order; returns the previous one
    pub fn apply(&self, registry: &OrderRegistry) -> Option<Order> {
        let order = self.order();
        tracing::debug!(order = ?order, "applying ordering config");
        registry.replace_default_order(order)
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read or write config file
    #[error("Failed to access config file {0}: {1}")]
    IoError(PathBuf, #[source] std::io::Error),

    /// Failed to parse TOML from a file
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(PathBuf, #[source] toml::de::Error),

    /// Failed to parse TOML text
    #[error("Failed to parse config: {0}")]
    InvalidToml(#[source] toml::de::Error),

    /// Failed to serialize config
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[source] toml::ser::Error),
}
