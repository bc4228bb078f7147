//! Configuration for node construction.
//!
//! Values come from `DLOB_`-prefixed environment variables:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `DLOB_VALIDATE_ORDERS` | `false` | Reject snapshots that break order preconditions |
//! | `DLOB_LABEL_DECIMALS` | `3` | Decimal places shown in order labels |

use serde::Deserialize;

use crate::types::price::LABEL_DECIMALS;

const ENV_PREFIX: &str = "DLOB_";

/// Factory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FactoryConfig {
    /// Check order preconditions before building a node
    #[serde(default)]
    pub validate_orders: bool,

    /// Decimal places used when rendering labels
    #[serde(default = "default_label_decimals")]
    pub label_decimals: u32,
}

fn default_label_decimals() -> u32 {
    LABEL_DECIMALS
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            validate_orders: false,
            label_decimals: LABEL_DECIMALS,
        }
    }
}

impl FactoryConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed(ENV_PREFIX).from_env()
    }

    /// Load configuration from explicit key/value pairs (keys include the prefix).
    pub fn from_pairs<I>(pairs: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX).from_iter(pairs)
    }

    /// Strict configuration that validates every order.
    pub fn strict() -> Self {
        Self {
            validate_orders: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = FactoryConfig::from_pairs(Vec::new()).unwrap();
        assert_eq!(config, FactoryConfig::default());
        assert!(!config.validate_orders);
        assert_eq!(config.label_decimals, 3);
    }

    #[test]
    fn test_prefixed_values() {
        let config = FactoryConfig::from_pairs(pairs(&[
            ("DLOB_VALIDATE_ORDERS", "true"),
            ("DLOB_LABEL_DECIMALS", "6"),
            ("VALIDATE_ORDERS", "false"),
        ]))
        .unwrap();

        assert!(config.validate_orders);
        assert_eq!(config.label_decimals, 6);
    }

    #[test]
    fn test_invalid_value() {
        let result = FactoryConfig::from_pairs(pairs(&[("DLOB_LABEL_DECIMALS", "many")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_strict() {
        assert!(FactoryConfig::strict().validate_orders);
    }
}
