// ============================================================================
// Tick Table Configuration
// Domain policy and index bounds applied by a tick table
// ============================================================================

use super::band::{MAX_TICK_INDEX, MIN_TICK_INDEX};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Domain Policy
// ============================================================================

/// How a tick table treats inputs outside the priced range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DomainPolicy {
    /// Every input yields a best-effort value
    /// - Negative prices resolve into the first band
    /// - NaN and prices at or above the last bound resolve into the last band
    /// - Indices outside the configured range still map to a price
    #[default]
    Total,

    /// Out-of-domain inputs are rejected with a `TickError`
    /// - Non-finite and negative prices
    /// - Prices whose tick index falls outside the configured range
    /// - Indices outside the configured range
    Strict,
}

// ============================================================================
// Complete Table Configuration
// ============================================================================

/// Configuration for a tick table
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TickTableConfig {
    /// Treatment of out-of-domain inputs
    pub policy: DomainPolicy,

    /// Lowest accepted tick index (strict policy only)
    pub min_index: i64,

    /// Highest accepted tick index (strict policy only)
    pub max_index: i64,
}

impl TickTableConfig {
    /// Create a configuration with the given policy and the standard index range
    pub fn new(policy: DomainPolicy) -> Self {
        Self {
            policy,
            min_index: MIN_TICK_INDEX,
            max_index: MAX_TICK_INDEX,
        }
    }

    /// Total conversions over the standard range
    pub fn total() -> Self {
        Self::new(DomainPolicy::Total)
    }

    /// Rejecting conversions over the standard range
    pub fn strict() -> Self {
        Self::new(DomainPolicy::Strict)
    }

    /// Builder: restrict the accepted index range
    pub fn with_index_range(mut self, min_index: i64, max_index: i64) -> Self {
        self.min_index = min_index;
        self.max_index = max_index;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.min_index > self.max_index {
            return Err(format!(
                "min_index {} exceeds max_index {}",
                self.min_index, self.max_index
            ));
        }

        Ok(())
    }

    /// Whether `index` lies inside the configured range
    #[inline]
    pub fn contains_index(&self, index: i64) -> bool {
        (self.min_index..=self.max_index).contains(&index)
    }
}

impl Default for TickTableConfig {
    fn default() -> Self {
        Self::total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TickTableConfig::default();
        assert_eq!(config.policy, DomainPolicy::Total);
        assert_eq!(config.min_index, 1);
        assert_eq!(config.max_index, 350);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_strict_config() {
        let config = TickTableConfig::strict();
        assert_eq!(config.policy, DomainPolicy::Strict);
        assert!(config.contains_index(1));
        assert!(config.contains_index(350));
        assert!(!config.contains_index(0));
        assert!(!config.contains_index(351));
    }

    #[test]
    fn test_index_range_validation() {
        let config = TickTableConfig::strict().with_index_range(10, 5);
        assert!(config.validate().is_err());

        let config = TickTableConfig::strict().with_index_range(100, 200);
        assert!(config.validate().is_ok());
        assert!(!config.contains_index(99));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serde() {
        let config = TickTableConfig::strict().with_index_range(1, 260);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: TickTableConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
