// ============================================================================
// Tick Table
// Ordered band lookup and price <-> tick index conversion
// ============================================================================

use crate::domain::{
    Classification, DomainPolicy, TickBand, TickTableConfig, MAX_TICK_INDEX, MIN_TICK_INDEX,
    STANDARD_BANDS,
};
use crate::interfaces::TickSchedule;
use crate::numeric::{TickError, TickResult};
use std::borrow::Cow;

/// Relative tolerance used when checking band continuity
const CONTINUITY_TOLERANCE: f64 = 1e-9;

/// An immutable tick schedule: an ordered list of bands plus the policy
/// applied to out-of-domain inputs.
///
/// Band selection walks the list and stops at the first band whose
/// successor starts above the input. Inputs that are not below any
/// successor's bound (including NaN) land in the last band, and anything
/// below the second band's bound (including negatives) lands in the first.
///
/// # Example
/// ```
/// use tick_ladder::prelude::*;
///
/// let table = TickTable::standard();
/// let classification = table.classify(3.57).unwrap();
/// assert_eq!(classification.rounded, 3.55);
/// assert_eq!(classification.tick_size, 0.05);
/// assert_eq!(classification.index, 161);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TickTable {
    name: Cow<'static, str>,
    bands: Cow<'static, [TickBand]>,
    config: TickTableConfig,
}

impl TickTable {
    /// The standard ten-band schedule with total conversions
    pub const STANDARD: TickTable = TickTable {
        name: Cow::Borrowed("standard"),
        bands: Cow::Borrowed(&STANDARD_BANDS),
        config: TickTableConfig {
            policy: DomainPolicy::Total,
            min_index: MIN_TICK_INDEX,
            max_index: MAX_TICK_INDEX,
        },
    };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Standard schedule, total conversions
    pub fn standard() -> Self {
        Self::STANDARD
    }

    /// Standard schedule, out-of-domain inputs rejected
    pub fn strict() -> Self {
        Self::STANDARD.with_policy(DomainPolicy::Strict)
    }

    /// Build a custom schedule from an ordered band list.
    ///
    /// # Errors
    /// Returns `InvalidTable` when the list is empty, a tick size is not a
    /// positive finite number, bounds or index offsets do not strictly
    /// increase, or adjacent bands do not meet in both price and index space.
    pub fn new(bands: Vec<TickBand>) -> TickResult<Self> {
        validate_bands(&bands)?;

        tracing::debug!(bands = bands.len(), "built custom tick table");

        Ok(Self {
            name: Cow::Borrowed("custom"),
            bands: Cow::Owned(bands),
            config: TickTableConfig::default(),
        })
    }

    /// Single-band schedule with a constant tick size anchored at zero.
    ///
    /// Index `n` corresponds to price `n * tick_size`; the accepted index
    /// range is unbounded above.
    pub fn uniform(tick_size: f64) -> TickResult<Self> {
        let table = Self::new(vec![TickBand::new(0.0, tick_size, 0.0, 0)])?;
        let config = TickTableConfig::total().with_index_range(0, i64::MAX);

        Ok(table.with_name("uniform").with_config_unchecked(config))
    }

    /// Builder: replace the table configuration
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the configuration fails validation.
    pub fn with_config(self, config: TickTableConfig) -> TickResult<Self> {
        config.validate().map_err(TickError::InvalidConfig)?;
        Ok(self.with_config_unchecked(config))
    }

    /// Builder: replace only the domain policy
    pub fn with_policy(mut self, policy: DomainPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Builder: rename the schedule
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    fn with_config_unchecked(mut self, config: TickTableConfig) -> Self {
        self.config = config;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn bands(&self) -> &[TickBand] {
        &self.bands
    }

    #[inline]
    pub fn config(&self) -> &TickTableConfig {
        &self.config
    }

    #[inline]
    pub fn policy(&self) -> DomainPolicy {
        self.config.policy
    }

    // ========================================================================
    // Band Lookup
    // ========================================================================

    /// Band whose price interval contains `price`
    pub fn band_for_price(&self, price: f64) -> &TickBand {
        let last = self.bands.len() - 1;
        let position = self.bands[1..]
            .iter()
            .position(|next| price < next.lower_bound)
            .unwrap_or(last);

        &self.bands[position]
    }

    /// Band whose index interval contains `index`
    pub fn band_for_index(&self, index: i64) -> &TickBand {
        let last = self.bands.len() - 1;
        let position = self.bands[1..]
            .iter()
            .position(|next| index < next.index_offset)
            .unwrap_or(last);

        &self.bands[position]
    }

    // ========================================================================
    // Total Conversions
    // ========================================================================

    /// Classify a price regardless of policy.
    #[inline]
    pub fn resolve(&self, price: f64) -> Classification {
        let band = self.band_for_price(price);
        let rounded = band.round(price);

        Classification::new(rounded, band.tick_size, band.index_of_rounded(rounded))
    }

    /// Price at `index` regardless of policy.
    #[inline]
    pub fn resolve_index(&self, index: i64) -> f64 {
        self.band_for_index(index).price_at(index)
    }

    // ========================================================================
    // Policy-Checked Conversions
    // ========================================================================

    /// Classify a price into `(rounded, tick_size, index)`.
    ///
    /// # Errors
    /// Under `DomainPolicy::Strict`: `NonFinitePrice`, `NegativePrice`, or
    /// `PriceOutOfRange` when the index falls outside the configured range.
    pub fn classify(&self, price: f64) -> TickResult<Classification> {
        if self.config.policy == DomainPolicy::Total {
            return Ok(self.resolve(price));
        }

        if !price.is_finite() {
            tracing::debug!(price, table = %self.name, "rejected non-finite price");
            return Err(TickError::NonFinitePrice(price));
        }

        if price < 0.0 {
            tracing::debug!(price, table = %self.name, "rejected negative price");
            return Err(TickError::NegativePrice(price));
        }

        let classification = self.resolve(price);
        if !self.config.contains_index(classification.index) {
            tracing::debug!(
                price,
                index = classification.index,
                table = %self.name,
                "rejected price outside index range"
            );
            return Err(TickError::PriceOutOfRange {
                price,
                index: classification.index,
            });
        }

        Ok(classification)
    }

    /// Price sitting at a tick index.
    ///
    /// # Errors
    /// Under `DomainPolicy::Strict`: `IndexOutOfRange` when the index falls
    /// outside the configured range.
    pub fn price_at_index(&self, index: i64) -> TickResult<f64> {
        if self.config.policy == DomainPolicy::Strict && !self.config.contains_index(index) {
            tracing::debug!(index, table = %self.name, "rejected tick index outside range");
            return Err(TickError::IndexOutOfRange {
                index,
                min: self.config.min_index,
                max: self.config.max_index,
            });
        }

        Ok(self.resolve_index(index))
    }
}

impl Default for TickTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl TickSchedule for TickTable {
    fn classify(&self, price: f64) -> TickResult<Classification> {
        TickTable::classify(self, price)
    }

    fn price_at_index(&self, index: i64) -> TickResult<f64> {
        TickTable::price_at_index(self, index)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Band Validation
// ============================================================================

fn validate_bands(bands: &[TickBand]) -> TickResult<()> {
    if bands.is_empty() {
        return Err(TickError::InvalidTable {
            band: 0,
            reason: "schedule has no bands",
        });
    }

    for (position, band) in bands.iter().enumerate() {
        if !(band.tick_size.is_finite() && band.tick_size > 0.0) {
            return Err(TickError::InvalidTable {
                band: position,
                reason: "tick size must be positive and finite",
            });
        }

        if !(band.lower_bound.is_finite() && band.price_offset.is_finite()) {
            return Err(TickError::InvalidTable {
                band: position,
                reason: "bounds must be finite",
            });
        }
    }

    for (position, pair) in bands.windows(2).enumerate() {
        let (current, next) = (&pair[0], &pair[1]);
        let band = position + 1;

        if next.lower_bound <= current.lower_bound {
            return Err(TickError::InvalidTable {
                band,
                reason: "lower bounds must strictly increase",
            });
        }

        if next.index_offset <= current.index_offset {
            return Err(TickError::InvalidTable {
                band,
                reason: "index offsets must strictly increase",
            });
        }

        // Classify and price lookup must agree where the bands meet.
        let tolerance = CONTINUITY_TOLERANCE * next.price_offset.abs().max(1.0);
        if (next.price_offset - next.lower_bound).abs() > tolerance {
            return Err(TickError::InvalidTable {
                band,
                reason: "price offset must equal lower bound",
            });
        }

        if (current.price_at(next.index_offset) - next.price_offset).abs() > tolerance {
            return Err(TickError::InvalidTable {
                band,
                reason: "bands are not contiguous in index space",
            });
        }
    }

    Ok(())
}
