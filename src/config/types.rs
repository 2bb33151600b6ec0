//! Configuration types for the tax regime tables.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{DeductionCode, TaxRegime};

/// Metadata about the loaded ruleset.
#[derive(Debug, Clone, Deserialize)]
pub struct RulesetMetadata {
    /// The human-readable name of the ruleset.
    pub name: String,
    /// The jurisdiction the rules apply to (e.g., "IN").
    pub jurisdiction: String,
    /// The version or assessment year of the ruleset.
    pub version: String,
    /// URL to the official rule documentation.
    pub source_url: String,
}

/// One tax slab: income up to `upper` is taxed at `rate`.
///
/// The final slab of a table leaves `upper` unset and is unbounded.
#[derive(Debug, Clone, Deserialize)]
pub struct Slab {
    /// The slab's inclusive upper bound, absent for the top slab.
    #[serde(default)]
    pub upper: Option<Decimal>,
    /// The slab rate as a fraction (0.05 for 5%).
    pub rate: Decimal,
}

/// A deduction category permitted under a regime, with its independent cap.
#[derive(Debug, Clone, Deserialize)]
pub struct DeductionCap {
    /// The deduction category.
    pub code: DeductionCode,
    /// The cap on the allowed amount, absent for an uncapped category.
    #[serde(default)]
    pub cap: Option<Decimal>,
}

/// House rent allowance exemption policy (old regime).
#[derive(Debug, Clone, Deserialize)]
pub struct HraPolicy {
    /// Share of basic salary capping the exemption in metro cities.
    pub metro_percent: Decimal,
    /// Share of basic salary capping the exemption elsewhere.
    pub non_metro_percent: Decimal,
    /// Share of basic salary subtracted from rent paid.
    pub rent_offset_percent: Decimal,
}

/// The complete rule table for one tax regime, loaded from one YAML file.
#[derive(Debug, Clone, Deserialize)]
pub struct RegimeConfig {
    /// The regime this table belongs to.
    pub code: TaxRegime,
    /// The human-readable regime name.
    pub name: String,
    /// The fiscal year the table applies to.
    pub fiscal_year: String,
    /// The fixed standard deduction.
    pub standard_deduction: Decimal,
    /// The cess rate applied on top of the slab tax.
    pub cess_rate: Decimal,
    /// Ordered slabs, lowest first, final slab unbounded.
    pub slabs: Vec<Slab>,
    /// Deduction categories the regime permits.
    #[serde(default)]
    pub deductions: Vec<DeductionCap>,
    /// HRA exemption policy, absent for regimes without one.
    #[serde(default)]
    pub hra: Option<HraPolicy>,
}

/// The complete set of regime tables loaded from a configuration directory.
#[derive(Debug, Clone)]
pub struct TaxRuleSet {
    /// Ruleset metadata, when loaded from a directory.
    metadata: Option<RulesetMetadata>,
    /// Regime tables keyed by regime.
    regimes: HashMap<TaxRegime, RegimeConfig>,
}

impl TaxRuleSet {
    /// Creates a ruleset from metadata and regime tables.
    pub fn new(metadata: RulesetMetadata, regimes: Vec<RegimeConfig>) -> Self {
        Self {
            metadata: Some(metadata),
            regimes: Self::index(regimes),
        }
    }

    /// Creates a ruleset from regime tables alone.
    pub fn from_regimes(regimes: Vec<RegimeConfig>) -> Self {
        Self {
            metadata: None,
            regimes: Self::index(regimes),
        }
    }

    fn index(regimes: Vec<RegimeConfig>) -> HashMap<TaxRegime, RegimeConfig> {
        regimes
            .into_iter()
            .map(|regime| (regime.code, regime))
            .collect()
    }

    /// Returns the ruleset metadata, when present.
    pub fn metadata(&self) -> Option<&RulesetMetadata> {
        self.metadata.as_ref()
    }

    /// Returns the table for a regime, or `None` when none is loaded.
    pub fn regime(&self, regime: TaxRegime) -> Option<&RegimeConfig> {
        self.regimes.get(&regime)
    }

    /// Returns the number of loaded regime tables.
    pub fn regime_count(&self) -> usize {
        self.regimes.len()
    }
}
