//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the tax
//! regime tables from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::TaxRegime;

use super::types::{RegimeConfig, RulesetMetadata, TaxRuleSet};

/// Loads and provides access to the tax regime tables.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides methods to query the loaded regime tables.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/hr/
/// ├── metadata.yaml        # Ruleset metadata
/// └── regimes/
///     ├── old.yaml         # Old regime slab table and deduction caps
///     ├── new_fy2425.yaml  # New regime table for FY 2024-25
///     └── new_fy2526.yaml  # New regime table for FY 2025-26
/// ```
///
/// # Example
///
/// ```no_run
/// use hr_engine::config::ConfigLoader;
/// use hr_engine::models::TaxRegime;
///
/// let loader = ConfigLoader::load("./config/hr").unwrap();
/// let regime = loader.regime(TaxRegime::Old).unwrap();
/// println!("Standard deduction: {}", regime.standard_deduction);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    ruleset: TaxRuleSet,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any regime table is malformed (unordered slabs, bounded top slab,
    ///   out-of-range rates, duplicate regime codes)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata_path = path.join("metadata.yaml");
        let metadata = Self::load_yaml::<RulesetMetadata>(&metadata_path)?;

        let regimes_dir = path.join("regimes");
        let regimes = Self::load_regimes(&regimes_dir)?;

        Ok(Self {
            ruleset: TaxRuleSet::new(metadata, regimes),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all regime files from the regimes directory.
    fn load_regimes(regimes_dir: &Path) -> EngineResult<Vec<RegimeConfig>> {
        let regimes_dir_str = regimes_dir.display().to_string();

        if !regimes_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: regimes_dir_str,
            });
        }

        let entries = fs::read_dir(regimes_dir).map_err(|_| EngineError::ConfigNotFound {
            path: regimes_dir_str.clone(),
        })?;

        let mut regimes: Vec<RegimeConfig> = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: regimes_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let regime = Self::load_yaml::<RegimeConfig>(&path)?;
                Self::validate_regime(&regime, &path)?;

                if regimes.iter().any(|existing| existing.code == regime.code) {
                    return Err(EngineError::ConfigParseError {
                        path: path.display().to_string(),
                        message: format!("duplicate table for regime '{}'", regime.code.as_code()),
                    });
                }
                regimes.push(regime);
            }
        }

        if regimes.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no regime files found)", regimes_dir_str),
            });
        }

        Ok(regimes)
    }

    /// Checks the structural invariants of one regime table.
    fn validate_regime(regime: &RegimeConfig, path: &Path) -> EngineResult<()> {
        let fail = |message: String| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message,
        };

        if regime.standard_deduction < Decimal::ZERO {
            return Err(fail("standard_deduction must not be negative".to_string()));
        }
        if regime.cess_rate < Decimal::ZERO || regime.cess_rate > Decimal::ONE {
            return Err(fail("cess_rate must be a fraction between 0 and 1".to_string()));
        }
        if regime.slabs.is_empty() {
            return Err(fail("at least one slab is required".to_string()));
        }

        let mut previous_upper = Decimal::ZERO;
        for (index, slab) in regime.slabs.iter().enumerate() {
            if slab.rate < Decimal::ZERO || slab.rate > Decimal::ONE {
                return Err(fail(format!(
                    "slab {} rate must be a fraction between 0 and 1",
                    index
                )));
            }

            let is_last = index == regime.slabs.len() - 1;
            match slab.upper {
                Some(upper) if is_last => {
                    return Err(fail(format!(
                        "the top slab must be unbounded, found upper {}",
                        upper
                    )));
                }
                Some(upper) => {
                    if upper <= previous_upper {
                        return Err(fail(format!(
                            "slab bounds must be strictly ascending, {} follows {}",
                            upper, previous_upper
                        )));
                    }
                    previous_upper = upper;
                }
                None if !is_last => {
                    return Err(fail(format!("slab {} before the top slab must be bounded", index)));
                }
                None => {}
            }
        }

        for category in &regime.deductions {
            if let Some(cap) = category.cap {
                if cap < Decimal::ZERO {
                    return Err(fail(format!(
                        "cap for '{}' must not be negative",
                        category.code.as_code()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Returns the loaded ruleset.
    pub fn ruleset(&self) -> &TaxRuleSet {
        &self.ruleset
    }

    /// Returns the ruleset metadata.
    pub fn metadata(&self) -> Option<&RulesetMetadata> {
        self.ruleset.metadata()
    }

    /// Gets the table for a regime.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RegimeNotFound`] when no table is loaded for
    /// the regime.
    pub fn regime(&self, regime: TaxRegime) -> EngineResult<&RegimeConfig> {
        self.ruleset
            .regime(regime)
            .ok_or_else(|| EngineError::RegimeNotFound {
                regime: regime.as_code().to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_shipped_config() {
        let loader = ConfigLoader::load("./config/hr").unwrap();

        assert_eq!(loader.ruleset().regime_count(), 3);
        let metadata = loader.metadata().unwrap();
        assert_eq!(metadata.jurisdiction, "IN");
    }

    #[test]
    fn test_old_regime_table_values() {
        let loader = ConfigLoader::load("./config/hr").unwrap();
        let old = loader.regime(TaxRegime::Old).unwrap();

        assert_eq!(old.standard_deduction, dec("50000"));
        assert_eq!(old.cess_rate, dec("0.04"));
        assert_eq!(old.slabs.len(), 4);
        assert_eq!(old.slabs[1].upper, Some(dec("500000")));
        assert_eq!(old.slabs[1].rate, dec("0.05"));
        assert!(old.slabs[3].upper.is_none());
        assert!(old.hra.is_some());
        assert_eq!(old.deductions.len(), 4);
    }

    #[test]
    fn test_new_fy2526_standard_deduction() {
        let loader = ConfigLoader::load("./config/hr").unwrap();
        let regime = loader.regime(TaxRegime::NewFy2526).unwrap();

        assert_eq!(regime.standard_deduction, dec("75000"));
        assert_eq!(regime.slabs.len(), 7);
        assert!(regime.hra.is_none());
        assert_eq!(regime.deductions.len(), 1);
        assert!(regime.deductions[0].cap.is_none());
    }

    #[test]
    fn test_missing_directory_returns_not_found() {
        let result = ConfigLoader::load("./config/does-not-exist");

        assert!(result.is_err());
        match result.unwrap_err() {
            EngineError::ConfigNotFound { path } => {
                assert!(path.contains("does-not-exist"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_bounded_top_slab() {
        let yaml = r#"
code: old
name: Broken
fiscal_year: "2024-25"
standard_deduction: 50000
cess_rate: "0.04"
slabs:
  - upper: 250000
    rate: "0"
  - upper: 500000
    rate: "0.05"
"#;
        let regime: RegimeConfig = serde_yaml::from_str(yaml).unwrap();
        let result = ConfigLoader::validate_regime(&regime, Path::new("broken.yaml"));

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("unbounded"));
    }

    #[test]
    fn test_validate_rejects_unordered_slabs() {
        let yaml = r#"
code: old
name: Broken
fiscal_year: "2024-25"
standard_deduction: 50000
cess_rate: "0.04"
slabs:
  - upper: 500000
    rate: "0"
  - upper: 250000
    rate: "0.05"
  - rate: "0.30"
"#;
        let regime: RegimeConfig = serde_yaml::from_str(yaml).unwrap();
        let result = ConfigLoader::validate_regime(&regime, Path::new("broken.yaml"));

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("ascending"));
    }

    #[test]
    fn test_validate_rejects_rate_above_one() {
        let yaml = r#"
code: old
name: Broken
fiscal_year: "2024-25"
standard_deduction: 50000
cess_rate: "0.04"
slabs:
  - upper: 250000
    rate: "5"
  - rate: "0.30"
"#;
        let regime: RegimeConfig = serde_yaml::from_str(yaml).unwrap();
        let result = ConfigLoader::validate_regime(&regime, Path::new("broken.yaml"));

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("fraction"));
    }
}
