//! Configuration loading and management for the Leave and Tax Rules Engine.
//!
//! This module provides functionality to load the tax regime tables from
//! YAML files, including ruleset metadata, slab tables, deduction caps and
//! the HRA exemption policy.
//!
//! # Example
//!
//! ```no_run
//! use hr_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/hr").unwrap();
//! println!("Loaded {} regime tables", config.ruleset().regime_count());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DeductionCap, HraPolicy, RegimeConfig, RulesetMetadata, Slab, TaxRuleSet};
