//! Tax computation models.
//!
//! This module defines the regimes, deduction taxonomy, calculator input and
//! the structured [`TaxComputation`] result with its slab breakdown.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The income tax regimes the calculator supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxRegime {
    /// The old regime with itemized deductions.
    Old,
    /// The new regime for fiscal year 2024-25.
    NewFy2425,
    /// The new regime for fiscal year 2025-26.
    NewFy2526,
}

impl TaxRegime {
    /// Returns the wire/config code for this regime.
    pub fn as_code(&self) -> &'static str {
        match self {
            TaxRegime::Old => "old",
            TaxRegime::NewFy2425 => "new_fy2425",
            TaxRegime::NewFy2526 => "new_fy2526",
        }
    }
}

/// The deduction categories an employee can claim.
///
/// Each category is independently capped (or uncapped) by the regime table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeductionCode {
    /// Savings instruments under section 80C.
    #[serde(rename = "section_80c")]
    Section80c,
    /// Additional self-contributed pension under section 80CCD(1B).
    #[serde(rename = "nps_80ccd_1b")]
    Nps80ccd1b,
    /// Health insurance premium for self and family.
    #[serde(rename = "health_insurance_self")]
    HealthInsuranceSelf,
    /// Health insurance premium for parents.
    #[serde(rename = "health_insurance_parents")]
    HealthInsuranceParents,
    /// Employer pension contribution, the only category the new regimes allow.
    #[serde(rename = "employer_pension")]
    EmployerPension,
}

impl DeductionCode {
    /// Returns the wire/config code for this deduction category.
    pub fn as_code(&self) -> &'static str {
        match self {
            DeductionCode::Section80c => "section_80c",
            DeductionCode::Nps80ccd1b => "nps_80ccd_1b",
            DeductionCode::HealthInsuranceSelf => "health_insurance_self",
            DeductionCode::HealthInsuranceParents => "health_insurance_parents",
            DeductionCode::EmployerPension => "employer_pension",
        }
    }
}

/// Inputs for the house rent allowance exemption term (old regime only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HraDetails {
    /// Annual basic salary.
    pub basic_annual: Decimal,
    /// HRA actually received over the year.
    pub hra_received: Decimal,
    /// Rent actually paid over the year.
    pub rent_paid: Decimal,
    /// Whether the employee lives in a metro city.
    pub metro: bool,
}

/// The ephemeral input to one tax computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxInput {
    /// The regime to compute under.
    pub regime: TaxRegime,
    /// Gross annual income before any deduction.
    pub gross_annual_income: Decimal,
    /// Claimed amounts per deduction category.
    #[serde(default)]
    pub deductions: HashMap<DeductionCode, Decimal>,
    /// HRA exemption inputs, considered only under the old regime.
    #[serde(default)]
    pub hra: Option<HraDetails>,
}

/// One line of the slab breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabLine {
    /// Human-readable slab label, e.g. "250000 to 500000".
    pub label: String,
    /// The portion of taxable income falling in this slab.
    pub amount_in_slab: Decimal,
    /// The slab rate as a fraction (0.05 for 5%).
    pub rate: Decimal,
    /// Tax accrued on this slab.
    pub tax_for_slab: Decimal,
}

/// One resolved deduction line: what was claimed and what was allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductionLine {
    /// The deduction category code (or "hra_exemption").
    pub code: String,
    /// The amount claimed.
    pub claimed: Decimal,
    /// The amount allowed after applying the category cap.
    pub allowed: Decimal,
}

/// The structured result of one tax computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxComputation {
    /// The regime the computation ran under.
    pub regime: TaxRegime,
    /// Gross annual income as supplied.
    pub gross_annual_income: Decimal,
    /// The regime's fixed standard deduction.
    pub standard_deduction: Decimal,
    /// Resolved deduction lines, caps applied.
    pub deduction_lines: Vec<DeductionLine>,
    /// Sum of the allowed deduction amounts.
    pub total_deductions: Decimal,
    /// Income remaining after the standard deduction and all allowed
    /// deductions, floored at zero.
    pub taxable_income: Decimal,
    /// Per-slab breakdown of the tax.
    pub slab_breakdown: Vec<SlabLine>,
    /// Tax before cess.
    pub tax: Decimal,
    /// Health and education cess.
    pub cess: Decimal,
    /// Tax plus cess.
    pub total_tax: Decimal,
    /// Monthly equivalent of the total tax (total divided by twelve).
    pub monthly_tax: Decimal,
}
