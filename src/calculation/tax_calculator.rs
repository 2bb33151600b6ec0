//! End-to-end tax computation.
//!
//! Standard deduction, capped deductions and the slab walk are combined
//! into one structured [`TaxComputation`]. No rounding happens anywhere in
//! the pipeline; display formatting belongs to the caller.

use rust_decimal::Decimal;

use crate::config::TaxRuleSet;
use crate::error::{EngineError, EngineResult};
use crate::models::{TaxComputation, TaxInput};

use super::deductions::resolve_deductions;
use super::tax_slabs::walk_slabs;

/// Computes tax liability for the given input under its regime's table.
///
/// # Errors
///
/// Returns [`EngineError::RegimeNotFound`] when no table is loaded for the
/// input's regime, and [`EngineError::InvalidAmount`] when the gross income
/// or any claimed amount is negative.
pub fn compute_tax(input: &TaxInput, ruleset: &TaxRuleSet) -> EngineResult<TaxComputation> {
    let regime = ruleset
        .regime(input.regime)
        .ok_or_else(|| EngineError::RegimeNotFound {
            regime: input.regime.as_code().to_string(),
        })?;

    if input.gross_annual_income < Decimal::ZERO {
        return Err(EngineError::InvalidAmount {
            field: "gross_annual_income".to_string(),
            message: "must not be negative".to_string(),
        });
    }

    let deductions = resolve_deductions(regime, &input.deductions, input.hra.as_ref())?;
    let taxable_income = (input.gross_annual_income
        - regime.standard_deduction
        - deductions.total)
        .max(Decimal::ZERO);

    let walk = walk_slabs(taxable_income, &regime.slabs);
    let cess = walk.tax * regime.cess_rate;
    let total_tax = walk.tax + cess;
    let monthly_tax = total_tax / Decimal::from(12);

    Ok(TaxComputation {
        regime: input.regime,
        gross_annual_income: input.gross_annual_income,
        standard_deduction: regime.standard_deduction,
        deduction_lines: deductions.lines,
        total_deductions: deductions.total,
        taxable_income,
        slab_breakdown: walk.breakdown,
        tax: walk.tax,
        cess,
        total_tax,
        monthly_tax,
    })
}
