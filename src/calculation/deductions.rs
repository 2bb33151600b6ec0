//! Deduction aggregation per regime.
//!
//! The regime table lists which deduction categories apply and their
//! independent caps; claims for categories the regime does not list are
//! ignored. Under the old regime the HRA exemption term joins the lines
//! when HRA inputs are supplied.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::config::RegimeConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{DeductionCode, DeductionLine, HraDetails};

use super::hra_exemption::hra_exemption;

/// The resolved deduction lines and their total.
#[derive(Debug, Clone, PartialEq)]
pub struct DeductionResult {
    /// One line per non-zero claim, caps applied.
    pub lines: Vec<DeductionLine>,
    /// Sum of the allowed amounts.
    pub total: Decimal,
}

/// Resolves the claimed deductions against a regime's category caps.
///
/// # Errors
///
/// Returns [`EngineError::InvalidAmount`] when any claimed amount or HRA
/// input is negative.
pub fn resolve_deductions(
    regime: &RegimeConfig,
    claims: &HashMap<DeductionCode, Decimal>,
    hra: Option<&HraDetails>,
) -> EngineResult<DeductionResult> {
    let mut lines = Vec::new();
    let mut total = Decimal::ZERO;

    for category in &regime.deductions {
        let claimed = claims.get(&category.code).copied().unwrap_or(Decimal::ZERO);
        if claimed < Decimal::ZERO {
            return Err(EngineError::InvalidAmount {
                field: category.code.as_code().to_string(),
                message: "claimed amount must not be negative".to_string(),
            });
        }
        if claimed == Decimal::ZERO {
            continue;
        }

        let allowed = match category.cap {
            Some(cap) => claimed.min(cap),
            None => claimed,
        };
        total += allowed;
        lines.push(DeductionLine {
            code: category.code.as_code().to_string(),
            claimed,
            allowed,
        });
    }

    if let (Some(policy), Some(details)) = (regime.hra.as_ref(), hra) {
        for (field, amount) in [
            ("hra.basic_annual", details.basic_annual),
            ("hra.hra_received", details.hra_received),
            ("hra.rent_paid", details.rent_paid),
        ] {
            if amount < Decimal::ZERO {
                return Err(EngineError::InvalidAmount {
                    field: field.to_string(),
                    message: "must not be negative".to_string(),
                });
            }
        }

        let result = hra_exemption(details, policy);
        if result.exemption > Decimal::ZERO {
            total += result.exemption;
            lines.push(DeductionLine {
                code: "hra_exemption".to_string(),
                claimed: result.actual_received,
                allowed: result.exemption,
            });
        }
    }

    Ok(DeductionResult { lines, total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DeductionCap, HraPolicy};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn old_regime() -> RegimeConfig {
        RegimeConfig {
            code: crate::models::TaxRegime::Old,
            name: "Old Regime".to_string(),
            fiscal_year: "2024-25".to_string(),
            standard_deduction: dec("50000"),
            cess_rate: dec("0.04"),
            slabs: vec![],
            deductions: vec![
                DeductionCap {
                    code: DeductionCode::Section80c,
                    cap: Some(dec("150000")),
                },
                DeductionCap {
                    code: DeductionCode::Nps80ccd1b,
                    cap: Some(dec("50000")),
                },
                DeductionCap {
                    code: DeductionCode::HealthInsuranceSelf,
                    cap: Some(dec("25000")),
                },
                DeductionCap {
                    code: DeductionCode::HealthInsuranceParents,
                    cap: Some(dec("50000")),
                },
            ],
            hra: Some(HraPolicy {
                metro_percent: dec("0.50"),
                non_metro_percent: dec("0.40"),
                rent_offset_percent: dec("0.10"),
            }),
        }
    }

    fn new_regime() -> RegimeConfig {
        RegimeConfig {
            code: crate::models::TaxRegime::NewFy2526,
            name: "New Regime".to_string(),
            fiscal_year: "2025-26".to_string(),
            standard_deduction: dec("75000"),
            cess_rate: dec("0.04"),
            slabs: vec![],
            deductions: vec![DeductionCap {
                code: DeductionCode::EmployerPension,
                cap: None,
            }],
            hra: None,
        }
    }

    #[test]
    fn test_caps_apply_independently() {
        let claims = HashMap::from([
            (DeductionCode::Section80c, dec("200000")),
            (DeductionCode::Nps80ccd1b, dec("30000")),
            (DeductionCode::HealthInsuranceSelf, dec("40000")),
        ]);

        let result = resolve_deductions(&old_regime(), &claims, None).unwrap();

        // 150000 capped + 30000 as claimed + 25000 capped
        assert_eq!(result.total, dec("205000"));
        assert_eq!(result.lines.len(), 3);

        let section_80c = result
            .lines
            .iter()
            .find(|line| line.code == "section_80c")
            .unwrap();
        assert_eq!(section_80c.claimed, dec("200000"));
        assert_eq!(section_80c.allowed, dec("150000"));
    }

    #[test]
    fn test_zero_claims_produce_no_lines() {
        let result = resolve_deductions(&old_regime(), &HashMap::new(), None).unwrap();
        assert!(result.lines.is_empty());
        assert_eq!(result.total, Decimal::ZERO);
    }

    #[test]
    fn test_unlisted_categories_are_ignored() {
        // employer pension is not in the old regime's table
        let claims = HashMap::from([(DeductionCode::EmployerPension, dec("80000"))]);
        let result = resolve_deductions(&old_regime(), &claims, None).unwrap();
        assert!(result.lines.is_empty());
    }

    #[test]
    fn test_new_regime_pension_is_uncapped() {
        let claims = HashMap::from([
            (DeductionCode::EmployerPension, dec("500000")),
            (DeductionCode::Section80c, dec("150000")),
        ]);

        let result = resolve_deductions(&new_regime(), &claims, None).unwrap();

        assert_eq!(result.lines.len(), 1);
        assert_eq!(result.lines[0].code, "employer_pension");
        assert_eq!(result.lines[0].allowed, dec("500000"));
        assert_eq!(result.total, dec("500000"));
    }

    #[test]
    fn test_hra_line_joins_old_regime_totals() {
        let hra = HraDetails {
            basic_annual: dec("400000"),
            hra_received: dec("160000"),
            rent_paid: dec("180000"),
            metro: true,
        };
        let claims = HashMap::from([(DeductionCode::Section80c, dec("100000"))]);

        let result = resolve_deductions(&old_regime(), &claims, Some(&hra)).unwrap();

        // 100000 + min(160000, 200000, 140000)
        assert_eq!(result.total, dec("240000"));
        assert!(result.lines.iter().any(|line| line.code == "hra_exemption"));
    }

    #[test]
    fn test_hra_ignored_when_regime_has_no_policy() {
        let hra = HraDetails {
            basic_annual: dec("400000"),
            hra_received: dec("160000"),
            rent_paid: dec("180000"),
            metro: true,
        };

        let result = resolve_deductions(&new_regime(), &HashMap::new(), Some(&hra)).unwrap();
        assert!(result.lines.is_empty());
    }

    #[test]
    fn test_negative_claim_is_an_error() {
        let claims = HashMap::from([(DeductionCode::Section80c, dec("-1"))]);
        let result = resolve_deductions(&old_regime(), &claims, None);

        match result.unwrap_err() {
            EngineError::InvalidAmount { field, .. } => assert_eq!(field, "section_80c"),
            other => panic!("Expected InvalidAmount, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_rent_is_an_error() {
        let hra = HraDetails {
            basic_annual: dec("400000"),
            hra_received: dec("160000"),
            rent_paid: dec("-5"),
            metro: true,
        };

        let result = resolve_deductions(&old_regime(), &HashMap::new(), Some(&hra));
        assert!(result.is_err());
    }
}
