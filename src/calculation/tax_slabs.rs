//! Progressive slab walk.
//!
//! Tax accrues per slab on the portion of taxable income falling between
//! the previous bound and the slab's upper bound; the top slab is
//! unbounded. The walk is a fold over the ordered table that leaves the
//! taxable amount untouched and returns an immutable breakdown.

use rust_decimal::Decimal;

use crate::config::Slab;
use crate::models::SlabLine;

/// The outcome of walking the slab table.
#[derive(Debug, Clone, PartialEq)]
pub struct SlabWalk {
    /// One line per slab that received any income.
    pub breakdown: Vec<SlabLine>,
    /// Total tax before cess.
    pub tax: Decimal,
}

/// Accrues tax for `taxable` over the ordered slab table.
///
/// Slabs must be ordered by ascending upper bound with the final slab
/// unbounded; the config loader enforces this shape.
pub fn walk_slabs(taxable: Decimal, slabs: &[Slab]) -> SlabWalk {
    let mut breakdown = Vec::new();
    let mut tax = Decimal::ZERO;
    let mut lower = Decimal::ZERO;

    for slab in slabs {
        if taxable <= lower {
            break;
        }

        let reach = match slab.upper {
            Some(upper) => taxable.min(upper),
            None => taxable,
        };
        let amount_in_slab = reach - lower;
        if amount_in_slab <= Decimal::ZERO {
            break;
        }

        let tax_for_slab = amount_in_slab * slab.rate;
        breakdown.push(SlabLine {
            label: slab_label(lower, slab.upper),
            amount_in_slab,
            rate: slab.rate,
            tax_for_slab,
        });
        tax += tax_for_slab;

        match slab.upper {
            Some(upper) => lower = upper,
            None => break,
        }
    }

    SlabWalk { breakdown, tax }
}

fn slab_label(lower: Decimal, upper: Option<Decimal>) -> String {
    match upper {
        Some(upper) if lower == Decimal::ZERO => format!("up to {}", upper),
        Some(upper) => format!("{} to {}", lower, upper),
        None => format!("above {}", lower),
    }
}
