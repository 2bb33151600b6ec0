//! House rent allowance exemption (old regime).
//!
//! The exempt amount is the least of three candidates: the HRA actually
//! received, the city percentage of basic salary, and the rent paid in
//! excess of a tenth of basic salary. The result keeps all three so a
//! caller can show which bound applied.

use rust_decimal::Decimal;

use crate::config::HraPolicy;
use crate::models::HraDetails;

/// The HRA exemption term with its three candidate bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct HraExemptionResult {
    /// HRA actually received over the year.
    pub actual_received: Decimal,
    /// The city percentage of basic salary (50% metro, 40% otherwise).
    pub city_cap: Decimal,
    /// Rent paid minus the configured share of basic salary, floored at zero.
    pub rent_excess: Decimal,
    /// The exempt amount: the least of the three candidates, never negative.
    pub exemption: Decimal,
}

/// Computes the HRA exemption term for the given inputs and policy.
pub fn hra_exemption(details: &HraDetails, policy: &HraPolicy) -> HraExemptionResult {
    let city_percent = if details.metro {
        policy.metro_percent
    } else {
        policy.non_metro_percent
    };

    let city_cap = details.basic_annual * city_percent;
    let rent_excess =
        (details.rent_paid - details.basic_annual * policy.rent_offset_percent).max(Decimal::ZERO);

    let exemption = details
        .hra_received
        .min(city_cap)
        .min(rent_excess)
        .max(Decimal::ZERO);

    HraExemptionResult {
        actual_received: details.hra_received,
        city_cap,
        rent_excess,
        exemption,
    }
}
