//! Savings engine — duty savings, per-unit figures and breakeven.
//!
//! Both calculator variants reduce to the same core: a volume, a unit
//! cost, a freight charge and an HTS rate. The variant modules validate
//! their own inputs, decompose volume, and layer their derived metrics on
//! top of [`SavingsBreakdown::compute`].
//!
//! All arithmetic is checked. Division by zero never escapes as a fault:
//! it becomes `percentage_savings: None` or [`Breakeven::Unreachable`].

pub mod orders;
pub mod purchase_orders;
pub mod validation;

use rust_decimal::Decimal;
use tracing::debug;

use crate::types::{
    Breakeven, SavingsBreakdown, SavingsError, SavingsInput, SavingsReport, SavingsResult,
    Verdict,
};

/// Run whichever variant the input describes.
pub fn calculate(input: &SavingsInput) -> SavingsResult<SavingsReport> {
    match input {
        SavingsInput::Orders(o) => orders::calculate(o).map(SavingsReport::Orders),
        SavingsInput::PurchaseOrders(p) => {
            purchase_orders::calculate(p).map(SavingsReport::PurchaseOrders)
        }
    }
}

impl SavingsBreakdown {
    /// Total cost, savings and percentage savings for a pre-validated
    /// volume.
    pub fn compute(
        volume: Decimal,
        unit_cost: Decimal,
        freight_cost: Decimal,
        hts_percentage: Decimal,
    ) -> SavingsResult<Self> {
        let goods = checked_mul(volume, unit_cost, "cost of goods")?;
        let total_cost = goods
            .checked_add(freight_cost)
            .ok_or(SavingsError::Overflow { quantity: "total cost" })?;
        let savings = apply_rate(total_cost, hts_percentage, "savings")?;

        let percentage_savings = match checked_ratio(savings, total_cost, "percentage savings") {
            Ok(ratio) => Some(checked_mul(ratio, Decimal::ONE_HUNDRED, "percentage savings")?),
            Err(SavingsError::DivisionByZero { .. }) => None,
            Err(e) => return Err(e),
        };

        debug!(
            total_cost = %total_cost,
            savings = %savings,
            percentage = ?percentage_savings,
            "Savings computed"
        );

        Ok(Self {
            total_cost,
            savings,
            percentage_savings,
        })
    }
}

/// Breakeven threshold = freight / (value per unit of volume × HTS rate),
/// classified against the current volume with a strict less-than.
///
/// Evaluated as `freight × 100 / (value × hts_percentage)` so the rate is
/// never divided down on its own. A zero rate yields `Unreachable`.
pub(crate) fn breakeven(
    freight_cost: Decimal,
    value_per_volume: Decimal,
    hts_percentage: Decimal,
    current_volume: Decimal,
) -> SavingsResult<Breakeven> {
    let numerator = checked_mul(freight_cost, Decimal::ONE_HUNDRED, "breakeven point")?;
    let denominator = checked_mul(value_per_volume, hts_percentage, "breakeven point")?;
    match checked_ratio(numerator, denominator, "breakeven point") {
        Ok(threshold) => {
            let verdict = if threshold < current_volume {
                Verdict::Beneficial
            } else {
                Verdict::BelowBreakeven
            };
            Ok(Breakeven::Reached { threshold, verdict })
        }
        Err(SavingsError::DivisionByZero { .. }) => {
            debug!(freight = %freight_cost, "Zero savings rate, no breakeven");
            Ok(Breakeven::Unreachable)
        }
        Err(e) => Err(e),
    }
}

/// `amount × hts_percentage / 100`. Multiplying first keeps tiny rates
/// from rounding to zero at Decimal's 28-digit scale.
pub(crate) fn apply_rate(
    amount: Decimal,
    hts_percentage: Decimal,
    quantity: &'static str,
) -> SavingsResult<Decimal> {
    let scaled = checked_mul(amount, hts_percentage, quantity)?;
    checked_ratio(scaled, Decimal::ONE_HUNDRED, quantity)
}

pub(crate) fn checked_mul(a: Decimal, b: Decimal, quantity: &'static str) -> SavingsResult<Decimal> {
    a.checked_mul(b).ok_or(SavingsError::Overflow { quantity })
}

pub(crate) fn checked_ratio(
    numerator: Decimal,
    denominator: Decimal,
    quantity: &'static str,
) -> SavingsResult<Decimal> {
    if denominator.is_zero() {
        return Err(SavingsError::DivisionByZero { quantity });
    }
    numerator
        .checked_div(denominator)
        .ok_or(SavingsError::Overflow { quantity })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
