//! Order-based calculator.
//!
//! Volume is the average number of orders per month, so the result is a
//! monthly snapshot; annual savings scale it by twelve.

use rust_decimal::Decimal;
use tracing::debug;

use super::validation::{ensure_freight_cost, ensure_hts_percentage, ensure_unit_cost, ensure_volume};
use super::{breakeven, checked_mul, checked_ratio};
use crate::types::{OrderVolume, OrderSavings, SavingsBreakdown, SavingsResult};

/// Months used to annualise a monthly snapshot.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Validate and compute savings for a monthly order volume.
///
/// breakeven orders = freight / (cost per order × HTS rate)
pub fn calculate(input: &OrderVolume) -> SavingsResult<OrderSavings> {
    ensure_volume("monthly_orders", input.monthly_orders)?;
    ensure_unit_cost("avg_cost_per_order", input.avg_cost_per_order)?;
    ensure_freight_cost(input.freight_cost)?;
    ensure_hts_percentage(input.hts_percentage)?;

    let orders = Decimal::from(input.monthly_orders);
    let breakdown = SavingsBreakdown::compute(
        orders,
        input.avg_cost_per_order,
        input.freight_cost,
        input.hts_percentage,
    )?;

    let average_saving_per_order =
        checked_ratio(breakdown.savings, orders, "average saving per order")?;
    let annual_savings = checked_mul(
        breakdown.savings,
        Decimal::from(MONTHS_PER_YEAR),
        "annual savings",
    )?;

    let breakeven = breakeven(
        input.freight_cost,
        input.avg_cost_per_order,
        input.hts_percentage,
        orders,
    )?;

    debug!(
        input = %input,
        per_order = %average_saving_per_order,
        annual = %annual_savings,
        breakeven = ?breakeven.threshold(),
        "Order savings calculated"
    );

    Ok(OrderSavings {
        input: *input,
        breakdown,
        average_saving_per_order,
        annual_savings,
        breakeven,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
