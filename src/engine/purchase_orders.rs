//! Purchase-order calculator.
//!
//! Volume is units per PO × POs per year. Per-PO and per-unit averages
//! divide the savings by those two factors.

use rust_decimal::Decimal;
use tracing::debug;

use super::validation::{ensure_freight_cost, ensure_hts_percentage, ensure_unit_cost, ensure_volume};
use super::{breakeven, checked_mul, checked_ratio};
use crate::types::{PurchaseOrderSavings, PurchaseOrderVolume, SavingsBreakdown, SavingsResult};

/// Validate and compute savings for a purchase-order volume.
///
/// breakeven POs = freight / (units per PO × cost per unit × HTS rate)
pub fn calculate(input: &PurchaseOrderVolume) -> SavingsResult<PurchaseOrderSavings> {
    ensure_volume("units_per_po", input.units_per_po)?;
    ensure_volume("pos_per_year", input.pos_per_year)?;
    ensure_unit_cost("avg_cost_per_unit", input.avg_cost_per_unit)?;
    ensure_freight_cost(input.freight_cost)?;
    ensure_hts_percentage(input.hts_percentage)?;

    let units_per_po = Decimal::from(input.units_per_po);
    let pos = Decimal::from(input.pos_per_year);
    let total_units = checked_mul(units_per_po, pos, "total units")?;

    let breakdown = SavingsBreakdown::compute(
        total_units,
        input.avg_cost_per_unit,
        input.freight_cost,
        input.hts_percentage,
    )?;

    let average_saving_per_po = checked_ratio(breakdown.savings, pos, "average saving per PO")?;
    let average_saving_per_unit =
        checked_ratio(breakdown.savings, total_units, "average saving per unit")?;

    let po_value = checked_mul(units_per_po, input.avg_cost_per_unit, "breakeven point")?;
    let breakeven = breakeven(input.freight_cost, po_value, input.hts_percentage, pos)?;

    debug!(
        input = %input,
        per_po = %average_saving_per_po,
        per_unit = %average_saving_per_unit,
        breakeven = ?breakeven.threshold(),
        "Purchase order savings calculated"
    );

    Ok(PurchaseOrderSavings {
        input: *input,
        breakdown,
        average_saving_per_po,
        average_saving_per_unit,
        breakeven,
    })
}
