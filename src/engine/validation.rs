//! Input bounds, re-checked at the engine boundary.
//!
//! Presentation layers are expected to reject bad input first; the engine
//! still fails fast rather than produce negative savings or percentages
//! above 100.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::warn;

use crate::types::{SavingsError, SavingsResult};

/// Smallest accepted cost per order / per unit.
pub const MIN_UNIT_COST: Decimal = dec!(0.01);

/// Largest accepted HTS percentage.
pub const MAX_HTS_PERCENTAGE: Decimal = dec!(100);

/// Volumes (orders, units, purchase orders) must be at least 1.
pub fn ensure_volume(field: &'static str, value: u64) -> SavingsResult<()> {
    if value < 1 {
        return Err(reject(field, format!("must be at least 1, got {value}")));
    }
    Ok(())
}

pub fn ensure_unit_cost(field: &'static str, value: Decimal) -> SavingsResult<()> {
    if value < MIN_UNIT_COST {
        return Err(reject(field, format!("must be at least {MIN_UNIT_COST}, got {value}")));
    }
    Ok(())
}

pub fn ensure_freight_cost(value: Decimal) -> SavingsResult<()> {
    if value < Decimal::ZERO {
        return Err(reject("freight_cost", format!("must not be negative, got {value}")));
    }
    Ok(())
}

pub fn ensure_hts_percentage(value: Decimal) -> SavingsResult<()> {
    if value < Decimal::ZERO || value > MAX_HTS_PERCENTAGE {
        return Err(reject(
            "hts_percentage",
            format!("must be between 0 and {MAX_HTS_PERCENTAGE}, got {value}"),
        ));
    }
    Ok(())
}

fn reject(field: &'static str, reason: String) -> SavingsError {
    warn!(field, reason = %reason, "Rejected calculator input");
    SavingsError::invalid(field, reason)
}
