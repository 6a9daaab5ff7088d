//! Partially-filled calculator forms.
//!
//! Every field is optional; anything missing is taken from the configured
//! defaults before the engine sees the input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{OrderVolume, PurchaseOrderVolume};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderForm {
    pub monthly_orders: Option<u64>,
    pub avg_cost_per_order: Option<Decimal>,
    pub freight_cost: Option<Decimal>,
    pub hts_percentage: Option<Decimal>,
}

impl OrderForm {
    pub fn resolve(&self, defaults: &OrderVolume) -> OrderVolume {
        OrderVolume {
            monthly_orders: self.monthly_orders.unwrap_or(defaults.monthly_orders),
            avg_cost_per_order: self.avg_cost_per_order.unwrap_or(defaults.avg_cost_per_order),
            freight_cost: self.freight_cost.unwrap_or(defaults.freight_cost),
            hts_percentage: self.hts_percentage.unwrap_or(defaults.hts_percentage),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchaseOrderForm {
    pub units_per_po: Option<u64>,
    pub pos_per_year: Option<u64>,
    pub avg_cost_per_unit: Option<Decimal>,
    pub freight_cost: Option<Decimal>,
    pub hts_percentage: Option<Decimal>,
}

impl PurchaseOrderForm {
    pub fn resolve(&self, defaults: &PurchaseOrderVolume) -> PurchaseOrderVolume {
        PurchaseOrderVolume {
            units_per_po: self.units_per_po.unwrap_or(defaults.units_per_po),
            pos_per_year: self.pos_per_year.unwrap_or(defaults.pos_per_year),
            avg_cost_per_unit: self.avg_cost_per_unit.unwrap_or(defaults.avg_cost_per_unit),
            freight_cost: self.freight_cost.unwrap_or(defaults.freight_cost),
            hts_percentage: self.hts_percentage.unwrap_or(defaults.hts_percentage),
        }
    }
}

impl From<OrderVolume> for OrderForm {
    fn from(v: OrderVolume) -> Self {
        Self {
            monthly_orders: Some(v.monthly_orders),
            avg_cost_per_order: Some(v.avg_cost_per_order),
            freight_cost: Some(v.freight_cost),
            hts_percentage: Some(v.hts_percentage),
        }
    }
}

impl From<PurchaseOrderVolume> for PurchaseOrderForm {
    fn from(v: PurchaseOrderVolume) -> Self {
        Self {
            units_per_po: Some(v.units_per_po),
            pos_per_year: Some(v.pos_per_year),
            avg_cost_per_unit: Some(v.avg_cost_per_unit),
            freight_cost: Some(v.freight_cost),
            hts_percentage: Some(v.hts_percentage),
        }
    }
}
