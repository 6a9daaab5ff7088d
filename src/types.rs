//! Shared types for the Section 321 savings calculator.
//!
//! Inputs, results and errors used by the engine, the report/chart
//! builders and both presentation surfaces (CLI and dashboard).
//! Nothing here is persisted; every value is built for a single
//! calculation and dropped afterwards.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Variant A: volume expressed as an average monthly order count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderVolume {
    /// Average number of orders per month (>= 1).
    pub monthly_orders: u64,
    /// Average cost of goods per order, in dollars (>= 0.01).
    pub avg_cost_per_order: Decimal,
    /// Freight costs for the period, in dollars (>= 0).
    pub freight_cost: Decimal,
    /// HTS duty rate as a percentage (0–100).
    pub hts_percentage: Decimal,
}

impl Default for OrderVolume {
    fn default() -> Self {
        Self {
            monthly_orders: 1000,
            avg_cost_per_order: dec!(50.00),
            freight_cost: dec!(5000.00),
            hts_percentage: dec!(5.0),
        }
    }
}

impl fmt::Display for OrderVolume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} orders/month @ ${} | freight ${} | HTS {}%",
            self.monthly_orders, self.avg_cost_per_order, self.freight_cost, self.hts_percentage,
        )
    }
}

/// Variant B: volume expressed as units per purchase order × purchase
/// orders per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchaseOrderVolume {
    /// Units on each purchase order (>= 1).
    pub units_per_po: u64,
    /// Purchase orders placed per year (>= 1).
    pub pos_per_year: u64,
    /// Average cost of goods per unit, in dollars (>= 0.01).
    pub avg_cost_per_unit: Decimal,
    /// Freight costs, in dollars (>= 0).
    pub freight_cost: Decimal,
    /// HTS duty rate as a percentage (0–100).
    pub hts_percentage: Decimal,
}

impl Default for PurchaseOrderVolume {
    fn default() -> Self {
        Self {
            units_per_po: 1000,
            pos_per_year: 12,
            avg_cost_per_unit: dec!(50.00),
            freight_cost: dec!(5000.00),
            hts_percentage: dec!(5.0),
        }
    }
}

impl fmt::Display for PurchaseOrderVolume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} units/PO × {} POs/year @ ${} | freight ${} | HTS {}%",
            self.units_per_po,
            self.pos_per_year,
            self.avg_cost_per_unit,
            self.freight_cost,
            self.hts_percentage,
        )
    }
}

/// Either calculator variant, tagged so it can travel as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum SavingsInput {
    Orders(OrderVolume),
    PurchaseOrders(PurchaseOrderVolume),
}

impl From<OrderVolume> for SavingsInput {
    fn from(input: OrderVolume) -> Self {
        SavingsInput::Orders(input)
    }
}

impl From<PurchaseOrderVolume> for SavingsInput {
    fn from(input: PurchaseOrderVolume) -> Self {
        SavingsInput::PurchaseOrders(input)
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Figures shared by both variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SavingsBreakdown {
    /// volume × unit cost + freight.
    pub total_cost: Decimal,
    /// total_cost × HTS rate.
    pub savings: Decimal,
    /// savings / total_cost × 100. `None` when total cost is zero.
    pub percentage_savings: Option<Decimal>,
}

impl SavingsBreakdown {
    /// Total cost once the program's savings are taken off.
    pub fn cost_with_program(&self) -> Decimal {
        self.total_cost - self.savings
    }

    /// Whether the calculation produced any savings at all.
    pub fn has_savings(&self) -> bool {
        self.savings > Decimal::ZERO
    }
}

/// Outcome of comparing the breakeven threshold to the current volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Breakeven threshold strictly below the current volume.
    Beneficial,
    /// Threshold at or above the current volume; savings still apply.
    BelowBreakeven,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Beneficial => {
                write!(f, "You're above the breakeven point, Section 321 is beneficial.")
            }
            Verdict::BelowBreakeven => write!(
                f,
                "You're below the breakeven point, but Section 321 can still provide savings."
            ),
        }
    }
}

/// Volume at which freight is fully offset by duty savings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Breakeven {
    Reached { threshold: Decimal, verdict: Verdict },
    /// No breakeven exists (zero savings rate).
    Unreachable,
}

impl Breakeven {
    pub fn threshold(&self) -> Option<Decimal> {
        match self {
            Breakeven::Reached { threshold, .. } => Some(*threshold),
            Breakeven::Unreachable => None,
        }
    }

    pub fn verdict(&self) -> Option<Verdict> {
        match self {
            Breakeven::Reached { verdict, .. } => Some(*verdict),
            Breakeven::Unreachable => None,
        }
    }

    pub fn is_beneficial(&self) -> bool {
        self.verdict() == Some(Verdict::Beneficial)
    }
}

/// Full result for the order-based variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderSavings {
    pub input: OrderVolume,
    #[serde(flatten)]
    pub breakdown: SavingsBreakdown,
    pub average_saving_per_order: Decimal,
    /// Monthly savings annualised.
    pub annual_savings: Decimal,
    /// Threshold expressed in orders.
    pub breakeven: Breakeven,
}

/// Full result for the purchase-order variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchaseOrderSavings {
    pub input: PurchaseOrderVolume,
    #[serde(flatten)]
    pub breakdown: SavingsBreakdown,
    pub average_saving_per_po: Decimal,
    pub average_saving_per_unit: Decimal,
    /// Threshold expressed in purchase orders.
    pub breakeven: Breakeven,
}

/// Result of either variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum SavingsReport {
    Orders(OrderSavings),
    PurchaseOrders(PurchaseOrderSavings),
}

impl SavingsReport {
    pub fn breakdown(&self) -> &SavingsBreakdown {
        match self {
            SavingsReport::Orders(r) => &r.breakdown,
            SavingsReport::PurchaseOrders(r) => &r.breakdown,
        }
    }

    pub fn breakeven(&self) -> &Breakeven {
        match self {
            SavingsReport::Orders(r) => &r.breakeven,
            SavingsReport::PurchaseOrders(r) => &r.breakeven,
        }
    }
}

impl fmt::Display for SavingsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.breakdown();
        write!(f, "total=${} savings=${}", b.total_cost, b.savings)?;
        match b.percentage_savings {
            Some(pct) => write!(f, " ({pct}%)")?,
            None => write!(f, " (undefined %)")?,
        }
        match self.breakeven() {
            Breakeven::Reached { threshold, verdict } => {
                write!(f, " | breakeven={threshold} {verdict:?}")
            }
            Breakeven::Unreachable => write!(f, " | no breakeven"),
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Savings engine errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SavingsError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Division by zero while computing {quantity}")]
    DivisionByZero { quantity: &'static str },

    #[error("Arithmetic overflow while computing {quantity}")]
    Overflow { quantity: &'static str },
}

impl SavingsError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SavingsError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

pub type SavingsResult<T> = Result<T, SavingsError>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
