//! Human-readable report lines for a calculation.
//!
//! Shared by the CLI text output and the dashboard, so both surfaces say
//! exactly the same thing.

use serde::Serialize;

use crate::chart::CostComparison;
use crate::format;
use crate::types::{Breakeven, OrderSavings, PurchaseOrderSavings, SavingsBreakdown, SavingsReport};

pub const NO_SAVINGS_MESSAGE: &str = "No savings calculated. Please check your input values.";

/// Everything a presentation layer needs to display one calculation.
#[derive(Debug, Clone, Serialize)]
pub struct Presentation {
    pub report: SavingsReport,
    pub summary: Vec<String>,
    pub insights: Vec<String>,
    pub chart: CostComparison,
}

impl Presentation {
    pub fn new(report: SavingsReport) -> Self {
        let summary = summary_lines(report.breakdown());
        let insights = match &report {
            SavingsReport::Orders(r) => order_insights(r),
            SavingsReport::PurchaseOrders(r) => purchase_order_insights(r),
        };
        let chart = CostComparison::from_breakdown(report.breakdown());
        Self {
            report,
            summary,
            insights,
            chart,
        }
    }

    /// Plain-text rendering: summary, chart, insights.
    pub fn render_text(&self, chart_width: usize) -> String {
        let mut out = vec!["Estimated Savings:".to_string()];
        out.extend(self.summary.iter().cloned());
        out.push(String::new());
        out.extend(self.chart.render_text(chart_width));
        out.push(String::new());
        out.push("Additional Insights:".to_string());
        out.extend(self.insights.iter().cloned());
        out.join("\n")
    }
}

fn summary_lines(b: &SavingsBreakdown) -> Vec<String> {
    let percentage = match b.percentage_savings {
        Some(pct) => format::percent(pct),
        None => "undefined".to_string(),
    };
    vec![
        format!("Total Cost of Goods and Freight: {}", format::currency(b.total_cost)),
        format!("Potential Savings with Section 321: {}", format::currency(b.savings)),
        format!("Percentage Savings: {percentage}"),
    ]
}

fn order_insights(r: &OrderSavings) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Average Saving per Order: {}",
            format::currency(r.average_saving_per_order)
        ),
        format!("Estimated Annual Savings: {}", format::currency(r.annual_savings)),
    ];
    lines.extend(breakeven_lines(&r.breakeven, "orders"));
    lines
}

fn purchase_order_insights(r: &PurchaseOrderSavings) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Average Saving per Purchase Order: {}",
            format::currency(r.average_saving_per_po)
        ),
        format!(
            "Average Saving per Unit: {}",
            format::currency(r.average_saving_per_unit)
        ),
    ];
    lines.extend(breakeven_lines(&r.breakeven, "purchase orders"));
    lines
}

fn breakeven_lines(breakeven: &Breakeven, unit: &str) -> Vec<String> {
    match breakeven {
        Breakeven::Reached { threshold, verdict } => vec![
            format!("Breakeven Point: {} {unit}", format::count(*threshold)),
            verdict.to_string(),
        ],
        Breakeven::Unreachable => vec![NO_SAVINGS_MESSAGE.to_string()],
    }
}
