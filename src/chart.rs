//! Cost comparison chart data.
//!
//! Two categories (without / with the program), each a stack of
//! "Total Cost" and "Savings". The dashboard draws it in the browser;
//! the CLI draws it with block characters.

use rust_decimal::prelude::*;
use serde::Serialize;

use crate::format;
use crate::types::SavingsBreakdown;

pub const CHART_TITLE: &str = "Cost Comparison: With and Without Section 321";
pub const WITHOUT_PROGRAM: &str = "Without Section 321";
pub const WITH_PROGRAM: &str = "With Section 321";

/// One stacked layer, one value per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarSeries {
    pub name: String,
    pub values: [Decimal; 2],
}

/// Stacked bar chart for the two-category comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostComparison {
    pub title: String,
    pub categories: [String; 2],
    pub series: Vec<BarSeries>,
    pub stacked: bool,
}

impl CostComparison {
    pub fn from_breakdown(breakdown: &SavingsBreakdown) -> Self {
        Self {
            title: CHART_TITLE.to_string(),
            categories: [WITHOUT_PROGRAM.to_string(), WITH_PROGRAM.to_string()],
            series: vec![
                BarSeries {
                    name: "Total Cost".to_string(),
                    values: [breakdown.total_cost, breakdown.cost_with_program()],
                },
                BarSeries {
                    name: "Savings".to_string(),
                    values: [Decimal::ZERO, breakdown.savings],
                },
            ],
            stacked: true,
        }
    }

    /// Height of each category's stack.
    pub fn stack_totals(&self) -> [Decimal; 2] {
        let mut totals = [Decimal::ZERO; 2];
        for s in &self.series {
            for (total, v) in totals.iter_mut().zip(s.values) {
                *total += v;
            }
        }
        totals
    }

    /// Horizontal text rendering: `█` for cost, `░` for savings, scaled so
    /// the tallest stack spans `width` cells.
    pub fn render_text(&self, width: usize) -> Vec<String> {
        let max = self
            .stack_totals()
            .into_iter()
            .max()
            .unwrap_or(Decimal::ZERO);
        let label_width = self.categories.iter().map(|c| c.chars().count()).max().unwrap_or(0);

        let mut lines = vec![self.title.clone()];
        for (i, category) in self.categories.iter().enumerate() {
            let mut bar = String::new();
            let mut parts = Vec::new();
            let mut running = Decimal::ZERO;
            let mut drawn = 0;
            for (s, glyph) in self.series.iter().zip(['█', '░']) {
                // Scale the cumulative stack so segment cells sum to the stack's cells.
                running += s.values[i];
                let end = scale(running, max, width);
                let cells = end.saturating_sub(drawn);
                drawn = drawn.max(end);
                bar.extend(std::iter::repeat(glyph).take(cells));
                if !s.values[i].is_zero() {
                    parts.push(format!("{} {}", s.name, format::currency(s.values[i])));
                }
            }
            lines.push(format!(
                "{category:<label_width$} │{bar:<width$}│ {}",
                parts.join(" + ")
            ));
        }
        lines
    }
}

fn scale(value: Decimal, max: Decimal, width: usize) -> usize {
    if max.is_zero() {
        return 0;
    }
    (value / max * Decimal::from(width))
        .round()
        .to_usize()
        .unwrap_or(0)
}
