//! Engine invariants checked over a grid of valid inputs.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use section321::engine::{self, orders, purchase_orders};
use section321::types::{Breakeven, OrderVolume, PurchaseOrderVolume};

fn order_grid() -> Vec<OrderVolume> {
    let mut grid = Vec::new();
    for monthly_orders in [1, 7, 1000, 250_000] {
        for avg_cost_per_order in [dec!(0.01), dec!(3.33), dec!(50), dec!(1999.99)] {
            for freight_cost in [Decimal::ZERO, dec!(0.5), dec!(5000), dec!(1000000)] {
                for hts_percentage in [Decimal::ZERO, dec!(0.1), dec!(5), dec!(37.5), dec!(100)] {
                    grid.push(OrderVolume {
                        monthly_orders,
                        avg_cost_per_order,
                        freight_cost,
                        hts_percentage,
                    });
                }
            }
        }
    }
    grid
}

fn purchase_order_grid() -> Vec<PurchaseOrderVolume> {
    let mut grid = Vec::new();
    for (units_per_po, pos_per_year) in [(1, 1), (3, 333), (1000, 12), (50_000, 52)] {
        for avg_cost_per_unit in [dec!(0.01), dec!(3.33), dec!(50), dec!(1999.99)] {
            for freight_cost in [Decimal::ZERO, dec!(0.5), dec!(5000), dec!(1000000)] {
                for hts_percentage in [Decimal::ZERO, dec!(0.1), dec!(5), dec!(37.5), dec!(100)] {
                    grid.push(PurchaseOrderVolume {
                        units_per_po,
                        pos_per_year,
                        avg_cost_per_unit,
                        freight_cost,
                        hts_percentage,
                    });
                }
            }
        }
    }
    grid
}

#[test]
fn test_total_cost_covers_freight_and_savings_are_bounded() {
    for input in order_grid() {
        let r = orders::calculate(&input).unwrap();
        let b = r.breakdown;
        assert!(b.total_cost >= input.freight_cost, "{input}");
        assert!(b.savings >= Decimal::ZERO, "{input}");
        assert!(b.savings <= b.total_cost, "{input}");
        let pct = b.percentage_savings.expect("total cost is positive");
        assert!(pct >= Decimal::ZERO && pct <= dec!(100), "{input}: {pct}");
    }
}

#[test]
fn test_purchase_order_totals_are_bounded() {
    for input in purchase_order_grid() {
        let r = purchase_orders::calculate(&input).unwrap();
        let b = r.breakdown;
        assert!(b.total_cost >= input.freight_cost, "{input}");
        assert!(b.savings >= Decimal::ZERO, "{input}");
        assert!(b.savings <= b.total_cost, "{input}");
        let pct = b.percentage_savings.expect("total cost is positive");
        assert!(pct >= Decimal::ZERO && pct <= dec!(100), "{input}: {pct}");
        assert!(r.average_saving_per_unit <= r.average_saving_per_po, "{input}");
    }
}

#[test]
fn test_total_cost_is_monotonic_in_volume_and_unit_cost() {
    let base = OrderVolume::default();
    let more_orders = OrderVolume {
        monthly_orders: base.monthly_orders + 1,
        ..base
    };
    let dearer = OrderVolume {
        avg_cost_per_order: base.avg_cost_per_order + dec!(0.01),
        ..base
    };
    let t = |i: &OrderVolume| orders::calculate(i).unwrap().breakdown.total_cost;
    assert!(t(&more_orders) > t(&base));
    assert!(t(&dearer) > t(&base));
}

#[test]
fn test_calculation_is_idempotent() {
    for input in order_grid().into_iter().step_by(17) {
        let a = orders::calculate(&input).unwrap();
        let b = orders::calculate(&input).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_doubling_rate_doubles_savings() {
    for pct in [dec!(0.1), dec!(2.5), dec!(5), dec!(25), dec!(50)] {
        let base = OrderVolume {
            hts_percentage: pct,
            ..OrderVolume::default()
        };
        let doubled = OrderVolume {
            hts_percentage: pct * dec!(2),
            ..base
        };
        let a = orders::calculate(&base).unwrap().breakdown;
        let b = orders::calculate(&doubled).unwrap().breakdown;
        assert_eq!(b.savings, a.savings * dec!(2));
        assert_eq!(
            b.percentage_savings.unwrap(),
            a.percentage_savings.unwrap() * dec!(2)
        );
    }
}

#[test]
fn test_purchase_order_doubling_rate_doubles_savings() {
    for input in purchase_order_grid()
        .into_iter()
        .filter(|i| !i.hts_percentage.is_zero() && i.hts_percentage <= dec!(50))
    {
        let doubled = PurchaseOrderVolume {
            hts_percentage: input.hts_percentage * dec!(2),
            ..input
        };
        let a = purchase_orders::calculate(&input).unwrap().breakdown;
        let b = purchase_orders::calculate(&doubled).unwrap().breakdown;
        assert_eq!(b.savings, a.savings * dec!(2), "{input}");
    }
}

#[test]
fn test_purchase_orders_match_orders_for_same_volume() {
    for (units_per_po, pos_per_year) in [(1, 1), (1000, 12), (40, 25), (3, 333)] {
        for cost in [dec!(0.01), dec!(50), dec!(12.34)] {
            let po = PurchaseOrderVolume {
                units_per_po,
                pos_per_year,
                avg_cost_per_unit: cost,
                freight_cost: dec!(5000),
                hts_percentage: dec!(5),
            };
            let order = OrderVolume {
                monthly_orders: units_per_po * pos_per_year,
                avg_cost_per_order: cost,
                freight_cost: dec!(5000),
                hts_percentage: dec!(5),
            };
            let a = orders::calculate(&order).unwrap().breakdown;
            let b = purchase_orders::calculate(&po).unwrap().breakdown;
            assert_eq!(a.total_cost, b.total_cost);
            assert_eq!(a.savings, b.savings);
            assert_eq!(a.percentage_savings, b.percentage_savings);
        }
    }
}

#[test]
fn test_zero_rate_never_reaches_breakeven() {
    for input in order_grid()
        .into_iter()
        .filter(|i| i.hts_percentage.is_zero())
    {
        let r = orders::calculate(&input).unwrap();
        assert_eq!(r.breakdown.savings, Decimal::ZERO);
        assert_eq!(r.breakeven, Breakeven::Unreachable);
    }
    for input in purchase_order_grid()
        .into_iter()
        .filter(|i| i.hts_percentage.is_zero())
    {
        let r = purchase_orders::calculate(&input).unwrap();
        assert_eq!(r.breakdown.savings, Decimal::ZERO);
        assert_eq!(r.breakeven, Breakeven::Unreachable);
    }
}

#[test]
fn test_breakeven_offsets_freight() {
    // At the threshold volume, savings on goods equal the freight bill.
    let input = OrderVolume::default();
    let r = orders::calculate(&input).unwrap();
    let threshold = r.breakeven.threshold().unwrap();
    let offset = threshold * input.avg_cost_per_order * input.hts_percentage / dec!(100);
    assert_eq!(offset, input.freight_cost);
}

#[test]
fn test_reference_examples() {
    let a = engine::calculate(&OrderVolume::default().into()).unwrap();
    assert_eq!(a.breakdown().total_cost, dec!(55000.00));
    assert_eq!(a.breakdown().savings, dec!(2750.00));
    assert_eq!(a.breakeven().threshold(), Some(dec!(2000)));
    assert!(!a.breakeven().is_beneficial());

    let b = engine::calculate(&PurchaseOrderVolume::default().into()).unwrap();
    assert_eq!(b.breakdown().total_cost, dec!(605000.00));
    assert_eq!(b.breakdown().savings, dec!(30250.00));
    assert_eq!(b.breakeven().threshold(), Some(dec!(2.0)));
    assert!(b.breakeven().is_beneficial());
}
