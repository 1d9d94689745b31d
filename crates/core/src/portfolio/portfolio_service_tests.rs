use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{Portfolio, SkipReason};
use crate::market_data::{PricePoint, PriceSnapshot};
use crate::pricing::IntrinsicPricingEngine;
use crate::securities::{InstrumentKind, SecurityCatalog, SecurityDefinition};

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
}

fn snapshot(prices: &[(&str, Decimal)]) -> PriceSnapshot {
    let mut snapshot = PriceSnapshot::new();
    for (symbol, price) in prices {
        snapshot.insert(
            *symbol,
            PricePoint {
                last: *price,
                previous: None,
                as_of: Utc::now(),
            },
        );
    }
    snapshot
}

fn portfolio_with(symbols: &[(&str, Decimal)]) -> (Arc<SecurityCatalog>, Portfolio) {
    let catalog = Arc::new(SecurityCatalog::new());
    let portfolio = Portfolio::new(catalog.clone(), Arc::new(IntrinsicPricingEngine::new()));
    for (symbol, quantity) in symbols {
        catalog.insert(SecurityDefinition::stock(*symbol));
        portfolio.add_position(*symbol, *quantity);
    }
    (catalog, portfolio)
}

#[test]
fn test_equity_portfolio_nav() {
    let (_, portfolio) = portfolio_with(&[
        ("AAPL", dec!(100)),
        ("TSLA", dec!(50)),
        ("MSFT", dec!(75)),
    ]);
    assert_eq!(portfolio.len(), 3);

    let outcome = portfolio.recalculate(
        &snapshot(&[
            ("AAPL", dec!(150)),
            ("TSLA", dec!(800)),
            ("MSFT", dec!(300)),
        ]),
        as_of(),
    );

    assert_eq!(outcome.nav, dec!(100) * dec!(150) + dec!(50) * dec!(800) + dec!(75) * dec!(300));
    assert!(outcome.skipped.is_empty());
    assert_eq!(portfolio.nav(), Some(outcome.nav));
}

#[test]
fn test_unresolved_symbol_is_skipped_exactly_once() {
    let (_, portfolio) = portfolio_with(&[("AAPL", dec!(100))]);
    portfolio.add_position("GHOST", dec!(10));

    let outcome = portfolio.recalculate(
        &snapshot(&[("AAPL", dec!(150)), ("GHOST", dec!(5))]),
        as_of(),
    );

    assert_eq!(outcome.nav, dec!(15000));
    let ghost_skips: Vec<_> = outcome
        .skipped
        .iter()
        .filter(|s| s.symbol == "GHOST")
        .collect();
    assert_eq!(ghost_skips.len(), 1);
    assert_eq!(ghost_skips[0].reason, SkipReason::UnresolvedSecurity);
}

#[test]
fn test_missing_price_is_skipped_not_valued_at_zero() {
    let (_, portfolio) = portfolio_with(&[("AAPL", dec!(100)), ("TSLA", dec!(50))]);

    let outcome = portfolio.recalculate(&snapshot(&[("AAPL", dec!(150))]), as_of());

    assert_eq!(outcome.nav, dec!(15000));
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].reason, SkipReason::MissingPrice);
}

#[test]
fn test_expired_option_excluded_but_cycle_completes() {
    let (catalog, portfolio) = portfolio_with(&[("AAPL", dec!(100))]);
    catalog.insert(SecurityDefinition::option(
        "AAPL_C150",
        InstrumentKind::Call,
        dec!(150),
        NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(),
    ));
    portfolio.add_position("AAPL_C150", dec!(10));

    let outcome = portfolio.recalculate(
        &snapshot(&[("AAPL", dec!(150)), ("AAPL_C150", dec!(6.50))]),
        as_of(),
    );

    assert_eq!(outcome.nav, dec!(15000));
    assert!(matches!(outcome.skipped[0].reason, SkipReason::Pricing(_)));
}

#[test]
fn test_recalculation_is_idempotent_bit_for_bit() {
    let (_, portfolio) = portfolio_with(&[("AAPL", dec!(100)), ("TSLA", dec!(50))]);
    let snap = snapshot(&[("AAPL", dec!(150.1234)), ("TSLA", dec!(812.555))]);

    let first = portfolio.recalculate(&snap, as_of());
    let second = portfolio.recalculate(&snap, as_of());

    assert_eq!(first.nav, second.nav);
    assert_eq!(first.position_values, second.position_values);
}

#[test]
fn test_add_position_replaces_quantity_in_place() {
    let (_, portfolio) = portfolio_with(&[("AAPL", dec!(100)), ("TSLA", dec!(50))]);
    portfolio.add_position("AAPL", dec!(120));

    let positions = portfolio.positions();
    assert_eq!(positions.len(), 2);
    assert_eq!(positions[0].symbol, "AAPL");
    assert_eq!(positions[0].quantity, dec!(120));
}

#[test]
fn test_remove_position() {
    let (_, portfolio) = portfolio_with(&[("AAPL", dec!(100))]);
    assert!(portfolio.remove_position("AAPL"));
    assert!(!portfolio.remove_position("AAPL"));
    assert!(portfolio.is_empty());
}

#[test]
fn test_nav_is_none_before_first_recalculation() {
    let (_, portfolio) = portfolio_with(&[("AAPL", dec!(100))]);
    assert_eq!(portfolio.nav(), None);
    assert!(portfolio.published().is_none());
}
