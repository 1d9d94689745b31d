//! Position loading service.

use log::info;
use rust_decimal::Decimal;

use super::{LoadReport, PositionRecord};
use crate::errors::{Result, ValidationError};
use crate::portfolio::Portfolio;
use crate::securities::{SecurityCatalog, SecurityDefinition};

/// Validates parsed records and installs them as catalog entries and
/// portfolio positions.
///
/// Validation failures surface to the caller; nothing is loaded from a
/// batch containing a malformed row. This is the one place in the engine
/// where errors are returned rather than degraded around.
pub fn load_positions(
    records: &[PositionRecord],
    catalog: &SecurityCatalog,
    portfolio: &Portfolio,
) -> Result<LoadReport> {
    for record in records {
        validate(record)?;
    }

    let mut symbols = Vec::with_capacity(records.len());
    for record in records {
        let definition = match (record.kind.is_option(), record.strike, record.maturity) {
            (true, Some(strike), Some(maturity)) => {
                SecurityDefinition::option(record.symbol.clone(), record.kind, strike, maturity)
            }
            _ => SecurityDefinition::stock(record.symbol.clone()),
        };
        catalog.insert(definition);
        portfolio.add_position(record.symbol.clone(), record.quantity);
        symbols.push(record.symbol.clone());
    }

    info!("Loaded {} position(s)", symbols.len());
    Ok(LoadReport {
        loaded: symbols.len(),
        symbols,
    })
}

fn validate(record: &PositionRecord) -> Result<()> {
    if record.symbol.trim().is_empty() {
        return Err(ValidationError::InvalidInput("empty symbol".to_string()).into());
    }
    if record.quantity == Decimal::ZERO {
        return Err(ValidationError::InvalidInput(format!(
            "zero quantity for symbol '{}'",
            record.symbol
        ))
        .into());
    }
    if record.kind.is_option() {
        match record.strike {
            None => {
                return Err(ValidationError::MissingField {
                    symbol: record.symbol.clone(),
                    field: "strike".to_string(),
                }
                .into())
            }
            Some(strike) if strike <= Decimal::ZERO => {
                return Err(ValidationError::InvalidInput(format!(
                    "non-positive strike for symbol '{}'",
                    record.symbol
                ))
                .into())
            }
            Some(_) => {}
        }
        if record.maturity.is_none() {
            return Err(ValidationError::MissingField {
                symbol: record.symbol.clone(),
                field: "maturity".to_string(),
            }
            .into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::errors::Error;
    use crate::pricing::IntrinsicPricingEngine;
    use crate::securities::InstrumentKind;

    fn setup() -> (Arc<SecurityCatalog>, Portfolio) {
        let catalog = Arc::new(SecurityCatalog::new());
        let portfolio = Portfolio::new(catalog.clone(), Arc::new(IntrinsicPricingEngine::new()));
        (catalog, portfolio)
    }

    #[test]
    fn test_load_equities_and_derivatives() {
        let (catalog, portfolio) = setup();
        let records = vec![
            PositionRecord::equity("AAPL", dec!(100)),
            PositionRecord::equity("TSLA", dec!(50)),
            PositionRecord::derivative(
                "AAPL_C150",
                InstrumentKind::Call,
                dec!(10),
                dec!(150),
                NaiveDate::from_ymd_opt(2027, 1, 15).unwrap(),
            ),
        ];

        let report = load_positions(&records, &catalog, &portfolio).unwrap();

        assert_eq!(report.loaded, 3);
        assert_eq!(portfolio.len(), 3);
        assert_eq!(catalog.len(), 3);
        assert!(catalog.resolve("AAPL_C150").unwrap().kind.is_option());
    }

    #[test]
    fn test_option_without_strike_is_rejected() {
        let (catalog, portfolio) = setup();
        let record = PositionRecord {
            symbol: "AAPL_C150".to_string(),
            kind: InstrumentKind::Call,
            quantity: dec!(10),
            strike: None,
            maturity: Some(NaiveDate::from_ymd_opt(2027, 1, 15).unwrap()),
        };

        let err = load_positions(&[record], &catalog, &portfolio).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(portfolio.is_empty());
    }

    #[test]
    fn test_malformed_row_fails_the_whole_batch() {
        let (catalog, portfolio) = setup();
        let records = vec![
            PositionRecord::equity("AAPL", dec!(100)),
            PositionRecord::equity("", dec!(10)),
        ];

        assert!(load_positions(&records, &catalog, &portfolio).is_err());
        assert!(portfolio.is_empty());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let (catalog, portfolio) = setup();
        let records = vec![PositionRecord::equity("AAPL", dec!(0))];
        assert!(load_positions(&records, &catalog, &portfolio).is_err());
    }

    #[test]
    fn test_reloading_a_symbol_replaces_its_quantity() {
        let (catalog, portfolio) = setup();
        load_positions(
            &[PositionRecord::equity("AAPL", dec!(100))],
            &catalog,
            &portfolio,
        )
        .unwrap();
        load_positions(
            &[PositionRecord::equity("AAPL", dec!(120))],
            &catalog,
            &portfolio,
        )
        .unwrap();

        assert_eq!(portfolio.len(), 1);
        assert_eq!(portfolio.positions()[0].quantity, dec!(120));
    }
}
