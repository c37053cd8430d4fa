//! Verifies the crate's public API surface stays importable from the
//! documented paths.

use emove_core::calc::{expected_move, nearest_strike};
use emove_core::chain::{OptionChain, Quote};
use emove_core::types::error::{DateError, ExpectedMoveError, OptionSide, Severity};
use emove_core::types::symbol::Symbol;
use emove_core::types::time::ExpiryDate;

#[test]
fn crate_root_re_exports_match_module_paths() {
    // Same items must be reachable from the crate root.
    let _: fn(f64, &OptionChain) -> Result<emove_core::ExpectedMove, emove_core::ExpectedMoveError> =
        emove_core::expected_move;

    let chain = emove_core::OptionChain::new(
        vec![emove_core::Quote::new(100.0, 3.20)],
        vec![emove_core::Quote::new(100.0, 2.80)],
    );
    assert_eq!(chain.calls.len(), 1);

    let symbol: emove_core::Symbol = "aapl".parse().unwrap();
    assert_eq!(symbol.as_str(), "AAPL");

    let expiry: emove_core::ExpiryDate = "2026-09-18".parse().unwrap();
    assert_eq!(expiry.to_string(), "2026-09-18");
}

#[test]
fn full_pipeline_through_public_api() {
    let chain = OptionChain::new(
        vec![
            Quote::new(95.0, 5.40),
            Quote::new(100.0, 3.20),
            Quote::new(105.0, 1.10),
        ],
        vec![
            Quote::new(95.0, 1.00),
            Quote::new(100.0, 2.80),
            Quote::new(105.0, 4.90),
        ],
    );

    let atm = nearest_strike(chain.call_strikes(), 100.0).unwrap();
    assert_eq!(atm, 100.0);

    let result = expected_move(100.0, &chain).unwrap();
    assert_eq!(result.expected_move, 4.05);
}

#[test]
fn error_types_expose_severity_and_context() {
    let warning = ExpectedMoveError::InsufficientOtmStrikes {
        side: OptionSide::Put,
        atm_strike: 50.0,
    };
    assert_eq!(warning.severity(), Severity::Warning);

    let parse_err = ExpiryDate::parse("bogus").unwrap_err();
    assert!(matches!(parse_err, DateError::Parse(_)));

    let symbol_err = Symbol::new(" ").unwrap_err();
    assert_eq!(symbol_err.to_string(), "Symbol must not be empty");
}
