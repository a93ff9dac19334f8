use std::collections::HashSet;

use demoswap_core::amm::error::TradeError;
use demoswap_core::amm::error_catalog::{default_locale_message, TradeErrorCode};

#[test]
fn all_codes_are_unique() {
    let mut seen = HashSet::new();
    for code in TradeErrorCode::all() {
        assert!(seen.insert(code.code()));
    }
    assert_eq!(seen.len(), TradeErrorCode::all().len());
}

#[test]
fn all_messages_nonempty() {
    for code in TradeErrorCode::all() {
        let message = code.message_pt().trim();
        assert!(
            !message.is_empty(),
            "{} message should not be empty",
            code.code()
        );
    }
}

#[test]
fn exhaustive_all_slice() {
    assert_eq!(TradeErrorCode::all().len(), 9);
}

#[test]
fn format_examples_resolve_placeholders() {
    let err = TradeError::new(TradeErrorCode::InvalidAmount).with_context("amount", "0");
    let user = err.to_user_string();
    assert!(user.contains("TRD-0001"));
    let json = err.to_log_json();
    assert!(json.contains("\"context\":{\"amount\":\"0\"}"));
    assert_eq!(
        default_locale_message(TradeErrorCode::InvalidAmount),
        "amount deve ser > 0"
    );
}

#[test]
fn execution_reasons_flow_into_message() {
    let err = TradeError::new(TradeErrorCode::ExecutionReverted)
        .with_context("reason", "K invariant violated");
    assert_eq!(
        err.to_user_string(),
        "[TRD-0008] execução revertida: K invariant violated"
    );
}
