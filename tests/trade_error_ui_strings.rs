use demoswap_core::amm::error::TradeError;
use demoswap_core::amm::error_catalog::TradeErrorCode;

#[test]
fn no_newlines_or_tabs() {
    let err = TradeError::new(TradeErrorCode::ExecutionReverted)
        .with_context("reason", "linha1\nlinha2\ttab");
    let user = err.to_user_string();
    assert!(!user.contains('\n'));
    assert!(!user.contains('\t'));
}

#[test]
fn truncate_long_context_values() {
    let long_value = "a".repeat(1024);
    let err =
        TradeError::new(TradeErrorCode::ExecutionRejected).with_context("reason", long_value);
    let user = err.to_user_string();
    assert!(user.len() < 512);
}

#[test]
fn unknown_placeholder_is_left_as_is() {
    let err = TradeError::new(TradeErrorCode::InvalidAmount);
    let rendered = err.render_with_template("erro {desconhecido}");
    assert_eq!(rendered, "erro {desconhecido}");
}
