//! Testes de direção de arredondamento (forward floor, inversa ceil).

use demoswap_core::amm::quote::{amount_in, amount_out, quote};
use demoswap_core::amm::slippage::{max_in_with_tolerance, min_out_with_tolerance};
use demoswap_core::amm::types::{Reserves, TradeMode, U256, WAD};
use demoswap_core::TradeErrorCode;

fn pool() -> Reserves {
    Reserves::new(10_000u128 * WAD, 1_000_000u128 * WAD)
}

#[test]
fn r1_amount_out_is_floor_of_continuous_value() {
    let r = pool();
    let dx = 100u128 * WAD;
    let out = amount_out(r.base, r.quote, dx).unwrap();
    // floor(dx * quote / (base + dx)) via U256, sem ajuste de resto
    let num = U256::from(dx) * U256::from(r.quote);
    let den = U256::from(r.base + dx);
    assert_eq!(U256::from(out), num / den);
    // o resto descartado fica com o pool
    assert!((num % den) < den);
}

#[test]
fn r2_amount_in_is_ceil_minimality() {
    let r = pool();
    let dy = 5_000u128 * WAD;
    let dx = amount_in(r.base, r.quote, dy).unwrap();
    // com dx-1 não deve alcançar dy
    let out_prev = amount_out(r.base, r.quote, dx - 1).unwrap();
    assert!(out_prev < dy);
    // com dx alcança
    let out = amount_out(r.base, r.quote, dx).unwrap();
    assert!(out >= dy);
}

#[test]
fn r3_inverse_then_forward_never_shorts_the_trader() {
    // arredondamento favorece o pool: o input calculado sempre entrega >= dy
    let r = pool();
    for dy in [1u128, WAD / 3, 777u128 * WAD, 99_999u128 * WAD] {
        let dx = amount_in(r.base, r.quote, dy).unwrap();
        let delivered = amount_out(r.base, r.quote, dx).unwrap();
        assert!(delivered >= dy, "dy={dy}: entregue {delivered}");
    }
}

#[test]
fn r4_exact_out_boundary() {
    let r = pool();
    let err = quote(r, TradeMode::BuyExactOut, r.quote).unwrap_err();
    assert_eq!(err.code, TradeErrorCode::ExceedsReserve);
    let q = quote(r, TradeMode::BuyExactOut, r.quote - 1).unwrap();
    assert!(q.amount > 0);

    let err = quote(r, TradeMode::ReceiveExactOut, r.base).unwrap_err();
    assert_eq!(err.code, TradeErrorCode::ExceedsReserve);
    let q = quote(r, TradeMode::ReceiveExactOut, r.base - 1).unwrap();
    assert!(q.amount > 0);
}

#[test]
fn r5_min_out_is_floor_and_clamped() {
    // floor do corte: 1% de 101 = 1.01 → corta 1
    assert_eq!(min_out_with_tolerance(101, 100), 100);
    // clamp em 1: nunca piso zero
    assert_eq!(min_out_with_tolerance(1, 10_000), 1);
}

#[test]
fn r6_max_in_is_ceil_of_pad() {
    // 1% de 101 = 1.01 → acrescenta 2
    assert_eq!(max_in_with_tolerance(101, 100).unwrap(), 103);
    // exato não sofre ajuste: 1% de 100 = 1
    assert_eq!(max_in_with_tolerance(100, 100).unwrap(), 101);
}
