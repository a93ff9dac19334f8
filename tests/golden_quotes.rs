//! Goldens do motor de cotação: valores conferidos à mão + oráculo
//! BigRational (`ref_golden`) como validação independente do core U256.

use demoswap_core::amm::quote::quote;
use demoswap_core::amm::ref_golden::{golden_amount_in, golden_amount_out};
use demoswap_core::amm::slippage::{bound, min_out_with_tolerance};
use demoswap_core::amm::types::{Bound, Reserves, TradeMode, WAD};

fn pool() -> Reserves {
    // 10_000 ETH / 1_000_000 DEMO
    Reserves::new(10_000u128 * WAD, 1_000_000u128 * WAD)
}

#[test]
fn golden_spend_exact_in_scenario() {
    // floor(100e18 * 1_000_000e18 / 10_100e18)
    let q = quote(pool(), TradeMode::SpendExactIn, 100u128 * WAD).unwrap();
    assert_eq!(q.amount, 9_900_990_099_009_900_990_099u128);

    // minOut com 1% (100 bps): out - floor(out/100)
    let min_out = min_out_with_tolerance(q.amount, 100);
    assert_eq!(min_out, 9_801_980_198_019_801_980_199u128);
    assert_eq!(bound(&q, 100).unwrap(), Bound::MinOut(min_out));
}

#[test]
fn golden_all_modes_hand_checked() {
    let r = pool();

    let q = quote(r, TradeMode::SellExactIn, 1_000u128 * WAD).unwrap();
    assert_eq!(q.amount, 9_990_009_990_009_990_009u128);

    let q = quote(r, TradeMode::BuyExactOut, 5_000u128 * WAD).unwrap();
    assert_eq!(q.amount, 50_251_256_281_407_035_176u128);
    assert_eq!(bound(&q, 100).unwrap(), Bound::MaxIn(50_753_768_844_221_105_528u128));

    let q = quote(r, TradeMode::ReceiveExactOut, 50u128 * WAD).unwrap();
    assert_eq!(q.amount, 5_025_125_628_140_703_517_588u128);
}

#[test]
fn golden_core_matches_oracle_forward() {
    let cases: [(&str, u128, u128, u128); 5] = [
        ("sym:small", 1_000_000, 1_000_000, 1_000),
        ("sym:large", 5_000_000_000, 5_000_000_000, 1_000_000),
        ("asym:x>>y", 1_000_000_000, 1_000, 1_000),
        ("asym:y>>x", 1_000, 1_000_000_000, 1),
        ("scenario", 10_000, 1_000_000, 100),
    ];
    for (name, ri, ro, dx) in cases {
        let g = golden_amount_out(ri * WAD, ro * WAD, dx * WAD).unwrap();
        assert_eq!(g.out_core, g.out_policy, "{name}: core != policy");
        assert_eq!(g.out_core, g.out_cont_floor, "{name}: core != floor(contínuo)");
    }
}

#[test]
fn golden_core_matches_oracle_inverse() {
    let cases: [(&str, u128, u128, u128); 4] = [
        ("sym:small", 1_000_000, 1_000_000, 9_870),
        ("sym:large", 5_000_000_000, 5_000_000_000, 999_999),
        ("asym:y>>x", 1_000, 1_000_000_000, 500_000),
        ("scenario", 10_000, 1_000_000, 5_000),
    ];
    for (name, ri, ro, dy) in cases {
        let g = golden_amount_in(ri * WAD, ro * WAD, dy * WAD).unwrap();
        assert_eq!(g.in_core, g.in_policy, "{name}: core != policy");
        assert_eq!(g.in_core, g.in_cont_ceil, "{name}: core != ceil(contínuo)");
    }
}

#[test]
fn golden_one_wei_input() {
    // 1 wei de input numa reserva simétrica rende floor(~1 wei de saída)
    let out = demoswap_core::amm::quote::amount_out(1_000_000u128 * WAD, 1_000_000u128 * WAD, 1)
        .unwrap();
    assert_eq!(out, 0); // floor: o pool nunca paga a mais
}
