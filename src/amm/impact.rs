//! Preço à vista e impacto de preço.
//!
//! O impacto compara o preço efetivo do trade com o preço à vista do pool
//! **antes** do trade, sempre no mesmo eixo (base por quote), por
//! multiplicação cruzada em U256 — nada de ponto flutuante até o percentual
//! final de exibição.

use crate::amm::error::Result;
use crate::amm::guardrails::{
    div_floor_u256_to_u128, ensure_nonzero, ensure_reserves, mul_u128_to_u256,
};
use crate::amm::types::{Reserves, TradeMode, Wad, PPM_SCALE, U256, WAD};

/// Preço à vista de 1 quote em base (`base/quote`), em WAD, floor.
pub fn spot_price_base_per_quote(reserves: Reserves) -> Result<Wad> {
    ensure_reserves(reserves)?;
    let n = mul_u128_to_u256(reserves.base, WAD);
    div_floor_u256_to_u128(n, U256::from(reserves.quote))
}

/// Preço à vista de 1 base em quote (`quote/base`), em WAD, floor.
pub fn spot_price_quote_per_base(reserves: Reserves) -> Result<Wad> {
    ensure_reserves(reserves)?;
    let n = mul_u128_to_u256(reserves.quote, WAD);
    div_floor_u256_to_u128(n, U256::from(reserves.base))
}

/// Normaliza as pernas do trade para (base, quote) conforme o modo.
fn legs_base_quote(mode: TradeMode, amount_in: Wad, amount_out: Wad) -> (Wad, Wad) {
    if mode.base_is_input() {
        (amount_in, amount_out)
    } else {
        (amount_out, amount_in)
    }
}

/// Impacto de preço em ppm: `|efetivo - spot| / spot`, floor.
///
/// `amount_in`/`amount_out` são as pernas do trade cotado (exata + calculada);
/// a direção é normalizada para o eixo base-por-quote, então comprar e vender
/// são comparáveis. O valor não é limitado a 1e6 — trades enormes podem
/// deslocar o preço efetivo além de 100% do spot.
pub fn price_impact_ppm(
    reserves: Reserves,
    mode: TradeMode,
    amount_in: Wad,
    amount_out: Wad,
) -> Result<u128> {
    ensure_reserves(reserves)?;
    ensure_nonzero(amount_in)?;
    ensure_nonzero(amount_out)?;

    let (leg_base, leg_quote) = legs_base_quote(mode, amount_in, amount_out);

    // efetivo = leg_base/leg_quote, spot = base/quote
    // |efetivo - spot| / spot = |leg_base*quote - base*leg_quote| / (base*leg_quote)
    let lhs = mul_u128_to_u256(leg_base, reserves.quote);
    let rhs = mul_u128_to_u256(reserves.base, leg_quote);
    let num = if lhs >= rhs { lhs - rhs } else { rhs - lhs };
    let den = rhs;
    div_floor_u256_to_u128(num * U256::from(PPM_SCALE), den)
}

/// Impacto em percentual legível (só aqui entra ponto flutuante).
pub fn price_impact_pct(
    reserves: Reserves,
    mode: TradeMode,
    amount_in: Wad,
    amount_out: Wad,
) -> Result<f64> {
    let ppm = price_impact_ppm(reserves, mode, amount_in, amount_out)?;
    Ok(ppm as f64 / 10_000.0)
}
