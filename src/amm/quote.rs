//! Funções puras de cotação CPMM (x·y=k, sem taxa).
//! - `amount_out`: menor saída entregue para um input exato (floor)
//! - `amount_in`: menor input suficiente para uma saída exata (ceil)
//!
//! As quatro variantes de [`TradeMode`] são duas aplicações da fórmula
//! forward e da sua inversa algébrica sobre pernas trocadas; `quote` faz o
//! despacho. Aritmética 100% inteira para casar com a execução on-chain.

use crate::amm::error::Result;
use crate::amm::error_catalog::TradeErrorCode;
use crate::amm::guardrails::{
    checked_add, div_ceil_u256_to_u128, div_floor_u256_to_u128, ensure_nonzero, ensure_reserves,
    mul_u128_to_u256,
};
use crate::amm::types::{Quote, Reserves, TradeMode, Wad, U256};
use crate::trade_err;

/// Saída para um input exato `dx`: `floor(dx * reserve_out / (reserve_in + dx))`.
pub fn amount_out(reserve_in: Wad, reserve_out: Wad, dx: Wad) -> Result<Wad> {
    ensure_reserves(Reserves::new(reserve_in, reserve_out))?;
    ensure_nonzero(dx)?;

    let denom = checked_add(reserve_in, dx)?;
    let num = mul_u128_to_u256(dx, reserve_out);
    div_floor_u256_to_u128(num, U256::from(denom))
}

/// Menor input que entrega a saída exata `dy`:
/// `ceil(dy * reserve_in / (reserve_out - dy))`, definido só para `dy < reserve_out`.
pub fn amount_in(reserve_in: Wad, reserve_out: Wad, dy: Wad) -> Result<Wad> {
    ensure_reserves(Reserves::new(reserve_in, reserve_out))?;
    ensure_nonzero(dy)?;

    if dy >= reserve_out {
        return Err(trade_err!(
            TradeErrorCode::ExceedsReserve,
            requested => dy,
            available => reserve_out,
        ));
    }
    let num = mul_u128_to_u256(dy, reserve_in);
    let denom = reserve_out - dy; // dy < reserve_out garantido acima
    div_ceil_u256_to_u128(num, U256::from(denom))
}

/// Cota o trade pedido contra as reservas atuais.
///
/// `amount` é a perna exata digitada pelo usuário, na menor unidade do ativo;
/// a contraparte calculada volta em [`Quote::amount`]. Zero vira
/// [`TradeErrorCode::InvalidAmount`] — valor, nunca exceção; o chamador decide
/// se suprime a exibição ou bloqueia o trade.
pub fn quote(reserves: Reserves, mode: TradeMode, amount: Wad) -> Result<Quote> {
    let computed = match mode {
        // input exato em base, saída em quote
        TradeMode::SpendExactIn => amount_out(reserves.base, reserves.quote, amount)?,
        // input exato em quote, saída em base
        TradeMode::SellExactIn => amount_out(reserves.quote, reserves.base, amount)?,
        // saída exata em quote, input em base
        TradeMode::BuyExactOut => amount_in(reserves.base, reserves.quote, amount)?,
        // saída exata em base, input em quote
        TradeMode::ReceiveExactOut => amount_in(reserves.quote, reserves.base, amount)?,
    };
    Ok(Quote { mode, exact: amount, amount: computed })
}
