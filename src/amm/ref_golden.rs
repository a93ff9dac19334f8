//! Referência de alta precisão ("goldens") baseada em **BigInt/BigRational**
//! para o motor de cotação CPMM (x·y=k, sem taxa).
//!
//! Objetivos desta referência:
//! 1. Calcular os resultados **contínuos/exatos** (sem quantização) da
//!    forward e da inversa, e o impacto de preço exato.
//! 2. Reproduzir a **política de arredondamento** do core (forward floor,
//!    inversa ceil) em Big-precision, para servir de oráculo de validação
//!    independente da aritmética U256.
//!
//! Nota: esta referência não entra no caminho de produção — serve só para
//! testes e geração de *goldens*.

use super::error::{Result, TradeError};
use super::error_catalog::TradeErrorCode;
use super::quote;
use super::types::{Reserves, TradeMode, Wad};

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive};

// -------------------------
// Helpers de conversão & arredondamento
// -------------------------
#[inline]
fn bu(v: Wad) -> BigUint { BigUint::from(v) }
#[inline]
fn bi(v: Wad) -> BigInt { BigInt::from(v) }
#[inline]
fn q_from_u128(n: Wad, d: Wad) -> BigRational { BigRational::new(bi(n), bi(d)) }

#[inline]
fn floor_rat_to_u128(r: &BigRational) -> Result<Wad> {
    let f: BigInt = r.clone().floor().to_integer();
    f.to_u128()
        .ok_or_else(|| TradeError::new(TradeErrorCode::OverflowNumeric))
}

#[inline]
fn ceil_rat_to_u128(r: &BigRational) -> Result<Wad> {
    let c: BigInt = r.clone().ceil().to_integer();
    c.to_u128()
        .ok_or_else(|| TradeError::new(TradeErrorCode::OverflowNumeric))
}

#[inline]
fn ceil_div_big(n: &BigUint, d: &BigUint) -> BigUint {
    (n + (d - BigUint::from(1u8))) / d
}

fn ensure_inputs(reserve_in: Wad, reserve_out: Wad, amount: Wad) -> Result<()> {
    if reserve_in == 0 || reserve_out == 0 {
        return Err(TradeError::new(TradeErrorCode::ZeroReserve));
    }
    if amount == 0 {
        return Err(TradeError::new(TradeErrorCode::InvalidAmount));
    }
    Ok(())
}

// -------------------------
// Contínuo/exato (sem quantização)
// -------------------------
/// Saída contínua: `dx * reserve_out / (reserve_in + dx)` como racional exato.
pub fn continuous_amount_out(reserve_in: Wad, reserve_out: Wad, dx: Wad) -> Result<BigRational> {
    ensure_inputs(reserve_in, reserve_out, dx)?;
    let num = bi(dx) * bi(reserve_out);
    let den = bi(reserve_in) + bi(dx);
    Ok(BigRational::new(num, den))
}

/// Input contínuo: `dy * reserve_in / (reserve_out - dy)`, definido só para
/// `dy < reserve_out`.
pub fn continuous_amount_in(reserve_in: Wad, reserve_out: Wad, dy: Wad) -> Result<BigRational> {
    ensure_inputs(reserve_in, reserve_out, dy)?;
    if dy >= reserve_out {
        return Err(TradeError::new(TradeErrorCode::ExceedsReserve));
    }
    let num = bi(dy) * bi(reserve_in);
    let den = bi(reserve_out) - bi(dy);
    Ok(BigRational::new(num, den))
}

/// Impacto de preço exato, como racional: `|efetivo - spot| / spot`
/// no eixo base-por-quote.
pub fn continuous_price_impact(
    reserves: Reserves,
    mode: TradeMode,
    amount_in: Wad,
    amount_out: Wad,
) -> Result<BigRational> {
    if reserves.base == 0 || reserves.quote == 0 {
        return Err(TradeError::new(TradeErrorCode::ZeroReserve));
    }
    if amount_in == 0 || amount_out == 0 {
        return Err(TradeError::new(TradeErrorCode::InvalidAmount));
    }
    let (leg_base, leg_quote) = if mode.base_is_input() {
        (amount_in, amount_out)
    } else {
        (amount_out, amount_in)
    };
    let eff = q_from_u128(leg_base, leg_quote);
    let spot = q_from_u128(reserves.base, reserves.quote);
    Ok(((eff - spot.clone()) / spot).abs())
}

// -------------------------
// Política (replica o core, mas em Big-precision)
// -------------------------
/// Forward com a política do core: quociente inteiro truncado (**floor**).
pub fn policy_amount_out(reserve_in: Wad, reserve_out: Wad, dx: Wad) -> Result<Wad> {
    ensure_inputs(reserve_in, reserve_out, dx)?;
    let num = bu(dx) * bu(reserve_out);
    let den = bu(reserve_in) + bu(dx);
    let out = num / den;
    out.to_u128()
        .ok_or_else(|| TradeError::new(TradeErrorCode::OverflowNumeric))
}

/// Inversa com a política do core: **ceil**, menor input suficiente.
pub fn policy_amount_in(reserve_in: Wad, reserve_out: Wad, dy: Wad) -> Result<Wad> {
    ensure_inputs(reserve_in, reserve_out, dy)?;
    if dy >= reserve_out {
        return Err(TradeError::new(TradeErrorCode::ExceedsReserve));
    }
    let num = bu(dy) * bu(reserve_in);
    let den = bu(reserve_out) - bu(dy);
    let dx = ceil_div_big(&num, &den);
    dx.to_u128()
        .ok_or_else(|| TradeError::new(TradeErrorCode::OverflowNumeric))
}

// -------------------------
// Estruturas de comparação (goldens)
// -------------------------
#[derive(Debug, Clone)]
pub struct RefOut {
    pub out_core: Wad,
    pub out_policy: Wad,
    pub out_cont_floor: Wad,
    pub out_cont: BigRational,
}

#[derive(Debug, Clone)]
pub struct RefIn {
    pub in_core: Wad,
    pub in_policy: Wad,
    pub in_cont_ceil: Wad,
    pub in_cont: BigRational,
}

/// Compara o **core** com a referência para a perna forward.
pub fn golden_amount_out(reserve_in: Wad, reserve_out: Wad, dx: Wad) -> Result<RefOut> {
    let out_core = quote::amount_out(reserve_in, reserve_out, dx)?;
    let out_policy = policy_amount_out(reserve_in, reserve_out, dx)?;
    let out_cont = continuous_amount_out(reserve_in, reserve_out, dx)?;
    let out_cont_floor = floor_rat_to_u128(&out_cont)?;
    Ok(RefOut { out_core, out_policy, out_cont_floor, out_cont })
}

/// Compara o **core** com a referência para a perna inversa.
pub fn golden_amount_in(reserve_in: Wad, reserve_out: Wad, dy: Wad) -> Result<RefIn> {
    let in_core = quote::amount_in(reserve_in, reserve_out, dy)?;
    let in_policy = policy_amount_in(reserve_in, reserve_out, dy)?;
    let in_cont = continuous_amount_in(reserve_in, reserve_out, dy)?;
    let in_cont_ceil = ceil_rat_to_u128(&in_cont)?;
    Ok(RefIn { in_core, in_policy, in_cont_ceil, in_cont })
}
