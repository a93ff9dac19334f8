//! Validações e helpers numéricos seguros do motor de cotação.
//! Política de arredondamento: floor nas cotas forward, ceil nas inversas,
//! para casar bit a bit com a execução on-chain.

use crate::amm::error::{Result, TradeError};
use crate::amm::error_catalog::TradeErrorCode;
use crate::amm::types::{Reserves, Wad, U256};

#[inline]
pub fn ensure_nonzero(amount: Wad) -> Result<()> {
    if amount == 0 {
        Err(TradeError::new(TradeErrorCode::InvalidAmount).with_context("amount", amount))
    } else {
        Ok(())
    }
}

#[inline]
pub fn ensure_reserves(reserves: Reserves) -> Result<()> {
    if reserves.base == 0 || reserves.quote == 0 {
        return Err(TradeError::new(TradeErrorCode::ZeroReserve)
            .with_context("base", reserves.base)
            .with_context("quote", reserves.quote));
    }
    Ok(())
}

#[inline]
pub fn checked_add(a: Wad, b: Wad) -> Result<Wad> {
    a.checked_add(b)
        .ok_or_else(|| TradeError::new(TradeErrorCode::OverflowNumeric))
}

#[inline]
pub fn checked_sub(a: Wad, b: Wad) -> Result<Wad> {
    a.checked_sub(b)
        .ok_or_else(|| TradeError::new(TradeErrorCode::OverflowNumeric))
}

#[inline]
pub fn mul_u128_to_u256(a: Wad, b: Wad) -> U256 {
    U256::from(a) * U256::from(b)
}

#[inline]
pub fn u256_to_u128_checked(v: U256) -> Result<Wad> {
    if v > U256::from(u128::MAX) {
        Err(TradeError::new(TradeErrorCode::OverflowNumeric))
    } else {
        Ok(v.as_u128())
    }
}

/// Divisão inteira com truncamento (floor para operandos não-negativos).
#[inline]
pub fn div_floor_u256(n: U256, d: U256) -> Result<U256> {
    if d.is_zero() {
        return Err(TradeError::new(TradeErrorCode::OverflowNumeric));
    }
    Ok(n / d)
}

/// Divisão inteira arredondando para cima: `ceil(n/d) = (n + d - 1) / d`.
#[inline]
pub fn div_ceil_u256(n: U256, d: U256) -> Result<U256> {
    if d.is_zero() {
        return Err(TradeError::new(TradeErrorCode::OverflowNumeric));
    }
    Ok((n + (d - U256::from(1u8))) / d)
}

#[inline]
pub fn div_floor_u256_to_u128(n: U256, d: U256) -> Result<Wad> {
    let q = div_floor_u256(n, d)?;
    u256_to_u128_checked(q)
}

#[inline]
pub fn div_ceil_u256_to_u128(n: U256, d: U256) -> Result<Wad> {
    let q = div_ceil_u256(n, d)?;
    u256_to_u128_checked(q)
}
