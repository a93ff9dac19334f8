//! Tolerância de slippage: parse do texto da UI em basis points e derivação
//! dos limites de execução (`min_out`/`max_in`) a partir de uma cota.

use crate::amm::error::Result;
use crate::amm::guardrails::{div_ceil_u256, u256_to_u128_checked};
use crate::amm::types::{Bound, Bps, Quote, Wad, BPS_SCALE, U256};

/// Converte o texto digitado (`"0.5"`, `"1"`, `"100.00"`) em basis points.
///
/// Aceita `\d{1,3}(\.\d{0,2})?` com parte inteira ≤ 100 e resultado ≤ 10_000.
/// Qualquer outra entrada devolve `None` — e `None` significa "desabilite o
/// trade", nunca tolerância zero.
pub fn parse_slippage_bps(text: &str) -> Option<Bps> {
    let (whole, frac) = match text.split_once('.') {
        Some((w, f)) => (w, f),
        None => (text, ""),
    };
    if whole.is_empty() || whole.len() > 3 || frac.len() > 2 {
        return None;
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let whole: Bps = whole.parse().ok()?;
    if whole > 100 {
        return None;
    }
    // "5" são 50 centésimos; "55" são 55
    let mut frac_centis: Bps = 0;
    for (i, b) in frac.bytes().enumerate() {
        let digit = Bps::from(b - b'0');
        frac_centis += digit * if i == 0 { 10 } else { 1 };
    }
    let bps = whole * 100 + frac_centis;
    if bps > BPS_SCALE {
        return None;
    }
    Some(bps)
}

/// Piso de saída aceito: `out - floor(out * bps / 10_000)`, nunca abaixo de 1.
///
/// O clamp em 1 evita um piso degenerado de zero que aceitaria qualquer
/// preço de execução.
pub fn min_out_with_tolerance(amount_out: Wad, tolerance_bps: Bps) -> Wad {
    let tol = tolerance_bps.min(BPS_SCALE);
    let cut = (U256::from(amount_out) * U256::from(tol)) / U256::from(BPS_SCALE); // floor
    let min_out = amount_out - cut.as_u128(); // cut <= amount_out
    if min_out == 0 { 1 } else { min_out }
}

/// Teto de input aceito: `in + ceil(in * bps / 10_000)`.
pub fn max_in_with_tolerance(amount_in: Wad, tolerance_bps: Bps) -> Result<Wad> {
    let tol = tolerance_bps.min(BPS_SCALE);
    let pad = div_ceil_u256(
        U256::from(amount_in) * U256::from(tol),
        U256::from(BPS_SCALE),
    )?;
    u256_to_u128_checked(U256::from(amount_in) + pad)
}

/// Deriva o limite de execução da cota: piso de saída nos modos exact-input,
/// teto de input nos exact-output. O limite sempre anda **contra** o trader.
pub fn bound(quote: &Quote, tolerance_bps: Bps) -> Result<Bound> {
    if quote.mode.is_exact_input() {
        Ok(Bound::MinOut(min_out_with_tolerance(quote.amount, tolerance_bps)))
    } else {
        Ok(Bound::MaxIn(max_in_with_tolerance(quote.amount, tolerance_bps)?))
    }
}

// -------------------------
// TESTES
// -------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use crate::amm::types::{TradeMode, WAD};

    #[test]
    fn t_parse_accepts_canonical_forms() {
        assert_eq!(parse_slippage_bps("1.0"), Some(100));
        assert_eq!(parse_slippage_bps("100"), Some(10_000));
        assert_eq!(parse_slippage_bps("0.5"), Some(50));
        assert_eq!(parse_slippage_bps("0.05"), Some(5));
        assert_eq!(parse_slippage_bps("0"), Some(0));
        assert_eq!(parse_slippage_bps("12.34"), Some(1_234));
        // ponto sem fração é aceito pela gramática
        assert_eq!(parse_slippage_bps("1."), Some(100));
    }

    #[test]
    fn t_parse_rejects_out_of_grammar() {
        for bad in ["", "101", "1.234", "1000", ".5", "1,5", "-1", "abc", "1e1", "100.01"] {
            assert_eq!(parse_slippage_bps(bad), None, "deveria rejeitar {bad:?}");
        }
    }

    #[test]
    fn t_min_out_moves_against_trader() {
        let out = 9_900u128 * WAD;
        let min = min_out_with_tolerance(out, 100); // 1%
        assert_eq!(min, out - out / 100);
        assert!(min < out);
        // bps=0 é identidade
        assert_eq!(min_out_with_tolerance(out, 0), out);
    }

    #[test]
    fn t_min_out_clamps_at_one() {
        assert_eq!(min_out_with_tolerance(1, 10_000), 1);
        assert_eq!(min_out_with_tolerance(0, 0), 1);
    }

    #[test]
    fn t_max_in_ceils_the_pad() {
        // 33 * 1% = 0.33 → ceil 1
        assert_eq!(max_in_with_tolerance(33, 100).unwrap(), 34);
        // bps=0 é identidade
        assert_eq!(max_in_with_tolerance(33, 0).unwrap(), 33);
    }

    #[test]
    fn t_bound_follows_mode() {
        let q = Quote { mode: TradeMode::SpendExactIn, exact: WAD, amount: 200 };
        assert_eq!(bound(&q, 100).unwrap(), Bound::MinOut(198));

        let q = Quote { mode: TradeMode::BuyExactOut, exact: WAD, amount: 200 };
        assert_eq!(bound(&q, 100).unwrap(), Bound::MaxIn(202));
    }
}
