//! Mapeamento entre condições de domínio e códigos de erro do motor.
use crate::amm::error::TradeError;
use crate::amm::error_catalog::TradeErrorCode;
use crate::amm::types::{Reserves, TradeMode, Wad};

/// Classifica um trade a partir dos inputs brutos, sem rodar a cota.
///
/// Cobre as condições baratas de detectar antes da matemática completa:
/// quantidade zerada, reservas inválidas, saída exata maior que a reserva e,
/// quando o saldo do usuário é conhecido, input exato acima do saldo. O
/// motor ainda revalida tudo; este mapa serve para o orquestrador rejeitar
/// cedo com o mesmo código que a cota produziria.
pub fn from_trade_inputs(
    mode: TradeMode,
    amount: Wad,
    reserves: Reserves,
    quote_balance: Option<Wad>,
) -> Option<TradeErrorCode> {
    if amount == 0 {
        return Some(TradeErrorCode::InvalidAmount);
    }
    if reserves.base == 0 || reserves.quote == 0 {
        return Some(TradeErrorCode::ZeroReserve);
    }
    match mode {
        TradeMode::BuyExactOut if amount >= reserves.quote => {
            return Some(TradeErrorCode::ExceedsReserve);
        }
        TradeMode::ReceiveExactOut if amount >= reserves.base => {
            return Some(TradeErrorCode::ExceedsReserve);
        }
        // o input exato em quote sai do saldo do usuário
        TradeMode::SellExactIn => {
            if let Some(balance) = quote_balance {
                if amount > balance {
                    return Some(TradeErrorCode::InsufficientBalance);
                }
            }
        }
        _ => {}
    }
    None
}

/// Constrói um [`TradeError`] diretamente de um código.
pub fn to_error(code: TradeErrorCode) -> TradeError {
    TradeError::new(code)
}
