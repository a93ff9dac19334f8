//! Tipos básicos do motor de cotação (escala fixa) + U256 para intermediários.

use uint::construct_uint;
construct_uint! {
    /// Inteiro de 256 bits para contas intermediárias seguras.
    pub struct U256(4);
}

pub type Wad = u128; // escala 1e18
pub type Bps = u32;  // 0..=10_000

pub const WAD: Wad = 1_000_000_000_000_000_000u128; // 1e18
pub const BPS_SCALE: Bps = 10_000;                  // 100.00%
pub const PPM_SCALE: u64 = 1_000_000;               // 1e6 (ppm, impacto de preço)

/// Reservas base/quote do pool, lidas de um mesmo snapshot on-chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reserves { pub base: Wad, pub quote: Wad }
impl Reserves {
    pub fn new(base: Wad, quote: Wad) -> Self { Self { base, quote } }
}

/// Modo do trade: qual perna é exata e em que direção o ativo flui.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TradeMode {
    /// Saída exata em quote (DEMO); calcula o input necessário em base (ETH).
    BuyExactOut,
    /// Input exato em quote; calcula a saída em base.
    SellExactIn,
    /// Input exato em base; calcula a saída em quote.
    SpendExactIn,
    /// Saída exata em base; calcula o input necessário em quote.
    ReceiveExactOut,
}

impl TradeMode {
    /// Modos em que o usuário fixa o **input** (a cota calcula a saída).
    pub fn is_exact_input(&self) -> bool {
        matches!(self, TradeMode::SellExactIn | TradeMode::SpendExactIn)
    }

    /// Modos em que a perna de **input** é o ativo base (base→quote).
    pub fn base_is_input(&self) -> bool {
        matches!(self, TradeMode::SpendExactIn | TradeMode::BuyExactOut)
    }
}

/// Resultado de aplicar um [`TradeMode`] às reservas: `exact` é a perna
/// digitada pelo usuário, `amount` é a contraparte calculada pelo motor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quote {
    pub mode: TradeMode,
    pub exact: Wad,
    pub amount: Wad,
}

impl Quote {
    /// Perna de input do trade (exata ou calculada, conforme o modo).
    pub fn amount_in(&self) -> Wad {
        if self.mode.is_exact_input() { self.exact } else { self.amount }
    }

    /// Perna de output do trade.
    pub fn amount_out(&self) -> Wad {
        if self.mode.is_exact_input() { self.amount } else { self.exact }
    }
}

/// Limite de execução derivado de uma cota + tolerância de slippage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    /// Piso de saída para modos exact-input.
    MinOut(Wad),
    /// Teto de input para modos exact-output.
    MaxIn(Wad),
}

impl Bound {
    pub fn value(&self) -> Wad {
        match self {
            Bound::MinOut(v) | Bound::MaxIn(v) => *v,
        }
    }
}
