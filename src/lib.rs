//! Núcleo de cotação e orquestração de trades do DemoSwap.
//!
//! O `amm` carrega as funções puras (cotação CPMM, tolerância de slippage,
//! impacto de preço) em aritmética inteira; o `trade` orquestra o formulário
//! e delega a execução aos colaboradores externos (carteira/chain).

pub mod amm;
pub mod telemetry;
pub mod trade;

pub use amm::error::{Result, TradeError};
pub use amm::error_catalog::TradeErrorCode;
pub use amm::impact::{price_impact_pct, price_impact_ppm};
pub use amm::quote::quote;
pub use amm::slippage::{bound, parse_slippage_bps};
pub use amm::types::{Bound, Bps, Quote, Reserves, TradeMode, Wad, U256, WAD};
