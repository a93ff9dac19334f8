//! Colaboradores externos do orquestrador.
//!
//! O core não conhece carteira, RPC nem contrato: enxerga só estas três
//! interfaces. O executor recebe o pedido congelado (modo + perna exata +
//! limite) e devolve sucesso ou falha com motivo; leitores de reserva e de
//! saldo alimentam o formulário entre cotações.

use async_trait::async_trait;

use crate::amm::types::{Bound, Reserves, TradeMode, Wad};

/// Pedido de execução congelado no momento do submit.
///
/// Depois de submetido, o pedido nunca é recalculado — refresh de reservas
/// durante o voo não altera o limite já enviado.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecutionRequest {
    pub mode: TradeMode,
    pub exact: Wad,
    pub bound: Bound,
}

/// Falha do colaborador de execução, com o motivo textual a exibir.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExecutionFailure {
    /// Usuário ou carteira recusou antes do envio.
    Rejected(String),
    /// Transação enviada e revertida on-chain.
    Reverted(String),
}

impl ExecutionFailure {
    pub fn reason(&self) -> &str {
        match self {
            ExecutionFailure::Rejected(r) | ExecutionFailure::Reverted(r) => r,
        }
    }
}

/// Envia o trade para assinatura/submissão e aguarda o desfecho.
#[async_trait]
pub trait TradeExecutor: Send + Sync {
    async fn execute(&self, request: &ExecutionRequest) -> Result<(), ExecutionFailure>;
}

/// Fonte das reservas do pool (snapshot atômico base/quote).
#[async_trait]
pub trait ReserveReader: Send + Sync {
    async fn reserves(&self) -> anyhow::Result<Reserves>;
}

/// Fonte do saldo do usuário no ativo quote.
#[async_trait]
pub trait BalanceReader: Send + Sync {
    async fn quote_balance(&self) -> anyhow::Result<Wad>;
}
