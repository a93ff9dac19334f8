//! Orquestrador do formulário de trade.
//!
//! Máquina de estados por tentativa:
//! `Idle → Quoting → Bounding → AwaitingExecution → Settled | Failed`.
//!
//! Cotação e limite são síncronos (funções puras do `amm`); o único ponto de
//! suspensão é o colaborador de execução. O pedido enviado é **congelado** no
//! submit: refresh de reservas durante o voo atualiza só a cota de exibição,
//! nunca o limite já submetido, e um segundo submit é recusado enquanto
//! houver trade em voo.

use tracing::{debug, info, warn};

use crate::amm::error::{Result, TradeError};
use crate::amm::error_catalog::TradeErrorCode;
use crate::amm::error_map;
use crate::amm::impact;
use crate::amm::quote as quoting;
use crate::amm::slippage;
use crate::amm::types::{Bound, Bps, Quote, Reserves, TradeMode, Wad};
use crate::trade::executor::{
    BalanceReader, ExecutionFailure, ExecutionRequest, ReserveReader, TradeExecutor,
};
use crate::{trade_bail, trade_err};

/// Estado de repouso da tentativa de trade corrente.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TradePhase {
    /// Nada digitado.
    Idle,
    /// Cota calculada, limite indisponível (slippage inválido).
    Quoting,
    /// Cota + limite prontos; submit habilitado.
    Bounding,
    /// Pedido congelado enviado ao executor.
    AwaitingExecution,
    /// Último trade confirmado; formulário limpo.
    Settled,
    /// Cota ou execução falhou; erro exposto para exibição.
    Failed,
}

/// Eventos emitidos para as superfícies de UI.
pub trait TradeEvents: Send + Sync {
    fn on_quote_changed(&self, result: &Result<Quote>) {
        let _ = result;
    }
    fn on_trade_settled(&self) {}
    fn on_trade_failed(&self, error: &TradeError) {
        let _ = error;
    }
}

/// Sem observadores.
impl TradeEvents for () {}

/// Orquestra validação, cotação, limite e execução de um trade por vez.
pub struct TradeOrchestrator<X, E>
where
    X: TradeExecutor,
    E: TradeEvents,
{
    executor: X,
    events: E,
    reserves: Option<Reserves>,
    quote_balance: Option<Wad>,
    mode: TradeMode,
    amount: Wad,
    slippage_bps: Option<Bps>,
    quote: Option<Quote>,
    bound: Option<Bound>,
    last_error: Option<TradeError>,
    phase: TradePhase,
    inflight: Option<ExecutionRequest>,
}

impl<X, E> TradeOrchestrator<X, E>
where
    X: TradeExecutor,
    E: TradeEvents,
{
    pub fn new(executor: X, events: E) -> Self {
        Self {
            executor,
            events,
            reserves: None,
            quote_balance: None,
            mode: TradeMode::SpendExactIn,
            amount: 0,
            slippage_bps: None,
            quote: None,
            bound: None,
            last_error: None,
            phase: TradePhase::Idle,
            inflight: None,
        }
    }

    // -------------------------
    // Entradas do formulário
    // -------------------------

    /// Edição de um campo de quantidade: fixa o modo e a perna exata.
    /// `amount == 0` significa "nada digitado" e limpa a cota.
    pub fn edit_amount(&mut self, mode: TradeMode, amount: Wad) {
        self.mode = mode;
        self.amount = amount;
        self.requote();
    }

    /// Texto de tolerância vindo da UI; inválido desabilita o submit.
    pub fn set_slippage(&mut self, text: &str) {
        self.slippage_bps = slippage::parse_slippage_bps(text);
        if self.slippage_bps.is_none() {
            debug!(%text, "tolerância de slippage inválida; submit desabilitado");
        }
        self.requote();
    }

    /// Novo snapshot de reservas do poller externo.
    pub fn set_reserves(&mut self, reserves: Reserves) {
        self.reserves = Some(reserves);
        self.requote();
    }

    /// Novo saldo do usuário no ativo quote.
    pub fn set_quote_balance(&mut self, balance: Wad) {
        self.quote_balance = Some(balance);
        self.requote();
    }

    /// Busca reservas no leitor externo e recota.
    pub async fn refresh_reserves(&mut self, reader: &dyn ReserveReader) -> anyhow::Result<()> {
        let reserves = reader.reserves().await?;
        self.set_reserves(reserves);
        Ok(())
    }

    /// Busca o saldo no leitor externo e recota.
    pub async fn refresh_balance(&mut self, reader: &dyn BalanceReader) -> anyhow::Result<()> {
        let balance = reader.quote_balance().await?;
        self.set_quote_balance(balance);
        Ok(())
    }

    /// Abandona a tentativa corrente e volta a `Idle` sem deixar resíduo.
    /// Sem efeito enquanto houver execução em voo.
    pub fn cancel(&mut self) {
        if self.phase == TradePhase::AwaitingExecution {
            return;
        }
        self.amount = 0;
        self.quote = None;
        self.bound = None;
        self.last_error = None;
        self.phase = TradePhase::Idle;
    }

    // -------------------------
    // Submissão
    // -------------------------

    /// Congela o pedido de execução e entra em `AwaitingExecution`.
    ///
    /// Recusa com [`TradeErrorCode::TradeInFlight`] se já houver pedido em
    /// voo; com o erro de cota corrente se não houver cota; com
    /// [`TradeErrorCode::InvalidSlippage`] se o limite não pôde ser derivado.
    pub fn submit(&mut self) -> Result<ExecutionRequest> {
        if self.phase == TradePhase::AwaitingExecution {
            trade_bail!(TradeErrorCode::TradeInFlight);
        }
        let quote = match self.quote {
            Some(q) => q,
            None => {
                return Err(self.last_error.clone().unwrap_or_else(|| {
                    trade_err!(TradeErrorCode::InvalidAmount, amount => self.amount)
                }))
            }
        };
        let bound = match self.bound {
            Some(b) => b,
            None => return Err(TradeError::new(TradeErrorCode::InvalidSlippage)),
        };
        let request = ExecutionRequest { mode: quote.mode, exact: quote.exact, bound };
        self.inflight = Some(request);
        self.phase = TradePhase::AwaitingExecution;
        info!(mode = ?request.mode, exact = request.exact, bound = request.bound.value(), "trade submetido");
        Ok(request)
    }

    /// Registra o desfecho do pedido em voo.
    ///
    /// Sucesso limpa o formulário (`Settled`); falha preserva as quantidades
    /// digitadas para retry (`Failed`).
    pub fn resolve(&mut self, outcome: std::result::Result<(), ExecutionFailure>) {
        if self.inflight.take().is_none() {
            return;
        }
        match outcome {
            Ok(()) => {
                self.amount = 0;
                self.quote = None;
                self.bound = None;
                self.last_error = None;
                self.phase = TradePhase::Settled;
                info!("trade confirmado");
                self.events.on_trade_settled();
            }
            Err(failure) => {
                let code = match failure {
                    ExecutionFailure::Rejected(_) => TradeErrorCode::ExecutionRejected,
                    ExecutionFailure::Reverted(_) => TradeErrorCode::ExecutionReverted,
                };
                let error = trade_err!(code, reason => failure.reason());
                warn!(reason = failure.reason(), "execução falhou");
                self.last_error = Some(error.clone());
                self.phase = TradePhase::Failed;
                self.events.on_trade_failed(&error);
            }
        }
    }

    /// Conveniência: submete, aguarda o executor e registra o desfecho.
    pub async fn confirm(&mut self) -> Result<()> {
        let request = self.submit()?;
        let outcome = self.executor.execute(&request).await;
        self.resolve(outcome);
        match self.phase {
            TradePhase::Settled => Ok(()),
            _ => Err(self
                .last_error
                .clone()
                .unwrap_or_else(|| TradeError::new(TradeErrorCode::ExecutionRejected))),
        }
    }

    // -------------------------
    // Leitura
    // -------------------------

    pub fn phase(&self) -> TradePhase {
        self.phase
    }

    pub fn current_quote(&self) -> Option<Quote> {
        self.quote
    }

    pub fn current_bound(&self) -> Option<Bound> {
        self.bound
    }

    pub fn last_error(&self) -> Option<&TradeError> {
        self.last_error.as_ref()
    }

    /// Pedido congelado aguardando desfecho, se houver.
    pub fn inflight(&self) -> Option<&ExecutionRequest> {
        self.inflight.as_ref()
    }

    /// Impacto de preço da cota corrente, em percentual de exibição.
    pub fn price_impact_pct(&self) -> Option<f64> {
        let reserves = self.reserves?;
        let quote = self.quote?;
        impact::price_impact_pct(reserves, quote.mode, quote.amount_in(), quote.amount_out()).ok()
    }

    // -------------------------
    // Interno
    // -------------------------

    /// Recalcula cota e limite a partir do formulário corrente.
    ///
    /// Durante `AwaitingExecution` só a cota de exibição muda; a fase e o
    /// pedido congelado ficam intactos.
    fn requote(&mut self) {
        let awaiting = self.phase == TradePhase::AwaitingExecution;

        if self.amount == 0 {
            self.quote = None;
            self.bound = None;
            self.last_error = None;
            if !awaiting {
                self.phase = TradePhase::Idle;
            }
            return;
        }
        let reserves = match self.reserves {
            Some(r) => r,
            // sem snapshot ainda: entrada eventual-consistente, não bloqueia
            None => {
                self.quote = None;
                self.bound = None;
                if !awaiting {
                    self.phase = TradePhase::Idle;
                }
                return;
            }
        };

        if let Some(code) =
            error_map::from_trade_inputs(self.mode, self.amount, reserves, self.quote_balance)
        {
            let error = trade_err!(code, amount => self.amount);
            self.fail_quote(error, awaiting);
            return;
        }

        let quote = match quoting::quote(reserves, self.mode, self.amount) {
            Ok(q) => q,
            Err(error) => {
                self.fail_quote(error, awaiting);
                return;
            }
        };

        // ReceiveExactOut gasta o input calculado em quote; valida o saldo
        if self.mode == TradeMode::ReceiveExactOut {
            if let Some(balance) = self.quote_balance {
                if quote.amount > balance {
                    let error = trade_err!(
                        TradeErrorCode::InsufficientBalance,
                        required => quote.amount,
                        balance => balance,
                    );
                    self.fail_quote(error, awaiting);
                    return;
                }
            }
        }

        self.quote = Some(quote);
        self.last_error = None;
        match self.slippage_bps {
            Some(bps) => match slippage::bound(&quote, bps) {
                Ok(bound) => {
                    self.bound = Some(bound);
                    if !awaiting {
                        self.phase = TradePhase::Bounding;
                    }
                }
                Err(error) => {
                    self.fail_quote(error, awaiting);
                    return;
                }
            },
            None => {
                self.bound = None;
                if !awaiting {
                    self.phase = TradePhase::Quoting;
                }
            }
        }
        debug!(mode = ?quote.mode, exact = quote.exact, amount = quote.amount, "cota recalculada");
        self.events.on_quote_changed(&Ok(quote));
    }

    fn fail_quote(&mut self, error: TradeError, awaiting: bool) {
        self.quote = None;
        self.bound = None;
        self.last_error = Some(error.clone());
        if !awaiting {
            self.phase = TradePhase::Failed;
        }
        self.events.on_quote_changed(&Err(error));
    }
}
