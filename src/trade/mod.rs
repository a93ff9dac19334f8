pub mod executor;
pub mod orchestrator;

pub use executor::{BalanceReader, ExecutionFailure, ExecutionRequest, ReserveReader, TradeExecutor};
pub use orchestrator::{TradeEvents, TradeOrchestrator, TradePhase};
