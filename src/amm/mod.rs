pub mod types;
pub mod guardrails;
pub mod quote;
pub mod slippage;
pub mod impact;
pub mod ref_golden;

// módulos unificados de erro
pub mod error_catalog;
pub mod error;
pub mod error_map;
