use anyhow::Result;
use opentelemetry::KeyValue;
use std::time::Instant;

use demoswap_core::amm::types::{Reserves, TradeMode, WAD};
use demoswap_core::telemetry;
use demoswap_core::trade::{ExecutionFailure, ExecutionRequest, TradeExecutor, TradeOrchestrator};

struct NoopExecutor;

#[async_trait::async_trait]
impl TradeExecutor for NoopExecutor {
    async fn execute(&self, _request: &ExecutionRequest) -> Result<(), ExecutionFailure> {
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let tel = telemetry::init("demoswap-core")?;

    let mut orch = TradeOrchestrator::new(NoopExecutor, ());
    orch.set_reserves(Reserves::new(10_000u128 * WAD, 1_000_000u128 * WAD));
    orch.set_slippage("0.5");

    for i in 0..5u32 {
        let span = telemetry::make_info_span("quote", i, "quote_smoke");
        let _guard = span.enter();

        let t0 = Instant::now();
        telemetry::time("quote", || {
            orch.edit_amount(TradeMode::SpendExactIn, u128::from(i + 1) * 10 * WAD)
        });
        let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;

        tel.quote_latency_ms.record(elapsed_ms, &[KeyValue::new("op", "quote")]);
        if let Some(pct) = orch.price_impact_pct() {
            tel.price_impact_pct.record(pct, &[KeyValue::new("op", "quote")]);
        }
    }

    orch.confirm().await.map_err(|e| anyhow::anyhow!(e.to_user_string()))?;
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    tel.shutdown();
    Ok(())
}
