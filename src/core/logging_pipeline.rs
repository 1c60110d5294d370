use crate::core::contracts::{ErasedError, ErasedValue, IErasedRequestHandler, IRequestPipeline};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;

/// Request pipeline that logs every dispatch and how long it took.
#[derive(Default)]
pub struct LoggingPipeline;

impl LoggingPipeline {
    pub fn shared() -> Arc<dyn IRequestPipeline> {
        Arc::new(Self)
    }
}

fn short_name(type_name: &'static str) -> &'static str {
    type_name.rsplit("::").next().unwrap_or(type_name)
}

#[async_trait]
impl IRequestPipeline for LoggingPipeline {
    async fn handle(
        &self,
        request_name: &'static str,
        request: ErasedValue,
        next: Arc<dyn IErasedRequestHandler>,
    ) -> Result<ErasedValue, ErasedError> {
        let name = short_name(request_name);
        log::info!("Handling {name}");

        let started = Instant::now();
        let result = next.handle(request).await;
        let elapsed_ms = started.elapsed().as_millis();

        match &result {
            Ok(_) => log::info!("Handled {name} in {elapsed_ms}ms"),
            Err(err) => log::warn!("{name} failed after {elapsed_ms}ms: {err}"),
        }

        result
    }
}
