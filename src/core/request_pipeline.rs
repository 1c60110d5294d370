use crate::core::contracts::{ErasedError, ErasedValue, IErasedRequestHandler, IRequestPipeline};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

type PipelineFactory = dyn Fn() -> Arc<dyn IRequestPipeline> + Send + Sync + 'static;

#[derive(Default)]
pub(crate) struct RequestPipelines {
    factories: RwLock<Vec<Arc<PipelineFactory>>>,
}

impl RequestPipelines {
    pub(crate) fn register(
        &self,
        factory: impl Fn() -> Arc<dyn IRequestPipeline> + Send + Sync + 'static,
    ) {
        self.factories.write().push(Arc::new(factory));
    }

    pub(crate) fn len(&self) -> usize {
        self.factories.read().len()
    }

    /// Wraps `handler` in every registered pipeline; the last registered one
    /// ends up outermost.
    pub(crate) fn wrap(
        &self,
        request_name: &'static str,
        handler: Box<dyn IErasedRequestHandler>,
    ) -> Arc<dyn IErasedRequestHandler> {
        let mut current: Arc<dyn IErasedRequestHandler> = Arc::new(BoxedHandlerWrapper(handler));

        for factory in self.factories.read().iter() {
            let pipeline = factory();
            let next = Arc::clone(&current);
            current = Arc::new(PipelineWithNext {
                request_name,
                pipeline,
                next,
            });
        }

        current
    }
}

pub(crate) struct BoxedHandlerWrapper(pub Box<dyn IErasedRequestHandler>);

#[async_trait]
impl IErasedRequestHandler for BoxedHandlerWrapper {
    async fn handle(&self, request: ErasedValue) -> Result<ErasedValue, ErasedError> {
        self.0.handle(request).await
    }
}

pub(crate) struct PipelineWithNext {
    pub request_name: &'static str,
    pub pipeline: Arc<dyn IRequestPipeline>,
    pub next: Arc<dyn IErasedRequestHandler>,
}

#[async_trait]
impl IErasedRequestHandler for PipelineWithNext {
    async fn handle(&self, request: ErasedValue) -> Result<ErasedValue, ErasedError> {
        self.pipeline
            .handle(self.request_name, request, Arc::clone(&self.next))
            .await
    }
}
