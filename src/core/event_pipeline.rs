use crate::core::contracts::{ErasedError, ErasedValue, IErasedEventHandler, IEventPipeline};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

type PipelineFactory = dyn Fn() -> Arc<dyn IEventPipeline> + Send + Sync + 'static;

#[derive(Default)]
pub(crate) struct EventPipelines {
    factories: RwLock<Vec<Arc<PipelineFactory>>>,
}

impl EventPipelines {
    pub(crate) fn register(
        &self,
        factory: impl Fn() -> Arc<dyn IEventPipeline> + Send + Sync + 'static,
    ) {
        self.factories.write().push(Arc::new(factory));
    }

    pub(crate) fn len(&self) -> usize {
        self.factories.read().len()
    }

    pub(crate) fn wrap(
        &self,
        event_name: &'static str,
        handler: Box<dyn IErasedEventHandler>,
    ) -> Arc<dyn IErasedEventHandler> {
        let mut current: Arc<dyn IErasedEventHandler> = Arc::new(BoxedHandlerWrapper(handler));

        for factory in self.factories.read().iter() {
            let pipeline = factory();
            let next = Arc::clone(&current);
            current = Arc::new(EventPipelineWithNext {
                event_name,
                pipeline,
                next,
            });
        }

        current
    }
}

pub(crate) struct BoxedHandlerWrapper(pub Box<dyn IErasedEventHandler>);

#[async_trait]
impl IErasedEventHandler for BoxedHandlerWrapper {
    async fn handle(&self, event: ErasedValue) -> Result<(), ErasedError> {
        self.0.handle(event).await
    }
}

pub(crate) struct EventPipelineWithNext {
    pub event_name: &'static str,
    pub pipeline: Arc<dyn IEventPipeline>,
    pub next: Arc<dyn IErasedEventHandler>,
}

#[async_trait]
impl IErasedEventHandler for EventPipelineWithNext {
    async fn handle(&self, event: ErasedValue) -> Result<(), ErasedError> {
        self.pipeline
            .handle(self.event_name, event, Arc::clone(&self.next))
            .await
    }
}
