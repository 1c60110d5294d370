use crate::core::contracts::{
    AnyError, IEvent, IEventHandler, IEventPipeline, IRequest, IRequestHandler, IRequestPipeline,
};
use crate::core::error_bus::BusError;
use crate::core::event_handlers::EventHandlers;
use crate::core::event_pipeline::EventPipelines;
use crate::core::mediator::{EventBus, Mediator};
use crate::core::request_handlers::RequestHandlers;
use crate::core::request_pipeline::RequestPipelines;
use std::sync::Arc;

/// Collects every handler and pipeline binding before the mediator exists.
///
/// The event side is created up front so request handler factories can
/// capture [`MediatorBuilder::events`] and publish through the same bus the
/// finished [`Mediator`] uses.
pub struct MediatorBuilder {
    request_handlers: RequestHandlers,
    request_pipelines: RequestPipelines,
    events: Arc<EventBus>,
}

impl Default for MediatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MediatorBuilder {
    pub fn new() -> Self {
        Self {
            request_handlers: RequestHandlers::default(),
            request_pipelines: RequestPipelines::default(),
            events: Arc::new(EventBus {
                handlers: EventHandlers::default(),
                pipelines: EventPipelines::default(),
            }),
        }
    }

    pub fn events(&self) -> Arc<EventBus> {
        Arc::clone(&self.events)
    }

    pub fn request_handler<H, RQ, RS, TError, F, Fut>(
        &mut self,
        factory: F,
    ) -> Result<&mut Self, BusError>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<H, TError>> + Send + 'static,
        H: IRequestHandler<RQ, RS, TError>,
        RQ: IRequest<RS, TError>,
        RS: Send + Sync + 'static,
        TError: AnyError,
    {
        self.request_handlers.register(factory)?;
        Ok(self)
    }

    pub fn request_pipeline(
        &mut self,
        factory: impl Fn() -> Arc<dyn IRequestPipeline> + Send + Sync + 'static,
    ) -> &mut Self {
        self.request_pipelines.register(factory);
        self
    }

    pub fn event_handler<H, E, TError, F, Fut>(&mut self, factory: F) -> Result<&mut Self, BusError>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<H, TError>> + Send + 'static,
        H: IEventHandler<E, TError>,
        E: IEvent<TError>,
        TError: AnyError,
    {
        self.events.handlers.register(factory)?;
        Ok(self)
    }

    pub fn event_pipeline(
        &mut self,
        factory: impl Fn() -> Arc<dyn IEventPipeline> + Send + Sync + 'static,
    ) -> &mut Self {
        self.events.pipelines.register(factory);
        self
    }

    pub fn build(self) -> Mediator {
        Mediator {
            request_handlers: self.request_handlers,
            request_pipelines: self.request_pipelines,
            events: self.events,
        }
    }
}
