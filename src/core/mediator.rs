//! Dispatch facades over the handler and pipeline registries.
//!
//! [`EventBus`] owns everything needed to publish domain events and is shared
//! by `Arc` with the services that raise them. [`Mediator`] adds request
//! dispatch on top of a bus. Both are assembled by
//! [`MediatorBuilder`](crate::core::registry::MediatorBuilder).

use crate::core::contracts::{AnyError, IEvent, IRequest};
use crate::core::event_handlers::EventHandlers;
use crate::core::event_pipeline::EventPipelines;
use crate::core::request_handlers::RequestHandlers;
use crate::core::request_pipeline::RequestPipelines;
use crate::domain::error::DomainError;
use crate::domain::interfaces::EventPublisher;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Default)]
pub struct EventBus {
    pub(crate) handlers: EventHandlers,
    pub(crate) pipelines: EventPipelines,
}

impl EventBus {
    pub async fn publish<TEvent, TError>(&self, event: TEvent) -> Result<(), TError>
    where
        TEvent: IEvent<TError>,
        TError: AnyError,
    {
        self.handlers.publish(&self.pipelines, event).await
    }

    pub fn handler_count<TEvent>(&self) -> usize {
        self.handlers.count(std::any::type_name::<TEvent>())
    }

    pub fn pipeline_count(&self) -> usize {
        self.pipelines.len()
    }
}

#[async_trait]
impl<E> EventPublisher<E> for EventBus
where
    E: IEvent<DomainError>,
{
    async fn publish(&self, event: E) -> Result<(), DomainError> {
        EventBus::publish::<E, DomainError>(self, event).await
    }
}

pub struct Mediator {
    pub(crate) request_handlers: RequestHandlers,
    pub(crate) request_pipelines: RequestPipelines,
    pub(crate) events: Arc<EventBus>,
}

impl Mediator {
    pub async fn send<TRequest, TResponse, TError>(
        &self,
        request: TRequest,
    ) -> Result<TResponse, TError>
    where
        TRequest: IRequest<TResponse, TError>,
        TResponse: Sized + Send + Sync + 'static,
        TError: AnyError,
    {
        self.request_handlers
            .handle(&self.request_pipelines, request)
            .await
    }

    pub async fn publish<TEvent, TError>(&self, event: TEvent) -> Result<(), TError>
    where
        TEvent: IEvent<TError>,
        TError: AnyError,
    {
        self.events.publish(event).await
    }

    pub fn events(&self) -> Arc<EventBus> {
        Arc::clone(&self.events)
    }

    pub fn handles<TRequest>(&self) -> bool {
        self.request_handlers
            .contains(std::any::type_name::<TRequest>())
    }

    pub fn request_pipeline_count(&self) -> usize {
        self.request_pipelines.len()
    }
}
