use crate::core::contracts::{
    AnyError, ErasedError, ErasedValue, IErasedEventHandler, IEvent, IEventHandler, recover_error,
};
use crate::core::error_bus::BusError;
use crate::core::event_pipeline::EventPipelines;
use async_trait::async_trait;
use dashmap::DashMap;
use futures::StreamExt;
use futures::stream::FuturesUnordered;
use std::pin::Pin;
use std::sync::Arc;

type AsyncEventFactory = dyn Fn()
        -> Pin<Box<dyn Future<Output = Result<Box<dyn IErasedEventHandler>, ErasedError>> + Send>>
    + Send
    + Sync;

#[derive(Default)]
pub(crate) struct EventHandlers {
    factories: DashMap<&'static str, Vec<Arc<AsyncEventFactory>>>,
}

pub struct EventHandlerWrapper<H, E, TError>
where
    H: IEventHandler<E, TError>,
    E: IEvent<TError>,
    TError: AnyError,
{
    inner: H,
    _phantom: std::marker::PhantomData<fn() -> (E, TError)>,
}

impl<H, E, TError> EventHandlerWrapper<H, E, TError>
where
    H: IEventHandler<E, TError>,
    E: IEvent<TError>,
    TError: AnyError,
{
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            _phantom: std::marker::PhantomData,
        }
    }
}

#[async_trait]
impl<H, E, TError> IErasedEventHandler for EventHandlerWrapper<H, E, TError>
where
    H: IEventHandler<E, TError>,
    E: IEvent<TError>,
    TError: AnyError,
{
    async fn handle(&self, event: ErasedValue) -> Result<(), ErasedError> {
        let evt = event.downcast::<E>().map_err(|_| {
            BusError::EventIncorrectRequestType(
                std::any::type_name::<E>().to_string(),
                std::any::type_name::<H>().to_string(),
            )
        })?;
        self.inner.handle_async(*evt).await?;
        Ok(())
    }
}

impl EventHandlers {
    pub(crate) fn register<H, E, TError, F, Fut>(&self, factory: F) -> Result<(), BusError>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<H, TError>> + Send + 'static,
        H: IEventHandler<E, TError> + 'static,
        E: IEvent<TError>,
        TError: AnyError,
    {
        let event_type_name = std::any::type_name::<E>();

        let erased: Arc<AsyncEventFactory> = Arc::new(move || {
            let fut = factory();
            Box::pin(async move {
                let handler = fut.await?;
                Ok::<_, ErasedError>(
                    Box::new(EventHandlerWrapper::new(handler)) as Box<dyn IErasedEventHandler>
                )
            })
        });

        self.factories
            .entry(event_type_name)
            .or_insert_with(Vec::new)
            .push(erased);
        log::debug!(
            "Registered event handler {} for {event_type_name}",
            std::any::type_name::<H>()
        );
        Ok(())
    }

    pub(crate) fn count(&self, event_type_name: &str) -> usize {
        self.factories
            .get(event_type_name)
            .map(|entry| entry.len())
            .unwrap_or(0)
    }

    /// Fans `event` out to every handler registered for its type.
    ///
    /// Handlers run concurrently and the first failure is returned; the rest
    /// are dropped. No handlers means `Ok(())`.
    pub(crate) async fn publish<TEvent, TError>(
        &self,
        pipelines: &EventPipelines,
        event: TEvent,
    ) -> Result<(), TError>
    where
        TEvent: IEvent<TError>,
        TError: AnyError,
    {
        let type_name = std::any::type_name::<TEvent>();
        let Some(factories) = self
            .factories
            .get(type_name)
            .map(|entry| entry.value().clone())
        else {
            return Ok(());
        };

        let to_typed = |err: ErasedError| -> TError {
            recover_error(err, |msg| {
                BusError::EventIncorrectErrorType(
                    std::any::type_name::<TError>().to_string(),
                    type_name.to_string(),
                    msg,
                )
            })
        };

        let mut futures = FuturesUnordered::new();

        for factory in factories.iter() {
            let base_handler = factory().await.map_err(to_typed)?;
            let handler = pipelines.wrap(type_name, base_handler);
            let cloned = event.clone();

            futures.push(async move { handler.handle(Box::new(cloned)).await });
        }

        while let Some(result) = futures.next().await {
            result.map_err(to_typed)?;
        }

        Ok(())
    }
}
