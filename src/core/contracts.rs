use crate::core::error_bus::BusError;
use async_trait::async_trait;
use std::any::{Any, type_name};
use std::error::Error;
use std::sync::Arc;

pub type ErasedValue = Box<dyn Any + Send + Sync>;
pub type ErasedError = Box<dyn Error + Send + Sync>;

pub trait TypeNamed {
    fn type_name(&self) -> &'static str {
        type_name::<Self>()
    }
}

impl<T> TypeNamed for T {
    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }
}

pub trait AnyError: Error + From<BusError> + Send + Sync + 'static {}
impl<T> AnyError for T where T: Error + From<BusError> + Send + Sync + 'static {}

pub trait IRequest<TResponse, TError>: TypeNamed + Sized + Send + Sync + 'static
where
    TResponse: Sized + Send + Sync + 'static,
    TError: AnyError,
{
}

pub trait IEvent<TError>:
    serde::Serialize + serde::de::DeserializeOwned + TypeNamed + Clone + Send + Sync + 'static
where
    TError: AnyError,
{
}

#[async_trait]
pub trait IRequestHandler<TRequest, TResponse, TError>: Send + Sync + 'static
where
    TRequest: IRequest<TResponse, TError>,
    TResponse: Sized + Send + Sync + 'static,
    TError: AnyError,
{
    async fn handle_async(&self, request: TRequest) -> Result<TResponse, TError>;
}

#[async_trait]
pub trait IErasedRequestHandler: Send + Sync {
    async fn handle(&self, request: ErasedValue) -> Result<ErasedValue, ErasedError>;
}

/// Decorator around a request dispatch.
///
/// `request_name` is the fully qualified type name of the request, the erased
/// request itself is only useful to pipelines that downcast it.
#[async_trait]
pub trait IRequestPipeline: Send + Sync {
    async fn handle(
        &self,
        request_name: &'static str,
        request: ErasedValue,
        next: Arc<dyn IErasedRequestHandler>,
    ) -> Result<ErasedValue, ErasedError>;
}

#[async_trait]
pub trait IErasedEventHandler: Send + Sync {
    async fn handle(&self, event: ErasedValue) -> Result<(), ErasedError>;
}

#[async_trait]
pub trait IEventPipeline: Send + Sync {
    async fn handle(
        &self,
        event_name: &'static str,
        event: ErasedValue,
        next: Arc<dyn IErasedEventHandler>,
    ) -> Result<(), ErasedError>;
}

#[async_trait]
pub trait IEventHandler<TEvent, TError>: Send + Sync + 'static
where
    TEvent: IEvent<TError>,
    TError: AnyError,
{
    async fn handle_async(&self, event: TEvent) -> Result<(), TError>;
}

/// Recovers a typed error from an erased one.
///
/// A `BusError` raised inside the erased chain is converted through
/// `From<BusError>`; anything else becomes `fallback(message)`.
pub(crate) fn recover_error<TError>(
    err: ErasedError,
    fallback: impl FnOnce(String) -> BusError,
) -> TError
where
    TError: AnyError,
{
    match err.downcast::<TError>() {
        Ok(typed) => *typed,
        Err(err) => match err.downcast::<BusError>() {
            Ok(bus) => TError::from(*bus),
            Err(other) => TError::from(fallback(other.to_string())),
        },
    }
}
