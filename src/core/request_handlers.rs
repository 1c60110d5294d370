use crate::core::contracts::{
    AnyError, ErasedError, ErasedValue, IErasedRequestHandler, IRequest, IRequestHandler,
    recover_error,
};
use crate::core::error_bus::BusError;
use crate::core::request_pipeline::RequestPipelines;
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::pin::Pin;
use std::sync::Arc;

type AsyncFactory = dyn Fn() -> Pin<
        Box<dyn Future<Output = Result<Box<dyn IErasedRequestHandler>, ErasedError>> + Send>,
    > + Send
    + Sync;

#[derive(Default)]
pub(crate) struct RequestHandlers {
    factories: DashMap<&'static str, Arc<AsyncFactory>>,
}

struct RequestHandlerWrapper<H, RQ, RS, TError>
where
    H: IRequestHandler<RQ, RS, TError>,
    RQ: IRequest<RS, TError>,
    RS: Sized + Send + Sync + 'static,
    TError: AnyError,
{
    inner: H,
    _phantom: std::marker::PhantomData<fn() -> (RQ, RS, TError)>,
}

impl<H, RQ, RS, TError> RequestHandlerWrapper<H, RQ, RS, TError>
where
    H: IRequestHandler<RQ, RS, TError>,
    RQ: IRequest<RS, TError>,
    RS: Sized + Send + Sync + 'static,
    TError: AnyError,
{
    pub fn new(handler: H) -> Self {
        Self {
            inner: handler,
            _phantom: std::marker::PhantomData,
        }
    }
}

#[async_trait]
impl<H, RQ, RS, TError> IErasedRequestHandler for RequestHandlerWrapper<H, RQ, RS, TError>
where
    H: IRequestHandler<RQ, RS, TError>,
    RQ: IRequest<RS, TError>,
    RS: Sized + Send + Sync + 'static,
    TError: AnyError,
{
    async fn handle(&self, request: ErasedValue) -> Result<ErasedValue, ErasedError> {
        let req = request.downcast::<RQ>().map_err(|_| {
            BusError::RequestIncorrectRequestType(
                std::any::type_name::<RQ>().to_string(),
                std::any::type_name::<H>().to_string(),
            )
        })?;
        let result = self.inner.handle_async(*req).await?;
        Ok(Box::new(result))
    }
}

impl RequestHandlers {
    pub(crate) fn register<H, RQ, RS, TError, F, Fut>(&self, factory: F) -> Result<(), BusError>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<H, TError>> + Send + 'static,
        H: IRequestHandler<RQ, RS, TError>,
        RQ: IRequest<RS, TError>,
        RS: Send + Sync + 'static,
        TError: AnyError,
    {
        let request_type_name = std::any::type_name::<RQ>();
        let handler_type_name = std::any::type_name::<H>();

        match self.factories.entry(request_type_name) {
            Entry::Occupied(_) => Err(BusError::RequestHandlerRegistered(
                request_type_name.to_string(),
                handler_type_name.to_string(),
            )),
            Entry::Vacant(entry) => {
                let erased_factory: Arc<AsyncFactory> = Arc::new(move || {
                    let fut = factory();
                    Box::pin(async move {
                        let handler = fut.await?;
                        Ok::<_, ErasedError>(Box::new(RequestHandlerWrapper::new(handler))
                            as Box<dyn IErasedRequestHandler>)
                    })
                });
                entry.insert(erased_factory);
                log::debug!(
                    "Registered request handler {handler_type_name} for {request_type_name}"
                );
                Ok(())
            }
        }
    }

    pub(crate) fn contains(&self, request_type_name: &str) -> bool {
        self.factories.contains_key(request_type_name)
    }

    pub(crate) async fn handle<TRequest, TResponse, TError>(
        &self,
        pipelines: &RequestPipelines,
        request: TRequest,
    ) -> Result<TResponse, TError>
    where
        TRequest: IRequest<TResponse, TError>,
        TResponse: Sized + Send + Sync + 'static,
        TError: AnyError,
    {
        let request_type_name = std::any::type_name::<TRequest>();
        // Clone the factory out so no map guard is held across an await.
        let factory = self
            .factories
            .get(request_type_name)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| BusError::RequestHandlerNotFound(request_type_name.to_string()))?;

        let handler = factory().await.map_err(|err| {
            BusError::RequestHandlerFactoryFailed(request_type_name.to_string(), err.to_string())
        })?;

        let chain = pipelines.wrap(request_type_name, handler);

        match chain.handle(Box::new(request)).await {
            Ok(result) => {
                let typed_result = result.downcast::<TResponse>().map_err(|_| {
                    BusError::RequestHandlerIncorrectResponseType(
                        request_type_name.to_string(),
                        std::any::type_name::<TResponse>().to_string(),
                    )
                })?;
                Ok(*typed_result)
            }
            Err(err) => Err(recover_error(err, |msg| {
                BusError::RequestHandlerIncorrectErrorType(request_type_name.to_string(), msg)
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contracts::IRequestPipeline;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct RenameContributor {
        name: String,
    }
    #[derive(Debug, PartialEq)]
    struct Renamed(String);

    #[derive(Debug, thiserror::Error, PartialEq)]
    enum RenameError {
        #[error("rename: {0}")]
        Bus(#[from] BusError),
        #[error("rename: name taken")]
        Taken,
    }

    impl IRequest<Renamed, RenameError> for RenameContributor {}

    struct RenameHandler {
        pub called: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl IRequestHandler<RenameContributor, Renamed, RenameError> for RenameHandler {
        async fn handle_async(&self, req: RenameContributor) -> Result<Renamed, RenameError> {
            self.called.fetch_add(1, Ordering::SeqCst);
            Ok(Renamed(req.name.to_uppercase()))
        }
    }

    struct TakenHandler;

    #[async_trait]
    impl IRequestHandler<RenameContributor, Renamed, RenameError> for TakenHandler {
        async fn handle_async(&self, _req: RenameContributor) -> Result<Renamed, RenameError> {
            Err(RenameError::Taken)
        }
    }

    struct CountingPipeline {
        pub called: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl IRequestPipeline for CountingPipeline {
        async fn handle(
            &self,
            _request_name: &'static str,
            req: ErasedValue,
            next: Arc<dyn IErasedRequestHandler>,
        ) -> Result<ErasedValue, ErasedError> {
            self.called.fetch_add(1, Ordering::SeqCst);
            next.handle(req).await
        }
    }

    fn rename(name: &str) -> RenameContributor {
        RenameContributor {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_successful_request_handling() {
        let handlers = RequestHandlers::default();
        let pipelines = RequestPipelines::default();
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = counter.clone();

        handlers
            .register(move || {
                let handler = RenameHandler {
                    called: counter_clone.clone(),
                };
                async move { Ok(handler) }
            })
            .unwrap();

        let result = handlers
            .handle::<_, Renamed, RenameError>(&pipelines, rename("ada"))
            .await
            .unwrap();

        assert_eq!(result, Renamed("ADA".into()));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_pipeline_is_called() {
        let handlers = RequestHandlers::default();
        let pipelines = RequestPipelines::default();
        let handler_counter = Arc::new(AtomicUsize::new(0));
        let pipeline_counter = Arc::new(AtomicUsize::new(0));

        pipelines.register({
            let pipeline_counter = pipeline_counter.clone();
            move || {
                Arc::new(CountingPipeline {
                    called: pipeline_counter.clone(),
                })
            }
        });

        handlers
            .register({
                let handler_counter = handler_counter.clone();
                move || {
                    let handler = RenameHandler {
                        called: handler_counter.clone(),
                    };
                    async move { Ok(handler) }
                }
            })
            .unwrap();

        let result = handlers
            .handle::<_, Renamed, RenameError>(&pipelines, rename("grace"))
            .await
            .unwrap();

        assert_eq!(result, Renamed("GRACE".into()));
        assert_eq!(handler_counter.load(Ordering::SeqCst), 1);
        assert_eq!(pipeline_counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_duplicate_handler_registration() {
        let handlers = RequestHandlers::default();

        let first = handlers.register(|| async { Ok(TakenHandler) });
        let second = handlers.register(|| async { Ok(TakenHandler) });

        assert!(first.is_ok());
        assert!(matches!(
            second,
            Err(BusError::RequestHandlerRegistered(_, _))
        ));
        assert!(handlers.contains(std::any::type_name::<RenameContributor>()));
    }

    #[tokio::test]
    async fn test_handler_not_found() {
        let handlers = RequestHandlers::default();
        let pipelines = RequestPipelines::default();

        let err = handlers
            .handle::<RenameContributor, Renamed, RenameError>(&pipelines, rename("x"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            RenameError::Bus(BusError::RequestHandlerNotFound(
                std::any::type_name::<RenameContributor>().to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_handler_error_is_returned_unchanged() {
        let handlers = RequestHandlers::default();
        let pipelines = RequestPipelines::default();

        handlers.register(|| async { Ok(TakenHandler) }).unwrap();

        let err = handlers
            .handle::<RenameContributor, Renamed, RenameError>(&pipelines, rename("x"))
            .await
            .unwrap_err();

        assert_eq!(err, RenameError::Taken);
    }

    #[tokio::test]
    async fn test_factory_fails() {
        let handlers = RequestHandlers::default();
        let pipelines = RequestPipelines::default();

        handlers
            .register(|| async { Err::<TakenHandler, RenameError>(RenameError::Taken) })
            .unwrap();

        let err = handlers
            .handle::<RenameContributor, Renamed, RenameError>(&pipelines, rename("x"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RenameError::Bus(BusError::RequestHandlerFactoryFailed(_, _))
        ));
    }

    #[tokio::test]
    async fn test_wrapper_rejects_wrong_request_type() {
        let erased: Box<dyn IErasedRequestHandler> =
            Box::new(RequestHandlerWrapper::new(TakenHandler));

        let err = erased.handle(Box::new(42_u8)).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<BusError>(),
            Some(BusError::RequestIncorrectRequestType(_, _))
        ));
    }
}
