use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum BusError {
    #[error(
        "BusError: `{0}` has already been initialized. Initialization must only be called once. \
If this is unexpected, check for duplicate calls to `initialization::init()`."
    )]
    AlreadyInitialized(String),

    #[error(
        "BusError: `{0}` has not been initialized. You must call `initialization::init()` before using this component."
    )]
    NotInitialized(String),

    #[error("BusError: Cant invocation Request Factory for request '{0}' error '{1}'")]
    RequestHandlerFactoryFailed(String, String),

    #[error("BusError: Incorrect Request type '{0}' by handler '{1}'")]
    RequestIncorrectRequestType(String, String),

    #[error("BusError: Request handler registered already. Request type '{0}' by handler '{1}'")]
    RequestHandlerRegistered(String, String),

    #[error("BusError: No request handler found for request type '{0}'")]
    RequestHandlerNotFound(String),

    #[error(
        "BusError: Request handler return incorrect response type for request type '{0}' and response type: '{1}'"
    )]
    RequestHandlerIncorrectResponseType(String, String),

    #[error(
        "BusError: Request handler return incorrect error type for request type '{0}' and error: '{1}'"
    )]
    RequestHandlerIncorrectErrorType(String, String),

    #[error("BusError: Incorrect Event type '{0}' by handler '{1}'")]
    EventIncorrectRequestType(String, String),

    #[error("BusError: Incorrect Error type '{0}' by event '{1}'. Error: '{2}'")]
    EventIncorrectErrorType(String, String, String),
}
