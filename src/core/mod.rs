pub mod contracts;
pub mod error_bus;
pub mod logging_pipeline;
pub mod mediator;
pub mod registry;

mod event_pipeline;
mod request_pipeline;

pub(crate) mod event_handlers;
pub(crate) mod request_handlers;
