//! Mediator requests for the contributor aggregate.

pub mod create;
pub mod delete;
pub mod get;

pub use create::{CreateContributorCommand, CreateContributorHandler};
pub use delete::{DeleteContributorCommand, DeleteContributorHandler};
pub use get::{GetContributorHandler, GetContributorQuery};
