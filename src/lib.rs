pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use crate::core::error_bus::BusError;
pub use crate::core::mediator::{EventBus, Mediator};
pub use crate::core::registry::MediatorBuilder;
pub use crate::domain::contributor::{Contributor, ContributorDto, ContributorId, EntityId};
pub use crate::domain::error::DomainError;
pub use crate::domain::events::ContributorDeletedEvent;
pub use crate::domain::outcome::Outcome;
pub use crate::infrastructure::{AppConfig, Application, Environment};
pub use crate::services::{DeleteContributorService, IDeleteContributorService};
