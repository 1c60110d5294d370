//! Composition root.
//!
//! Every binding is listed here explicitly: collaborators come from
//! [`ServiceBindings`], handlers and pipelines are registered on a
//! [`MediatorBuilder`] in [`Application::with_bindings`].

use crate::core::error_bus::BusError;
use crate::core::logging_pipeline::LoggingPipeline;
use crate::core::mediator::Mediator;
use crate::core::registry::MediatorBuilder;
use crate::domain::contributor::{Contributor, ContributorDto, ContributorId};
use crate::domain::error::DomainError;
use crate::domain::handlers::ContributorDeletedHandler;
use crate::domain::interfaces::{EmailSender, ReadRepository, Repository};
use crate::domain::outcome::Outcome;
use crate::infrastructure::config::{AppConfig, Environment};
use crate::infrastructure::email::FakeEmailSender;
use crate::infrastructure::memory_repository::InMemoryRepository;
use crate::services::{DeleteContributorService, IDeleteContributorService};
use crate::use_cases::{
    CreateContributorCommand, CreateContributorHandler, DeleteContributorCommand,
    DeleteContributorHandler, GetContributorHandler, GetContributorQuery,
};
use std::sync::Arc;

/// Collaborator implementations the application is wired with.
#[derive(Clone)]
pub struct ServiceBindings {
    pub repository: Arc<dyn Repository<Contributor>>,
    pub read_repository: Arc<dyn ReadRepository<Contributor>>,
    pub email_sender: Arc<dyn EmailSender>,
}

impl ServiceBindings {
    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
        }
    }

    pub fn in_memory(email_sender: Arc<dyn EmailSender>) -> Self {
        let store = Arc::new(InMemoryRepository::<Contributor>::new());
        Self {
            repository: store.clone(),
            read_repository: store,
            email_sender,
        }
    }

    fn development() -> Self {
        Self::in_memory(Arc::new(FakeEmailSender::new()))
    }

    // TODO: bind a real SMTP sender here once one exists.
    fn production() -> Self {
        Self::in_memory(Arc::new(FakeEmailSender::new()))
    }
}

pub struct Application {
    environment: Environment,
    mediator: Mediator,
    delete_contributor: Arc<dyn IDeleteContributorService>,
}

impl Application {
    pub fn build(config: &AppConfig) -> Result<Self, BusError> {
        Self::with_bindings(
            config,
            ServiceBindings::for_environment(config.environment()),
        )
    }

    pub fn with_bindings(config: &AppConfig, bindings: ServiceBindings) -> Result<Self, BusError> {
        let mut builder = MediatorBuilder::new();
        builder.request_pipeline(LoggingPipeline::shared);

        let events = builder.events();
        let delete_contributor: Arc<dyn IDeleteContributorService> = Arc::new(
            DeleteContributorService::new(bindings.repository.clone(), events),
        );

        let email_sender = bindings.email_sender.clone();
        builder.event_handler(move || {
            let handler = ContributorDeletedHandler::new(email_sender.clone());
            async move { Ok::<_, DomainError>(handler) }
        })?;

        let repository = bindings.repository.clone();
        builder.request_handler(move || {
            let handler = CreateContributorHandler::new(repository.clone());
            async move { Ok::<_, DomainError>(handler) }
        })?;

        let read_repository = bindings.read_repository.clone();
        builder.request_handler(move || {
            let handler = GetContributorHandler::new(read_repository.clone());
            async move { Ok::<_, DomainError>(handler) }
        })?;

        let service = delete_contributor.clone();
        builder.request_handler(move || {
            let handler = DeleteContributorHandler::new(service.clone());
            async move { Ok::<_, DomainError>(handler) }
        })?;

        log::info!(
            "Application wired for {} environment",
            config.environment()
        );

        Ok(Self {
            environment: config.environment(),
            mediator: builder.build(),
            delete_contributor,
        })
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn mediator(&self) -> &Mediator {
        &self.mediator
    }

    pub fn delete_contributor_service(&self) -> Arc<dyn IDeleteContributorService> {
        Arc::clone(&self.delete_contributor)
    }

    pub async fn create_contributor(&self, name: &str) -> Result<ContributorId, DomainError> {
        self.mediator
            .send::<_, ContributorId, DomainError>(CreateContributorCommand::new(name))
            .await
    }

    pub async fn get_contributor(
        &self,
        contributor_id: ContributorId,
    ) -> Result<Outcome<ContributorDto>, DomainError> {
        self.mediator
            .send::<_, Outcome<ContributorDto>, DomainError>(GetContributorQuery {
                contributor_id,
            })
            .await
    }

    pub async fn delete_contributor(
        &self,
        contributor_id: ContributorId,
    ) -> Result<Outcome, DomainError> {
        self.mediator
            .send::<_, Outcome, DomainError>(DeleteContributorCommand { contributor_id })
            .await
    }
}
