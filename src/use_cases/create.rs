use crate::core::contracts::{IRequest, IRequestHandler};
use crate::domain::contributor::{Contributor, ContributorId, ContributorStatus, Entity};
use crate::domain::error::DomainError;
use crate::domain::interfaces::Repository;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct CreateContributorCommand {
    pub name: String,
    pub status: Option<ContributorStatus>,
}

impl CreateContributorCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: None,
        }
    }
}

impl IRequest<ContributorId, DomainError> for CreateContributorCommand {}

pub struct CreateContributorHandler {
    repository: Arc<dyn Repository<Contributor>>,
}

impl CreateContributorHandler {
    pub fn new(repository: Arc<dyn Repository<Contributor>>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl IRequestHandler<CreateContributorCommand, ContributorId, DomainError>
    for CreateContributorHandler
{
    async fn handle_async(
        &self,
        request: CreateContributorCommand,
    ) -> Result<ContributorId, DomainError> {
        let mut contributor = Contributor::new(&request.name)?;
        if let Some(status) = request.status {
            contributor.set_status(status);
        }

        let created = self.repository.add(contributor).await?;
        Ok(created.id())
    }
}
