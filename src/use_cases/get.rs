use crate::core::contracts::{IRequest, IRequestHandler};
use crate::domain::contributor::{Contributor, ContributorDto, ContributorId};
use crate::domain::error::DomainError;
use crate::domain::interfaces::ReadRepository;
use crate::domain::outcome::Outcome;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone, Copy)]
pub struct GetContributorQuery {
    pub contributor_id: ContributorId,
}

impl IRequest<Outcome<ContributorDto>, DomainError> for GetContributorQuery {}

pub struct GetContributorHandler {
    repository: Arc<dyn ReadRepository<Contributor>>,
}

impl GetContributorHandler {
    pub fn new(repository: Arc<dyn ReadRepository<Contributor>>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl IRequestHandler<GetContributorQuery, Outcome<ContributorDto>, DomainError>
    for GetContributorHandler
{
    async fn handle_async(
        &self,
        request: GetContributorQuery,
    ) -> Result<Outcome<ContributorDto>, DomainError> {
        let found = self.repository.get_by_id(request.contributor_id).await?;
        Ok(Outcome::from(found.as_ref().map(ContributorDto::from)))
    }
}
