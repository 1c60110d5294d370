use crate::core::contracts::{IRequest, IRequestHandler};
use crate::domain::contributor::ContributorId;
use crate::domain::error::DomainError;
use crate::domain::outcome::Outcome;
use crate::services::IDeleteContributorService;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone, Copy)]
pub struct DeleteContributorCommand {
    pub contributor_id: ContributorId,
}

impl IRequest<Outcome, DomainError> for DeleteContributorCommand {}

pub struct DeleteContributorHandler {
    service: Arc<dyn IDeleteContributorService>,
}

impl DeleteContributorHandler {
    pub fn new(service: Arc<dyn IDeleteContributorService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl IRequestHandler<DeleteContributorCommand, Outcome, DomainError> for DeleteContributorHandler {
    async fn handle_async(
        &self,
        request: DeleteContributorCommand,
    ) -> Result<Outcome, DomainError> {
        self.service.delete_contributor(request.contributor_id).await
    }
}
