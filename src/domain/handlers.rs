use crate::core::contracts::IEventHandler;
use crate::domain::error::DomainError;
use crate::domain::events::ContributorDeletedEvent;
use crate::domain::interfaces::EmailSender;
use async_trait::async_trait;
use std::sync::Arc;

pub const DELETED_MAIL_TO: &str = "donotreply@test.com";
pub const DELETED_MAIL_FROM: &str = "test@test.com";
pub const DELETED_MAIL_SUBJECT: &str = "Contributor Deleted";

/// Tells the team by email that a contributor is gone.
pub struct ContributorDeletedHandler {
    email_sender: Arc<dyn EmailSender>,
}

impl ContributorDeletedHandler {
    pub fn new(email_sender: Arc<dyn EmailSender>) -> Self {
        Self { email_sender }
    }
}

#[async_trait]
impl IEventHandler<ContributorDeletedEvent, DomainError> for ContributorDeletedHandler {
    async fn handle_async(&self, event: ContributorDeletedEvent) -> Result<(), DomainError> {
        log::info!(
            "Handling ContributorDeletedEvent for {}",
            event.contributor_id
        );

        self.email_sender
            .send_email(
                DELETED_MAIL_TO,
                DELETED_MAIL_FROM,
                DELETED_MAIL_SUBJECT,
                &format!("Contributor with id {} was deleted.", event.contributor_id),
            )
            .await
    }
}
