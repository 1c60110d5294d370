use crate::core::contracts::IEvent;
use crate::domain::contributor::ContributorId;
use crate::domain::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raised once a contributor has been removed from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributorDeletedEvent {
    pub contributor_id: ContributorId,
    pub occurred_at: DateTime<Utc>,
}

impl ContributorDeletedEvent {
    pub fn new(contributor_id: ContributorId) -> Self {
        Self {
            contributor_id,
            occurred_at: Utc::now(),
        }
    }
}

impl IEvent<DomainError> for ContributorDeletedEvent {}
