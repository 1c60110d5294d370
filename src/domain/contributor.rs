use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key every stored entity is addressed by.
pub type EntityId = i32;

pub type ContributorId = EntityId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContributorStatus {
    #[default]
    NotSet,
    CoreTeam,
    Community,
}

impl fmt::Display for ContributorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContributorStatus::NotSet => write!(f, "not_set"),
            ContributorStatus::CoreTeam => write!(f, "core_team"),
            ContributorStatus::Community => write!(f, "community"),
        }
    }
}

/// Anything a [`Repository`](crate::domain::interfaces::Repository) can store.
///
/// An id of `0` means the entity has not been persisted yet.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> EntityId;
    fn assign_id(&mut self, id: EntityId);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    id: ContributorId,
    name: String,
    status: ContributorStatus,
}

fn validate_name(name: &str) -> Result<String, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(
            "contributor name must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

impl Contributor {
    pub fn new(name: &str) -> Result<Self, DomainError> {
        Ok(Self {
            id: 0,
            name: validate_name(name)?,
            status: ContributorStatus::default(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> ContributorStatus {
        self.status
    }

    pub fn update_name(&mut self, name: &str) -> Result<(), DomainError> {
        self.name = validate_name(name)?;
        Ok(())
    }

    pub fn set_status(&mut self, status: ContributorStatus) {
        self.status = status;
    }
}

impl Entity for Contributor {
    fn id(&self) -> EntityId {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

/// Read model handed out by queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributorDto {
    pub id: ContributorId,
    pub name: String,
    pub status: ContributorStatus,
}

impl From<&Contributor> for ContributorDto {
    fn from(value: &Contributor) -> Self {
        Self {
            id: value.id,
            name: value.name.clone(),
            status: value.status,
        }
    }
}
