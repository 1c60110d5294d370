//! Ports the domain depends on. Implementations live in `infrastructure` or
//! are supplied by the host application.

use crate::domain::contributor::{Entity, EntityId};
use crate::domain::error::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait ReadRepository<T: Entity>: Send + Sync {
    async fn get_by_id(&self, id: EntityId) -> Result<Option<T>, DomainError>;

    async fn list(&self) -> Result<Vec<T>, DomainError>;
}

#[async_trait]
pub trait Repository<T: Entity>: ReadRepository<T> {
    /// Stores a new entity and returns it with its assigned id.
    async fn add(&self, entity: T) -> Result<T, DomainError>;

    async fn update(&self, entity: &T) -> Result<(), DomainError>;

    /// Fails with a storage error when the entity cannot be removed.
    async fn delete(&self, entity: &T) -> Result<(), DomainError>;
}

#[async_trait]
pub trait EventPublisher<E>: Send + Sync
where
    E: Send + 'static,
{
    async fn publish(&self, event: E) -> Result<(), DomainError>;
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(
        &self,
        to: &str,
        from: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), DomainError>;
}
