//! Contributor deletion workflow.
//!
//! Lookup, delete, then publish [`ContributorDeletedEvent`]. Absence is an
//! [`Outcome::NotFound`]; every collaborator fault propagates untouched.
//! Lookup and delete are not wrapped in a transaction, and a failed publish
//! after a successful delete is not compensated.

use crate::domain::contributor::{Contributor, ContributorId};
use crate::domain::error::DomainError;
use crate::domain::events::ContributorDeletedEvent;
use crate::domain::interfaces::{EventPublisher, Repository};
use crate::domain::outcome::Outcome;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait IDeleteContributorService: Send + Sync {
    async fn delete_contributor(
        &self,
        contributor_id: ContributorId,
    ) -> Result<Outcome, DomainError>;
}

pub struct DeleteContributorService {
    repository: Arc<dyn Repository<Contributor>>,
    publisher: Arc<dyn EventPublisher<ContributorDeletedEvent>>,
}

impl DeleteContributorService {
    pub fn new(
        repository: Arc<dyn Repository<Contributor>>,
        publisher: Arc<dyn EventPublisher<ContributorDeletedEvent>>,
    ) -> Self {
        Self {
            repository,
            publisher,
        }
    }
}

#[async_trait]
impl IDeleteContributorService for DeleteContributorService {
    async fn delete_contributor(
        &self,
        contributor_id: ContributorId,
    ) -> Result<Outcome, DomainError> {
        log::info!("Deleting Contributor {contributor_id}");

        let Some(aggregate) = self.repository.get_by_id(contributor_id).await? else {
            return Ok(Outcome::NotFound);
        };

        self.repository.delete(&aggregate).await?;
        self.publisher
            .publish(ContributorDeletedEvent::new(contributor_id))
            .await?;

        Ok(Outcome::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contributor::Entity;
    use crate::domain::interfaces::ReadRepository;
    use crate::test_support::{capture_logs, captured_logs};
    use log::Level;
    use parking_lot::Mutex;
    use std::collections::HashMap;

    #[derive(Default)]
    struct StubRepository {
        items: Mutex<HashMap<ContributorId, Contributor>>,
        deleted: Mutex<Vec<Contributor>>,
        logs_at_lookup: Mutex<Vec<(Level, String)>>,
        lookup_fault: Option<DomainError>,
        delete_fault: Option<DomainError>,
    }

    impl StubRepository {
        fn with(ids: &[ContributorId]) -> Self {
            let repo = Self::default();
            for id in ids {
                let mut contributor = Contributor::new(&format!("contributor {id}")).unwrap();
                contributor.assign_id(*id);
                repo.items.lock().insert(*id, contributor);
            }
            repo
        }
    }

    #[async_trait]
    impl ReadRepository<Contributor> for StubRepository {
        async fn get_by_id(&self, id: ContributorId) -> Result<Option<Contributor>, DomainError> {
            *self.logs_at_lookup.lock() = captured_logs();
            if let Some(fault) = &self.lookup_fault {
                return Err(fault.clone());
            }
            Ok(self.items.lock().get(&id).cloned())
        }

        async fn list(&self) -> Result<Vec<Contributor>, DomainError> {
            Ok(self.items.lock().values().cloned().collect())
        }
    }

    #[async_trait]
    impl Repository<Contributor> for StubRepository {
        async fn add(&self, entity: Contributor) -> Result<Contributor, DomainError> {
            self.items.lock().insert(entity.id(), entity.clone());
            Ok(entity)
        }

        async fn update(&self, entity: &Contributor) -> Result<(), DomainError> {
            self.items.lock().insert(entity.id(), entity.clone());
            Ok(())
        }

        async fn delete(&self, entity: &Contributor) -> Result<(), DomainError> {
            if let Some(fault) = &self.delete_fault {
                return Err(fault.clone());
            }
            self.items.lock().remove(&entity.id());
            self.deleted.lock().push(entity.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingPublisher {
        published: Mutex<Vec<ContributorDeletedEvent>>,
        fault: Option<DomainError>,
    }

    #[async_trait]
    impl EventPublisher<ContributorDeletedEvent> for RecordingPublisher {
        async fn publish(&self, event: ContributorDeletedEvent) -> Result<(), DomainError> {
            if let Some(fault) = &self.fault {
                return Err(fault.clone());
            }
            self.published.lock().push(event);
            Ok(())
        }
    }

    fn service(
        repository: &Arc<StubRepository>,
        publisher: &Arc<RecordingPublisher>,
    ) -> DeleteContributorService {
        DeleteContributorService::new(repository.clone(), publisher.clone())
    }

    #[tokio::test]
    async fn test_existing_contributor_is_deleted_and_announced() {
        let repository = Arc::new(StubRepository::with(&[7, 8]));
        let publisher = Arc::new(RecordingPublisher::default());

        let outcome = service(&repository, &publisher)
            .delete_contributor(7)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Success(()));
        let deleted = repository.deleted.lock();
        assert_eq!(deleted.len(), 1);
        assert_eq!(deleted[0].id(), 7);
        let published = publisher.published.lock();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].contributor_id, 7);
        assert!(repository.items.lock().contains_key(&8));
    }

    fn deleting_logged(repository: &StubRepository, id: ContributorId) -> bool {
        repository
            .logs_at_lookup
            .lock()
            .contains(&(Level::Info, format!("Deleting Contributor {id}")))
    }

    #[tokio::test]
    async fn test_missing_contributor_is_not_found() {
        capture_logs();
        let repository = Arc::new(StubRepository::with(&[1]));
        let publisher = Arc::new(RecordingPublisher::default());

        let outcome = service(&repository, &publisher)
            .delete_contributor(99)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::NotFound);
        assert!(repository.deleted.lock().is_empty());
        assert!(publisher.published.lock().is_empty());
        assert!(deleting_logged(&repository, 99));
    }

    #[tokio::test]
    async fn test_second_delete_is_not_found() {
        let repository = Arc::new(StubRepository::with(&[5]));
        let publisher = Arc::new(RecordingPublisher::default());
        let service = service(&repository, &publisher);

        assert_eq!(service.delete_contributor(5).await, Ok(Outcome::Success(())));
        assert_eq!(service.delete_contributor(5).await, Ok(Outcome::NotFound));
        assert_eq!(publisher.published.lock().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_fault_propagates_without_event() {
        let repository = Arc::new(StubRepository {
            delete_fault: Some(DomainError::Storage("disk full".into())),
            ..StubRepository::with(&[3])
        });
        let publisher = Arc::new(RecordingPublisher::default());

        let err = service(&repository, &publisher)
            .delete_contributor(3)
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::Storage("disk full".into()));
        assert!(publisher.published.lock().is_empty());
    }

    #[tokio::test]
    async fn test_lookup_fault_propagates() {
        capture_logs();
        let repository = Arc::new(StubRepository {
            lookup_fault: Some(DomainError::Storage("connection reset".into())),
            ..StubRepository::default()
        });
        let publisher = Arc::new(RecordingPublisher::default());

        let err = service(&repository, &publisher)
            .delete_contributor(1)
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::Storage("connection reset".into()));
        assert!(publisher.published.lock().is_empty());
        assert!(deleting_logged(&repository, 1));
    }

    #[tokio::test]
    async fn test_publish_fault_propagates_after_delete() {
        let repository = Arc::new(StubRepository::with(&[4]));
        let publisher = Arc::new(RecordingPublisher {
            fault: Some(DomainError::Notification("bus offline".into())),
            ..RecordingPublisher::default()
        });

        let err = service(&repository, &publisher)
            .delete_contributor(4)
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::Notification("bus offline".into()));
        // deleted but not announced
        assert_eq!(repository.deleted.lock().len(), 1);
    }
}
