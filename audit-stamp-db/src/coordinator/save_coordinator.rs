use std::sync::Arc;

use chrono::Utc;

use audit_stamp_api::{ActorResolver, AuditPolicy};

use crate::change_set::ChangeSet;
use crate::interceptor::AuditInterceptor;

use super::commit_batch::CommitBatch;

/// # Documentation
/// Drives one save operation end to end.
///
/// - Resolves the acting principal once per save, not once per record, so
///   every creation and modification in the change set is attributed to the
///   same actor even when resolution is expensive.
/// - Reads the clock once and hands the timestamp to the interceptor, which
///   stamps the change set as a pre-commit hook.
/// - Delegates the physical write to the [`CommitBatch`] store only after
///   stamping succeeded.
///
/// Stamp mutations live only on the records in the change set; if the save
/// is cancelled or the commit fails, they are discarded with the rest of
/// the uncommitted transaction.
pub struct SaveCoordinator<S: CommitBatch> {
    interceptor: AuditInterceptor,
    resolver: Arc<dyn ActorResolver>,
    store: S,
}

impl<S: CommitBatch> SaveCoordinator<S> {
    pub fn new(policy: AuditPolicy, resolver: Arc<dyn ActorResolver>, store: S) -> Self {
        Self {
            interceptor: AuditInterceptor::new(policy),
            resolver,
            store,
        }
    }

    /// Stamps and commits one change set.
    ///
    /// # Returns
    /// * `Ok(())` - the change set was stamped and persisted
    /// * `Err` - stamping failed (nothing mutated) or the commit failed
    ///   (nothing persisted)
    pub async fn save(
        &self,
        change_set: &mut ChangeSet<'_>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let actor = self.resolver.resolve_current_actor();
        self.interceptor
            .apply_audit_stamps(change_set.as_mut_slice(), actor.as_ref(), Utc::now())?;

        self.store.commit(change_set).await?;
        tracing::info!(records = change_set.len(), "change set committed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use heapless::String as HeaplessString;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use uuid::Uuid;

    use audit_stamp_api::{ActorId, AnonymousActorResolver, FixedActorResolver};

    use crate::change_set::ChangeKind;
    use crate::models::auditable::{AuditStamp, Auditable};
    use crate::models::document::{DocumentModel, DocumentStatus};

    fn new_test_document(title: &str) -> DocumentModel {
        DocumentModel {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            title: HeaplessString::try_from(title).unwrap(),
            body: None,
            status: DocumentStatus::Draft,
            audit: AuditStamp::unstamped(),
        }
    }

    /// Store that records the ids it was asked to persist.
    #[derive(Default)]
    struct RecordingStore {
        committed: Mutex<Vec<Uuid>>,
    }

    #[async_trait]
    impl CommitBatch for RecordingStore {
        async fn commit(
            &self,
            change_set: &ChangeSet<'_>,
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            let mut committed = self.committed.lock().unwrap();
            for entry in change_set.iter() {
                committed.push(entry.record.get_id());
            }
            Ok(())
        }
    }

    struct FailingStore;

    #[async_trait]
    impl CommitBatch for FailingStore {
        async fn commit(
            &self,
            _change_set: &ChangeSet<'_>,
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            Err("connection reset".into())
        }
    }

    /// Resolver that counts how often it is consulted.
    struct CountingResolver {
        actor: ActorId,
        calls: AtomicUsize,
    }

    impl CountingResolver {
        fn new(actor: ActorId) -> Self {
            Self {
                actor,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl ActorResolver for CountingResolver {
        fn resolve_current_actor(&self) -> Option<ActorId> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Some(self.actor.clone())
        }
    }

    #[tokio::test]
    async fn test_save_stamps_and_commits_in_queue_order(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let resolver = Arc::new(FixedActorResolver::new(ActorId::new("user-42")?));
        let coordinator = SaveCoordinator::new(
            AuditPolicy::require_known_actor(),
            resolver,
            RecordingStore::default(),
        );

        let mut first = new_test_document("First");
        let mut second = new_test_document("Second");
        let (first_id, second_id) = (first.id, second.id);

        let mut change_set = ChangeSet::new();
        change_set.push(&mut first, ChangeKind::Created);
        change_set.push(&mut second, ChangeKind::Created);
        coordinator.save(&mut change_set).await?;
        drop(change_set);

        assert_eq!(first.created_by().unwrap().as_str(), "user-42");
        assert_eq!(second.created_by().unwrap().as_str(), "user-42");

        let committed = coordinator.store.committed.lock().unwrap();
        assert_eq!(*committed, vec![first_id, second_id]);

        Ok(())
    }

    #[tokio::test]
    async fn test_save_resolves_actor_once_per_change_set(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let resolver = Arc::new(CountingResolver::new(ActorId::new("user-42")?));
        let coordinator = SaveCoordinator::new(
            AuditPolicy::require_known_actor(),
            resolver.clone(),
            RecordingStore::default(),
        );

        let mut first = new_test_document("First");
        let mut second = new_test_document("Second");
        let mut third = new_test_document("Third");

        let mut change_set = ChangeSet::new();
        change_set.push(&mut first, ChangeKind::Created);
        change_set.push(&mut second, ChangeKind::Created);
        change_set.push(&mut third, ChangeKind::Modified);
        coordinator.save(&mut change_set).await?;

        assert_eq!(resolver.calls.load(Ordering::SeqCst), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_save_skips_commit_when_stamping_fails() {
        let coordinator = SaveCoordinator::new(
            AuditPolicy::require_known_actor(),
            Arc::new(AnonymousActorResolver),
            RecordingStore::default(),
        );

        let mut document = new_test_document("Unattributed");
        let mut change_set = ChangeSet::new();
        change_set.push(&mut document, ChangeKind::Created);

        let result = coordinator.save(&mut change_set).await;
        drop(change_set);

        assert!(result.is_err());
        assert_eq!(document.audit, AuditStamp::unstamped());
        assert!(coordinator.store.committed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_surfaces_commit_failure() {
        let coordinator = SaveCoordinator::new(
            AuditPolicy::require_known_actor(),
            Arc::new(FixedActorResolver::new(ActorId::new("user-42").unwrap())),
            FailingStore,
        );

        let mut document = new_test_document("Doomed");
        let mut change_set = ChangeSet::new();
        change_set.push(&mut document, ChangeKind::Created);

        let result = coordinator.save(&mut change_set).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_save_uses_system_actor_for_background_jobs(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let coordinator = SaveCoordinator::new(
            AuditPolicy::from_system_actor_name(Some("nightly-import"))?,
            Arc::new(AnonymousActorResolver),
            RecordingStore::default(),
        );

        let mut document = new_test_document("Imported");
        let mut change_set = ChangeSet::new();
        change_set.push(&mut document, ChangeKind::Created);
        coordinator.save(&mut change_set).await?;
        drop(change_set);

        assert_eq!(document.created_by().unwrap().as_str(), "nightly-import");

        Ok(())
    }
}
