use async_trait::async_trait;

use crate::change_set::ChangeSet;

/// Persistence seam for the save coordinator
///
/// An implementation receives the fully stamped change set and performs the
/// physical write. The whole batch must be committed atomically: on failure
/// nothing may be persisted, and the stamped in-memory records are discarded
/// together with the rest of the transaction.
///
/// # Example
/// ```ignore
/// #[async_trait]
/// impl CommitBatch for PostgresStore {
///     async fn commit(&self, change_set: &ChangeSet<'_>) -> Result<(), Box<dyn Error + Send + Sync>> {
///         // Write every entry inside one database transaction
///     }
/// }
/// ```
#[async_trait]
pub trait CommitBatch: Send + Sync {
    /// Persist the change set in a single transaction
    ///
    /// # Arguments
    /// * `change_set` - the stamped records of this save, in queue order
    ///
    /// # Returns
    /// * `Ok(())` - every record was persisted
    /// * `Err` - the transaction could not be executed; nothing was persisted
    async fn commit(
        &self,
        change_set: &ChangeSet<'_>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
