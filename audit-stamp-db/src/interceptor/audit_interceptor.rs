use chrono::{DateTime, Utc};

use audit_stamp_api::{ActorId, AuditPolicy, AuditResult};

use crate::change_set::{ChangeEntry, ChangeKind};

/// # Documentation
/// Applies audit stamps to the records of one save operation.
///
/// The interceptor runs as a pre-commit hook: the transaction coordinator
/// hands it the full change set before the physical write. It mutates only
/// the audit fields of the records passed to it, performs no I/O, and holds
/// no mutable state, so saves on different transactions can run it in
/// parallel.
///
/// Stamping is all-or-nothing per save: if any qualifying record would need
/// an actor and none is available under the policy, the call fails before a
/// single record is touched and the whole transaction aborts with it.
pub struct AuditInterceptor {
    policy: AuditPolicy,
}

impl AuditInterceptor {
    pub fn new(policy: AuditPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &AuditPolicy {
        &self.policy
    }

    /// Stamps every qualifying entry of the change set in place.
    ///
    /// Only entries flagged `Created` or `Modified` whose record implements
    /// the auditable capability qualify; everything else passes through
    /// untouched. A creation writes only `created_by`/`created_at`; a
    /// modification writes only `updated_by`/`updated_at`, leaving the
    /// creation fields exactly as first stamped.
    ///
    /// `now` is injected by the caller, which keeps the operation a pure
    /// function of its inputs: calling it twice with the same change set,
    /// actor and clock value yields the same field values.
    ///
    /// # Arguments
    /// * `change_set` - the records written by this save, with their change kind
    /// * `actor` - the principal resolved once for this save, if any
    /// * `now` - the canonical current timestamp (UTC)
    ///
    /// # Returns
    /// * `Ok(())` - all qualifying records stamped
    /// * `Err(AuditError::MissingActor)` - a stamp was required, no actor was
    ///   resolved, and the policy rejects anonymous changes; no record mutated
    pub fn apply_audit_stamps(
        &self,
        change_set: &mut [ChangeEntry<'_>],
        actor: Option<&ActorId>,
        now: DateTime<Utc>,
    ) -> AuditResult<()> {
        let needs_stamping = change_set
            .iter()
            .any(|entry| entry.kind.is_stamped() && entry.record.as_auditable().is_some());
        if !needs_stamping {
            return Ok(());
        }

        // Fail-fast before any mutation when the policy rejects anonymity.
        let actor = self.policy.effective_actor(actor)?;

        let mut created = 0usize;
        let mut modified = 0usize;
        for entry in change_set.iter_mut() {
            if !entry.kind.is_stamped() {
                continue;
            }
            let Some(record) = entry.record.as_auditable_mut() else {
                continue;
            };
            match entry.kind {
                ChangeKind::Created => {
                    record.audit_stamp_mut().mark_created(&actor, now);
                    created += 1;
                }
                ChangeKind::Modified => {
                    record.audit_stamp_mut().mark_updated(&actor, now);
                    modified += 1;
                }
                ChangeKind::Unchanged | ChangeKind::Deleted => {}
            }
        }

        tracing::debug!(created, modified, actor = %actor, "applied audit stamps");
        Ok(())
    }
}
