use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use audit_stamp_api::ActorId;

use super::identifiable::Identifiable;

/// # Documentation
/// Provenance fields carried by every auditable record.
///
/// - `created_by`/`created_at` are written exactly once, when the record is
///   first saved, and never touched again by the interceptor.
/// - `updated_by`/`updated_at` stay empty until the first modification and
///   are rewritten on every modification after that. A record that is
///   created and never modified keeps both empty.
///
/// Timestamps are UTC. Actor identifiers are weak references; resolving
/// them for display is the reader's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStamp {
    pub created_by: Option<ActorId>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_by: Option<ActorId>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl AuditStamp {
    /// Stamp for a record that has not been saved yet.
    pub fn unstamped() -> Self {
        Self::default()
    }

    /// True once the creation fields have been written.
    pub fn is_created(&self) -> bool {
        self.created_by.is_some() && self.created_at.is_some()
    }

    pub(crate) fn mark_created(&mut self, actor: &ActorId, at: DateTime<Utc>) {
        self.created_by = Some(actor.clone());
        self.created_at = Some(at);
    }

    pub(crate) fn mark_updated(&mut self, actor: &ActorId, at: DateTime<Utc>) {
        self.updated_by = Some(actor.clone());
        self.updated_at = Some(at);
    }
}

/// Capability trait for records that carry audit provenance.
///
/// Implementing it opts a record type into stamping by the interceptor.
/// It is a capability, not a base class: record types from unrelated
/// hierarchies opt in independently by exposing their stamp.
pub trait Auditable: Identifiable {
    /// Returns the audit stamp of this record
    fn audit_stamp(&self) -> &AuditStamp;

    /// Returns the audit stamp of this record for mutation
    fn audit_stamp_mut(&mut self) -> &mut AuditStamp;

    fn created_by(&self) -> Option<&ActorId> {
        self.audit_stamp().created_by.as_ref()
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.audit_stamp().created_at
    }

    fn updated_by(&self) -> Option<&ActorId> {
        self.audit_stamp().updated_by.as_ref()
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.audit_stamp().updated_at
    }
}
