use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::models::auditable::{AuditStamp, Auditable};
use crate::models::identifiable::Identifiable;
use crate::models::tracked::TrackedRecord;

/// # Documentation
/// Database model for user-authored documents
///
/// Tracks the document content and lifecycle status for an owner. This
/// entity is auditable: the embedded stamp records who created it and who
/// last modified it, filled in by the interceptor at save time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentModel {
    pub id: Uuid,

    /// Reference to the person who owns this document
    pub owner_id: Uuid,

    /// Display title
    pub title: HeaplessString<100>,

    /// Document body, absent for placeholder documents
    pub body: Option<HeaplessString<255>>,

    /// Current lifecycle status
    pub status: DocumentStatus,

    /// Provenance fields, written by the audit interceptor only
    #[serde(flatten)]
    pub audit: AuditStamp,
}

impl Identifiable for DocumentModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Auditable for DocumentModel {
    fn audit_stamp(&self) -> &AuditStamp {
        &self.audit
    }

    fn audit_stamp_mut(&mut self) -> &mut AuditStamp {
        &mut self.audit
    }
}

impl TrackedRecord for DocumentModel {
    fn as_auditable(&self) -> Option<&dyn Auditable> {
        Some(self)
    }

    fn as_auditable_mut(&mut self) -> Option<&mut dyn Auditable> {
        Some(self)
    }
}

/// Database model for document status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentStatus {
    Draft,
    Published,
    Archived,
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentStatus::Draft => write!(f, "Draft"),
            DocumentStatus::Published => write!(f, "Published"),
            DocumentStatus::Archived => write!(f, "Archived"),
        }
    }
}

impl FromStr for DocumentStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Draft" => Ok(DocumentStatus::Draft),
            "Published" => Ok(DocumentStatus::Published),
            "Archived" => Ok(DocumentStatus::Archived),
            _ => Err(()),
        }
    }
}
