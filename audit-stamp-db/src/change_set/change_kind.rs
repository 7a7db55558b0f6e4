use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How a record differs from its persisted version within one save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    /// The record has never been saved.
    Created,
    /// The record exists and its content differs from the stored version.
    Modified,
    /// The record exists and matches the stored version.
    Unchanged,
    /// The record is being removed.
    Deleted,
}

impl ChangeKind {
    /// Kinds the audit interceptor stamps; everything else passes through.
    pub fn is_stamped(&self) -> bool {
        matches!(self, ChangeKind::Created | ChangeKind::Modified)
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangeKind::Created => write!(f, "Created"),
            ChangeKind::Modified => write!(f, "Modified"),
            ChangeKind::Unchanged => write!(f, "Unchanged"),
            ChangeKind::Deleted => write!(f, "Deleted"),
        }
    }
}

impl FromStr for ChangeKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Created" => Ok(ChangeKind::Created),
            "Modified" => Ok(ChangeKind::Modified),
            "Unchanged" => Ok(ChangeKind::Unchanged),
            "Deleted" => Ok(ChangeKind::Deleted),
            _ => Err(()),
        }
    }
}
