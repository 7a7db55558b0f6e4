use crate::models::tracked::TrackedRecord;

use super::change_kind::ChangeKind;

/// One record participating in the current save, tagged with its change kind.
pub struct ChangeEntry<'a> {
    pub record: &'a mut dyn TrackedRecord,
    pub kind: ChangeKind,
}

impl<'a> ChangeEntry<'a> {
    pub fn new(record: &'a mut dyn TrackedRecord, kind: ChangeKind) -> Self {
        Self { record, kind }
    }

    pub fn created(record: &'a mut dyn TrackedRecord) -> Self {
        Self::new(record, ChangeKind::Created)
    }

    pub fn modified(record: &'a mut dyn TrackedRecord) -> Self {
        Self::new(record, ChangeKind::Modified)
    }

    pub fn unchanged(record: &'a mut dyn TrackedRecord) -> Self {
        Self::new(record, ChangeKind::Unchanged)
    }
}

/// # Documentation
/// The records written by one save operation, in the order the caller
/// queued them.
///
/// One change set per transaction; the coordinator stamps it as a whole and
/// then hands it to the persistence layer as a whole. Records are borrowed
/// for the duration of the save, so an aborted transaction leaves the
/// caller holding the (possibly stamped) in-memory instances and nothing
/// else.
#[derive(Default)]
pub struct ChangeSet<'a> {
    entries: Vec<ChangeEntry<'a>>,
}

impl<'a> ChangeSet<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a record with its change kind.
    pub fn push(&mut self, record: &'a mut dyn TrackedRecord, kind: ChangeKind) {
        self.entries.push(ChangeEntry::new(record, kind));
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChangeEntry<'a>> {
        self.entries.iter()
    }

    pub fn as_mut_slice(&mut self) -> &mut [ChangeEntry<'a>] {
        &mut self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
