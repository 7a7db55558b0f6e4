use serde::Serialize;

use crate::utils::fingerprint_as_i64;

use super::change_kind::ChangeKind;

/// Derives the change kind for a record from content fingerprints.
///
/// `stored_fingerprint` is the fingerprint recorded at the last save, or
/// `None` for a record that has never been saved.
///
/// # Returns
/// * `Ok(ChangeKind::Created)` - no stored fingerprint
/// * `Ok(ChangeKind::Modified)` - the content fingerprint differs from the stored one
/// * `Ok(ChangeKind::Unchanged)` - the fingerprints match
/// * `Err` - the record could not be serialized for fingerprinting
pub fn classify<T: Serialize>(
    record: &T,
    stored_fingerprint: Option<i64>,
) -> Result<ChangeKind, String> {
    let current = fingerprint_as_i64(record)?;
    Ok(match stored_fingerprint {
        None => ChangeKind::Created,
        Some(stored) if stored != current => ChangeKind::Modified,
        Some(_) => ChangeKind::Unchanged,
    })
}
