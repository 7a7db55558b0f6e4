use serde::Serialize;
use std::hash::Hasher;
use twox_hash::XxHash64;

/// Fingerprints serializable record content into an i64.
///
/// The record is serialized to CBOR (a deterministic binary representation)
/// and hashed with XxHash64 under a fixed seed, so equal content yields the
/// same fingerprint across runs and hosts. Change detection compares the
/// fingerprint of the in-memory record against the one stored at the last
/// save.
pub fn fingerprint_as_i64<T: Serialize>(record: &T) -> Result<i64, String> {
    let mut cbor = Vec::new();
    ciborium::ser::into_writer(record, &mut cbor)
        .map_err(|e| format!("Failed to serialize record for fingerprinting: {e}"))?;

    let mut hasher = XxHash64::with_seed(0);
    hasher.write(&cbor);
    Ok(hasher.finish() as i64)
}
