use super::auditable::Auditable;
use super::identifiable::Identifiable;

/// # Documentation
/// Base trait for records a persistence layer can enumerate in a change set.
///
/// This is the narrow contract the audit interceptor needs: any change
/// tracker that can list "what is written in this transaction" as
/// `TrackedRecord`s can drive the interceptor, regardless of how it tracks
/// changes internally.
pub trait TrackedRecord: Identifiable + Send + Sync {
    /// Capability query used by the audit interceptor.
    ///
    /// The default keeps non-auditable record types out of the stamping
    /// pass; auditable types override it to expose their stamp.
    fn as_auditable(&self) -> Option<&dyn Auditable> {
        None
    }

    /// Mutable counterpart of [`TrackedRecord::as_auditable`]
    fn as_auditable_mut(&mut self) -> Option<&mut dyn Auditable> {
        None
    }
}
