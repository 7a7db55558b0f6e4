use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuditError {
    /// A change set contained auditable records, no acting principal was
    /// resolved, and the policy does not allow anonymous changes.
    #[error("no actor resolved for an audited change set")]
    MissingActor,

    #[error("Invalid actor identifier: {0}")]
    InvalidActorId(String),

    /// Raised at startup/registration time, never during a save.
    #[error("Invalid audit configuration: {0}")]
    Configuration(String),
}

pub type AuditResult<T> = Result<T, AuditError>;
