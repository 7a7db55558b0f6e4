use serde::{Deserialize, Serialize};

use crate::actor::ActorId;
use crate::error::{AuditError, AuditResult};

/// What to stamp when no acting principal could be resolved for a save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnonymousActorPolicy {
    /// Fail the whole save with [`AuditError::MissingActor`].
    Reject,
    /// Attribute the change to a configured system account.
    SystemActor(ActorId),
}

/// # Documentation
/// Audit configuration for one deployment.
///
/// Built once at startup; construction validates the configured values so a
/// misconfiguration surfaces as [`AuditError::Configuration`] before any
/// save runs, never during one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditPolicy {
    anonymous: AnonymousActorPolicy,
}

impl AuditPolicy {
    /// Policy that rejects saves with no resolved principal.
    pub fn require_known_actor() -> Self {
        Self {
            anonymous: AnonymousActorPolicy::Reject,
        }
    }

    /// Policy that attributes anonymous changes to `actor`.
    pub fn with_system_actor(actor: ActorId) -> Self {
        Self {
            anonymous: AnonymousActorPolicy::SystemActor(actor),
        }
    }

    /// Builds a policy from configuration text.
    ///
    /// `None` means anonymous changes are rejected. An invalid system actor
    /// name is reported as a configuration error so startup can abort.
    pub fn from_system_actor_name(name: Option<&str>) -> AuditResult<Self> {
        match name {
            None => Ok(Self::require_known_actor()),
            Some(value) => {
                let actor = ActorId::new(value)
                    .map_err(|e| AuditError::Configuration(e.to_string()))?;
                Ok(Self::with_system_actor(actor))
            }
        }
    }

    /// The actor to stamp for this save.
    ///
    /// # Returns
    /// * `Ok(ActorId)` - the resolved principal, or the configured system actor
    /// * `Err(AuditError::MissingActor)` - no principal and the policy rejects anonymous changes
    pub fn effective_actor(&self, resolved: Option<&ActorId>) -> AuditResult<ActorId> {
        match (resolved, &self.anonymous) {
            (Some(actor), _) => Ok(actor.clone()),
            (None, AnonymousActorPolicy::SystemActor(system)) => Ok(system.clone()),
            (None, AnonymousActorPolicy::Reject) => Err(AuditError::MissingActor),
        }
    }

    pub fn anonymous(&self) -> &AnonymousActorPolicy {
        &self.anonymous
    }
}
