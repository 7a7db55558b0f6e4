use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AuditError, AuditResult};

/// Maximum stored length of an actor identifier, in bytes.
pub const MAX_ACTOR_ID_LENGTH: usize = 64;

/// Identifier of the principal attributed with a creation or modification.
///
/// Non-empty text of bounded length. The identifier is a weak reference:
/// the record stores it for attribution only, and resolving it to a person
/// or service account for display is left to whoever reads the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorId(HeaplessString<MAX_ACTOR_ID_LENGTH>);

impl ActorId {
    /// Validates and wraps an actor identifier.
    ///
    /// # Returns
    /// * `Ok(ActorId)` - the wrapped identifier
    /// * `Err(AuditError::InvalidActorId)` - if the value is empty or longer than [`MAX_ACTOR_ID_LENGTH`]
    pub fn new(value: &str) -> AuditResult<Self> {
        if value.is_empty() {
            return Err(AuditError::InvalidActorId(
                "actor identifier must not be empty".to_string(),
            ));
        }
        let inner = HeaplessString::try_from(value).map_err(|_| {
            AuditError::InvalidActorId(format!(
                "actor identifier exceeds {MAX_ACTOR_ID_LENGTH} bytes: {value}"
            ))
        })?;
        Ok(ActorId(inner))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_str())
    }
}

impl FromStr for ActorId {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActorId::new(s)
    }
}

/// Resolves the acting principal from the ambient execution context.
///
/// Absence of a principal (unauthenticated request, background job,
/// migration seed) is a valid result, not an error; resolution never fails.
/// Callers decide via policy whether an anonymous change is acceptable.
pub trait ActorResolver: Send + Sync {
    fn resolve_current_actor(&self) -> Option<ActorId>;
}

/// Resolver that always returns the same principal.
///
/// Used for jobs that run as a known service account, and in tests.
pub struct FixedActorResolver {
    actor: ActorId,
}

impl FixedActorResolver {
    pub fn new(actor: ActorId) -> Self {
        Self { actor }
    }
}

impl ActorResolver for FixedActorResolver {
    fn resolve_current_actor(&self) -> Option<ActorId> {
        Some(self.actor.clone())
    }
}

/// Resolver for contexts that carry no authenticated principal.
pub struct AnonymousActorResolver;

impl ActorResolver for AnonymousActorResolver {
    fn resolve_current_actor(&self) -> Option<ActorId> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_id_accepts_regular_identifier() {
        let actor = ActorId::new("user-42").unwrap();
        assert_eq!(actor.as_str(), "user-42");
        assert_eq!(actor.to_string(), "user-42");
    }

    #[test]
    fn test_actor_id_rejects_empty_identifier() {
        let result = ActorId::new("");
        assert!(matches!(result, Err(AuditError::InvalidActorId(_))));
    }

    #[test]
    fn test_actor_id_rejects_over_length_identifier() {
        let long = "x".repeat(MAX_ACTOR_ID_LENGTH + 1);
        let result = ActorId::new(&long);
        assert!(matches!(result, Err(AuditError::InvalidActorId(_))));
    }

    #[test]
    fn test_actor_id_accepts_maximum_length_identifier() {
        let exact = "x".repeat(MAX_ACTOR_ID_LENGTH);
        let actor = ActorId::new(&exact).unwrap();
        assert_eq!(actor.as_str().len(), MAX_ACTOR_ID_LENGTH);
    }

    #[test]
    fn test_actor_id_serializes_as_plain_string() {
        let actor = ActorId::new("svc-billing").unwrap();
        let json = serde_json::to_string(&actor).unwrap();
        assert_eq!(json, "\"svc-billing\"");

        let back: ActorId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, actor);
    }

    #[test]
    fn test_fixed_resolver_returns_its_actor() {
        let resolver = FixedActorResolver::new(ActorId::new("svc-import").unwrap());
        assert_eq!(
            resolver.resolve_current_actor(),
            Some(ActorId::new("svc-import").unwrap())
        );
    }

    #[test]
    fn test_anonymous_resolver_returns_none() {
        assert_eq!(AnonymousActorResolver.resolve_current_actor(), None);
    }
}
