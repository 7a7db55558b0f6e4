use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;
use crate::models::tracked::TrackedRecord;

/// # Documentation
/// Database model for document categories
///
/// Reference data maintained by operators. This entity is tracked in change
/// sets but carries no audit stamp; the interceptor passes it through
/// untouched whatever its change kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryModel {
    pub id: Uuid,

    /// Unique display name
    pub name: HeaplessString<50>,

    /// Optional free-form description
    pub description: Option<HeaplessString<255>>,
}

impl Identifiable for CategoryModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl TrackedRecord for CategoryModel {}
