use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A relative or other contact person for a patient. The patient link is
/// nullable: a contact may exist unassociated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct FamilyContact {
    pub id: i32,
    pub name: String,
    pub relationship: Option<String>,
    pub phone: Option<String>,
    pub patient_id: Option<i32>,
}
