use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::family_contact::FamilyContact;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Patient {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub status: Option<String>,
}

/// Patient as served over HTTP, with its family contacts attached. The
/// contacts come from a separate query, not a stored object graph.
#[derive(Debug, Serialize, ToSchema)]
pub struct PatientWithContacts {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub status: Option<String>,
    pub family_contacts: Vec<FamilyContact>,
}

impl PatientWithContacts {
    pub fn new(patient: Patient, family_contacts: Vec<FamilyContact>) -> Self {
        Self {
            id: patient.id,
            name: patient.name,
            address: patient.address,
            phone: patient.phone,
            status: patient.status,
            family_contacts,
        }
    }
}
