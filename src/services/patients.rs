use std::collections::HashMap;

use sqlx::PgPool;

use crate::{
    error::ApiError,
    models::{
        family_contact::FamilyContact,
        patient::{Patient, PatientWithContacts},
    },
};

pub struct PatientService;

impl PatientService {
    /// All patients, each with its family contacts. The contacts are
    /// fetched in one explicit second query and grouped in memory.
    pub async fn list(pool: &PgPool) -> Result<Vec<PatientWithContacts>, ApiError> {
        let patients = sqlx::query_as::<_, Patient>("SELECT * FROM patients ORDER BY id")
            .fetch_all(pool)
            .await?;

        if patients.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = patients.iter().map(|p| p.id).collect();
        let contacts = sqlx::query_as::<_, FamilyContact>(
            "SELECT * FROM family_contacts WHERE patient_id = ANY($1) ORDER BY id",
        )
        .bind(&ids)
        .fetch_all(pool)
        .await?;

        let mut by_patient: HashMap<i32, Vec<FamilyContact>> = HashMap::new();
        for contact in contacts {
            if let Some(patient_id) = contact.patient_id {
                by_patient.entry(patient_id).or_default().push(contact);
            }
        }

        Ok(patients
            .into_iter()
            .map(|patient| {
                let contacts = by_patient.remove(&patient.id).unwrap_or_default();
                PatientWithContacts::new(patient, contacts)
            })
            .collect())
    }
}
