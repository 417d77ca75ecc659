use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub phone: Option<String>,
    pub registration_date: Option<DateTime<Utc>>,
}

/// Creation payload. The id is never client-supplied; registration_date
/// may be, otherwise the storage default (now) applies.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub role: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub phone: Option<String>,
    pub registration_date: Option<DateTime<Utc>>,
}

/// Full-replace payload for PUT. Carries the record id so the handler can
/// reject a mismatch against the path. registration_date is absent on
/// purpose: it is fixed at creation.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEmployeeRequest {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub phone: Option<String>,
}
