use axum::{extract::State, Json};

use crate::{
    error::ApiError, models::patient::PatientWithContacts, services::patients::PatientService,
    AppState,
};

#[utoipa::path(
    get,
    path = "/patients",
    responses((status = 200, body = [PatientWithContacts]))
)]
pub async fn list_patients(
    State(state): State<AppState>,
) -> Result<Json<Vec<PatientWithContacts>>, ApiError> {
    let patients = PatientService::list(&state.db).await?;
    Ok(Json(patients))
}
