use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::ApiError,
    models::employee::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest},
    services::employees::EmployeeService,
    AppState,
};

#[utoipa::path(
    get,
    path = "/employees",
    responses((status = 200, body = [Employee]))
)]
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = EmployeeService::list(&state.db).await?;
    Ok(Json(employees))
}

#[utoipa::path(
    get,
    path = "/employees/{id}",
    params(("id" = i32, Path)),
    responses((status = 200, body = Employee), (status = 404))
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Employee>, ApiError> {
    match EmployeeService::get(&state.db, id).await? {
        Some(employee) => Ok(Json(employee)),
        None => Err(ApiError::NotFound),
    }
}

#[utoipa::path(
    post,
    path = "/employees",
    request_body = CreateEmployeeRequest,
    responses((status = 201, body = Employee), (status = 409))
)]
pub async fn create_employee(
    State(state): State<AppState>,
    Json(body): Json<CreateEmployeeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let employee = EmployeeService::create(&state.db, &body).await?;
    let location = format!("/employees/{}", employee.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(employee),
    ))
}

#[utoipa::path(
    put,
    path = "/employees/{id}",
    params(("id" = i32, Path)),
    request_body = UpdateEmployeeRequest,
    responses((status = 204), (status = 400), (status = 404), (status = 409))
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateEmployeeRequest>,
) -> Result<StatusCode, ApiError> {
    if body.id != id {
        return Err(ApiError::IdMismatch);
    }
    if EmployeeService::update(&state.db, id, &body).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

#[utoipa::path(
    delete,
    path = "/employees/{id}",
    params(("id" = i32, Path)),
    responses((status = 204), (status = 404))
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if EmployeeService::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}
