use sqlx::PgPool;

use crate::{
    error::ApiError,
    models::employee::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest},
};

pub struct EmployeeService;

impl EmployeeService {
    pub async fn list(pool: &PgPool) -> Result<Vec<Employee>, ApiError> {
        let employees = sqlx::query_as::<_, Employee>("SELECT * FROM employees ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(employees)
    }

    pub async fn get(pool: &PgPool, id: i32) -> Result<Option<Employee>, ApiError> {
        let employee = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(employee)
    }

    pub async fn create(pool: &PgPool, req: &CreateEmployeeRequest) -> Result<Employee, ApiError> {
        let employee = sqlx::query_as::<_, Employee>(
            "INSERT INTO employees (name, role, email, password_hash, phone, registration_date)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, now()))
             RETURNING *",
        )
        .bind(&req.name)
        .bind(&req.role)
        .bind(&req.email)
        .bind(&req.password_hash)
        .bind(&req.phone)
        .bind(req.registration_date)
        .fetch_one(pool)
        .await?;
        Ok(employee)
    }

    /// Full replace of every column except registration_date, which is
    /// fixed at creation. One conditional statement, so there is no window
    /// between an existence check and the write. Returns false when no row
    /// has this id.
    pub async fn update(
        pool: &PgPool,
        id: i32,
        req: &UpdateEmployeeRequest,
    ) -> Result<bool, ApiError> {
        let result = sqlx::query(
            "UPDATE employees
             SET name = $1, role = $2, email = $3, password_hash = $4, phone = $5
             WHERE id = $6",
        )
        .bind(&req.name)
        .bind(&req.role)
        .bind(&req.email)
        .bind(&req.password_hash)
        .bind(&req.phone)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Returns false when no row had this id.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
