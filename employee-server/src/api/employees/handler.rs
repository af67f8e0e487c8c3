//! Employee API Handlers

use axum::extract::State;
use shared::models::Employee;
use shared::response::{MSG_DELETED, MSG_NOT_FOUND, MSG_SAVED, MSG_SUCCESS, MSG_UPDATED};

use crate::api::extract::{JsonBody, PathId};
use crate::core::ServerState;
use crate::services::ServiceError;
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode};

/// List active employees
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<Employee>>> {
    let employees = state.employees.list_active().await?;
    Ok(ApiResponse::ok(MSG_SUCCESS, employees))
}

/// Get employee by id
///
/// A missing employee is answered with HTTP 200 and `statusCode = 0`,
/// unlike update/delete which fail with an error status.
pub async fn get_by_id(
    State(state): State<ServerState>,
    PathId(id): PathId,
) -> AppResult<ApiResponse<Employee>> {
    match state.employees.get_by_id(id).await {
        Ok(employee) => Ok(ApiResponse::ok(MSG_SUCCESS, employee)),
        Err(ServiceError::NotFound { .. }) => Ok(ApiResponse::fail(MSG_NOT_FOUND)),
        Err(e) => Err(e.into()),
    }
}

/// Create an employee, or upsert when the body carries an id
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<Employee>,
) -> AppResult<ApiResponse<Employee>> {
    // id = 0 means "no id": always insert
    let employee = state.employees.save(payload.without_zero_id()).await?;
    tracing::info!(employee_id = ?employee.id, "Employee saved");
    Ok(ApiResponse::ok(MSG_SAVED, employee))
}

/// Soft delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    PathId(id): PathId,
) -> AppResult<ApiResponse<()>> {
    state.employees.soft_delete(id).await?;
    Ok(ApiResponse::ok_empty(MSG_DELETED))
}

/// Update an existing employee
///
/// The path id always wins over any id in the body.
pub async fn update(
    State(state): State<ServerState>,
    PathId(id): PathId,
    JsonBody(payload): JsonBody<Employee>,
) -> AppResult<ApiResponse<Employee>> {
    if id <= 0 {
        return Err(AppError::invalid_argument("El ID del empleado es inválido"));
    }

    match state.employees.get_by_id(id).await {
        Ok(_) => {}
        Err(ServiceError::NotFound { .. }) => {
            return Err(AppError::with_message(
                ErrorCode::EmployeeNotFound,
                format!("Empleado con ID {id} no encontrado"),
            ));
        }
        Err(e) => return Err(e.into()),
    }

    let employee = state.employees.save(payload.with_id(id)).await?;
    tracing::info!(employee_id = id, "Employee updated");
    Ok(ApiResponse::ok(MSG_UPDATED, employee))
}
