//! Employee API Handlers
//!
//! Path ids are checked with [`EmployeeId::parse`] before the store is
//! touched; a malformed id answers `400` with a plain-text body.

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Employee, EmployeeId, EmployeeInput};

use crate::core::ServerState;
use crate::db::repository::EmployeeRepository;
use crate::utils::{AppError, AppResult, MaybeJson};

fn parse_id(raw: &str) -> AppResult<EmployeeId> {
    EmployeeId::parse(raw).map_err(|_| {
        tracing::debug!(id = %raw, "Rejected malformed employee id");
        AppError::invalid_id(raw)
    })
}

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employees = repo.find_all().await?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<MaybeJson<Employee>> {
    let id = parse_id(&id)?;
    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo.find_by_id(&id).await?;
    Ok(MaybeJson(employee))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeInput>,
) -> AppResult<Json<Employee>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo.create(payload).await?;
    tracing::info!(id = %employee.id, "Employee created");
    Ok(Json(employee))
}

/// Replace all four attributes of an employee
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeInput>,
) -> AppResult<MaybeJson<Employee>> {
    let id = parse_id(&id)?;
    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo.replace(&id, payload).await?;
    if employee.is_some() {
        tracing::info!(id = %id, "Employee updated");
    }
    Ok(MaybeJson(employee))
}

/// Hard delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<MaybeJson<Employee>> {
    let id = parse_id(&id)?;
    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo.delete(&id).await?;
    if employee.is_some() {
        tracing::info!(id = %id, "Employee deleted");
    }
    Ok(MaybeJson(employee))
}
