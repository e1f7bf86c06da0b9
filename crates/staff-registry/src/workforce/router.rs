use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::Employee;
use super::import::{BatchImporter, ImportOutcome};
use super::registry::EmployeeRegistry;
use super::report::{OrganizationStatistics, WorkforceSummary};
use crate::error::AppError;

/// One registry per process; writers are serialized by the lock.
pub type SharedRegistry = Arc<RwLock<EmployeeRegistry>>;

pub fn read_registry(registry: &SharedRegistry) -> Result<RwLockReadGuard<'_, EmployeeRegistry>, AppError> {
    registry.read().map_err(|_| AppError::RegistryUnavailable)
}

pub fn write_registry(
    registry: &SharedRegistry,
) -> Result<RwLockWriteGuard<'_, EmployeeRegistry>, AppError> {
    registry.write().map_err(|_| AppError::RegistryUnavailable)
}

/// Router builder exposing the registry, importer, and reports.
pub fn employee_router(registry: SharedRegistry) -> Router {
    Router::new()
        .route("/api/v1/employees", get(list_handler))
        .route("/api/v1/employees/import", post(import_handler))
        .route("/api/v1/employees/report", get(report_handler))
        .route("/api/v1/organizations", get(organizations_handler))
        .with_state(registry)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeOrder {
    #[default]
    Insertion,
    LastName,
}

#[derive(Debug, Default, Deserialize)]
pub struct EmployeeQuery {
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub sort: EmployeeOrder,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub summary: WorkforceSummary,
}

pub(crate) async fn list_handler(
    State(registry): State<SharedRegistry>,
    Query(query): Query<EmployeeQuery>,
) -> Result<Json<Vec<Employee>>, AppError> {
    let registry = read_registry(&registry)?;
    let ordered: Vec<&Employee> = match query.sort {
        EmployeeOrder::Insertion => registry.all().iter().collect(),
        EmployeeOrder::LastName => registry.sorted_by_last_name(),
    };

    let employees = ordered
        .into_iter()
        .filter(|employee| {
            query
                .organization
                .as_deref()
                .map_or(true, |organization| employee.organization() == organization)
        })
        .cloned()
        .collect();

    Ok(Json(employees))
}

pub(crate) async fn import_handler(
    State(registry): State<SharedRegistry>,
    body: String,
) -> Result<(StatusCode, Json<ImportOutcome>), AppError> {
    let mut registry = write_registry(&registry)?;
    let outcome = BatchImporter::import_str(&mut registry, &body);
    let status = if outcome.imported > 0 || outcome.is_clean() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    Ok((status, Json(outcome)))
}

pub(crate) async fn report_handler(
    State(registry): State<SharedRegistry>,
) -> Result<Json<ReportResponse>, AppError> {
    let registry = read_registry(&registry)?;
    Ok(Json(ReportResponse {
        generated_at: Utc::now(),
        summary: registry.report().summary(),
    }))
}

pub(crate) async fn organizations_handler(
    State(registry): State<SharedRegistry>,
) -> Result<Json<BTreeMap<String, OrganizationStatistics>>, AppError> {
    let registry = read_registry(&registry)?;
    Ok(Json(registry.report().organization_statistics()))
}
