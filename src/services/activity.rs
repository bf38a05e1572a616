//! Fuentes de la actividad reciente del dashboard

use crate::models::{MaintenanceRequest, Notice};
use super::api_client::{ApiClient, ApiError};

pub async fn list_notices(limit: usize) -> Result<Vec<Notice>, ApiError> {
    ApiClient::new()
        .get_list("notices/", &[("limit", limit.to_string())])
        .await
}

pub async fn list_maintenance_requests() -> Result<Vec<MaintenanceRequest>, ApiError> {
    ApiClient::new().get_list("maintenance-requests/", &[]).await
}
