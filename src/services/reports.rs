use crate::models::{DashboardStats, FinanceReport, ReportQuery};
use super::api_client::{ApiClient, ApiError};

pub async fn finance_report(query: &ReportQuery) -> Result<FinanceReport, ApiError> {
    log::info!("📊 Reporte financiero {:?}", query.params());
    ApiClient::new().get_json("reports/finance/", &query.params()).await
}

pub async fn dashboard_stats() -> Result<DashboardStats, ApiError> {
    ApiClient::new().get_json("reports/dashboard-stats/", &[]).await
}
