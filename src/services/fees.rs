use crate::models::fee::{DetailResponse, IssueFeesRequest, PaymentRequest};
use crate::models::{ExpenseType, Fee, FeeQuery, PaymentPreference};
use super::api_client::{ApiClient, ApiError};

pub async fn list_expense_types() -> Result<Vec<ExpenseType>, ApiError> {
    ApiClient::new().get_list("expense-types/", &[]).await
}

/// Admin: todas las cuotas; residente: `?mine=1`
pub async fn list_fees(query: FeeQuery) -> Result<Vec<Fee>, ApiError> {
    let fees: Vec<Fee> = ApiClient::new().get_list("fees/", &query.params()).await?;
    log::info!("💳 {} cuotas cargadas", fees.len());
    Ok(fees)
}

pub async fn list_my_fees() -> Result<Vec<Fee>, ApiError> {
    list_fees(FeeQuery { mine: true }).await
}

/// Emite cuotas en bloque para un período; devuelve el `detail` del backend
pub async fn issue_monthly_fees(request: &IssueFeesRequest) -> Result<Option<String>, ApiError> {
    log::info!("🧾 Emitiendo cuotas {} (tipo {})", request.period, request.expense_type_id);
    let response: DetailResponse = ApiClient::new()
        .post_json("fees/issue_monthly_fees/", request)
        .await?;
    Ok(response.detail)
}

/// Registra un pago manual (admin)
pub async fn register_manual_payment(fee_id: u64, payment: &PaymentRequest) -> Result<(), ApiError> {
    log::info!("💵 Registrando pago de {} en cuota #{}", payment.amount, fee_id);
    let _: serde_json::Value = ApiClient::new()
        .post_json(&format!("fees/{}/pay/", fee_id), payment)
        .await?;
    Ok(())
}

/// Preferencia de pago online; trae el QR en base64
pub async fn create_payment_preference(fee_id: u64) -> Result<PaymentPreference, ApiError> {
    ApiClient::new()
        .post_empty(&format!("fees/{}/create-payment-preference/", fee_id))
        .await
}
