use crate::models::unit::{search_params, UnitPayload};
use crate::models::{Unit, UnitDetail};
use super::api_client::{ApiClient, ApiError};

pub async fn list_units(search: &str) -> Result<Vec<Unit>, ApiError> {
    ApiClient::new().get_list("units/", &search_params(search)).await
}

pub async fn get_unit_details(id: u64) -> Result<UnitDetail, ApiError> {
    ApiClient::new().get_json(&format!("units/{}/", id), &[]).await
}

pub async fn create_unit(payload: &UnitPayload) -> Result<Unit, ApiError> {
    log::info!("🏢 Creando unidad {}", payload.code);
    ApiClient::new().post_json("units/", payload).await
}

pub async fn update_unit(id: u64, payload: &UnitPayload) -> Result<Unit, ApiError> {
    log::info!("🏢 Actualizando unidad #{}", id);
    ApiClient::new().patch_json(&format!("units/{}/", id), payload).await
}

pub async fn delete_unit(id: u64) -> Result<(), ApiError> {
    log::info!("🗑️ Eliminando unidad #{}", id);
    ApiClient::new().delete(&format!("units/{}/", id)).await
}
