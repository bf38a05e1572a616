use crate::models::reservation::ReservationPayload;
use crate::models::{CommonArea, Reservation, ScheduleQuery};
use super::api_client::{ApiClient, ApiError};

pub async fn list_common_areas() -> Result<Vec<CommonArea>, ApiError> {
    ApiClient::new().get_list("common-areas/", &[]).await
}

/// Sin filtro: reservas del usuario; con `ScheduleQuery`: agenda del área ese día
pub async fn list_reservations(filter: Option<&ScheduleQuery>) -> Result<Vec<Reservation>, ApiError> {
    let params = filter.map(ScheduleQuery::params).unwrap_or_default();
    ApiClient::new().get_list("reservations/", &params).await
}

pub async fn create_reservation(payload: &ReservationPayload) -> Result<Reservation, ApiError> {
    log::info!("📅 Creando reserva en área #{}", payload.area);
    ApiClient::new().post_json("reservations/", payload).await
}

pub async fn update_reservation(id: u64, payload: &ReservationPayload) -> Result<Reservation, ApiError> {
    log::info!("📅 Actualizando reserva #{}", id);
    ApiClient::new().patch_json(&format!("reservations/{}/", id), payload).await
}

pub async fn delete_reservation(id: u64) -> Result<(), ApiError> {
    log::info!("🗑️ Eliminando reserva #{}", id);
    ApiClient::new().delete(&format!("reservations/{}/", id)).await
}
