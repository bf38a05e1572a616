use crate::models::User;
use super::api_client::{ApiClient, ApiError};

pub async fn list_users() -> Result<Vec<User>, ApiError> {
    ApiClient::new().get_list("users/", &[]).await
}

/// Usuario autenticado (perfil + rol)
pub async fn fetch_me() -> Result<User, ApiError> {
    let me: User = ApiClient::new().get_json("me/", &[]).await?;
    log::info!("👤 Sesión de {} ({:?})", me.username, me.role());
    Ok(me)
}
