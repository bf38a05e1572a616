use yew::prelude::*;

use super::resource::{use_resource, LoadOptions, ResourceHandle};
use crate::models::{Capabilities, User};
use crate::services::users::fetch_me;

const MSG_ME_FAILED: &str = "No se pudo obtener el usuario actual.";

/// Identidad del usuario logueado. Mientras no resuelve, la vista no renderiza nada más.
#[hook]
pub fn use_me() -> ResourceHandle<User> {
    use_resource(LoadOptions::keep(MSG_ME_FAILED), Some(()), |_| fetch_me())
}

pub fn capabilities(me: Option<&User>) -> Capabilities {
    me.map(Capabilities::for_user).unwrap_or_default()
}
