use yew::prelude::*;

use crate::config::AppConfig;

#[hook]
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
