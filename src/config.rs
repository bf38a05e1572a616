use serde::{Deserialize, Serialize};

use crate::utils::constants::{BACKEND_URL, LOG_LEVEL, STORAGE_KEY_API_URL, STORAGE_KEY_TOKEN};
use crate::utils::storage::load_string;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: String,
    pub ui_config: UIConfig,
    pub dashboard_config: DashboardConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: BACKEND_URL.to_string(),
            log_level: LOG_LEVEL.unwrap_or("info").to_string(),
            ui_config: UIConfig::default(),
            dashboard_config: DashboardConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UIConfig {
    pub search_debounce_ms: u32,
    pub toast_duration_ms: u32,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: 500,
            toast_duration_ms: 4000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Meses hacia atrás del reporte financiero del dashboard
    pub report_months: i32,
    pub activity_limit: usize,
    pub notices_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            report_months: 6,
            activity_limit: 5,
            notices_limit: 5,
        }
    }
}

impl AppConfig {
    /// Config efectiva: defaults de build + override de la URL en localStorage
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Some(url) = load_string(STORAGE_KEY_API_URL) {
            config.api_base_url = url;
        }
        config.api_base_url = normalize_base_url(&config.api_base_url);
        config
    }

    pub fn log_level(&self) -> log::Level {
        parse_log_level(&self.log_level)
    }
}

/// Token de autenticación guardado por el login del backend
pub fn auth_token() -> Option<String> {
    load_string(STORAGE_KEY_TOKEN)
}

pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

pub fn parse_log_level(level: &str) -> log::Level {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => log::Level::Trace,
        "debug" => log::Level::Debug,
        "warn" | "warning" => log::Level::Warn,
        "error" => log::Level::Error,
        _ => log::Level::Info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_view_behaviour() {
        let config = AppConfig::default();
        assert_eq!(config.ui_config.search_debounce_ms, 500);
        assert_eq!(config.dashboard_config.report_months, 6);
        assert_eq!(config.dashboard_config.activity_limit, 5);
    }

    #[test]
    fn base_url_loses_trailing_slashes() {
        assert_eq!(normalize_base_url(" http://api.local/api// "), "http://api.local/api");
    }

    #[test]
    fn unknown_log_level_is_info() {
        assert_eq!(parse_log_level("DEBUG"), log::Level::Debug);
        assert_eq!(parse_log_level("verbose"), log::Level::Info);
    }
}
