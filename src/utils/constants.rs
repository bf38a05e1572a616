/// URL base de la API REST
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:8000/api (por defecto)
/// - Producción: via BACKEND_URL (env var o .env)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8000/api",
};

/// Nivel de log configurado en build (trace | debug | info | warn | error)
pub const LOG_LEVEL: Option<&str> = option_env!("LOG_LEVEL");

// Claves de localStorage
pub const STORAGE_KEY_API_URL: &str = "condominio_api_url";
pub const STORAGE_KEY_TOKEN: &str = "condominio_token";

/// Estado de cuota considerado pagado
pub const FEE_STATUS_PAID: &str = "PAID";
