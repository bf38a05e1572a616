// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio: arma la URL, agrega el token, manda el request
// y clasifica el error. Cada service es un wrapper 1:1 de un endpoint.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::{auth_token, AppConfig};
use crate::models::Listing;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Http {
        status: u16,
        message: String,
        /// `detail` / `non_field_errors[0]` del body, si vino
        detail: Option<String>,
    },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ApiError {
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Http { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Texto para el usuario: el detalle del backend o el fallback de la vista
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }

    fn from_status(status: u16, status_text: String, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| extract_detail(&value));
        let message = if status_text.is_empty() {
            detail.clone().unwrap_or_else(|| "Unknown error".to_string())
        } else {
            status_text
        };
        ApiError::Http {
            status,
            message,
            detail,
        }
    }
}

/// Mensaje legible de un body de error DRF
pub fn extract_detail(body: &serde_json::Value) -> Option<String> {
    if let Some(detail) = body.get("detail").and_then(|d| d.as_str()) {
        return Some(detail.to_string());
    }
    body.get("non_field_errors")
        .and_then(|e| e.as_array())
        .and_then(|errors| errors.first())
        .and_then(|first| first.as_str())
        .map(String::from)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Patch,
    Delete,
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: AppConfig::load().api_base_url,
            token: auth_token(),
        }
    }

    /// `{base}/{path}?k=v` con valores url-encoded
    pub fn url(&self, path: &str, params: &[(&str, String)]) -> String {
        build_url(&self.base_url, path, params)
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self.send(Verb::Get, path, params, None::<&()>).await?;
        parse(response).await
    }

    /// GET de una colección, acepta array plano o página `{results}`
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<T>, ApiError> {
        let listing: Listing<T> = self.get_json(path, params).await?;
        Ok(listing.into_vec())
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Verb::Post, path, &[], Some(body)).await?;
        parse(response).await
    }

    /// POST sin body (acciones)
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(Verb::Post, path, &[], None::<&()>).await?;
        parse(response).await
    }

    pub async fn patch_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Verb::Patch, path, &[], Some(body)).await?;
        parse(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Verb::Delete, path, &[], None::<&()>).await?;
        Ok(())
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        verb: Verb,
        path: &str,
        params: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<Response, ApiError> {
        let url = self.url(path, params);
        log::debug!("🌐 {:?} {}", verb, url);

        let mut builder: RequestBuilder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Patch => Request::patch(&url),
            Verb::Delete => Request::delete(&url),
        };
        if let Some(token) = &self.token {
            builder = builder.header("Authorization", &format!("Token {}", token));
        }

        let result = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Serialization(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        };
        let response = result.map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let status_text = response.status_text();
            let body = response.text().await.unwrap_or_default();
            let error = ApiError::from_status(status, status_text, &body);
            log::error!("❌ {:?} {} -> {}", verb, url, error);
            return Err(error);
        }

        Ok(response)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

pub fn build_url(base_url: &str, path: &str, params: &[(&str, String)]) -> String {
    let mut url = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    let query: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect();
    if !query.is_empty() {
        url.push(if url.contains('?') { '&' } else { '?' });
        url.push_str(&query.join("&"));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_urls_with_encoded_params() {
        assert_eq!(build_url("http://api/", "/fees/", &[]), "http://api/fees/");
        assert_eq!(
            build_url("http://api", "units/", &[("search", "torre 1&2".to_string())]),
            "http://api/units/?search=torre%201%262"
        );
        assert_eq!(
            build_url("http://api", "fees/?mine=1", &[("page", "2".to_string())]),
            "http://api/fees/?mine=1&page=2"
        );
    }

    #[test]
    fn detail_prefers_detail_then_non_field_errors() {
        assert_eq!(
            extract_detail(&json!({"detail": "Cuotas emitidas: 12"})).as_deref(),
            Some("Cuotas emitidas: 12")
        );
        assert_eq!(
            extract_detail(&json!({"non_field_errors": ["El área ya está reservada."]})).as_deref(),
            Some("El área ya está reservada.")
        );
        assert_eq!(extract_detail(&json!({"amount": ["invalid"]})), None);
    }

    #[test]
    fn http_errors_carry_backend_detail() {
        let err = ApiError::from_status(400, "Bad Request".into(), r#"{"detail": "Pago excede saldo"}"#);
        assert_eq!(err.detail(), Some("Pago excede saldo"));
        assert_eq!(err.user_message("No se pudo registrar el pago."), "Pago excede saldo");
        assert_eq!(err.to_string(), "HTTP 400: Bad Request");
    }

    #[test]
    fn non_json_bodies_use_the_fallback() {
        let err = ApiError::from_status(502, String::new(), "<html>bad gateway</html>");
        assert_eq!(err.detail(), None);
        assert_eq!(err.user_message("No se pudo eliminar."), "No se pudo eliminar.");
        let network = ApiError::Network("offline".into());
        assert_eq!(network.user_message("Error al cargar los datos."), "Error al cargar los datos.");
    }
}
