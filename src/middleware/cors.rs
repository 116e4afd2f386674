//! Middleware de CORS
//!
//! Este módulo maneja la configuración de CORS para permitir
//! requests desde diferentes orígenes.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::CorsLayer;

use crate::config::environment::EnvironmentConfig;

/// Crear middleware de CORS configurado para desarrollo
/// NOTA: Permite cualquier origen - solo para desarrollo
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Elegir la capa de CORS según configuración: permisiva en desarrollo o
/// sin orígenes configurados, restringida a CORS_ORIGINS en otro caso
pub fn cors_middleware_for(config: &EnvironmentConfig) -> CorsLayer {
    if config.is_development() || config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    }
}

/// Crear middleware de CORS con orígenes específicos
pub fn cors_middleware_with_origins(origins: Vec<String>) -> CorsLayer {
    let mut cors = CorsLayer::new();

    for origin in origins {
        if let Ok(header_value) = HeaderValue::from_str(&origin) {
            cors = cors.allow_origin(header_value);
        }
    }

    cors.allow_methods([
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ])
    .allow_headers([
        HeaderName::from_static("authorization"),
        HeaderName::from_static("content-type"),
        HeaderName::from_static("accept"),
        HeaderName::from_static("origin"),
        HeaderName::from_static("x-requested-with"),
    ])
    .allow_credentials(true)
    .max_age(std::time::Duration::from_secs(3600))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(environment: &str, origins: Vec<&str>) -> EnvironmentConfig {
        EnvironmentConfig {
            environment: environment.to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: origins.into_iter().map(String::from).collect(),
            ors_base_url: String::new(),
            ors_api_key: None,
        }
    }

    #[test]
    fn test_development_uses_permissive_cors() {
        let _layer = cors_middleware_for(&config("development", vec!["https://app.example.com"]));
    }

    #[test]
    fn test_production_restricts_to_configured_origins() {
        let _restricted =
            cors_middleware_for(&config("production", vec!["https://app.example.com"]));
        // Sin orígenes configurados se cae a la capa permisiva
        let _fallback = cors_middleware_for(&config("production", vec![]));
    }
}
