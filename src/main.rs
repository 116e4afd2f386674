use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use dotenvy::dotenv;
use serde_json::json;

use hos_trip_planner::config::environment::EnvironmentConfig;
use hos_trip_planner::database::connection;
use hos_trip_planner::middleware::cors::cors_middleware_for;
use hos_trip_planner::routes;
use hos_trip_planner::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚛 HOS Trip Planner - ELD Log Generation API");
    info!("============================================");

    // Inicializar base de datos
    let pool = match connection::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if let Err(e) = connection::run_migrations(&pool).await {
        error!("❌ Error ejecutando migraciones: {}", e);
        return Err(anyhow::anyhow!("Error de migraciones: {}", e));
    }

    // Crear router de la API
    let config = EnvironmentConfig::default();
    let port = config.port;
    let host = config.host.clone();
    let cors = cors_middleware_for(&config);
    let app_state = AppState::new(pool, config);

    let app = Router::new()
        .route("/test", get(test_endpoint))
        .nest(
            "/api/trip",
            routes::trip_routes::create_trip_router()
                .merge(routes::log_routes::create_log_router()),
        )
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("🚚 Endpoints - Trip:");
    info!("   POST /api/trip/plan - Planificar trip (ruta + estimaciones)");
    info!("   GET  /api/trip - Listar trips");
    info!("   GET  /api/trip/:id - Obtener trip");
    info!("   DELETE /api/trip/:id - Eliminar trip");
    info!("   GET  /api/trip/:id/route - Ruta del trip");
    info!("📋 Endpoints - Logs diarios:");
    info!("   POST /api/trip/:id/logs - Generar logs HOS");
    info!("   GET  /api/trip/:id/logs - Listar logs generados");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "HOS Trip Planner API funcionando correctamente!",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
