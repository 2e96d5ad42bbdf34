mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::cors_middleware;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚌 Fare Payment - Backend de pago de pasajes");
    info!("============================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // Crear el schema (y recrearlo con datos semilla si REINIT_DB=1)
    if config.reinit_db {
        database::init::reinit_schema(&pool).await?;
    } else {
        database::init::init_schema(&pool).await?;
    }
    info!("✅ Schema de base de datos listo");

    // Crear router de la API
    let app_state = AppState::new(pool, config.clone());

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/bus", routes::bus_routes::create_bus_router())
        .nest(
            "/client_types",
            routes::client_type_routes::create_client_type_router(),
        )
        .nest(
            "/transactions",
            routes::transaction_routes::create_transaction_router(),
        )
        .nest("/stats", routes::stats_routes::create_stats_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🚌 Endpoints - Bus:");
    info!("   POST   /bus/add - Crear autobús");
    info!("   GET    /bus/get_by_id/:id - Obtener autobús");
    info!("   GET    /bus/get_all - Listar autobuses");
    info!("   PUT    /bus/set_price - Sobrescribir precio");
    info!("   PUT    /bus/set_status - Sobrescribir estado");
    info!("   DELETE /bus/:id - Eliminar autobús");
    info!("👥 Endpoints - Client types:");
    info!("   POST /client_types/add - Crear categoría");
    info!("   GET  /client_types/get_by_id/:id - Obtener categoría");
    info!("   GET  /client_types/get_all - Listar categorías");
    info!("   PUT  /client_types/update_discount - Actualizar descuento");
    info!("🎫 Endpoints - Transactions:");
    info!("   POST /transactions/add - Reservar (ocupa el autobús)");
    info!("   GET  /transactions/get_by_id/:id - Obtener transacción");
    info!("   GET  /transactions/get_all - Listar transacciones");
    info!("📊 Endpoints - Stats:");
    info!("   POST /stats/get_all_price - Ingresos por autobús y ventana");
    info!("   GET  /stats/get_median_price/:id - Precio medio por autobús");
    info!("   POST /stats/get_human_count - Pasajeros por hora");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                anyhow::Error::from(e)
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "fare-payment",
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
