//--------------------------------------------------------------------------------------------------
// MODULE OVERVIEW
//--------------------------------------------------------------------------------------------------
// This module implements the REST API using Axum for the order intake service.
// It provides the order placement endpoint and the liveness probe.
//
// | Component      | Description                                                |
// |----------------|-----------------------------------------------------------|
// | API            | Main API structure coordinating routes and services        |
// | Routes         | Handler functions for API endpoints                        |
// | States         | Shared application state                                   |
// | DTOs           | Data transfer objects for API responses                    |
//
//--------------------------------------------------------------------------------------------------
// STRUCTS
//--------------------------------------------------------------------------------------------------
// | Name           | Description                                       | Key Methods       |
// |----------------|---------------------------------------------------|------------------|
// | AppState       | Shared application state                         | new               |
// | Api            | Main API structure                               | routes, serve     |
//--------------------------------------------------------------------------------------------------

mod dto;
mod error;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Extension, Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::domain::services::intake::{OrderIntakeService, OrderIntakeServiceImpl};

pub use dto::*;
pub use error::{ApiError, ApiResult};

/// Shared application state accessible by all handlers
pub struct AppState {
    /// Order intake service shared by every request
    pub intake: Arc<dyn OrderIntakeService>,
}

impl AppState {
    /// Creates a new application state
    pub fn new(intake: Arc<dyn OrderIntakeService>) -> Self {
        Self { intake }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(OrderIntakeServiceImpl::default()))
    }
}

/// Main API structure
pub struct Api {
    /// API address
    addr: SocketAddr,
    /// Allowed CORS origins
    cors_origins: Vec<String>,
    /// Shared application state
    state: Arc<AppState>,
}

impl Api {
    /// Creates a new API instance
    pub fn new(addr: SocketAddr, state: AppState) -> Self {
        Self {
            addr,
            cors_origins: Vec::new(),
            state: Arc::new(state),
        }
    }

    /// Creates an API instance wired from configuration
    pub fn from_config(config: &Config) -> Self {
        let intake = OrderIntakeServiceImpl::new(config.id_strategy.build());
        Self::new(config.addr(), AppState::new(Arc::new(intake)))
            .with_cors_origins(config.cors_origins.clone())
    }

    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = origins;
        self
    }

    fn cors(&self) -> CorsLayer {
        // `*` cannot be mixed into an explicit origin list
        let allow_origin = if self.cors_origins.iter().any(|origin| origin == "*") {
            AllowOrigin::any()
        } else {
            let origins: Vec<HeaderValue> = self
                .cors_origins
                .iter()
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!("Ignoring invalid CORS origin: {}", origin);
                        None
                    }
                })
                .collect();
            AllowOrigin::list(origins)
        };

        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
    }

    /// Creates all routes for the API
    pub fn routes(&self) -> Router {
        Router::new()
            // Health check
            .route("/", get(routes::health))
            .route("/health", get(routes::health))
            // Order intake
            .route("/orders", post(routes::create_order))
            .fallback(routes::not_found)
            // Attach application state
            .layer(Extension(self.state.clone()))
            .layer(self.cors())
            .layer(TraceLayer::new_for_http())
    }

    /// Starts the API server and runs until ctrl-c
    pub async fn serve(self) -> std::io::Result<()> {
        let app = self.routes();

        let listener = TcpListener::bind(self.addr).await?;
        info!("API listening on {}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
