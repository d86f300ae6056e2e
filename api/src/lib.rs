//! Brewery API
//!
//! A small REST service exposing the beer catalogue under `/api/v1/beer/`.
//! Uses hexagonal (ports & adapters) architecture: handlers talk to services,
//! services talk to repository ports, adapters implement the ports.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod adapters;
pub mod app;
pub mod config;
pub mod constraints;
pub mod domain;
pub mod entity;
pub mod error;
pub mod handlers;



use app::BeerService;
use domain::ports::BeerRepository;

/// Base path of the beer resource
pub const BEER_PATH: &str = "/api/v1/beer";

/// Application state shared across all handlers
pub struct AppState<BR>
where
    BR: BeerRepository,
{
    pub beer_service: Arc<BeerService<BR>>,
}

impl<BR> AppState<BR>
where
    BR: BeerRepository,
{
    pub fn new(beers: Arc<BR>) -> Self {
        Self {
            beer_service: Arc::new(BeerService::new(beers)),
        }
    }
}

// Manual impl: deriving would require `BR: Clone`
impl<BR> Clone for AppState<BR>
where
    BR: BeerRepository,
{
    fn clone(&self) -> Self {
        Self {
            beer_service: self.beer_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the application router for any repository implementation
pub fn build_router<BR>(state: AppState<BR>) -> Router
where
    BR: BeerRepository + 'static,
{
    Router::new()
        // Health check
        .route("/health", get(health))
        // Beer resource; creation is accepted with and without the trailing slash
        .route(BEER_PATH, post(handlers::save_new_beer::<BR>))
        .route(
            &format!("{}/", BEER_PATH),
            post(handlers::save_new_beer::<BR>),
        )
        .route(
            &format!("{}/:beer_id", BEER_PATH),
            get(handlers::get_beer_by_id::<BR>).put(handlers::update_beer_by_id::<BR>),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
