use std::sync::Arc;

use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Pong;
use service::restaurant::{
    repo::SeaOrmRestaurantRepository, repository::RestaurantRepository, DynRestaurantService,
    RestaurantService,
};

use crate::openapi::ApiDoc;

pub mod restaurants;

/// State shared by all handlers; the repository is injected at startup.
#[derive(Clone)]
pub struct ServerState {
    pub restaurants: Arc<DynRestaurantService>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn RestaurantRepository>) -> Self {
        Self { restaurants: Arc::new(RestaurantService::new(repo)) }
    }

    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmRestaurantRepository::new(db)))
    }
}

#[utoipa::path(
    get, path = "/ping", tag = "health",
    responses((status = 200, description = "Alive", body = crate::openapi::PongDoc))
)]
pub async fn ping() -> Json<Pong> {
    Json(Pong::default())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let restaurant_routes = Router::new()
        .route("/restaurants", get(restaurants::list).post(restaurants::create))
        .route(
            "/restaurants/:id",
            get(restaurants::get)
                .patch(restaurants::update)
                .delete(restaurants::delete),
        );

    Router::new()
        .route("/ping", get(ping))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(restaurant_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
