use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::dashboard::DashboardState;
use crate::telemetry::TelemetryTicker;

use super::api::alerts as alert_handlers;
use super::api::drones as drone_handlers;
use super::api::missions as mission_handlers;
use super::api::waypoints as waypoint_handlers;
use super::api_doc::ApiDoc;
use super::config::Config;
use super::state::AppState;
use super::ui::handlers as ui_handlers;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // UI routes
        .route("/", get(ui_handlers::dashboard))
        .route("/ui/select/clear", post(ui_handlers::clear_selection))
        .route("/ui/select/{id}", post(ui_handlers::select_drone))
        .route("/ui/view/{view}", post(ui_handlers::set_view))
        .route("/ui/mission/toggle", post(ui_handlers::toggle_mission))
        .route("/ui/sound/toggle", post(ui_handlers::toggle_sound))
        .route("/ui/waypoints", post(ui_handlers::add_waypoint))
        .route(
            "/ui/waypoints/{id}/delete",
            post(ui_handlers::delete_waypoint),
        )
        .route(
            "/ui/alerts/{id}/acknowledge",
            post(ui_handlers::acknowledge_alert),
        )
        .route("/ui/alerts/{id}/dismiss", post(ui_handlers::dismiss_alert))
        // Fleet API endpoints
        .route("/api/drones", get(drone_handlers::list_drones))
        .route("/api/drones/{id}", get(drone_handlers::get_drone))
        .route(
            "/api/selection",
            get(drone_handlers::get_selection).put(drone_handlers::put_selection),
        )
        .route("/api/summary", get(drone_handlers::summary))
        .route("/api/gps", get(drone_handlers::gps_status))
        // Waypoint API endpoints
        .route(
            "/api/waypoints",
            get(waypoint_handlers::list_waypoints).post(waypoint_handlers::add_waypoint),
        )
        .route("/api/waypoints/route", get(waypoint_handlers::route))
        .route(
            "/api/waypoints/{id}",
            delete(waypoint_handlers::delete_waypoint),
        )
        // Alert API endpoints
        .route("/api/alerts", get(alert_handlers::list_alerts))
        .route(
            "/api/alerts/{id}/acknowledge",
            post(alert_handlers::acknowledge_alert),
        )
        .route("/api/alerts/{id}", delete(alert_handlers::dismiss_alert))
        // Mission API endpoints
        .route("/api/missions", get(mission_handlers::list_missions))
        .route("/api/operation", get(mission_handlers::operation_status))
        .route(
            "/api/operation/toggle",
            post(mission_handlers::toggle_operation),
        )
        // Static files
        .nest_service("/static", ServeDir::new("src/web/static"))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind_addr = config.web.bind.clone();
    let ticker_config = config.simulation.ticker_config();
    let dashboard = DashboardState::new(config.simulation.seed).shared();

    let state = AppState {
        config: Arc::new(config),
        dashboard: dashboard.clone(),
    };

    // Held for the lifetime of the server; dropping it stops the simulators.
    let mut ticker = TelemetryTicker::start(dashboard.clone(), ticker_config);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    let result = axum::serve(listener, router(state)).await;

    if ticker.is_running() {
        ticker.stop().await;
        let locked = dashboard.lock().await;
        log::info!(
            "Simulators stopped after {} telemetry and {} GPS ticks",
            locked.telemetry_ticks(),
            locked.gps_ticks()
        );
    }
    result
}
