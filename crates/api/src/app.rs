use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::routes::{applications, health, join, projects, pulse};
use crate::services::{ApplicationService, EmailService};
use persistence::repositories::ApplicationRepository;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub applications: ApplicationService,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let config = Arc::new(config);

    // The lifecycle service owns the business rules; the store and the
    // invite notifier are injected here, at process wiring time.
    let mailer = EmailService::new(config.email.clone());
    let applications_service =
        ApplicationService::new(ApplicationRepository::new(pool.clone()), Arc::new(mailer));

    let state = AppState {
        pool,
        config: config.clone(),
        applications: applications_service,
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Admin-only handlers enforce the shared password via the AdminAuth
    // extractor, so public and admin methods can share a path.
    Router::new()
        .route("/api/health", get(health::health_check))
        .route(
            "/api/applications",
            post(applications::submit_application).get(applications::list_applications),
        )
        .route(
            "/api/applications/:id/approve",
            patch(applications::approve_application),
        )
        .route(
            "/api/applications/bulk-approve",
            post(applications::bulk_approve_applications),
        )
        .route(
            "/api/applications/:id",
            delete(applications::decline_application),
        )
        .route(
            "/api/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route("/api/pulse", get(pulse::recent_activity))
        .route("/api/join", get(join::redeem_invite))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
