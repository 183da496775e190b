use anyhow::Context;
use axum::{Json, Router, routing::get};
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::players::handlers::list_players,
        features::players::handlers::get_player,
        features::players::handlers::create_player,
        features::players::handlers::update_player,
        features::players::handlers::get_player_masterpoints,
        features::players::handlers::get_player_ratings,
        features::players::handlers::get_player_rating,
        features::organizations::handlers::list_organizations,
        features::organizations::handlers::get_organization,
        features::organizations::handlers::get_organization_children,
        features::organizations::handlers::create_organization,
        features::events::handlers::list_events,
        features::events::handlers::recent_events,
        features::events::handlers::get_event,
        features::events::handlers::get_event_standings,
        features::events::handlers::get_event_sessions,
        features::events::handlers::create_event,
        features::events::handlers::update_event,
        features::results::handlers::get_event_results,
        features::results::handlers::get_player_results,
        features::results::handlers::create_result,
        features::leaderboard::handlers::get_leaderboard,
    ),
    components(
        schemas(
            storage::dto::player::CreatePlayerRequest,
            storage::dto::player::UpdatePlayerRequest,
            storage::dto::player::PlayerResponse,
            storage::dto::organization::CreateOrganizationRequest,
            storage::dto::organization::OrganizationResponse,
            storage::dto::event::CreateEventRequest,
            storage::dto::event::UpdateEventRequest,
            storage::dto::event::EventResponse,
            storage::dto::event::EventStandingRow,
            storage::dto::event::EventStandingsResponse,
            storage::dto::outcome::CreateResultRequest,
            storage::dto::outcome::ResultResponse,
            storage::dto::ratings::CurrentRating,
            storage::dto::ratings::PlayerRatingsResponse,
            storage::dto::masterpoints::MasterpointSummary,
            storage::dto::leaderboard::LeaderboardPeriod,
            storage::dto::leaderboard::LeaderboardEntry,
            storage::dto::leaderboard::LeaderboardResponse,
            storage::models::Organization,
            storage::models::Player,
            storage::models::Event,
            storage::models::Session,
            storage::models::EventOutcome,
            storage::models::RatingSnapshot,
            storage::models::MasterpointAward,
        )
    ),
    tags(
        (name = "players", description = "Player registry, masterpoints and ratings"),
        (name = "organizations", description = "Club/region/national organization tree"),
        (name = "events", description = "Events, sessions and standings"),
        (name = "results", description = "Per-player event results"),
        (name = "leaderboard", description = "Masterpoint leaderboards"),
    )
)]
struct ApiDoc;

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting bridge platform API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health))
        .nest("/api/players", features::players::routes())
        .nest("/api/organizations", features::organizations::routes())
        .nest("/api/events", features::events::routes())
        .nest("/api/results", features::results::routes())
        .nest("/api/leaderboard", features::leaderboard::routes())
        .layer(cors)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    axum::serve(listener, app).await?;

    Ok(())
}
