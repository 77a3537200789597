//! CageRank API Server
//!
//! Keeps per-weight-class fighter rankings in step with the fight ledger.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    PostgresEventRepository, PostgresFightRepository, PostgresRankingRepository,
    PostgresRosterRepository,
};
use app::{EventService, FightService, RankingService, RecalcScheduler, RosterService};
use config::Config;
use domain::ports::RosterProvider;

type PostgresRankingService =
    RankingService<PostgresRosterRepository, PostgresFightRepository, PostgresRankingRepository>;

type PostgresFightService = FightService<
    PostgresFightRepository,
    PostgresRosterRepository,
    PostgresEventRepository,
    PostgresRankingService,
>;

type PostgresRosterService =
    RosterService<PostgresRosterRepository, PostgresFightRepository, PostgresRankingService>;

type PostgresEventService = EventService<
    PostgresEventRepository,
    PostgresFightRepository,
    PostgresRosterRepository,
    PostgresRankingService,
>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub ranking_service: Arc<PostgresRankingService>,
    pub fight_service: Arc<PostgresFightService>,
    pub roster_service: Arc<PostgresRosterService>,
    pub event_service: Arc<PostgresEventService>,
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

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cagerank_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting CageRank API...");

    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Create adapters
    let roster = Arc::new(PostgresRosterRepository::new(db.clone()));
    let fight_repo = Arc::new(PostgresFightRepository::new(db.clone()));
    let ranking_repo = Arc::new(PostgresRankingRepository::new(db.clone()));
    let event_repo = Arc::new(PostgresEventRepository::new(db.clone()));

    // Create application services
    let ranking_service = Arc::new(RankingService::new(
        roster.clone(),
        fight_repo.clone(),
        ranking_repo,
    ));
    let scheduler = Arc::new(RecalcScheduler::new(ranking_service.clone()));
    let fight_service = Arc::new(FightService::new(
        fight_repo.clone(),
        roster.clone(),
        event_repo.clone(),
        scheduler.clone(),
    ));
    let roster_service = Arc::new(RosterService::new(
        roster.clone(),
        fight_repo.clone(),
        scheduler.clone(),
    ));
    let event_service = Arc::new(EventService::new(
        event_repo,
        fight_repo,
        roster.clone(),
        scheduler.clone(),
    ));

    if config.seed_demo_data {
        app::seed::seed_demo_data(&roster_service, &event_service, &fight_service)
            .await
            .context("Failed to seed demo data")?;
    }

    if config.recalc_on_startup {
        let classes = roster.list_weight_classes().await?;
        tracing::info!(count = classes.len(), "Scheduling startup recalculation");
        for class in classes {
            scheduler.schedule(class.id).await;
        }
    }

    let state = AppState {
        ranking_service,
        fight_service,
        roster_service,
        event_service,
    };

    let app = Router::new()
        .route("/health", get(health))
        .route(
            "/weight-classes",
            get(handlers::list_weight_classes).post(handlers::create_weight_class),
        )
        .route(
            "/weight-classes/:id",
            get(handlers::get_weight_class)
                .patch(handlers::update_weight_class)
                .delete(handlers::delete_weight_class),
        )
        .route(
            "/weight-classes/:id/fighters",
            get(handlers::list_class_fighters),
        )
        .route("/weight-classes/:id/rankings", get(handlers::get_rankings))
        .route(
            "/weight-classes/:id/rankings/recalculate",
            post(handlers::recalculate_rankings),
        )
        .route(
            "/fighters",
            get(handlers::list_fighters).post(handlers::create_fighter),
        )
        .route(
            "/fighters/:id",
            get(handlers::get_fighter)
                .patch(handlers::update_fighter)
                .delete(handlers::delete_fighter),
        )
        .route(
            "/events",
            get(handlers::list_events).post(handlers::create_event),
        )
        .route(
            "/events/:id",
            get(handlers::get_event)
                .patch(handlers::update_event)
                .delete(handlers::delete_event),
        )
        .route("/events/:id/fights", get(handlers::list_event_fights))
        .route("/fights", post(handlers::create_fight))
        .route(
            "/fights/:id",
            get(handlers::get_fight)
                .patch(handlers::update_fight)
                .delete(handlers::delete_fight),
        )
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
