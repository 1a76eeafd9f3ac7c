//! Omise Planner HTTP server.

use std::error::Error;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use omise_planner::adapters::auth::JwtSessionValidator;
use omise_planner::adapters::http::{api_router, with_http_layers, AppDependencies};
use omise_planner::adapters::storage::InMemoryPlanRepository;
use omise_planner::config::AppConfig;
use omise_planner::domain::foundation::DomainError;
use omise_planner::domain::plan::PlanEngine;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config)?;

    config.validate()?;
    let addr = config.server.socket_addr()?;

    // Refuse to start when a table leaves some field unresolvable.
    let engine = match PlanEngine::standard(config.engine.policy()?) {
        Ok(engine) => Arc::new(engine),
        Err(gap) => {
            let err = DomainError::from(gap);
            tracing::error!(code = %err.code, details = ?err.details, "{}", err.message);
            return Err(err.into());
        }
    };

    let validator = JwtSessionValidator::new(
        &config.auth.jwt_secret,
        config.auth.algorithm()?,
        config.auth.leeway_secs,
    )?;

    let deps = AppDependencies::new(
        engine,
        Arc::new(InMemoryPlanRepository::with_capacity(
            config.engine.max_stored_plans,
        )),
        Arc::new(validator),
    )
    .with_list_limits(
        config.engine.default_list_limit,
        config.engine.max_list_limit,
    );

    let app = with_http_layers(
        api_router(deps),
        config.server.request_timeout(),
        &config.server.cors_origins_list(),
    );

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        "Omise Planner listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.server.log_level))?;

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true),
            )
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .try_init()?;
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
