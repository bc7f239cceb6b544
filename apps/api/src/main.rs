mod advisor;
mod config;
mod conversation;
mod errors;
mod models;
mod recommendations;
mod routes;
mod session;
mod state;
mod wizard;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::advisor::random::{RandomSource, SeededRandom, ThreadRandom};
use crate::advisor::selector::{KeywordAdvisor, ResponseSelector};
use crate::config::Config;
use crate::conversation::pacing::ReplyDelay;
use crate::routes::build_router;
use crate::session::sweeper::SessionSweeper;
use crate::session::{SessionLimits, SessionStore};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerGenie API v{}", env!("CARGO_PKG_VERSION"));

    // One source drives both default-reply picks and reply jitter
    let rng: Arc<dyn RandomSource> = match config.advisor_seed {
        Some(seed) => {
            info!("Using seeded random source (seed {seed})");
            Arc::new(SeededRandom::new(seed))
        }
        None => Arc::new(ThreadRandom),
    };

    // Initialize advisor (KeywordAdvisor is the only backend)
    let advisor = Arc::new(KeywordAdvisor(ResponseSelector::new(rng.clone())));

    let reply_delay = ReplyDelay {
        base: config.reply_delay_base,
        jitter: config.reply_delay_jitter,
    };
    info!(
        "Reply pacing: {}ms base + up to {}ms jitter",
        reply_delay.base.as_millis(),
        reply_delay.jitter.as_millis()
    );

    // Session store with idle expiry
    let sessions = Arc::new(SessionStore::with_limits(SessionLimits {
        max_sessions: config.max_sessions,
        idle_ttl: config.session_idle_ttl,
    }));
    SessionSweeper::new(Arc::clone(&sessions), config.session_sweep_interval).spawn();
    info!(
        "Sessions: up to {}, expire after {}s idle",
        config.max_sessions,
        config.session_idle_ttl.as_secs()
    );

    // Build app state
    let state = AppState {
        sessions,
        advisor,
        rng,
        reply_delay,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
