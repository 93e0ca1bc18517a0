use std::sync::Arc;

use crate::config::{Config, LogFormat};
use quotebook_core::quotes::{QuoteRepositoryTrait, QuoteService, QuoteServiceTrait};
use quotebook_storage_memory::quotes::QuoteRepository;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub quote_service: Arc<dyn QuoteServiceTrait + Send + Sync>,
}

impl AppState {
    pub fn with_repository(repository: Arc<dyn QuoteRepositoryTrait>) -> Arc<Self> {
        Arc::new(AppState {
            quote_service: Arc::new(QuoteService::new(repository)),
        })
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the default `info`
/// filter; `log` records from the library crates are bridged in.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

/// Builds the process-wide state around a freshly seeded quote store.
pub fn build_state() -> anyhow::Result<Arc<AppState>> {
    let repository = Arc::new(QuoteRepository::seeded()?);
    tracing::info!("Quote store seeded with {} quotes", repository.len()?);
    Ok(AppState::with_repository(repository))
}
