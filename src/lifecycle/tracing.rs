//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the whole shop.
//!
//! Logging lives at the boundaries: the HTTP `TraceLayer` records every request, the
//! client facades open `#[instrument]` spans, and the actor loop emits one event per
//! request with `entity_type` and `id` fields. Domain code only logs domain events
//! (stock reserved, order transitioned).
//!
//! ```bash
//! RUST_LOG=info cargo run                       # default
//! RUST_LOG=debug cargo run                      # full payloads
//! RUST_LOG=online_shop=debug,tower_http=debug cargo run
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` overrides the default `info` level.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type says more than the module path
        .compact()
        .init();
}
