//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter for the whole
//! service. The store logs every operation with structured fields:
//!
//! ```text
//! INFO Actor started entity_type="Pizza" size=2 next_id=Some(3)
//! INFO Created entity_type="Pizza" id=3 size=3
//! INFO Deleted entity_type="Pizza" id=1 size=2
//! WARN Not found entity_type="Pizza" id=7
//! ```
//!
//! `RUST_LOG` wins when set; otherwise the configured `log_level` applies.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p contoso-pizza   # also logs request payloads
//! RUST_LOG=actor_framework=debug,info cargo run -p contoso-pizza
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
