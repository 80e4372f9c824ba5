//! Logging setup.
//!
//! The library only emits `tracing` events. Hosts that do not install their
//! own subscriber can call [`init`] once at startup.

use crate::constants::DEFAULT_LOG_FILTER;
use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static INIT: OnceCell<()> = OnceCell::new();

/// Install a formatting subscriber filtered by `RUST_LOG`
/// (default `homelab_panels=info`). Idempotent; a subscriber installed
/// elsewhere takes precedence.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        if tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
            .is_err()
        {
            tracing::debug!("Global subscriber already set; keeping it");
        }
    });
}

/// True once [`init`] has run.
pub fn is_initialized() -> bool {
    INIT.get().is_some()
}
