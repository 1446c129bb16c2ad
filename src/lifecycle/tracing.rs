//! Tracing setup for the page controller.
//!
//! Structured logging via the `tracing` crate, configured through `RUST_LOG`.
//! The compact format with targets suppressed keeps interaction traces
//! readable: every page event, fetch token, and cart action logs its own
//! structured fields instead of a module path.
//!
//! ```bash
//! RUST_LOG=info cargo test            # lifecycle and action outcomes
//! RUST_LOG=debug cargo test           # plus tokens, queries, DOM writes
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
