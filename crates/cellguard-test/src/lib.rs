//! CellGuard Test Harness - Seeded facilities and scenario validation
//!
//! This crate provides:
//! - Seeded facility generation (rooms, edges, cells)
//! - Scenario tests for the authorization core
//! - Tracing setup for tests

pub mod generator;
pub mod integration;

pub use generator::*;
pub use integration::*;

use tracing_subscriber::EnvFilter;

/// Install a test-friendly tracing subscriber, filtered by `RUST_LOG`
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
