#![doc(test(attr(deny(warnings))))]

//! Spendwise reconciles a personal ledger against its budgets and savings goals,
//! and gates simulated payments that would push a budget past its limit.
//!
//! The engine itself lives in the `spendwise-core` crate; this crate wires it to
//! JSON persistence, configuration and the `spendwise_cli` binary.

pub mod cli;
pub mod errors;
pub mod utils;

pub use spendwise_config as config;
pub use spendwise_core as engine;
pub use spendwise_domain as domain;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Spendwise tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
