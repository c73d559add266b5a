#![doc(test(attr(deny(warnings))))]

//! Frontdesk wires the booking-summary panel of a hotel front desk: charge
//! totals for a booking under construction, and recording payments against it
//! through the GraphQL `createTransaction` mutation.

pub mod cli;
pub mod errors;
pub mod graphql;
pub mod utils;

pub use frontdesk_config;
pub use frontdesk_core;
pub use frontdesk_domain;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Frontdesk tracing initialized.");
    });
}
