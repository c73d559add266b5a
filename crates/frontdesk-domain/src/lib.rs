//! frontdesk-domain
//!
//! Pure domain models for the front-desk booking summary (room lines,
//! transactions, session identity). No I/O, no network, no CLI.

pub mod booking;
pub mod common;
pub mod session;
pub mod transaction;

pub use booking::*;
pub use common::*;
pub use session::*;
pub use transaction::*;
