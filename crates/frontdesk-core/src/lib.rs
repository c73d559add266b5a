//! frontdesk-core
//!
//! Booking charge aggregation and the transaction-recorder state machine.
//! Depends on frontdesk-domain. No CLI, no terminal I/O, no direct network access:
//! the mutation round-trip goes through the [`TransactionGateway`] seam.

pub mod amount;
pub mod charge_service;
pub mod error;
pub mod format;
pub mod gateway;
pub mod notifier;
pub mod recorder;
pub mod summary_service;

pub use amount::*;
pub use charge_service::*;
pub use error::{CoreError, CoreResult};
pub use format::*;
pub use gateway::*;
pub use notifier::*;
pub use recorder::*;
pub use summary_service::*;
