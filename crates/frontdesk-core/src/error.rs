use thiserror::Error;

use crate::gateway::GatewayError;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid transition: cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
    #[error("Invalid amount `{0}`: enter a number")]
    InvalidAmount(String),
    #[error("Submission failed: {0}")]
    Submission(#[from] GatewayError),
}
