//! Seam to the remote `createTransaction` mutation.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use frontdesk_domain::{CreateTransactionInput, RecordedTransaction};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GatewayError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("mutation rejected: {}", .0.join("; "))]
    Rejected(Vec<String>),
    #[error("mutation returned no transaction")]
    EmptyPayload,
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Creates transactions on the server.
///
/// `Ok(None)` means the server answered without a created transaction; the
/// recorder treats it like a rejection.
#[async_trait]
pub trait TransactionGateway: Send + Sync {
    async fn create_transaction(
        &self,
        input: CreateTransactionInput,
    ) -> Result<Option<RecordedTransaction>, GatewayError>;
}

#[async_trait]
impl<T> TransactionGateway for Arc<T>
where
    T: TransactionGateway + ?Sized,
{
    async fn create_transaction(
        &self,
        input: CreateTransactionInput,
    ) -> Result<Option<RecordedTransaction>, GatewayError> {
        (**self).create_transaction(input).await
    }
}

#[async_trait]
impl<'a, T> TransactionGateway for &'a T
where
    T: TransactionGateway + ?Sized,
{
    async fn create_transaction(
        &self,
        input: CreateTransactionInput,
    ) -> Result<Option<RecordedTransaction>, GatewayError> {
        (**self).create_transaction(input).await
    }
}
