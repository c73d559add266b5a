//! GraphQL transport for the transaction mutation.

pub mod transaction_gateway;

pub use transaction_gateway::{
    decode_response, request_body, GraphQlTransactionGateway, CREATE_TRANSACTION,
};
