//! Error types for the Order actor.

use crate::auth::AuthError;
use crate::product_actor::ProductError;
use thiserror::Error;

/// Errors that can occur during order operations.
///
/// Each variant's message is the one shown to the shop's users.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order names no products, or asks for zero of one.
    #[error("Comanda dumneavoastra nu contine niciun produs!")]
    InvalidProducts,

    /// The acting user does not exist.
    #[error("Comanda dumneavoastra nu este asignata unui user valid!")]
    InvalidCustomerId,

    #[error("Id-ul unui produs nu este valid in comanda curenta!")]
    InvalidProductId,

    #[error("Un produs nu a avut stock-ul necesar!")]
    NotEnoughStock,

    #[error("Id-ul comenzii nu este valid!")]
    InvalidOrderId,

    #[error("Comanda a fost deja expediata!")]
    OrderAlreadyDelivered,

    #[error("Comanda a fost anulata!")]
    OrderCanceled,

    #[error("Comanda nu poate fi returnata deoarece nu a fost livrata!")]
    OrderNotDeliveredYet,

    #[error("Comanda a fost deja returnata!")]
    OrderAlreadyReturned,

    #[error("Utilizatorul nu are permisiunea de a executa aceasta operatiune!")]
    AccessDenied,

    /// Putting the items back would overflow a product's stock.
    #[error("Stocul produsului ar depasi limita maxima!")]
    StockOverflow,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<AuthError> for OrderError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::UnknownUser(_) => OrderError::InvalidCustomerId,
            AuthError::Denied(_) => OrderError::AccessDenied,
            AuthError::Lookup(msg) => OrderError::ActorCommunicationError(msg),
        }
    }
}

impl From<ProductError> for OrderError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::InvalidProductId(_) => OrderError::InvalidProductId,
            ProductError::NotEnoughStock { .. } => OrderError::NotEnoughStock,
            ProductError::StockOverflow { .. } => OrderError::StockOverflow,
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
