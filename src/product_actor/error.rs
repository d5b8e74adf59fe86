//! Error types for the Product actor.
//!
//! Variants that reach users carry the shop's fixed messages.

use crate::auth::AuthError;
use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The code is empty or no product carries it.
    #[error("Codul produsului trimis este invalid!")]
    InvalidProductCode,

    #[error("Codul produsului exista deja!")]
    DuplicateProductCode(String),

    /// No product with this id.
    #[error("Id-ul unui produs nu este valid in comanda curenta!")]
    InvalidProductId(ProductId),

    /// The acting user does not exist.
    #[error("Comanda dumneavoastra nu este asignata unui user valid!")]
    InvalidCustomerId,

    #[error("Utilizatorul nu are permisiunea de a executa aceasta operatiune!")]
    AccessDenied,

    #[error("Un produs nu a avut stock-ul necesar!")]
    NotEnoughStock { requested: u32, available: u32 },

    /// Adding the units would take the stock past `u32::MAX`; nothing is added.
    #[error("Stocul produsului ar depasi limita maxima!")]
    StockOverflow { added: u32, available: u32 },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<AuthError> for ProductError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::UnknownUser(_) => ProductError::InvalidCustomerId,
            AuthError::Denied(_) => ProductError::AccessDenied,
            AuthError::Lookup(msg) => ProductError::ActorCommunicationError(msg),
        }
    }
}
