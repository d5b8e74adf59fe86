//! Custom actions for the Product actor.
//!
//! Stock is only ever changed through these actions, one message at a time, so
//! concurrent orders can't both take the last unit. These actions are handled by
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

/// Custom actions for Product entities.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Checks the current stock level without modifying it.
    CheckStock,
    /// Takes the given quantity out of stock.
    ///
    /// # Errors
    /// Fails with `NotEnoughStock` if the requested amount exceeds available stock.
    ReserveStock(u32),
    /// Puts the given quantity into stock (restocking, returned orders).
    AddStock(u32),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// Current stock level
    CheckStock(u32),
    ReserveStock(()),
    /// Stock level after the addition
    AddStock(u32),
}
