//! The order state machine.
//!
//! ```text
//!            deliver (expeditor)            return (client, owner)
//!   Placed ─────────────────────▶ Delivered ─────────────────────▶ Returned
//!     │
//!     │ cancel (client, owner)
//!     ▼
//!   Canceled
//! ```
//!
//! Every other (transition, state) pair is rejected with a specific [`OrderError`].

use crate::auth::Operation;
use crate::model::OrderState;
use crate::order_actor::OrderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Deliver,
    Cancel,
    Return,
}

impl Transition {
    /// The permission-table row guarding this transition.
    pub fn operation(self) -> Operation {
        match self {
            Transition::Deliver => Operation::DeliverOrder,
            Transition::Cancel => Operation::CancelOrder,
            Transition::Return => Operation::ReturnOrder,
        }
    }

    /// Only the buyer may cancel or return their order; any expeditor may deliver it.
    pub fn requires_ownership(self) -> bool {
        matches!(self, Transition::Cancel | Transition::Return)
    }

    /// The state reached by applying this transition to `from`.
    pub fn apply(self, from: OrderState) -> Result<OrderState, OrderError> {
        use OrderState::*;
        match (self, from) {
            (Transition::Deliver, Placed) => Ok(Delivered),
            (Transition::Deliver, Canceled) => Err(OrderError::OrderCanceled),
            (Transition::Deliver, Delivered | Returned) => Err(OrderError::OrderAlreadyDelivered),

            (Transition::Cancel, Placed) => Ok(Canceled),
            (Transition::Cancel, Delivered | Returned) => Err(OrderError::OrderAlreadyDelivered),
            (Transition::Cancel, Canceled) => Err(OrderError::OrderCanceled),

            (Transition::Return, Delivered) => Ok(Returned),
            (Transition::Return, Placed) => Err(OrderError::OrderNotDeliveredYet),
            (Transition::Return, Canceled) => Err(OrderError::OrderCanceled),
            (Transition::Return, Returned) => Err(OrderError::OrderAlreadyReturned),
        }
    }
}
