//! Custom actions for the Order actor: the three lifecycle transitions.
//!
//! Each action names the user performing it. The role check happens in
//! [`OrderClient`](crate::clients::OrderClient) before the action is sent; the
//! order entity checks ownership and the state machine.

use super::state::Transition;
use crate::model::UserId;

#[derive(Debug, Clone)]
pub enum OrderAction {
    Deliver { by: UserId },
    Cancel { by: UserId },
    Return { by: UserId },
}

impl OrderAction {
    pub fn new(transition: Transition, by: UserId) -> Self {
        match transition {
            Transition::Deliver => OrderAction::Deliver { by },
            Transition::Cancel => OrderAction::Cancel { by },
            Transition::Return => OrderAction::Return { by },
        }
    }

    pub fn transition(&self) -> Transition {
        match self {
            OrderAction::Deliver { .. } => Transition::Deliver,
            OrderAction::Cancel { .. } => Transition::Cancel,
            OrderAction::Return { .. } => Transition::Return,
        }
    }

    /// The acting user.
    pub fn by(&self) -> UserId {
        match self {
            OrderAction::Deliver { by } | OrderAction::Cancel { by } | OrderAction::Return { by } => {
                *by
            }
        }
    }
}
