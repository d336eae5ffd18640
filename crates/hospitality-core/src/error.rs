use thiserror::Error;

use crate::models::{BookingStatus, HousekeepingStatus, OrderStatus, RoomStatus};

/// An operation rejected by a business rule.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpsError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Not enough {item} in stock: requested {requested}, have {available}")]
    InsufficientStock {
        item: String,
        requested: u32,
        available: u32,
    },

    #[error("Order is already {0} and cannot advance")]
    OrderClosed(OrderStatus),

    #[error("Order has no items")]
    EmptyOrder,

    #[error("Room {room} is {status}, not available")]
    RoomUnavailable { room: String, status: RoomStatus },

    #[error("Booking is {0:?}; expected {1:?}")]
    BookingState(BookingStatus, BookingStatus),

    #[error("Housekeeping task is {0:?}")]
    HousekeepingState(HousekeepingStatus),

    #[error("Procurement order already received")]
    AlreadyReceived,

    #[error("Amount must be positive, got {0}")]
    InvalidAmount(f64),
}

impl OpsError {
    pub fn not_found(kind: &'static str, id: &str) -> Self {
        OpsError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}
