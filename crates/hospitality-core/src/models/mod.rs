//! Data models for hospitality operations.
//!
//! Every record is flat, identified by a string id, and carries a `context`
//! (the id of the business it belongs to). Relationships between records are
//! by id only.
//!
//! - `Sector`, `Business`: the tenancy hierarchy used for scoping
//! - `TeamMember`, `Shift`, `PayrollRecord`: staffing and payroll
//! - `Task`, `Event`: task board and event calendar
//! - `MenuItem`, `Order`: POS, kitchen display and billing
//! - `ProcurementOrder`: supplier orders
//! - `Room`, `Booking`, `HousekeepingTask`, `LedgerEntry`: hotel operations

pub mod business;
pub mod event;
pub mod hotel;
pub mod pos;
pub mod staff;
pub mod supply;
pub mod task;

pub use business::{Business, Sector, SectorKind};
pub use event::Event;
pub use hotel::{
    Booking, BookingStatus, HousekeepingStatus, HousekeepingTask, LedgerEntry, LedgerKind, Room,
    RoomStatus,
};
pub use pos::{MenuItem, Order, OrderItem, OrderStatus};
pub use staff::{PayrollRecord, Responsibility, Role, Shift, TeamMember};
pub use supply::{ProcurementLine, ProcurementOrder, ProcurementStatus, SupplyCategory};
pub use task::{Task, TaskPriority, TaskStatus};

/// A record scoped to a single business.
pub trait Contextual {
    /// The business id this record belongs to.
    fn context(&self) -> &str;
}

macro_rules! impl_contextual {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Contextual for $ty {
                fn context(&self) -> &str {
                    &self.context
                }
            }
        )*
    };
}

impl_contextual!(
    TeamMember,
    Shift,
    Task,
    Event,
    MenuItem,
    Order,
    ProcurementOrder,
    Room,
    Booking,
    HousekeepingTask,
    LedgerEntry,
);

/// Generate a fresh record id.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
