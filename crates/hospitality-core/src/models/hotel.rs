//! Hotel records: rooms, bookings, housekeeping and the guest ledger.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
    Dirty,
    Cleaning,
    Maintenance,
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoomStatus::Available => write!(f, "Available"),
            RoomStatus::Occupied => write!(f, "Occupied"),
            RoomStatus::Dirty => write!(f, "Dirty"),
            RoomStatus::Cleaning => write!(f, "Cleaning"),
            RoomStatus::Maintenance => write!(f, "Maintenance"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub context: String,
    pub number: String,
    #[serde(default)]
    pub room_type: String,
    #[serde(default)]
    pub nightly_rate: f64,
    #[serde(default)]
    pub status: RoomStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub enum BookingStatus {
    #[default]
    Reserved,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub context: String,
    pub room_id: String,
    pub guest_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default)]
    pub status: BookingStatus,
    /// Long-stay residents with a dedicated service level.
    #[serde(default)]
    pub vip: bool,
}

impl Booking {
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days().max(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub enum HousekeepingStatus {
    #[default]
    Pending,
    InProgress,
    Done,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct HousekeepingTask {
    pub id: String,
    pub context: String,
    pub room_id: String,
    #[serde(default)]
    pub status: HousekeepingStatus,
    #[serde(default)]
    pub assignee_id: Option<String>,
    pub created_on: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub enum LedgerKind {
    Charge,
    Payment,
}

/// One line on a guest folio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub id: String,
    pub context: String,
    pub booking_id: String,
    pub description: String,
    pub amount: f64,
    pub kind: LedgerKind,
    pub date: NaiveDate,
}

impl LedgerEntry {
    /// Charges increase the balance owed, payments reduce it.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            LedgerKind::Charge => self.amount,
            LedgerKind::Payment => -self.amount,
        }
    }
}
