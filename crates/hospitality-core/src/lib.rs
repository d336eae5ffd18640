//! Hospitality operations core library.
//!
//! Shared logic for running a multi-business hospitality group: restaurant
//! task boards, POS and kitchen display, events, staffing and payroll,
//! procurement, and hotel rooms, housekeeping and guest ledgers.
//!
//! All state lives in flat collections scoped by business `context`; sector
//! views, payroll and procurement suggestions are derived from them on
//! demand.

pub mod ai;
pub mod auth;
pub mod board;
pub mod collections;
pub mod config;
pub mod error;
pub mod hotel;
pub mod models;
pub mod payroll;
pub mod pos;
pub mod procurement;
pub mod sector;
pub mod seed;
pub mod store;
pub mod utils;
pub mod workspace;

pub use collections::Collections;
pub use config::Config;
pub use error::OpsError;
pub use sector::{derive_sector_view, SectorView};
pub use workspace::Workspace;
