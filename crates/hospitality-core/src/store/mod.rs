//! Local persistence for operational collections.
//!
//! This module provides the `Store` for reading and writing the flat
//! collections the system works on. Each collection is a JSON file in the
//! data directory, wrapped with the time it was last saved.
//!
//! Persisted collections:
//! - Sectors, Businesses, Team members, Shifts
//! - Tasks, Events
//! - Menu, Orders, Procurement orders
//! - Rooms, Bookings, Housekeeping, Ledger

pub mod manager;

pub use manager::{Collection, Store, Stored};
