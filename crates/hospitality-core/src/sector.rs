//! Sector-scoped views over the flat collections.
//!
//! A sector owns a set of businesses; a record belongs to the sector when its
//! `context` is one of those business ids. Owners are the exception: they
//! appear in every sector's team regardless of their own context.
//!
//! Everything here is a pure function of its inputs. Deriving the same
//! sector twice from the same collections gives identical views.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::collections::Collections;
use crate::models::{
    Booking, Business, Contextual, Event, HousekeepingTask, LedgerEntry, MenuItem, Order,
    PayrollRecord, ProcurementOrder, Room, Shift, Task, TeamMember,
};
use crate::payroll::{compute_payroll, PayPeriod};

/// Ids of every business assigned to `sector_id`.
pub fn business_ids_for_sector(businesses: &[Business], sector_id: &str) -> BTreeSet<String> {
    businesses
        .iter()
        .filter(|b| b.sector_id == sector_id)
        .map(|b| b.id.clone())
        .collect()
}

/// Records whose context is one of `business_ids`, in input order.
pub fn scope<T: Contextual + Clone>(items: &[T], business_ids: &BTreeSet<String>) -> Vec<T> {
    items
        .iter()
        .filter(|item| business_ids.contains(item.context()))
        .cloned()
        .collect()
}

/// Members assigned to one of `business_ids`, plus all owners.
pub fn members_for_sector(
    members: &[TeamMember],
    business_ids: &BTreeSet<String>,
) -> Vec<TeamMember> {
    members
        .iter()
        .filter(|m| m.is_owner() || business_ids.contains(m.context()))
        .cloned()
        .collect()
}

/// Sector a business context belongs to, if any.
pub fn sector_for_context<'a>(businesses: &'a [Business], context: &str) -> Option<&'a str> {
    businesses
        .iter()
        .find(|b| b.id == context)
        .map(|b| b.sector_id.as_str())
}

/// Everything one sector can see.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorView {
    pub sector_id: String,
    pub business_ids: BTreeSet<String>,
    pub members: Vec<TeamMember>,
    pub shifts: Vec<Shift>,
    pub tasks: Vec<Task>,
    pub events: Vec<Event>,
    pub menu: Vec<MenuItem>,
    pub orders: Vec<Order>,
    pub procurement: Vec<ProcurementOrder>,
    pub rooms: Vec<Room>,
    pub bookings: Vec<Booking>,
    pub housekeeping: Vec<HousekeepingTask>,
    pub ledger: Vec<LedgerEntry>,
}

impl SectorView {
    /// Payroll for the sector's team over its scoped shifts.
    pub fn payroll(&self, period: Option<&PayPeriod>) -> Vec<PayrollRecord> {
        compute_payroll(&self.members, &self.shifts, period)
    }

    /// Number of scoped records, owners excluded.
    pub fn record_count(&self) -> usize {
        self.shifts.len()
            + self.tasks.len()
            + self.events.len()
            + self.menu.len()
            + self.orders.len()
            + self.procurement.len()
            + self.rooms.len()
            + self.bookings.len()
            + self.housekeeping.len()
            + self.ledger.len()
    }
}

/// Build the view of `sector_id`. An unknown sector has no businesses, so
/// every scoped collection comes back empty and only owners are listed.
pub fn derive_sector_view(collections: &Collections, sector_id: &str) -> SectorView {
    let business_ids = business_ids_for_sector(&collections.businesses, sector_id);

    SectorView {
        sector_id: sector_id.to_string(),
        members: members_for_sector(&collections.members, &business_ids),
        shifts: scope(&collections.shifts, &business_ids),
        tasks: scope(&collections.tasks, &business_ids),
        events: scope(&collections.events, &business_ids),
        menu: scope(&collections.menu, &business_ids),
        orders: scope(&collections.orders, &business_ids),
        procurement: scope(&collections.procurement, &business_ids),
        rooms: scope(&collections.rooms, &business_ids),
        bookings: scope(&collections.bookings, &business_ids),
        housekeeping: scope(&collections.housekeeping, &business_ids),
        ledger: scope(&collections.ledger, &business_ids),
        business_ids,
    }
}
