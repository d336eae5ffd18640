//! The full in-memory data set, one `Vec` per stored collection.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::models::{
    Booking, Business, Event, HousekeepingTask, LedgerEntry, MenuItem, Order, ProcurementOrder,
    Room, Sector, Shift, Task, TeamMember,
};
use crate::store::{Collection, Store};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collections {
    pub sectors: Vec<Sector>,
    pub businesses: Vec<Business>,
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

impl Collections {
    /// Load every collection, each falling back to empty on its own.
    pub fn load(store: &Store) -> Self {
        Self {
            sectors: store.load_or(Collection::Sectors, Vec::new),
            businesses: store.load_or(Collection::Businesses, Vec::new),
            members: store.load_or(Collection::Members, Vec::new),
            shifts: store.load_or(Collection::Shifts, Vec::new),
            tasks: store.load_or(Collection::Tasks, Vec::new),
            events: store.load_or(Collection::Events, Vec::new),
            menu: store.load_or(Collection::Menu, Vec::new),
            orders: store.load_or(Collection::Orders, Vec::new),
            procurement: store.load_or(Collection::Procurement, Vec::new),
            rooms: store.load_or(Collection::Rooms, Vec::new),
            bookings: store.load_or(Collection::Bookings, Vec::new),
            housekeeping: store.load_or(Collection::Housekeeping, Vec::new),
            ledger: store.load_or(Collection::Ledger, Vec::new),
        }
    }

    /// Write one collection back to the store.
    pub fn save(&self, store: &Store, collection: Collection) -> Result<()> {
        match collection {
            Collection::Sectors => store.save(collection, &self.sectors),
            Collection::Businesses => store.save(collection, &self.businesses),
            Collection::Members => store.save(collection, &self.members),
            Collection::Shifts => store.save(collection, &self.shifts),
            Collection::Tasks => store.save(collection, &self.tasks),
            Collection::Events => store.save(collection, &self.events),
            Collection::Menu => store.save(collection, &self.menu),
            Collection::Orders => store.save(collection, &self.orders),
            Collection::Procurement => store.save(collection, &self.procurement),
            Collection::Rooms => store.save(collection, &self.rooms),
            Collection::Bookings => store.save(collection, &self.bookings),
            Collection::Housekeeping => store.save(collection, &self.housekeeping),
            Collection::Ledger => store.save(collection, &self.ledger),
        }
    }

    pub fn save_all(&self, store: &Store) -> Result<()> {
        for collection in Collection::ALL {
            self.save(store, collection)?;
        }
        Ok(())
    }

    /// Number of records in a collection.
    pub fn len_of(&self, collection: Collection) -> usize {
        match collection {
            Collection::Sectors => self.sectors.len(),
            Collection::Businesses => self.businesses.len(),
            Collection::Members => self.members.len(),
            Collection::Shifts => self.shifts.len(),
            Collection::Tasks => self.tasks.len(),
            Collection::Events => self.events.len(),
            Collection::Menu => self.menu.len(),
            Collection::Orders => self.orders.len(),
            Collection::Procurement => self.procurement.len(),
            Collection::Rooms => self.rooms.len(),
            Collection::Bookings => self.bookings.len(),
            Collection::Housekeeping => self.housekeeping.len(),
            Collection::Ledger => self.ledger.len(),
        }
    }

    pub fn sector(&self, sector_id: &str) -> Option<&Sector> {
        self.sectors.iter().find(|s| s.id == sector_id)
    }

    pub fn member(&self, member_id: &str) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.id == member_id)
    }
}
