//! Loaded operational state with persist-on-change mutations.

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use tracing::{debug, info};

use crate::collections::Collections;
use crate::error::OpsError;
use crate::hotel;
use crate::models::{
    HousekeepingTask, LedgerEntry, Order, OrderStatus, ProcurementOrder, Shift, Task, TaskStatus,
};
use crate::pos;
use crate::procurement::{self, ProcurementRules, ProcurementSuggestion};
use crate::sector::{derive_sector_view, SectorView};
use crate::seed::demo_collections;
use crate::store::{Collection, Store};

pub struct Workspace {
    store: Store,
    pub data: Collections,
}

impl Workspace {
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        let store = Store::new(data_dir)?;
        let data = Collections::load(&store);
        info!(dir = %store.data_dir().display(), "Workspace loaded");
        Ok(Self { store, data })
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Replace everything with the demo data set and write it out.
    pub fn seed_demo(&mut self, today: NaiveDate) -> Result<()> {
        self.data = demo_collections(today);
        self.data.save_all(&self.store)
    }

    fn persist(&self, collections: &[Collection]) -> Result<()> {
        for &c in collections {
            self.data.save(&self.store, c)?;
        }
        Ok(())
    }

    pub fn sector_view(&self, sector_id: &str) -> SectorView {
        derive_sector_view(&self.data, sector_id)
    }

    // ===== Tasks =====

    pub fn add_task(&mut self, task: Task) -> Result<()> {
        self.data.tasks.push(task);
        self.persist(&[Collection::Tasks])
    }

    pub fn set_task_status(&mut self, task_id: &str, status: TaskStatus) -> Result<()> {
        let task = self
            .data
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| OpsError::not_found("Task", task_id))?;
        task.status = status;
        self.persist(&[Collection::Tasks])
    }

    // ===== Staffing =====

    /// Add shifts to the schedule, skipping any the member already works
    /// (same date, start and end). Returns how many were added.
    pub fn add_shifts(&mut self, shifts: impl IntoIterator<Item = Shift>) -> Result<usize> {
        let before = self.data.shifts.len();
        for shift in shifts {
            let scheduled = self.data.shifts.iter().any(|s| {
                s.member_id == shift.member_id
                    && s.date == shift.date
                    && s.start_time == shift.start_time
                    && s.end_time == shift.end_time
            });
            if scheduled {
                debug!(member = %shift.member_id, date = %shift.date, "Shift already scheduled");
                continue;
            }
            self.data.shifts.push(shift);
        }
        let added = self.data.shifts.len() - before;
        if added > 0 {
            self.persist(&[Collection::Shifts])?;
        }
        Ok(added)
    }

    // ===== POS =====

    pub fn place_order(
        &mut self,
        context: &str,
        table: Option<String>,
        lines: &[(String, u32)],
    ) -> Result<Order> {
        let order = pos::place_order(&mut self.data.menu, context, table, lines)?;
        self.data.orders.push(order.clone());
        self.persist(&[Collection::Menu, Collection::Orders])?;
        Ok(order)
    }

    pub fn advance_order(&mut self, order_id: &str) -> Result<OrderStatus> {
        let order = self
            .data
            .orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| OpsError::not_found("Order", order_id))?;
        let status = pos::advance_order(order)?;
        self.persist(&[Collection::Orders])?;
        Ok(status)
    }

    // ===== Procurement =====

    pub fn procurement_suggestions(
        &self,
        sector_id: &str,
        today: NaiveDate,
        rules: &ProcurementRules,
    ) -> Vec<ProcurementSuggestion> {
        let view = self.sector_view(sector_id);
        procurement::suggest_procurement(&view.menu, &view.events, &view.procurement, today, rules)
    }

    pub fn accept_suggestion(
        &mut self,
        suggestion: ProcurementSuggestion,
        today: NaiveDate,
    ) -> Result<ProcurementOrder> {
        let order = suggestion.into_order(today);
        self.data.procurement.push(order.clone());
        self.persist(&[Collection::Procurement])?;
        Ok(order)
    }

    pub fn receive_procurement(&mut self, order_id: &str) -> Result<()> {
        let order = self
            .data
            .procurement
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| OpsError::not_found("Procurement order", order_id))?;
        procurement::receive_order(order, &mut self.data.menu)?;
        self.persist(&[Collection::Procurement, Collection::Menu])
    }

    // ===== Hotel =====

    pub fn check_in(&mut self, booking_id: &str) -> Result<()> {
        hotel::check_in(&mut self.data.bookings, &mut self.data.rooms, booking_id)?;
        self.persist(&[Collection::Bookings, Collection::Rooms])
    }

    pub fn check_out(&mut self, booking_id: &str, today: NaiveDate) -> Result<HousekeepingTask> {
        let task = hotel::check_out(
            &mut self.data.bookings,
            &mut self.data.rooms,
            &mut self.data.housekeeping,
            booking_id,
            today,
        )?;
        self.persist(&[Collection::Bookings, Collection::Rooms, Collection::Housekeeping])?;
        Ok(task)
    }

    pub fn start_housekeeping(&mut self, task_id: &str, assignee_id: Option<String>) -> Result<()> {
        hotel::start_housekeeping(
            &mut self.data.housekeeping,
            &mut self.data.rooms,
            task_id,
            assignee_id,
        )?;
        self.persist(&[Collection::Housekeeping, Collection::Rooms])
    }

    pub fn complete_housekeeping(&mut self, task_id: &str) -> Result<()> {
        hotel::complete_housekeeping(&mut self.data.housekeeping, &mut self.data.rooms, task_id)?;
        self.persist(&[Collection::Housekeeping, Collection::Rooms])
    }

    pub fn post_charge(
        &mut self,
        booking_id: &str,
        description: &str,
        amount: f64,
        date: NaiveDate,
    ) -> Result<LedgerEntry> {
        let booking = self
            .data
            .bookings
            .iter()
            .find(|b| b.id == booking_id)
            .ok_or_else(|| OpsError::not_found("Booking", booking_id))?;
        let entry = hotel::post_charge(&mut self.data.ledger, booking, description, amount, date)?;
        self.persist(&[Collection::Ledger])?;
        Ok(entry)
    }

    pub fn post_payment(
        &mut self,
        booking_id: &str,
        description: &str,
        amount: f64,
        date: NaiveDate,
    ) -> Result<LedgerEntry> {
        let booking = self
            .data
            .bookings
            .iter()
            .find(|b| b.id == booking_id)
            .ok_or_else(|| OpsError::not_found("Booking", booking_id))?;
        let entry = hotel::post_payment(&mut self.data.ledger, booking, description, amount, date)?;
        self.persist(&[Collection::Ledger])?;
        Ok(entry)
    }
}
