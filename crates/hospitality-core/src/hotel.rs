//! Front desk and housekeeping operations.
//!
//! Room status follows the guest and the housekeeping task for it:
//! check-in occupies the room, check-out leaves it dirty with a pending
//! housekeeping task, starting that task marks the room as cleaning, and
//! completing it makes the room available again.

use chrono::NaiveDate;
use tracing::info;

use crate::error::OpsError;
use crate::models::{
    new_id, Booking, BookingStatus, HousekeepingStatus, HousekeepingTask, LedgerEntry, LedgerKind,
    Room, RoomStatus,
};

fn find_booking<'a>(bookings: &'a mut [Booking], booking_id: &str) -> Result<&'a mut Booking, OpsError> {
    bookings
        .iter_mut()
        .find(|b| b.id == booking_id)
        .ok_or_else(|| OpsError::not_found("Booking", booking_id))
}

fn find_room<'a>(rooms: &'a mut [Room], room_id: &str) -> Result<&'a mut Room, OpsError> {
    rooms
        .iter_mut()
        .find(|r| r.id == room_id)
        .ok_or_else(|| OpsError::not_found("Room", room_id))
}

fn find_task<'a>(
    tasks: &'a mut [HousekeepingTask],
    task_id: &str,
) -> Result<&'a mut HousekeepingTask, OpsError> {
    tasks
        .iter_mut()
        .find(|t| t.id == task_id)
        .ok_or_else(|| OpsError::not_found("Housekeeping task", task_id))
}

pub fn check_in(bookings: &mut [Booking], rooms: &mut [Room], booking_id: &str) -> Result<(), OpsError> {
    let booking = find_booking(bookings, booking_id)?;
    if booking.status != BookingStatus::Reserved {
        return Err(OpsError::BookingState(booking.status, BookingStatus::Reserved));
    }
    let room = find_room(rooms, &booking.room_id)?;
    if room.status != RoomStatus::Available {
        return Err(OpsError::RoomUnavailable {
            room: room.number.clone(),
            status: room.status,
        });
    }

    room.status = RoomStatus::Occupied;
    booking.status = BookingStatus::CheckedIn;
    info!(booking = booking_id, room = %room.number, "Guest checked in");
    Ok(())
}

/// Check a guest out and queue the room for cleaning. Returns the new
/// housekeeping task.
pub fn check_out(
    bookings: &mut [Booking],
    rooms: &mut [Room],
    housekeeping: &mut Vec<HousekeepingTask>,
    booking_id: &str,
    today: NaiveDate,
) -> Result<HousekeepingTask, OpsError> {
    let booking = find_booking(bookings, booking_id)?;
    if booking.status != BookingStatus::CheckedIn {
        return Err(OpsError::BookingState(booking.status, BookingStatus::CheckedIn));
    }
    let room = find_room(rooms, &booking.room_id)?;

    booking.status = BookingStatus::CheckedOut;
    room.status = RoomStatus::Dirty;

    let task = HousekeepingTask {
        id: new_id(),
        context: room.context.clone(),
        room_id: room.id.clone(),
        status: HousekeepingStatus::Pending,
        assignee_id: None,
        created_on: today,
    };
    housekeeping.push(task.clone());
    info!(booking = booking_id, room = %room.number, "Guest checked out");
    Ok(task)
}

pub fn start_housekeeping(
    tasks: &mut [HousekeepingTask],
    rooms: &mut [Room],
    task_id: &str,
    assignee_id: Option<String>,
) -> Result<(), OpsError> {
    let task = find_task(tasks, task_id)?;
    if task.status != HousekeepingStatus::Pending {
        return Err(OpsError::HousekeepingState(task.status));
    }
    let room = find_room(rooms, &task.room_id)?;

    task.status = HousekeepingStatus::InProgress;
    if assignee_id.is_some() {
        task.assignee_id = assignee_id;
    }
    room.status = RoomStatus::Cleaning;
    Ok(())
}

pub fn complete_housekeeping(
    tasks: &mut [HousekeepingTask],
    rooms: &mut [Room],
    task_id: &str,
) -> Result<(), OpsError> {
    let task = find_task(tasks, task_id)?;
    if task.status == HousekeepingStatus::Done {
        return Err(OpsError::HousekeepingState(task.status));
    }
    let room = find_room(rooms, &task.room_id)?;

    task.status = HousekeepingStatus::Done;
    room.status = RoomStatus::Available;
    Ok(())
}

fn post_entry(
    ledger: &mut Vec<LedgerEntry>,
    booking: &Booking,
    description: &str,
    amount: f64,
    kind: LedgerKind,
    date: NaiveDate,
) -> Result<LedgerEntry, OpsError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(OpsError::InvalidAmount(amount));
    }
    let entry = LedgerEntry {
        id: new_id(),
        context: booking.context.clone(),
        booking_id: booking.id.clone(),
        description: description.to_string(),
        amount,
        kind,
        date,
    };
    ledger.push(entry.clone());
    Ok(entry)
}

pub fn post_charge(
    ledger: &mut Vec<LedgerEntry>,
    booking: &Booking,
    description: &str,
    amount: f64,
    date: NaiveDate,
) -> Result<LedgerEntry, OpsError> {
    post_entry(ledger, booking, description, amount, LedgerKind::Charge, date)
}

pub fn post_payment(
    ledger: &mut Vec<LedgerEntry>,
    booking: &Booking,
    description: &str,
    amount: f64,
    date: NaiveDate,
) -> Result<LedgerEntry, OpsError> {
    post_entry(ledger, booking, description, amount, LedgerKind::Payment, date)
}

/// Charges minus payments for a booking.
pub fn folio_balance(ledger: &[LedgerEntry], booking_id: &str) -> f64 {
    ledger
        .iter()
        .filter(|e| e.booking_id == booking_id)
        .map(LedgerEntry::signed_amount)
        .sum()
}

/// Checked-in VIP guests.
pub fn vip_residents(bookings: &[Booking]) -> Vec<&Booking> {
    bookings
        .iter()
        .filter(|b| b.vip && b.status == BookingStatus::CheckedIn)
        .collect()
}

/// Share of rooms occupied, 0.0 when there are no rooms.
pub fn occupancy_rate(rooms: &[Room]) -> f64 {
    if rooms.is_empty() {
        return 0.0;
    }
    let occupied = rooms
        .iter()
        .filter(|r| r.status == RoomStatus::Occupied)
        .count();
    occupied as f64 / rooms.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()
    }

    fn rooms() -> Vec<Room> {
        ["101", "102"]
            .iter()
            .map(|n| Room {
                id: format!("r{}", n),
                context: "harbour".to_string(),
                number: n.to_string(),
                room_type: "Double".to_string(),
                nightly_rate: 180.0,
                status: RoomStatus::Available,
            })
            .collect()
    }

    fn booking(id: &str, room_id: &str, vip: bool) -> Booking {
        Booking {
            id: id.to_string(),
            context: "harbour".to_string(),
            room_id: room_id.to_string(),
            guest_name: "Guest".to_string(),
            check_in: today(),
            check_out: today() + chrono::Duration::days(2),
            status: BookingStatus::Reserved,
            vip,
        }
    }

    #[test]
    fn test_full_stay_keeps_room_status_consistent() {
        let mut rooms = rooms();
        let mut bookings = vec![booking("b1", "r101", false)];
        let mut hk = Vec::new();

        check_in(&mut bookings, &mut rooms, "b1").expect("check in");
        assert_eq!(rooms[0].status, RoomStatus::Occupied);
        assert_eq!(bookings[0].status, BookingStatus::CheckedIn);

        let task = check_out(&mut bookings, &mut rooms, &mut hk, "b1", today()).expect("check out");
        assert_eq!(rooms[0].status, RoomStatus::Dirty);
        assert_eq!(task.room_id, "r101");
        assert_eq!(hk.len(), 1);

        start_housekeeping(&mut hk, &mut rooms, &task.id, Some("maid".to_string())).expect("start");
        assert_eq!(rooms[0].status, RoomStatus::Cleaning);
        assert_eq!(hk[0].assignee_id.as_deref(), Some("maid"));

        complete_housekeeping(&mut hk, &mut rooms, &task.id).expect("complete");
        assert_eq!(rooms[0].status, RoomStatus::Available);
        assert_eq!(hk[0].status, HousekeepingStatus::Done);
    }

    #[test]
    fn test_check_in_requires_available_room() {
        let mut rooms = rooms();
        rooms[1].status = RoomStatus::Maintenance;
        let mut bookings = vec![booking("b2", "r102", false)];

        let err = check_in(&mut bookings, &mut rooms, "b2").unwrap_err();
        assert_eq!(
            err,
            OpsError::RoomUnavailable {
                room: "102".to_string(),
                status: RoomStatus::Maintenance
            }
        );
        assert_eq!(bookings[0].status, BookingStatus::Reserved);
    }

    #[test]
    fn test_check_out_requires_checked_in() {
        let mut rooms = rooms();
        let mut bookings = vec![booking("b1", "r101", false)];
        let mut hk = Vec::new();
        let err = check_out(&mut bookings, &mut rooms, &mut hk, "b1", today()).unwrap_err();
        assert_eq!(
            err,
            OpsError::BookingState(BookingStatus::Reserved, BookingStatus::CheckedIn)
        );
        assert!(hk.is_empty());
    }

    #[test]
    fn test_unknown_booking() {
        let mut rooms = rooms();
        let err = check_in(&mut [], &mut rooms, "missing").unwrap_err();
        assert!(matches!(err, OpsError::NotFound { kind: "Booking", .. }));
    }

    #[test]
    fn test_complete_twice_rejected() {
        let mut rooms = rooms();
        rooms[0].status = RoomStatus::Dirty;
        let mut hk = vec![HousekeepingTask {
            id: "hk1".to_string(),
            context: "harbour".to_string(),
            room_id: "r101".to_string(),
            status: HousekeepingStatus::Pending,
            assignee_id: None,
            created_on: today(),
        }];
        complete_housekeeping(&mut hk, &mut rooms, "hk1").expect("complete");
        assert_eq!(
            complete_housekeeping(&mut hk, &mut rooms, "hk1"),
            Err(OpsError::HousekeepingState(HousekeepingStatus::Done))
        );
    }

    #[test]
    fn test_folio_balance() {
        let b = booking("b1", "r101", true);
        let mut ledger = Vec::new();
        post_charge(&mut ledger, &b, "Room night", 180.0, today()).unwrap();
        post_charge(&mut ledger, &b, "Spa", 65.5, today()).unwrap();
        post_payment(&mut ledger, &b, "Card", 200.0, today()).unwrap();
        post_charge(&mut ledger, &booking("b2", "r102", false), "Room night", 180.0, today()).unwrap();

        assert_eq!(folio_balance(&ledger, "b1"), 45.5);
        assert_eq!(ledger[0].context, "harbour");
    }

    #[test]
    fn test_ledger_rejects_non_positive_amounts() {
        let b = booking("b1", "r101", false);
        let mut ledger = Vec::new();
        assert_eq!(
            post_charge(&mut ledger, &b, "Oops", 0.0, today()),
            Err(OpsError::InvalidAmount(0.0))
        );
        assert!(post_payment(&mut ledger, &b, "Oops", f64::NAN, today()).is_err());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_vip_residents_and_occupancy() {
        let mut rooms = rooms();
        let mut bookings = vec![booking("b1", "r101", true), booking("b2", "r102", true)];
        check_in(&mut bookings, &mut rooms, "b1").unwrap();

        let vips = vip_residents(&bookings);
        assert_eq!(vips.len(), 1);
        assert_eq!(vips[0].id, "b1");
        assert_eq!(occupancy_rate(&rooms), 0.5);
        assert_eq!(occupancy_rate(&[]), 0.0);
    }
}
