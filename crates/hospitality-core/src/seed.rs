//! Demo data set for first runs: a restaurant group with two venues and a
//! hotel, each with a little staff, stock and activity.

use chrono::{Duration, NaiveDate, NaiveTime, Utc};

use crate::collections::Collections;
use crate::models::{
    Booking, BookingStatus, Business, Event, MenuItem, Order, OrderItem, OrderStatus, Responsibility,
    Role, Room, RoomStatus, Sector, SectorKind, Shift, Task, TaskPriority, TaskStatus, TeamMember,
};

fn clock(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
}

fn member(
    id: &str,
    name: &str,
    role: Role,
    context: &str,
    rate: f64,
    responsibilities: &[Responsibility],
) -> TeamMember {
    TeamMember {
        id: id.to_string(),
        name: name.to_string(),
        role,
        context: context.to_string(),
        responsibilities: responsibilities.to_vec(),
        base_hourly_rate: rate,
        overtime_threshold: 40.0,
        overtime_multiplier: 1.5,
    }
}

fn menu_item(id: &str, context: &str, name: &str, category: &str, price: f64, stock: u32, supplier: &str) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        context: context.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price,
        stock,
        supplier: supplier.to_string(),
    }
}

/// Demo collections anchored on `today`.
pub fn demo_collections(today: NaiveDate) -> Collections {
    use Responsibility::*;

    let sectors = vec![
        Sector {
            id: "restaurants".to_string(),
            name: "Harbour Restaurant Group".to_string(),
            kind: SectorKind::Restaurant,
        },
        Sector {
            id: "hotel".to_string(),
            name: "Harbour Hotel".to_string(),
            kind: SectorKind::Hotel,
        },
    ];

    let businesses = vec![
        Business {
            id: "grill".to_string(),
            name: "Harbour Grill".to_string(),
            sector_id: "restaurants".to_string(),
        },
        Business {
            id: "bistro".to_string(),
            name: "Quayside Bistro".to_string(),
            sector_id: "restaurants".to_string(),
        },
        Business {
            id: "harbour-hotel".to_string(),
            name: "Harbour Hotel".to_string(),
            sector_id: "hotel".to_string(),
        },
    ];

    let members = vec![
        member("owner", "Morgan Reyes", Role::Owner, "", 0.0, &[]),
        member("chef", "Sam Okafor", Role::Chef, "grill", 26.0, &[Kitchen, Procurement, Tasks]),
        member("server", "Lee Park", Role::Server, "grill", 17.5, &[Pos, Billing]),
        member("bartender", "Ava Novak", Role::Bartender, "bistro", 19.0, &[Pos, Events]),
        member("reception", "Jo Mensah", Role::Receptionist, "harbour-hotel", 18.0, &[Rooms, GuestLedger]),
        member("housekeeper", "Ria Das", Role::Housekeeper, "harbour-hotel", 16.0, &[Housekeeping]),
    ];

    let week_start = today - Duration::days(6);
    let mut shifts = Vec::new();
    for day in 0..6 {
        let date = week_start + Duration::days(day);
        shifts.push(Shift {
            id: format!("shift-chef-{}", day),
            member_id: "chef".to_string(),
            context: "grill".to_string(),
            date,
            start_time: clock(10, 0),
            end_time: clock(18, 30),
            role: Some(Role::Chef),
        });
        shifts.push(Shift {
            id: format!("shift-bar-{}", day),
            member_id: "bartender".to_string(),
            context: "bistro".to_string(),
            date,
            start_time: clock(18, 0),
            end_time: clock(1, 0),
            role: Some(Role::Bartender),
        });
    }
    shifts.push(Shift {
        id: "shift-server-0".to_string(),
        member_id: "server".to_string(),
        context: "grill".to_string(),
        date: today,
        start_time: clock(11, 0),
        end_time: clock(15, 0),
        role: None,
    });
    shifts.push(Shift {
        id: "shift-housekeeper-0".to_string(),
        member_id: "housekeeper".to_string(),
        context: "harbour-hotel".to_string(),
        date: today,
        start_time: clock(7, 0),
        end_time: clock(15, 0),
        role: None,
    });

    let tasks = vec![
        Task {
            id: "task-walkin".to_string(),
            title: "Deep clean walk-in fridge".to_string(),
            description: None,
            status: TaskStatus::Todo,
            priority: TaskPriority::High,
            assignee_id: Some("chef".to_string()),
            context: "grill".to_string(),
            due_date: Some(today + Duration::days(1)),
        },
        Task {
            id: "task-cocktails".to_string(),
            title: "Write autumn cocktail list".to_string(),
            description: Some("Four new drinks, one zero-proof".to_string()),
            status: TaskStatus::InProgress,
            priority: TaskPriority::Medium,
            assignee_id: Some("bartender".to_string()),
            context: "bistro".to_string(),
            due_date: None,
        },
        Task {
            id: "task-linen".to_string(),
            title: "Count linen stock".to_string(),
            description: None,
            status: TaskStatus::Done,
            priority: TaskPriority::Low,
            assignee_id: Some("housekeeper".to_string()),
            context: "harbour-hotel".to_string(),
            due_date: Some(today - Duration::days(1)),
        },
    ];

    let events = vec![
        Event {
            id: "event-wedding".to_string(),
            name: "Garden wedding reception".to_string(),
            date: today + Duration::days(3),
            guest_count: 120,
            context: "bistro".to_string(),
            notes: Some("Vegetarian option for 30".to_string()),
        },
        Event {
            id: "event-conference".to_string(),
            name: "Regional tourism conference".to_string(),
            date: today + Duration::days(10),
            guest_count: 200,
            context: "harbour-hotel".to_string(),
            notes: None,
        },
    ];

    let menu = vec![
        menu_item("grill-salmon", "grill", "Salmon fillet", "Mains", 24.0, 6, "Coastal Fish Co"),
        menu_item("grill-steak", "grill", "Ribeye steak", "Mains", 32.0, 18, "Valley Butchers"),
        menu_item("grill-fries", "grill", "Hand-cut fries", "Sides", 5.0, 40, "Greengrocer"),
        menu_item("bistro-oysters", "bistro", "Oysters (6)", "Starters", 18.0, 8, "Coastal Fish Co"),
        menu_item("bistro-wine", "bistro", "House red", "Drinks", 9.0, 30, "Bar Supplies"),
    ];

    let orders = vec![Order {
        id: "order-demo-1".to_string(),
        context: "grill".to_string(),
        table: Some("7".to_string()),
        items: vec![OrderItem {
            menu_item_id: "grill-steak".to_string(),
            name: "Ribeye steak".to_string(),
            quantity: 2,
            unit_price: 32.0,
        }],
        status: OrderStatus::Preparing,
        created_at: Utc::now() - Duration::minutes(12),
    }];

    let rooms = ["101", "102", "201", "202"]
        .iter()
        .enumerate()
        .map(|(i, number)| Room {
            id: format!("room-{}", number),
            context: "harbour-hotel".to_string(),
            number: number.to_string(),
            room_type: if i < 2 { "Double" } else { "Suite" }.to_string(),
            nightly_rate: if i < 2 { 160.0 } else { 290.0 },
            status: if i == 0 { RoomStatus::Occupied } else { RoomStatus::Available },
        })
        .collect();

    let bookings = vec![
        Booking {
            id: "booking-resident".to_string(),
            context: "harbour-hotel".to_string(),
            room_id: "room-101".to_string(),
            guest_name: "Dr. Helena Voss".to_string(),
            check_in: today - Duration::days(20),
            check_out: today + Duration::days(40),
            status: BookingStatus::CheckedIn,
            vip: true,
        },
        Booking {
            id: "booking-weekend".to_string(),
            context: "harbour-hotel".to_string(),
            room_id: "room-201".to_string(),
            guest_name: "T. Alvarez".to_string(),
            check_in: today,
            check_out: today + Duration::days(2),
            status: BookingStatus::Reserved,
            vip: false,
        },
    ];

    Collections {
        sectors,
        businesses,
        members,
        shifts,
        tasks,
        events,
        menu,
        orders,
        procurement: Vec::new(),
        rooms,
        bookings,
        housekeeping: Vec::new(),
        ledger: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sector::derive_sector_view;

    #[test]
    fn test_demo_sectors_cover_all_records() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let demo = demo_collections(today);
        let restaurants = derive_sector_view(&demo, "restaurants");
        let hotel = derive_sector_view(&demo, "hotel");

        assert_eq!(restaurants.tasks.len() + hotel.tasks.len(), demo.tasks.len());
        assert_eq!(restaurants.shifts.len() + hotel.shifts.len(), demo.shifts.len());
        assert_eq!(hotel.rooms.len(), 4);
        assert!(restaurants.rooms.is_empty());
    }
}
