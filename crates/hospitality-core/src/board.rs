//! Task board columns and the event calendar.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Event, Task, TaskStatus};

/// Tasks grouped into board columns. Every status has a column, even when
/// empty; within a column, higher priority comes first, then the earliest
/// due date, with undated tasks last.
pub fn tasks_by_status(tasks: &[Task]) -> BTreeMap<TaskStatus, Vec<&Task>> {
    let mut columns: BTreeMap<TaskStatus, Vec<&Task>> = [
        (TaskStatus::Todo, Vec::new()),
        (TaskStatus::InProgress, Vec::new()),
        (TaskStatus::Done, Vec::new()),
    ]
    .into_iter()
    .collect();

    for task in tasks {
        columns.entry(task.status).or_default().push(task);
    }
    for column in columns.values_mut() {
        column.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| match (a.due_date, b.due_date) {
                    (Some(x), Some(y)) => x.cmp(&y),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                })
        });
    }
    columns
}

/// Open tasks assigned to a member.
pub fn open_tasks_for<'a>(tasks: &'a [Task], member_id: &str) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| t.status != TaskStatus::Done && t.assignee_id.as_deref() == Some(member_id))
        .collect()
}

/// Events dated today or later, soonest first.
pub fn upcoming_events(events: &[Event], today: NaiveDate) -> Vec<&Event> {
    let mut upcoming: Vec<&Event> = events.iter().filter(|e| e.is_upcoming(today)).collect();
    upcoming.sort_by_key(|e| e.date);
    upcoming
}
