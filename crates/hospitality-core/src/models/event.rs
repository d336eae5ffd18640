use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A booked function: private dining, wedding, conference, etc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub guest_count: u32,
    pub context: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Event {
    /// Dated today or later.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.date >= today
    }

    /// "Mar 14, 2026"
    pub fn formatted_date(&self) -> String {
        self.date.format("%b %d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(date: NaiveDate) -> Event {
        Event {
            id: "e1".to_string(),
            name: "Wine pairing dinner".to_string(),
            date,
            guest_count: 40,
            context: "b1".to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_event_upcoming_includes_today() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        assert!(event(today).is_upcoming(today));
        assert!(event(today.succ_opt().unwrap()).is_upcoming(today));
        assert!(!event(today.pred_opt().unwrap()).is_upcoming(today));
    }

    #[test]
    fn test_event_formatted_date() {
        let e = event(NaiveDate::from_ymd_opt(2026, 3, 4).unwrap());
        assert_eq!(e.formatted_date(), "Mar 04, 2026");
    }
}
