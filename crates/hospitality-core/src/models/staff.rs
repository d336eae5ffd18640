use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Default weekly hours before overtime applies.
const DEFAULT_OVERTIME_THRESHOLD: f64 = 40.0;

/// Default overtime pay multiplier.
const DEFAULT_OVERTIME_MULTIPLIER: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Owner,
    Manager,
    Chef,
    Server,
    Bartender,
    Host,
    Receptionist,
    Housekeeper,
    #[default]
    Staff,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Owner => "Owner",
            Role::Manager => "Manager",
            Role::Chef => "Chef",
            Role::Server => "Server",
            Role::Bartender => "Bartender",
            Role::Host => "Host",
            Role::Receptionist => "Receptionist",
            Role::Housekeeper => "Housekeeper",
            Role::Staff => "Staff",
        };
        write!(f, "{}", name)
    }
}

/// A named module a team member is authorized to access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub enum Responsibility {
    Tasks,
    Pos,
    Kitchen,
    Billing,
    Events,
    Staffing,
    Payroll,
    Procurement,
    Rooms,
    Housekeeping,
    GuestLedger,
    Meetings,
    SocialInsights,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: Role,
    /// Business the member is assigned to. Owners may leave this empty.
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub responsibilities: Vec<Responsibility>,
    #[serde(default)]
    pub base_hourly_rate: f64,
    #[serde(default = "default_overtime_threshold")]
    pub overtime_threshold: f64,
    #[serde(default = "default_overtime_multiplier")]
    pub overtime_multiplier: f64,
}

fn default_overtime_threshold() -> f64 {
    DEFAULT_OVERTIME_THRESHOLD
}

fn default_overtime_multiplier() -> f64 {
    DEFAULT_OVERTIME_MULTIPLIER
}

impl TeamMember {
    pub fn is_owner(&self) -> bool {
        self.role == Role::Owner
    }

    /// Owners can open every module; everyone else needs the responsibility.
    pub fn can_access(&self, responsibility: Responsibility) -> bool {
        self.is_owner() || self.responsibilities.contains(&responsibility)
    }
}

/// A scheduled block of work. Times are wall-clock `HH:MM`; an end time
/// earlier than the start means the shift runs past midnight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: String,
    pub member_id: String,
    pub context: String,
    pub date: NaiveDate,
    #[serde(with = "clock_time")]
    #[cfg_attr(feature = "ts", ts(type = "string"))]
    pub start_time: NaiveTime,
    #[serde(with = "clock_time")]
    #[cfg_attr(feature = "ts", ts(type = "string"))]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Serde adapter for `HH:MM` clock times (also accepts `HH:MM:SS`).
mod clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}

/// Derived pay summary for one member over a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct PayrollRecord {
    pub member_id: String,
    pub member_name: String,
    pub context: String,
    pub shift_count: usize,
    pub total_hours: f64,
    pub standard_hours: f64,
    pub overtime_hours: f64,
    pub standard_pay: f64,
    pub overtime_pay: f64,
    pub gross_pay: f64,
    pub deductions: f64,
    pub net_pay: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(role: Role, responsibilities: Vec<Responsibility>) -> TeamMember {
        TeamMember {
            id: "m1".to_string(),
            name: "Ana".to_string(),
            role,
            context: "b1".to_string(),
            responsibilities,
            base_hourly_rate: 20.0,
            overtime_threshold: 40.0,
            overtime_multiplier: 1.5,
        }
    }

    #[test]
    fn test_owner_can_access_everything() {
        let owner = member(Role::Owner, vec![]);
        assert!(owner.can_access(Responsibility::Payroll));
        assert!(owner.can_access(Responsibility::GuestLedger));
    }

    #[test]
    fn test_access_requires_responsibility() {
        let server = member(Role::Server, vec![Responsibility::Pos]);
        assert!(server.can_access(Responsibility::Pos));
        assert!(!server.can_access(Responsibility::Payroll));
    }

    #[test]
    fn test_member_overtime_defaults() {
        let json = r#"{"id": "m2", "name": "Ben", "baseHourlyRate": 18.5}"#;
        let parsed: TeamMember = serde_json::from_str(json).expect("parse member");
        assert_eq!(parsed.role, Role::Staff);
        assert_eq!(parsed.context, "");
        assert_eq!(parsed.overtime_threshold, 40.0);
        assert_eq!(parsed.overtime_multiplier, 1.5);
    }

    #[test]
    fn test_shift_clock_times() {
        let json = r#"{
            "id": "s1", "memberId": "m1", "context": "b1",
            "date": "2026-03-14", "startTime": "22:00", "endTime": "06:30:00"
        }"#;
        let shift: Shift = serde_json::from_str(json).expect("parse shift");
        assert_eq!(shift.start_time, NaiveTime::from_hms_opt(22, 0, 0).unwrap());
        assert_eq!(shift.end_time, NaiveTime::from_hms_opt(6, 30, 0).unwrap());

        let out = serde_json::to_value(&shift).expect("serialize shift");
        assert_eq!(out["startTime"], "22:00");
        assert_eq!(out["endTime"], "06:30");
    }

    #[test]
    fn test_shift_rejects_bad_clock_time() {
        let json = r#"{
            "id": "s1", "memberId": "m1", "context": "b1",
            "date": "2026-03-14", "startTime": "late", "endTime": "06:30"
        }"#;
        assert!(serde_json::from_str::<Shift>(json).is_err());
    }
}
