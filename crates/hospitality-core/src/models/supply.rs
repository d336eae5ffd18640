use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub enum SupplyCategory {
    Kitchen,
    Bar,
    Housekeeping,
    #[default]
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub enum ProcurementStatus {
    Suggested,
    #[default]
    Ordered,
    Received,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ProcurementLine {
    pub name: String,
    pub quantity: u32,
    #[serde(default)]
    pub unit: String,
}

/// An order placed with a supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ProcurementOrder {
    pub id: String,
    pub context: String,
    pub supplier: String,
    #[serde(default)]
    pub category: SupplyCategory,
    #[serde(default)]
    pub lines: Vec<ProcurementLine>,
    pub date: NaiveDate,
    #[serde(default)]
    pub status: ProcurementStatus,
}

impl ProcurementOrder {
    pub fn total_units(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_units_and_defaults() {
        let json = r#"{
            "id": "po-1",
            "context": "bistro",
            "supplier": "Bar Supplies",
            "lines": [
                {"name": "House red", "quantity": 24, "unit": "bottles"},
                {"name": "Tonic", "quantity": 12}
            ],
            "date": "2026-10-16"
        }"#;
        let order: ProcurementOrder = serde_json::from_str(json).unwrap();

        assert_eq!(order.total_units(), 36);
        assert_eq!(order.status, ProcurementStatus::Ordered);
        assert_eq!(order.category, SupplyCategory::General);
        assert_eq!(order.lines[1].unit, "");
    }
}
