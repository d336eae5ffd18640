//! Rule-based reorder suggestions.
//!
//! Two static rules, both skipped when today's order for the same business
//! and supplier already exists:
//! - menu items under the low-stock threshold are reordered from their
//!   supplier, one suggestion per business and supplier;
//! - a business with an upcoming event gets a fixed bar restock unless a
//!   bar order is already dated today.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::OpsError;
use crate::models::{
    new_id, Event, MenuItem, ProcurementLine, ProcurementOrder, ProcurementStatus, SupplyCategory,
};

/// Thresholds and fixed quantities used by the suggestion rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcurementRules {
    pub low_stock_threshold: u32,
    pub reorder_quantity: u32,
    pub reorder_unit: String,
    pub bar_supplier: String,
    pub bar_restock_item: String,
    pub bar_restock_quantity: u32,
    pub bar_restock_unit: String,
}

impl Default for ProcurementRules {
    fn default() -> Self {
        Self {
            low_stock_threshold: 10,
            reorder_quantity: 50,
            reorder_unit: "units".to_string(),
            bar_supplier: "Bar Supplies".to_string(),
            bar_restock_item: "Bar restock".to_string(),
            bar_restock_quantity: 24,
            bar_restock_unit: "bottles".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SuggestionReason {
    LowStock,
    UpcomingEvent { event_name: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcurementSuggestion {
    pub context: String,
    pub supplier: String,
    pub category: SupplyCategory,
    pub lines: Vec<ProcurementLine>,
    pub reason: SuggestionReason,
}

impl ProcurementSuggestion {
    /// Turn the suggestion into a placed order dated `date`.
    pub fn into_order(self, date: NaiveDate) -> ProcurementOrder {
        ProcurementOrder {
            id: new_id(),
            context: self.context,
            supplier: self.supplier,
            category: self.category,
            lines: self.lines,
            date,
            status: ProcurementStatus::Ordered,
        }
    }
}

fn ordered_today(orders: &[ProcurementOrder], today: NaiveDate, context: &str, supplier: &str) -> bool {
    orders
        .iter()
        .any(|o| o.date == today && o.context == context && o.supplier == supplier)
}

fn bar_ordered_today(orders: &[ProcurementOrder], today: NaiveDate, context: &str) -> bool {
    orders
        .iter()
        .any(|o| o.date == today && o.context == context && o.category == SupplyCategory::Bar)
}

/// Suggestions sorted by business, then supplier.
pub fn suggest_procurement(
    menu: &[MenuItem],
    events: &[Event],
    orders: &[ProcurementOrder],
    today: NaiveDate,
    rules: &ProcurementRules,
) -> Vec<ProcurementSuggestion> {
    let mut suggestions = Vec::new();

    // (context, supplier) -> low items
    let mut low: BTreeMap<(&str, &str), Vec<&MenuItem>> = BTreeMap::new();
    for item in menu.iter().filter(|i| i.stock < rules.low_stock_threshold) {
        low.entry((item.context.as_str(), item.supplier.as_str()))
            .or_default()
            .push(item);
    }

    for ((context, supplier), items) in low {
        if ordered_today(orders, today, context, supplier) {
            debug!(context, supplier, "Supplier already ordered today, skipping low-stock rule");
            continue;
        }
        let category = if supplier == rules.bar_supplier {
            SupplyCategory::Bar
        } else {
            SupplyCategory::Kitchen
        };
        suggestions.push(ProcurementSuggestion {
            context: context.to_string(),
            supplier: supplier.to_string(),
            category,
            lines: items
                .iter()
                .map(|i| ProcurementLine {
                    name: i.name.clone(),
                    quantity: rules.reorder_quantity,
                    unit: rules.reorder_unit.clone(),
                })
                .collect(),
            reason: SuggestionReason::LowStock,
        });
    }

    let mut covered: BTreeSet<&str> = suggestions
        .iter()
        .filter(|s| s.category == SupplyCategory::Bar)
        .map(|s| s.context.as_str())
        .collect();
    let mut upcoming: Vec<&Event> = events.iter().filter(|e| e.is_upcoming(today)).collect();
    upcoming.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.context.cmp(&b.context)));

    let mut bar = Vec::new();
    for event in upcoming {
        let context = event.context.as_str();
        if covered.contains(context) || bar_ordered_today(orders, today, context) {
            continue;
        }
        covered.insert(context);
        bar.push(ProcurementSuggestion {
            context: context.to_string(),
            supplier: rules.bar_supplier.clone(),
            category: SupplyCategory::Bar,
            lines: vec![ProcurementLine {
                name: rules.bar_restock_item.clone(),
                quantity: rules.bar_restock_quantity,
                unit: rules.bar_restock_unit.clone(),
            }],
            reason: SuggestionReason::UpcomingEvent {
                event_name: event.name.clone(),
            },
        });
    }

    suggestions.extend(bar);
    suggestions.sort_by(|a, b| {
        a.context
            .cmp(&b.context)
            .then_with(|| a.supplier.cmp(&b.supplier))
    });
    suggestions
}

/// Mark an order received and add its quantities to matching menu stock
/// (same business, same item name).
pub fn receive_order(order: &mut ProcurementOrder, menu: &mut [MenuItem]) -> Result<(), OpsError> {
    if order.status == ProcurementStatus::Received {
        return Err(OpsError::AlreadyReceived);
    }
    for line in &order.lines {
        if let Some(item) = menu
            .iter_mut()
            .find(|i| i.context == order.context && i.name == line.name)
        {
            item.stock = item.stock.saturating_add(line.quantity);
        }
    }
    order.status = ProcurementStatus::Received;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 7, 10).unwrap()
    }

    fn item(name: &str, context: &str, stock: u32, supplier: &str) -> MenuItem {
        MenuItem {
            id: format!("{}-{}", context, name),
            context: context.to_string(),
            name: name.to_string(),
            category: "Mains".to_string(),
            price: 12.0,
            stock,
            supplier: supplier.to_string(),
        }
    }

    fn event(name: &str, context: &str, date: NaiveDate) -> Event {
        Event {
            id: name.to_string(),
            name: name.to_string(),
            date,
            guest_count: 60,
            context: context.to_string(),
            notes: None,
        }
    }

    fn order(context: &str, supplier: &str, category: SupplyCategory, date: NaiveDate) -> ProcurementOrder {
        ProcurementOrder {
            id: "po".to_string(),
            context: context.to_string(),
            supplier: supplier.to_string(),
            category,
            lines: vec![],
            date,
            status: ProcurementStatus::Ordered,
        }
    }

    #[test]
    fn test_low_stock_grouped_by_supplier() {
        let menu = vec![
            item("Salmon", "grill", 4, "Fishmonger"),
            item("Cod", "grill", 9, "Fishmonger"),
            item("Steak", "grill", 10, "Butcher"),
            item("Lamb", "grill", 2, "Butcher"),
        ];
        let rules = ProcurementRules::default();
        let s = suggest_procurement(&menu, &[], &[], today(), &rules);

        assert_eq!(s.len(), 2);
        assert_eq!(s[0].supplier, "Butcher");
        assert_eq!(s[0].lines.len(), 1);
        assert_eq!(s[0].lines[0].name, "Lamb");
        assert_eq!(s[1].supplier, "Fishmonger");
        assert_eq!(s[1].lines.len(), 2);
        assert!(s.iter().all(|x| x.reason == SuggestionReason::LowStock));
        assert!(s.iter().all(|x| x.lines.iter().all(|l| l.quantity == 50)));
    }

    #[test]
    fn test_low_stock_skipped_when_supplier_ordered_today() {
        let menu = vec![item("Salmon", "grill", 4, "Fishmonger")];
        let orders = vec![order("grill", "Fishmonger", SupplyCategory::Kitchen, today())];
        assert!(suggest_procurement(&menu, &[], &orders, today(), &ProcurementRules::default()).is_empty());

        let yesterday = vec![order("grill", "Fishmonger", SupplyCategory::Kitchen, today().pred_opt().unwrap())];
        assert_eq!(
            suggest_procurement(&menu, &[], &yesterday, today(), &ProcurementRules::default()).len(),
            1
        );
    }

    #[test]
    fn test_supplier_order_in_other_business_does_not_count() {
        let menu = vec![item("Salmon", "grill", 4, "Fishmonger")];
        let orders = vec![order("bistro", "Fishmonger", SupplyCategory::Kitchen, today())];
        assert_eq!(
            suggest_procurement(&menu, &[], &orders, today(), &ProcurementRules::default()).len(),
            1
        );
    }

    #[test]
    fn test_upcoming_event_triggers_one_bar_restock() {
        let events = vec![
            event("Wedding", "grill", today().succ_opt().unwrap()),
            event("Quiz night", "grill", today()),
            event("Past gala", "bistro", today().pred_opt().unwrap()),
        ];
        let s = suggest_procurement(&[], &events, &[], today(), &ProcurementRules::default());

        assert_eq!(s.len(), 1);
        assert_eq!(s[0].context, "grill");
        assert_eq!(s[0].category, SupplyCategory::Bar);
        assert_eq!(s[0].lines[0].quantity, 24);
        assert_eq!(
            s[0].reason,
            SuggestionReason::UpcomingEvent {
                event_name: "Quiz night".to_string()
            }
        );
    }

    #[test]
    fn test_bar_restock_skipped_when_bar_ordered_today() {
        let events = vec![event("Wedding", "grill", today())];
        let orders = vec![order("grill", "Any Wine Co", SupplyCategory::Bar, today())];
        assert!(suggest_procurement(&[], &events, &orders, today(), &ProcurementRules::default()).is_empty());
    }

    #[test]
    fn test_rules_are_configurable() {
        let rules = ProcurementRules {
            low_stock_threshold: 3,
            reorder_quantity: 12,
            ..ProcurementRules::default()
        };
        let menu = vec![item("Salmon", "grill", 4, "Fishmonger"), item("Cod", "grill", 2, "Fishmonger")];
        let s = suggest_procurement(&menu, &[], &[], today(), &rules);
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].lines.len(), 1);
        assert_eq!(s[0].lines[0].quantity, 12);
    }

    #[test]
    fn test_receive_order_restocks_menu() {
        let mut menu = vec![item("Salmon", "grill", 4, "Fishmonger"), item("Salmon", "bistro", 1, "Fishmonger")];
        let suggestion = suggest_procurement(&menu[..1], &[], &[], today(), &ProcurementRules::default())
            .remove(0);
        let mut po = suggestion.into_order(today());
        assert_eq!(po.status, ProcurementStatus::Ordered);

        receive_order(&mut po, &mut menu).expect("receive");
        assert_eq!(po.status, ProcurementStatus::Received);
        assert_eq!(menu[0].stock, 54);
        assert_eq!(menu[1].stock, 1);

        assert_eq!(receive_order(&mut po, &mut menu), Err(OpsError::AlreadyReceived));
    }
}
