//! Point of sale, kitchen display and billing.

use chrono::Utc;
use tracing::debug;

use crate::error::OpsError;
use crate::models::{new_id, MenuItem, Order, OrderItem, OrderStatus};

/// Ring up an order. Every line is checked against the business's menu
/// before any stock moves, so a rejected order leaves stock untouched.
pub fn place_order(
    menu: &mut [MenuItem],
    context: &str,
    table: Option<String>,
    lines: &[(String, u32)],
) -> Result<Order, OpsError> {
    let lines: Vec<&(String, u32)> = lines.iter().filter(|(_, qty)| *qty > 0).collect();
    if lines.is_empty() {
        return Err(OpsError::EmptyOrder);
    }

    // Resolve every line to this business's menu entry before touching stock.
    let mut resolved: Vec<(usize, u32)> = Vec::with_capacity(lines.len());
    for (menu_item_id, quantity) in &lines {
        let index = menu
            .iter()
            .position(|i| i.id == *menu_item_id && i.context == context)
            .ok_or_else(|| OpsError::not_found("Menu item", menu_item_id))?;
        resolved.push((index, *quantity));
    }

    for &(index, _) in &resolved {
        let requested: u32 = resolved
            .iter()
            .filter(|(i, _)| *i == index)
            .map(|(_, q)| *q)
            .sum();
        let item = &menu[index];
        if requested > item.stock {
            return Err(OpsError::InsufficientStock {
                item: item.name.clone(),
                requested,
                available: item.stock,
            });
        }
    }

    let mut items = Vec::with_capacity(resolved.len());
    for (index, quantity) in resolved {
        let item = &mut menu[index];
        item.stock = item.stock.saturating_sub(quantity);
        items.push(OrderItem {
            menu_item_id: item.id.clone(),
            name: item.name.clone(),
            quantity,
            unit_price: item.price,
        });
    }

    let order = Order {
        id: new_id(),
        context: context.to_string(),
        table,
        items,
        status: OrderStatus::Pending,
        created_at: Utc::now(),
    };
    debug!(order = %order.id, context, total = order.total(), "Order placed");
    Ok(order)
}

/// Move an order one step along its lifecycle.
pub fn advance_order(order: &mut Order) -> Result<OrderStatus, OpsError> {
    let next = order.status.next().ok_or(OpsError::OrderClosed(order.status))?;
    order.status = next;
    Ok(next)
}

/// Orders waiting on the kitchen, oldest first.
pub fn kitchen_queue(orders: &[Order]) -> Vec<&Order> {
    let mut queue: Vec<&Order> = orders.iter().filter(|o| o.status.in_kitchen()).collect();
    queue.sort_by_key(|o| o.created_at);
    queue
}

/// Takings from paid orders.
pub fn revenue(orders: &[Order]) -> f64 {
    orders
        .iter()
        .filter(|o| o.status == OrderStatus::Paid)
        .map(Order::total)
        .sum()
}

/// Amount still owed on every order not yet paid, whatever its stage.
pub fn outstanding(orders: &[Order]) -> f64 {
    orders
        .iter()
        .filter(|o| o.status != OrderStatus::Paid)
        .map(Order::total)
        .sum()
}
