//! Text views of orders.
//!
//! Every function here returns the lines to print and leaves printing to the
//! caller, so the views can be checked without a console.

use crate::model::Order;
use crate::store::OrderStore;

/// Customer-facing summary of a freshly priced order, followed by the
/// management summary for that order.
pub fn order_summary(order: &Order) -> Vec<String> {
    let mut lines = vec![String::new(), "Order Summary:".to_string()];
    lines.extend(order.line_items.iter().map(|item| format!("- {}", item)));
    lines.push(format!("Total Cost: {}", order.grand_total()));
    if order.is_delivery() {
        lines.push(format!("Delivery Charge: {}", order.delivery_charge));
    }
    lines.push(format!("Customer Name: {}", order.customer_name));

    lines.push(String::new());
    lines.push("Management Summary:".to_string());
    lines.push(format!("Total Pizzas Sold: {}", order.pizza_count()));
    lines.push(format!("Total Revenue: {}", order.grand_total()));
    lines
}

/// Every stored order, oldest first, as the kitchen sees them.
pub fn kitchen_screen(store: &OrderStore) -> Vec<String> {
    let mut lines = vec![String::new(), "Kitchen Screen:".to_string()];
    for (number, order) in store.numbered() {
        lines.push(format!("Order {}:", number));
        lines.extend(numbered_items(order));
        lines.push(format!("Customer Name: {}", order.customer_name));
        lines.push(format!("Order Type: {}", order.order_kind));
        lines.push(format!("Total Cost: {}", order.grand_total()));
        if order.is_delivery() {
            lines.push(format!("Delivery Charge: {}", order.delivery_charge));
            lines.push(format!("Customer Address: {}", order.customer_address));
        }
        lines.push(format!("Customer Phone: {}", order.customer_phone));
        lines.push(String::new());
    }
    lines
}

/// The order as shown before choosing a field to modify.
pub fn order_details(order: &Order) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        "Current Order Details:".to_string(),
        format!("Customer Name: {}", order.customer_name),
        format!("Order Type: {}", order.order_kind),
    ];
    lines.extend(numbered_items(order));
    lines.push(format!("Total Cost: {}", order.grand_total()));
    if order.is_delivery() {
        lines.push(format!("Delivery Charge: {}", order.delivery_charge));
        lines.push(format!("Customer Address: {}", order.customer_address));
    }
    lines.push(format!("Customer Phone: {}", order.customer_phone));
    lines
}

fn numbered_items(order: &Order) -> impl Iterator<Item = String> + '_ {
    (1..)
        .zip(order.line_items.iter())
        .map(|(n, item)| format!("{}. {}", n, item))
}
