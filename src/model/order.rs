//! Customer orders held by the session.
//!
//! # Lifecycle
//! An order is built from an [`OrderCreate`] payload once pricing is done,
//! appended to the [`OrderStore`](crate::store::OrderStore), and afterwards only
//! changed through a single [`OrderUpdate`] at a time.

use crate::model::{LineItem, Money};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

/// Largest number of pizzas a single order may hold.
pub const MAX_PIZZAS: usize = 5;

/// Flat fee added to every delivery order.
pub const DELIVERY_CHARGE: Money = Money::from_cents(250);

/// How the customer receives the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderKind {
    Pickup,
    Delivery,
}

impl OrderKind {
    /// Parses operator input, ignoring case. Anything but "pickup" or
    /// "delivery" is rejected.
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "pickup" => Some(OrderKind::Pickup),
            "delivery" => Some(OrderKind::Delivery),
            _ => None,
        }
    }

    pub fn delivery_charge(self) -> Money {
        match self {
            OrderKind::Pickup => Money::ZERO,
            OrderKind::Delivery => DELIVERY_CHARGE,
        }
    }
}

impl Display for OrderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderKind::Pickup => write!(f, "Pickup"),
            OrderKind::Delivery => write!(f, "Delivery"),
        }
    }
}

/// Errors raised when an order would break its invariants.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// More line items than [`MAX_PIZZAS`].
    #[error("Order holds {0} pizzas, the maximum is {max}", max = MAX_PIZZAS)]
    TooManyPizzas(usize),

    /// The subtotal does not match the prices of the line items.
    #[error("Subtotal {given} does not match line items ({expected})")]
    SubtotalMismatch { given: Money, expected: Money },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub customer_name: String,
    pub order_kind: OrderKind,
    pub customer_address: String,
    pub customer_phone: String,
    pub line_items: Vec<LineItem>,
    pub pizza_subtotal: Money,
    pub delivery_charge: Money,
}

/// Payload for creating a new order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCreate {
    pub customer_name: String,
    pub order_kind: OrderKind,
    pub customer_address: String,
    pub customer_phone: String,
    pub line_items: Vec<LineItem>,
    pub pizza_subtotal: Money,
}

/// A single-field change to an existing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderUpdate {
    Name(String),
    Address(String),
    Phone(String),
    Pizzas {
        line_items: Vec<LineItem>,
        pizza_subtotal: Money,
    },
}

impl Order {
    /// Builds an order from its creation payload.
    ///
    /// The delivery charge is derived from the order kind, never supplied.
    ///
    /// # Errors
    /// Fails when the payload carries more than [`MAX_PIZZAS`] items or a
    /// subtotal that disagrees with the item prices.
    pub fn from_create(params: OrderCreate) -> Result<Self, OrderError> {
        check_line_items(&params.line_items, params.pizza_subtotal)?;
        Ok(Self {
            delivery_charge: params.order_kind.delivery_charge(),
            customer_name: params.customer_name,
            order_kind: params.order_kind,
            customer_address: params.customer_address,
            customer_phone: params.customer_phone,
            line_items: params.line_items,
            pizza_subtotal: params.pizza_subtotal,
        })
    }

    /// Applies exactly one field change.
    ///
    /// Address and phone are taken as given; the order kind is not re-checked.
    pub fn apply_update(&mut self, update: OrderUpdate) -> Result<(), OrderError> {
        match update {
            OrderUpdate::Name(name) => self.customer_name = name,
            OrderUpdate::Address(address) => self.customer_address = address,
            OrderUpdate::Phone(phone) => self.customer_phone = phone,
            OrderUpdate::Pizzas {
                line_items,
                pizza_subtotal,
            } => {
                check_line_items(&line_items, pizza_subtotal)?;
                self.line_items = line_items;
                self.pizza_subtotal = pizza_subtotal;
            }
        }
        Ok(())
    }

    /// Pizza subtotal plus delivery charge.
    pub fn grand_total(&self) -> Money {
        self.pizza_subtotal + self.delivery_charge
    }

    pub fn pizza_count(&self) -> usize {
        self.line_items.len()
    }

    pub fn is_delivery(&self) -> bool {
        self.order_kind == OrderKind::Delivery
    }
}

fn check_line_items(items: &[LineItem], subtotal: Money) -> Result<(), OrderError> {
    if items.len() > MAX_PIZZAS {
        return Err(OrderError::TooManyPizzas(items.len()));
    }
    let expected: Money = items.iter().map(LineItem::price).sum();
    if expected != subtotal {
        return Err(OrderError::SubtotalMismatch {
            given: subtotal,
            expected,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PizzaCategory;

    fn regular(name: &str) -> LineItem {
        LineItem::new(PizzaCategory::Regular, name)
    }

    fn create(kind: OrderKind, items: Vec<LineItem>) -> OrderCreate {
        let pizza_subtotal = items.iter().map(LineItem::price).sum();
        OrderCreate {
            customer_name: "Amy".to_string(),
            order_kind: kind,
            customer_address: String::new(),
            customer_phone: String::new(),
            line_items: items,
            pizza_subtotal,
        }
    }

    #[test]
    fn test_order_kind_parse_ignores_case() {
        assert_eq!(OrderKind::parse("PickUp"), Some(OrderKind::Pickup));
        assert_eq!(OrderKind::parse("DELIVERY"), Some(OrderKind::Delivery));
        assert_eq!(OrderKind::parse("takeaway"), None);
        assert_eq!(OrderKind::parse(" pickup"), None);
    }

    #[test]
    fn test_delivery_charge_follows_kind() {
        let pickup = Order::from_create(create(OrderKind::Pickup, vec![regular("Cheese")])).unwrap();
        assert!(pickup.delivery_charge.is_zero());
        assert_eq!(pickup.grand_total(), Money(850));

        let delivery = Order::from_create(create(
            OrderKind::Delivery,
            vec![regular("Pepperoni"), regular("Cheese")],
        ))
        .unwrap();
        assert_eq!(delivery.delivery_charge, Money(250));
        assert_eq!(delivery.pizza_subtotal, Money(1700));
        assert_eq!(delivery.grand_total(), Money(1950));
    }

    #[test]
    fn test_from_create_rejects_six_items() {
        let items = vec![regular("Cheese"); 6];
        let result = Order::from_create(create(OrderKind::Pickup, items));
        assert_eq!(result, Err(OrderError::TooManyPizzas(6)));
    }

    #[test]
    fn test_pizzas_update_checks_subtotal() {
        let mut order = Order::from_create(create(OrderKind::Pickup, vec![])).unwrap();
        let result = order.apply_update(OrderUpdate::Pizzas {
            line_items: vec![regular("Cheese")],
            pizza_subtotal: Money(100),
        });
        assert!(matches!(result, Err(OrderError::SubtotalMismatch { .. })));
        assert!(order.line_items.is_empty());
    }

    #[test]
    fn test_phone_update_is_not_validated() {
        let mut order = Order::from_create(create(OrderKind::Pickup, vec![])).unwrap();
        order
            .apply_update(OrderUpdate::Phone("call me maybe".to_string()))
            .unwrap();
        assert_eq!(order.customer_phone, "call me maybe");
        assert_eq!(order.order_kind, OrderKind::Pickup);
    }
}
