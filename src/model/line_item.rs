use crate::model::Money;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Unit price of every regular pizza.
pub const REGULAR_PRICE: Money = Money::from_cents(850);

/// Unit price of every gourmet pizza.
pub const GOURMET_PRICE: Money = Money::from_cents(1350);

/// Menu section a pizza belongs to. The section alone decides the price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PizzaCategory {
    Regular,
    Gourmet,
}

impl PizzaCategory {
    pub fn unit_price(self) -> Money {
        match self {
            PizzaCategory::Regular => REGULAR_PRICE,
            PizzaCategory::Gourmet => GOURMET_PRICE,
        }
    }
}

impl Display for PizzaCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PizzaCategory::Regular => write!(f, "Regular"),
            PizzaCategory::Gourmet => write!(f, "Gourmet"),
        }
    }
}

/// One priced pizza selection within an order.
///
/// Line items are only produced by [`Menu::lookup`](crate::menu::Menu::lookup), so
/// `name` is always an entry of the catalog for `category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub category: PizzaCategory,
    pub name: String,
}

impl LineItem {
    pub fn new(category: PizzaCategory, name: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
        }
    }

    pub fn price(&self) -> Money {
        self.category.unit_price()
    }
}

impl Display for LineItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Pizza: {}", self.category, self.name)
    }
}
