//! # Menu Catalog
//!
//! The two fixed pizza lists. Regular pizzas are numbered from 1 and gourmet
//! pizzas continue the numbering, so operators pick a pizza by a single
//! menu number.

use crate::model::{LineItem, PizzaCategory, GOURMET_PRICE, REGULAR_PRICE};

pub const REGULAR_PIZZAS: [&str; 7] = [
    "Pepperoni",
    "Hawaiian",
    "Cheese",
    "Meat Lovers",
    "BBQ Beef & Onion",
    "Italian",
    "Mushroom",
];

pub const GOURMET_PIZZAS: [&str; 5] = [
    "Zesty Zucchini",
    "Salty Sardine",
    "Meaty Maven",
    "Vegetarian Viva",
    "Jalapeño Jolt",
];

/// The catalog handed to the order builder.
#[derive(Debug, Clone, Copy)]
pub struct Menu {
    pub regular: &'static [&'static str],
    pub gourmet: &'static [&'static str],
}

impl Default for Menu {
    fn default() -> Self {
        Self {
            regular: &REGULAR_PIZZAS,
            gourmet: &GOURMET_PIZZAS,
        }
    }
}

impl Menu {
    /// Menu number of the first gourmet pizza.
    pub fn gourmet_start(&self) -> i64 {
        self.regular.len() as i64 + 1
    }

    /// Highest valid menu number.
    pub fn last_number(&self) -> i64 {
        (self.regular.len() + self.gourmet.len()) as i64
    }

    /// Maps a menu number to its line item. Numbers outside the menu yield `None`.
    pub fn lookup(&self, selection: i64) -> Option<LineItem> {
        if selection < 1 {
            return None;
        }
        let index = (selection - 1) as usize;
        if let Some(name) = self.regular.get(index) {
            return Some(LineItem::new(PizzaCategory::Regular, *name));
        }
        self.gourmet
            .get(index - self.regular.len())
            .map(|name| LineItem::new(PizzaCategory::Gourmet, *name))
    }

    /// The printed menu, one entry per line.
    pub fn display_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.regular.len() + self.gourmet.len() + 4);
        lines.push(String::new());
        lines.push("CRUSTY'S PIZZA MENU".to_string());
        lines.push(format!("Regular Pizzas: {}", REGULAR_PRICE));
        for (number, name) in (1..).zip(self.regular) {
            lines.push(format!("{}. {}", number, name));
        }
        lines.push(String::new());
        lines.push(format!("Gourmet Pizzas: {}", GOURMET_PRICE));
        for (number, name) in (self.gourmet_start()..).zip(self.gourmet) {
            lines.push(format!("{}. {}", number, name));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_regular_is_pepperoni() {
        let item = Menu::default().lookup(1).unwrap();
        assert_eq!(item, LineItem::new(PizzaCategory::Regular, "Pepperoni"));
        assert_eq!(item.price().cents(), 850);
    }

    #[test]
    fn test_eight_is_first_gourmet() {
        let item = Menu::default().lookup(8).unwrap();
        assert_eq!(item, LineItem::new(PizzaCategory::Gourmet, "Zesty Zucchini"));
        assert_eq!(item.price().cents(), 1350);
    }

    #[test]
    fn test_boundaries() {
        let menu = Menu::default();
        assert_eq!(menu.lookup(7).unwrap().name, "Mushroom");
        assert_eq!(menu.lookup(12).unwrap().name, "Jalapeño Jolt");
        assert!(menu.lookup(0).is_none());
        assert!(menu.lookup(13).is_none());
        assert!(menu.lookup(-3).is_none());
    }

    #[test]
    fn test_display_numbers_gourmet_from_eight() {
        let lines = Menu::default().display_lines();
        assert!(lines.contains(&"Regular Pizzas: $8.50".to_string()));
        assert!(lines.contains(&"Gourmet Pizzas: $13.50".to_string()));
        assert!(lines.contains(&"1. Pepperoni".to_string()));
        assert!(lines.contains(&"8. Zesty Zucchini".to_string()));
        assert!(lines.contains(&"12. Jalapeño Jolt".to_string()));
    }
}
