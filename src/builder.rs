//! # Order Builder
//!
//! Turns a requested pizza count into priced line items by reading one menu
//! number per pizza.
//!
//! The builder reads exactly `count` selections. An invalid selection prints a
//! message and uses up its turn, so the result can hold fewer items than
//! were requested.

use crate::console::Console;
use crate::input::{read_number, InputError};
use crate::menu::Menu;
use crate::model::{LineItem, Money, MAX_PIZZAS};
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors raised before any selection is read.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuilderError {
    #[error("Sorry, the maximum number of pizzas per order is {max}.", max = MAX_PIZZAS)]
    TooManyPizzas(i64),
}

/// Checks a requested count against [`MAX_PIZZAS`].
///
/// Zero and negative counts are allowed and mean no selections are read.
pub fn check_pizza_count(requested: i64) -> Result<usize, BuilderError> {
    if requested > MAX_PIZZAS as i64 {
        return Err(BuilderError::TooManyPizzas(requested));
    }
    Ok(requested.max(0) as usize)
}

/// Reads `count` menu selections and returns the accepted items with their subtotal.
#[instrument(skip(console, menu))]
pub fn collect_line_items<C: Console + ?Sized>(
    console: &mut C,
    count: usize,
    menu: &Menu,
) -> Result<(Vec<LineItem>, Money), InputError> {
    let prompt = format!(
        "Please enter the number of the pizza you would like to order (1-{} for regular, {}-{} for gourmet): ",
        menu.gourmet_start() - 1,
        menu.gourmet_start(),
        menu.last_number()
    );

    let mut items = Vec::with_capacity(count);
    let mut subtotal = Money::ZERO;
    for _ in 0..count {
        let selection = read_number(console, &prompt)?;
        match menu.lookup(selection) {
            Some(item) => {
                debug!(selection, item = %item, "Selection accepted");
                subtotal += item.price();
                items.push(item);
            }
            None => {
                debug!(selection, "Selection rejected");
                console.write_line("Invalid pizza choice. Please try again.")?;
            }
        }
    }
    Ok((items, subtotal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::mock::ScriptedConsole;
    use crate::model::PizzaCategory;

    #[test]
    fn test_count_limit() {
        assert_eq!(check_pizza_count(5), Ok(5));
        assert_eq!(check_pizza_count(0), Ok(0));
        assert_eq!(check_pizza_count(-2), Ok(0));
        assert_eq!(check_pizza_count(6), Err(BuilderError::TooManyPizzas(6)));
    }

    #[test]
    fn test_two_regulars_cost_seventeen() {
        let mut console = ScriptedConsole::new(["1", "3"]);
        let (items, subtotal) = collect_line_items(&mut console, 2, &Menu::default()).unwrap();
        assert_eq!(
            items,
            vec![
                LineItem::new(PizzaCategory::Regular, "Pepperoni"),
                LineItem::new(PizzaCategory::Regular, "Cheese"),
            ]
        );
        assert_eq!(subtotal, Money(1700));
    }

    #[test]
    fn test_invalid_selection_uses_its_turn() {
        let mut console = ScriptedConsole::new(["0", "8", "13", "99"]);
        let (items, subtotal) = collect_line_items(&mut console, 3, &Menu::default()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Zesty Zucchini");
        assert_eq!(subtotal, Money(1350));
        assert_eq!(console.count_printed("Invalid pizza choice"), 2);
        assert_eq!(console.remaining(), 1);
    }

    #[test]
    fn test_prompt_names_menu_ranges() {
        let mut console = ScriptedConsole::new(["2"]);
        collect_line_items(&mut console, 1, &Menu::default()).unwrap();
        assert!(console.prompts()[0].contains("(1-7 for regular, 8-12 for gourmet)"));
    }
}
