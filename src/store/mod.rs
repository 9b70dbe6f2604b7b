//! # Session Order Store
//!
//! The ordered list of orders taken during one run. It lives only in memory
//! and is owned by the [`Session`](crate::lifecycle::Session).
//!
//! Orders are addressed by their **display number**: 1 for the oldest order
//! still present. Numbers are positional, so removing an order renumbers every
//! order after it.

pub mod error;

pub use error::*;

use crate::model::{Order, OrderUpdate};
use tracing::{debug, info, instrument};

#[derive(Debug, Default)]
pub struct OrderStore {
    orders: Vec<Order>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Appends an order and returns its display number.
    #[instrument(skip(self, order), fields(customer = %order.customer_name))]
    pub fn append(&mut self, order: Order) -> usize {
        debug!(?order, "append called");
        self.orders.push(order);
        let number = self.orders.len();
        info!(number, size = number, "Order stored");
        number
    }

    /// Removes the order shown as `number`. Later orders move up one place.
    #[instrument(skip(self))]
    pub fn remove_at(&mut self, number: usize) -> Result<Order, StoreError> {
        let index = self.index_of(number)?;
        let order = self.orders.remove(index);
        info!(size = self.orders.len(), "Order removed");
        Ok(order)
    }

    /// Removes the most recently appended order.
    #[instrument(skip(self))]
    pub fn remove_last(&mut self) -> Result<Order, StoreError> {
        let order = self.orders.pop().ok_or(StoreError::Empty)?;
        info!(size = self.orders.len(), "Last order removed");
        Ok(order)
    }

    pub fn get(&self, number: usize) -> Result<&Order, StoreError> {
        let index = self.index_of(number)?;
        Ok(&self.orders[index])
    }

    pub fn get_mut(&mut self, number: usize) -> Result<&mut Order, StoreError> {
        let index = self.index_of(number)?;
        Ok(&mut self.orders[index])
    }

    /// Applies a single-field change to the order shown as `number`.
    #[instrument(skip(self))]
    pub fn update(&mut self, number: usize, update: OrderUpdate) -> Result<&Order, StoreError> {
        let order = self.get_mut(number)?;
        order.apply_update(update)?;
        info!("Order updated");
        Ok(&*order)
    }

    /// Orders with their display numbers, oldest first.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &Order)> {
        (1..).zip(self.orders.iter())
    }

    fn index_of(&self, number: usize) -> Result<usize, StoreError> {
        if number == 0 || number > self.orders.len() {
            return Err(StoreError::InvalidOrderNumber {
                number,
                len: self.orders.len(),
            });
        }
        Ok(number - 1)
    }
}
