//! business rules on top of the repository
//!
//! The service owns no state of its own beyond the configured tax
//! rate; every read and write goes through the [`Repository`].

use uuid::Uuid;

use crate::server::model::beer::{Beer, Stock};
use crate::server::model::order::{Item, Order, Round, RoundItem};
use crate::server::repository::Repository;
use crate::server::service::error::ServiceError;

pub(crate) mod error;

#[derive(Clone)]
pub(crate) struct Service<R: Repository> {
    repository: R,
    tax_rate: f64,
}

impl<R: Repository> Service<R> {
    pub fn new(repository: R, tax_rate: f64) -> Self {
        Self { repository, tax_rate }
    }

    pub async fn get_stock_for_beer(&self, beer_id: Uuid) -> Result<Beer, ServiceError> {
        self.repository
            .get_beer_from_stock(beer_id)
            .await
            .ok_or(ServiceError::BeerNotFound)
    }

    pub async fn get_all_stock(&self) -> Stock {
        self.repository.get_all_stock().await
    }

    pub async fn put_stock(&self, beer: Beer) -> Beer {
        self.repository.put_stock(beer).await
    }

    pub async fn delete_stock(&self, beer_id: Uuid) -> Result<Beer, ServiceError> {
        self.repository
            .delete_stock(beer_id)
            .await
            .ok_or(ServiceError::BeerNotFound)
    }

    pub async fn create_order(&self) -> Order {
        self.repository.create_order().await
    }

    /// fetch one order with every item's beer joined in from current
    /// stock; items whose beer was deleted keep `beer: None`
    pub async fn get_order(&self, order_id: Uuid) -> Result<Order, ServiceError> {
        let mut order = self
            .repository
            .get_order(order_id)
            .await
            .ok_or(ServiceError::OrderNotFound)?;
        self.join_beers(&mut order).await;
        Ok(order)
    }

    pub async fn get_all_orders(&self) -> Vec<Order> {
        let mut orders = self.repository.get_all_orders().await;
        for order in orders.iter_mut() {
            self.join_beers(order).await;
        }
        orders
    }

    async fn join_beers(&self, order: &mut Order) {
        for round in order.rounds.iter_mut() {
            for item in round.items.iter_mut() {
                item.beer = self.repository.get_beer_from_stock(item.beer_id).await;
            }
        }
    }

    /// Validate and apply one round of purchases. The whole round is
    /// checked against stock before anything is decremented, so a
    /// rejected round never consumes stock for its earlier items.
    /// Each item's price is snapshotted from the beer at this moment.
    pub async fn add_round_to_order(
        &self,
        order_id: Uuid,
        items: &[RoundItem],
    ) -> Result<Order, ServiceError> {
        let order = self
            .repository
            .get_order(order_id)
            .await
            .ok_or(ServiceError::OrderNotFound)?;

        // working copies of every touched beer; duplicates of the same
        // beer within one round draw down the same copy
        let mut touched: Vec<Beer> = Vec::new();
        let mut transaction: Vec<Item> = Vec::with_capacity(items.len());

        for item in items {
            let idx = match touched.iter().position(|b| b.id == item.beer_id) {
                Some(idx) => idx,
                None => {
                    let beer = self
                        .repository
                        .get_beer_from_stock(item.beer_id)
                        .await
                        .ok_or(ServiceError::BeerNotFound)?;
                    touched.push(beer);
                    touched.len() - 1
                }
            };
            let beer = &mut touched[idx];

            if beer.quantity < item.quantity {
                return Err(ServiceError::OutOfStock {
                    available: beer.quantity,
                    name: beer.name.clone(),
                    requested: item.quantity,
                });
            }

            transaction.push(Item {
                beer_id: beer.id,
                price_per_unit: beer.price,
                quantity: item.quantity,
                discount_flat: item.discount_flat,
                discount_rate: item.discount_rate,
                beer: None,
            });
            beer.quantity -= item.quantity;
        }

        for beer in touched {
            self.repository.put_stock(beer).await;
        }

        self.repository
            .add_round_to_order(order.id, transaction)
            .await
            .ok_or(ServiceError::OrderNotFound)
    }

    /// Compute the bill and mark the tab paid. Per round the full
    /// price and the discounted price are summed separately; the gap
    /// between the two is the order's discount total. Taxes apply to
    /// the discounted subtotal.
    pub async fn close_tab(&self, order_id: Uuid) -> Result<Order, ServiceError> {
        let mut order = self
            .repository
            .get_order(order_id)
            .await
            .ok_or(ServiceError::OrderNotFound)?;

        let mut sub_total = 0.0;
        let mut discounts = 0.0;

        for round in order.rounds.iter() {
            let mut round_total_no_discounts = 0.0;
            let mut round_total_with_discounts = 0.0;
            for item in round.items.iter() {
                let quantity = f64::from(item.quantity);
                round_total_no_discounts += item.price_per_unit * quantity;
                round_total_with_discounts +=
                    (item.price_per_unit - item.discount_flat) * quantity * (1.0 - item.discount_rate);
            }
            sub_total += round_total_no_discounts;
            discounts += round_total_no_discounts - round_total_with_discounts;
        }

        order.sub_total = sub_total;
        order.discounts = discounts;
        order.taxes = (sub_total - discounts) * self.tax_rate;
        order.total = sub_total - discounts + order.taxes;
        order.paid = true;

        Ok(self.repository.put_order(order).await)
    }

    pub async fn delete_round_from_order(
        &self,
        order_id: Uuid,
        round_id: Uuid,
    ) -> Result<Round, ServiceError> {
        self.repository
            .delete_round_from_order(order_id, round_id)
            .await
            .ok_or(ServiceError::RoundNotFound)
    }
}
