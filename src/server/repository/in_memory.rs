//! in-memory store, the stand-in for a real database
//!
//! Lookups are linear scans over insertion-ordered vectors; at bar
//! scale (dozens of beers, a handful of open tabs) an index would be
//! noise. Two locks, one per collection, so stock reads never wait on
//! order writes.

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::server::model::beer::{Beer, Stock};
use crate::server::model::order::{Item, Order, Round};
use crate::server::repository::Repository;
use crate::server::util::time;

#[derive(Default)]
struct Store {
    stock: RwLock<Stock>,
    orders: RwLock<Vec<Order>>,
}

pub(crate) struct InMemory(Arc<Store>);

impl Clone for InMemory {
    fn clone(&self) -> Self {
        InMemory(self.0.clone())
    }
}

impl InMemory {
    pub fn new() -> Self {
        InMemory(Arc::new(Store::default()))
    }

    /// empty store pre-loaded with the house beers
    pub async fn seeded() -> Self {
        let store = Self::new();
        for (name, price, quantity) in [("Corona", 100.0, 5), ("Modelo", 200.0, 10), ("Pilsen", 300.0, 8)] {
            store
                .put_stock(Beer {
                    id: Uuid::new_v4(),
                    name: name.to_string(),
                    price,
                    quantity,
                })
                .await;
        }
        store
    }
}

impl Repository for InMemory {
    async fn get_all_stock(&self) -> Stock {
        self.0.stock.read().await.clone()
    }

    async fn get_beer_from_stock(&self, beer_id: Uuid) -> Option<Beer> {
        self.0
            .stock
            .read()
            .await
            .beers
            .iter()
            .find(|beer| beer.id == beer_id)
            .cloned()
    }

    async fn put_stock(&self, beer: Beer) -> Beer {
        let mut stock = self.0.stock.write().await;
        let beer = match stock.beers.iter().position(|b| b.id == beer.id) {
            Some(idx) => {
                stock.beers[idx] = beer.clone();
                beer
            }
            None => {
                let mut beer = beer;
                beer.id = Uuid::new_v4();
                stock.beers.push(beer.clone());
                beer
            }
        };
        stock.last_updated = Some(time::helper::get_utc_now());
        beer
    }

    async fn delete_stock(&self, beer_id: Uuid) -> Option<Beer> {
        let mut stock = self.0.stock.write().await;
        let idx = stock.beers.iter().position(|beer| beer.id == beer_id)?;
        let removed = stock.beers.remove(idx);
        stock.last_updated = Some(time::helper::get_utc_now());
        Some(removed)
    }

    async fn create_order(&self) -> Order {
        let order = Order {
            id: Uuid::new_v4(),
            created: time::helper::get_utc_now(),
            paid: false,
            sub_total: 0.0,
            taxes: 0.0,
            discounts: 0.0,
            total: 0.0,
            rounds: vec![],
        };
        self.0.orders.write().await.push(order.clone());
        order
    }

    async fn get_order(&self, order_id: Uuid) -> Option<Order> {
        self.0
            .orders
            .read()
            .await
            .iter()
            .find(|order| order.id == order_id)
            .cloned()
    }

    async fn get_all_orders(&self) -> Vec<Order> {
        self.0.orders.read().await.clone()
    }

    async fn add_round_to_order(&self, order_id: Uuid, items: Vec<Item>) -> Option<Order> {
        let mut orders = self.0.orders.write().await;
        let order = orders.iter_mut().find(|order| order.id == order_id)?;
        order.rounds.push(Round {
            id: Uuid::new_v4(),
            created: time::helper::get_utc_now(),
            items,
        });
        Some(order.clone())
    }

    async fn delete_round_from_order(&self, order_id: Uuid, round_id: Uuid) -> Option<Round> {
        let mut orders = self.0.orders.write().await;
        let order = orders.iter_mut().find(|order| order.id == order_id)?;
        let idx = order.rounds.iter().position(|round| round.id == round_id)?;
        Some(order.rounds.remove(idx))
    }

    async fn put_order(&self, order: Order) -> Order {
        let mut orders = self.0.orders.write().await;
        match orders.iter().position(|o| o.id == order.id) {
            Some(idx) => {
                orders[idx] = order.clone();
                order
            }
            None => {
                let mut order = order;
                order.id = Uuid::new_v4();
                order.created = time::helper::get_utc_now();
                orders.push(order.clone());
                order
            }
        }
    }
}
