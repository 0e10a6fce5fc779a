//! storage contract for stock and orders

use uuid::Uuid;

use crate::server::model::beer::{Beer, Stock};
use crate::server::model::order::{Item, Order, Round};

pub(crate) mod in_memory;

/// CRUD over the bar's stock and open orders. The in-memory store is
/// the only implementation today; a persistent one would slot in here.
pub(crate) trait Repository: Send + Sync + 'static {
    async fn get_all_stock(&self) -> Stock;
    async fn get_beer_from_stock(&self, beer_id: Uuid) -> Option<Beer>;
    /// upsert; assigns a fresh id when the beer is unknown, otherwise
    /// overwrites in place (quantity included, no merging)
    async fn put_stock(&self, beer: Beer) -> Beer;
    async fn delete_stock(&self, beer_id: Uuid) -> Option<Beer>;
    async fn create_order(&self) -> Order;
    async fn get_order(&self, order_id: Uuid) -> Option<Order>;
    async fn get_all_orders(&self) -> Vec<Order>;
    /// appends a new round (id and timestamp assigned here) and
    /// returns the updated order, or None when the order is unknown
    async fn add_round_to_order(&self, order_id: Uuid, items: Vec<Item>) -> Option<Order>;
    async fn delete_round_from_order(&self, order_id: Uuid, round_id: Uuid) -> Option<Round>;
    /// wholesale replace; inserts with a fresh id when unknown
    async fn put_order(&self, order: Order) -> Order;
}
