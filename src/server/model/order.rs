use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::server::model::beer::Beer;

/// One purchased line inside a round. `price_per_unit` is snapshotted
/// from the beer at round-creation time so later price changes never
/// alter an already-poured round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Item {
    pub beer_id: Uuid,
    #[serde(default)]
    pub price_per_unit: f64,
    #[serde(default = "default_item_quantity")]
    pub quantity: u32,
    /// flat discount, e.g. 10$ off per unit
    #[serde(default)]
    pub discount_flat: f64,
    /// fractional discount, e.g. 0.10 for 10% off
    #[serde(default)]
    pub discount_rate: f64,
    /// display-time join against current stock, never stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beer: Option<Beer>,
}

fn default_item_quantity() -> u32 {
    1
}

/// A batch of drinks bought together. Immutable once created, other
/// than being deleted wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Round {
    pub id: Uuid,
    pub created: DateTime<Utc>,
    pub items: Vec<Item>,
}

/// A customer tab. Financial fields stay zero until the tab is closed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Order {
    pub id: Uuid,
    pub created: DateTime<Utc>,
    pub paid: bool,
    pub sub_total: f64,
    pub taxes: f64,
    pub discounts: f64,
    pub total: f64,
    pub rounds: Vec<Round>,
}

/// One requested line of a round as it arrives over the wire; prices
/// are looked up server-side, never trusted from the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RoundItem {
    pub beer_id: Uuid,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub discount_flat: f64,
    #[serde(default)]
    pub discount_rate: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct PostRoundRequest {
    pub items: Vec<RoundItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct OrdersResponse {
    pub orders: Vec<Order>,
}
