use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One kind of beer carried by the bar, with its current shelf count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Beer {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub quantity: u32,
}

/// Whole-bar inventory, one entry per beer id. Singleton per process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct Stock {
    #[serde(rename = "lastUpdated")]
    pub last_updated: Option<DateTime<Utc>>,
    pub beers: Vec<Beer>,
}
