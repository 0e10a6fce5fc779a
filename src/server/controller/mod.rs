pub(crate) mod error;
pub(crate) mod order;
pub(crate) mod stock;
