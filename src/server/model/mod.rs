pub(crate) mod beer;
pub(crate) mod config;
pub(crate) mod order;
