use derive_more::{Display, Error};

/// Everything that can go wrong between a request and the store.
/// Display output is the wire-visible detail message, so the texts
/// here are part of the API.
#[derive(Debug, Clone, PartialEq, Display, Error)]
pub(crate) enum ServiceError {
    #[display("order not found")]
    OrderNotFound,
    #[display("beer not found in stock")]
    BeerNotFound,
    #[display("round not found in order")]
    RoundNotFound,
    #[display("not enough beer in stock: {available} {name}(s) left, {requested} requested")]
    OutOfStock {
        available: u32,
        name: String,
        requested: u32,
    },
}
