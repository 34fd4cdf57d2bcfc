pub mod trade_api;

pub use trade_api::{OrderBook, TradeApi, TradeApiClient};
