pub mod clients;
pub mod config;
pub mod error;
pub mod logging;
pub mod ticket;

pub use clients::trade_api::{OrderBook, TradeApi, TradeApiClient};
pub use config::{load_config, AppConfig};
pub use error::{TicketError, TicketResult, ValidationError};
pub use ticket::controller::{OrderTicket, SubmitState};
pub use ticket::fields::{Field, OrderFormFields};
pub use ticket::order::{Asset, Order, OrderSide, OrderType};
pub use ticket::presets::{PricePreset, PriceRefs};
