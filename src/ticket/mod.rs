pub mod controller;
pub mod fields;
pub mod order;
pub mod presets;
pub mod reconcile;

pub use controller::{OrderTicket, SubmitState};
pub use fields::{Field, OrderFormFields};
pub use order::{Asset, Order, OrderSide, OrderType};
pub use presets::{PricePreset, PriceRefs};
