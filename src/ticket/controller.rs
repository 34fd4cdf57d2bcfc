use crate::clients::trade_api::TradeApi;
use crate::error::{TicketError, TicketResult};

use super::fields::{self, Field, OrderFormFields};
use super::order::{Asset, Order, OrderSide, OrderType};
use super::presets::{PricePreset, PriceRefs};
use super::reconcile;

/// Submission lifecycle. `Success`/`Error` carry the message surfaced to the
/// user and persist until the next field edit, side change, or submit
/// attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Success { message: String },
    Error { message: String },
}

impl SubmitState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success { .. } | Self::Error { .. })
    }
}

const SUCCESS_MESSAGE: &str = "Order submitted";
const GENERIC_FAILURE: &str = "Order failed";

/// One order-entry session: owns the form fields, the active side, the
/// reference prices, and the submit state machine. Exactly one logical
/// actor drives it; every transition runs synchronously except the awaited
/// network call inside [`OrderTicket::submit`].
#[derive(Debug, Clone)]
pub struct OrderTicket {
    asset: Asset,
    side: OrderSide,
    form: OrderFormFields,
    refs: PriceRefs,
    price_touched: bool,
    state: SubmitState,
}

impl OrderTicket {
    pub fn new(asset: Asset, refs: PriceRefs) -> Self {
        Self {
            asset,
            side: OrderSide::Buy,
            form: OrderFormFields {
                price: fields::format_price(refs.mid),
                ..OrderFormFields::default()
            },
            refs,
            price_touched: false,
            state: SubmitState::Idle,
        }
    }

    pub fn asset(&self) -> Asset {
        self.asset
    }

    pub fn side(&self) -> OrderSide {
        self.side
    }

    pub fn form(&self) -> &OrderFormFields {
        &self.form
    }

    pub fn refs(&self) -> PriceRefs {
        self.refs
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    /// One discrete user edit. Any manual price edit stops mid
    /// auto-tracking for the session.
    pub fn edit(&mut self, field: Field, input: &str) {
        self.clear_terminal_state();
        if field == Field::Price {
            self.price_touched = true;
        }
        reconcile::apply_edit(&mut self.form, field, input);
    }

    pub fn apply_preset(&mut self, preset: PricePreset) {
        self.clear_terminal_state();
        self.price_touched = true;
        let price = fields::format_price(preset.resolve(self.refs));
        reconcile::apply_edit(&mut self.form, Field::Price, &price);
    }

    pub fn set_side(&mut self, side: OrderSide) {
        self.clear_terminal_state();
        self.side = side;
    }

    /// Ambient reference refresh from the surrounding application. While
    /// the user has not touched price, the field tracks the incoming mid;
    /// not a user action, so a terminal Success/Error state is left alone.
    pub fn update_refs(&mut self, refs: PriceRefs) {
        self.refs = refs;
        if !self.price_touched {
            let price = fields::format_price(refs.mid);
            reconcile::apply_edit(&mut self.form, Field::Price, &price);
        }
    }

    /// First half of the submit flow: validates all three fields, builds the
    /// immutable order, and enters `Submitting`. Returns `Ok(None)` while a
    /// submission is already in flight, so a second trigger never reaches
    /// the network. Validation failures leave the machine in `Idle` with the
    /// prior result already cleared.
    pub fn begin_submit(&mut self) -> TicketResult<Option<Order>> {
        if self.state == SubmitState::Submitting {
            return Ok(None);
        }
        self.state = SubmitState::Idle;

        let price = fields::validate(Field::Price, &self.form.price)?;
        let quantity = fields::validate(Field::Quantity, &self.form.quantity)?;
        let notional = fields::validate(Field::Notional, &self.form.notional)?;

        self.state = SubmitState::Submitting;
        Ok(Some(Order {
            asset: self.asset,
            side: self.side,
            order_type: OrderType::Limit,
            quantity,
            price,
            notional,
        }))
    }

    /// Second half of the submit flow. On success the form resets to its
    /// default (quantity/notional empty, price back on the current mid,
    /// auto-tracking re-armed); on failure every field keeps its value so
    /// the user can retry.
    pub fn complete_submit(&mut self, outcome: TicketResult<()>) {
        if self.state != SubmitState::Submitting {
            return;
        }
        match outcome {
            Ok(()) => {
                self.form.quantity.clear();
                self.form.notional.clear();
                self.form.price = fields::format_price(self.refs.mid);
                self.price_touched = false;
                self.state = SubmitState::Success {
                    message: SUCCESS_MESSAGE.to_string(),
                };
                tracing::info!(target: "ticket", asset = %self.asset, "order accepted");
            }
            Err(err) => {
                let message = match err {
                    TicketError::Submission(message) => message,
                    _ => GENERIC_FAILURE.to_string(),
                };
                tracing::warn!(
                    target: "ticket",
                    asset = %self.asset,
                    error = %message,
                    "order rejected"
                );
                self.state = SubmitState::Error { message };
            }
        }
    }

    /// Validate, build, send, report. The only suspension point in the
    /// session; while the call is in flight the ticket stays in
    /// `Submitting` and further submit triggers are ignored.
    pub async fn submit(&mut self, api: &dyn TradeApi) -> TicketResult<()> {
        let Some(order) = self.begin_submit()? else {
            return Ok(());
        };
        let outcome = api.submit_order(order).await;
        self.complete_submit(outcome);
        Ok(())
    }

    fn clear_terminal_state(&mut self) {
        if self.state.is_terminal() {
            self.state = SubmitState::Idle;
        }
    }
}
