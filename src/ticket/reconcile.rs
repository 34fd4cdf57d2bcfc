use super::fields::{self, Field, OrderFormFields};

/// Applies one discrete edit and recomputes the dependent field under the
/// directed derivation rules:
///
/// - price edited  -> notional = quantity * price (2dp), if quantity is set
/// - quantity edited -> notional = quantity * price (2dp), if price is set
/// - notional edited -> quantity = notional / price (8dp), if price > 0
///
/// The edited value must itself validate (> 0) before anything derived is
/// recomputed; invalid or empty input is stored as-is and the dependent
/// field keeps its last value. Companion fields are read leniently (last
/// confirmed edit wins) and a companion that fails to parse is treated as
/// absent, so no NaN can propagate.
pub fn apply_edit(form: &mut OrderFormFields, edited: Field, input: &str) {
    match edited {
        Field::Price => {
            form.price = input.to_string();
            let Some(price) = fields::parse_positive(input) else {
                return;
            };
            if let Some(quantity) = fields::parse_value(&form.quantity) {
                form.notional = fields::format_price(quantity * price);
            }
        }
        Field::Quantity => {
            form.quantity = input.to_string();
            let Some(quantity) = fields::parse_positive(input) else {
                return;
            };
            if let Some(price) = fields::parse_value(&form.price) {
                form.notional = fields::format_price(quantity * price);
            }
        }
        Field::Notional => {
            form.notional = input.to_string();
            let Some(notional) = fields::parse_positive(input) else {
                return;
            };
            if let Some(price) = fields::parse_positive(&form.price) {
                form.quantity = fields::format_quantity(notional / price);
            }
        }
    }
}
