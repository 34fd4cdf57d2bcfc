use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Price,
    Quantity,
    Notional,
}

/// The three decimal-string form fields. Each is independently editable;
/// after a completed reconciliation pass `notional == price * quantity`
/// within display rounding (price/notional at 2 decimals, quantity at 8).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFormFields {
    pub price: String,
    pub quantity: String,
    pub notional: String,
}

impl OrderFormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Price => &self.price,
            Field::Quantity => &self.quantity,
            Field::Notional => &self.notional,
        }
    }
}

/// Lenient read of a stored companion field: any finite decimal, no
/// positivity requirement. Last confirmed edit wins; it is not re-validated.
pub fn parse_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Strict read of an edited field: finite and strictly greater than zero.
pub fn parse_positive(raw: &str) -> Option<f64> {
    parse_value(raw).filter(|v| *v > 0.0)
}

pub fn validate(field: Field, raw: &str) -> Result<f64, ValidationError> {
    parse_positive(raw).ok_or_else(|| ValidationError::for_field(field))
}

pub fn format_price(value: f64) -> String {
    format!("{value:.2}")
}

pub fn format_quantity(value: f64) -> String {
    format!("{value:.8}")
}
