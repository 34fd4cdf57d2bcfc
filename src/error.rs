use thiserror::Error;

use crate::ticket::fields::Field;

#[derive(Debug, Error)]
pub enum TicketError {
    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to fetch orderbook")]
    Fetch,

    #[error("{0}")]
    Submission(String),
}

pub type TicketResult<T> = Result<T, TicketError>;

/// Per-field submit-blocking errors. The `Display` strings are surfaced
/// to the user verbatim, inline next to the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Price must be greater than 0")]
    Price,

    #[error("Quantity must be greater than 0")]
    Quantity,

    #[error("Total must be greater than 0")]
    Notional,
}

impl ValidationError {
    pub fn for_field(field: Field) -> Self {
        match field {
            Field::Price => Self::Price,
            Field::Quantity => Self::Quantity,
            Field::Notional => Self::Notional,
        }
    }

    pub fn field(self) -> Field {
        match self {
            Self::Price => Field::Price,
            Self::Quantity => Field::Quantity,
            Self::Notional => Field::Notional,
        }
    }
}
