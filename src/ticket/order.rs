use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Asset {
    Btc,
    Eth,
    Sol,
}

impl Asset {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Btc => "BTC",
            Self::Eth => "ETH",
            Self::Sol => "SOL",
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrderType {
    #[serde(rename = "LIMIT")]
    Limit,
}

/// Immutable order built at submit time from the validated form fields and
/// the active side. Never mutated after construction; discarded once the
/// API call resolves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub asset: Asset,
    pub side: OrderSide,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub quantity: f64,
    pub price: f64,
    pub notional: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn order_serializes_to_the_wire_shape() {
        let order = Order {
            asset: Asset::Btc,
            side: OrderSide::Buy,
            order_type: OrderType::Limit,
            quantity: 2.0,
            price: 100.0,
            notional: 200.0,
        };

        let value = serde_json::to_value(&order).expect("serialize");
        assert_eq!(
            value,
            json!({
                "asset": "BTC",
                "side": "BUY",
                "type": "LIMIT",
                "quantity": 2.0,
                "price": 100.0,
                "notional": 200.0,
            })
        );
    }

    #[test]
    fn sell_side_serializes_uppercase() {
        let value = serde_json::to_value(OrderSide::Sell).expect("serialize");
        assert_eq!(value, json!("SELL"));
    }

    #[test]
    fn asset_symbols_match_display() {
        for asset in [Asset::Btc, Asset::Eth, Asset::Sol] {
            assert_eq!(asset.to_string(), asset.symbol());
        }
    }
}
