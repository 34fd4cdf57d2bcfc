use futures_util::future::BoxFuture;
use serde::Deserialize;

use crate::config::AppConfig;
use crate::error::{TicketError, TicketResult};
use crate::ticket::order::{Asset, Order};

/// Order-book snapshot as returned by the backend. The shape is owned by
/// the backend; this crate passes it through untouched.
pub type OrderBook = serde_json::Value;

/// Stateless request/response client for the order-book/trade backend.
/// No retry, caching, or backoff lives here; that is the caller's call.
#[derive(Debug, Clone)]
pub struct TradeApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl TradeApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(cfg: &AppConfig) -> Self {
        Self::new(cfg.endpoints.trade_api_base_url.clone())
    }

    pub async fn fetch_order_book(&self, asset: Asset) -> TicketResult<OrderBook> {
        let url = format!(
            "{}/orderbook/{}",
            self.base_url.trim_end_matches('/'),
            asset
        );

        let resp = self.http.get(url).send().await?;
        if !resp.status().is_success() {
            tracing::warn!(
                target: "trade_api",
                asset = %asset,
                status = %resp.status(),
                "orderbook fetch failed"
            );
            return Err(TicketError::Fetch);
        }

        Ok(resp.json::<OrderBook>().await?)
    }

    pub async fn submit_order(&self, order: &Order) -> TicketResult<()> {
        let url = format!("{}/trade", self.base_url.trim_end_matches('/'));

        let resp = self.http.post(url).json(order).send().await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let message = resp
                .json::<TradeErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| "Order failed".to_string());
            tracing::warn!(
                target: "trade_api",
                asset = %order.asset,
                status = %status,
                error = %message,
                "trade submit rejected"
            );
            return Err(TicketError::Submission(message));
        }

        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
struct TradeErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Seam between the submission controller and the wire. The concrete
/// client clones itself into the future; tests swap in counters/mocks.
pub trait TradeApi: Send + Sync {
    fn submit_order(&self, order: Order) -> BoxFuture<'static, TicketResult<()>>;
}

impl TradeApi for TradeApiClient {
    fn submit_order(&self, order: Order) -> BoxFuture<'static, TicketResult<()>> {
        let client = self.clone();
        Box::pin(async move { client.submit_order(&order).await })
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    use super::*;
    use crate::ticket::order::{OrderSide, OrderType};

    /// Minimal one-connection HTTP responder; hands the request head back
    /// through the channel so tests can assert method, path, and body.
    async fn canned_server(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let mut raw = Vec::with_capacity(4096);
            let mut chunk = [0u8; 1024];
            loop {
                match socket.read(&mut chunk).await {
                    Ok(0) => break,
                    Ok(n) => {
                        raw.extend_from_slice(&chunk[..n]);
                        if request_complete(&raw) {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }
            let _ = tx.send(String::from_utf8_lossy(&raw).into_owned());

            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });

        (format!("http://{addr}"), rx)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let Some(headers_end) = raw.windows(4).position(|w| w == b"\r\n\r\n") else {
            return false;
        };
        let headers = String::from_utf8_lossy(&raw[..headers_end]);
        let content_length = headers
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        raw.len() >= headers_end + 4 + content_length
    }

    fn sample_order() -> Order {
        Order {
            asset: Asset::Btc,
            side: OrderSide::Buy,
            order_type: OrderType::Limit,
            quantity: 2.0,
            price: 100.0,
            notional: 200.0,
        }
    }

    #[tokio::test]
    async fn fetch_order_book_returns_the_body_on_success() {
        let (base, request) =
            canned_server("200 OK", r#"{"bids":[["100.0","1"]],"asks":[]}"#).await;
        let client = TradeApiClient::new(base);

        let book = client.fetch_order_book(Asset::Btc).await.expect("fetch");
        assert_eq!(book["bids"][0][0], "100.0");

        let head = request.await.expect("request");
        assert!(head.starts_with("GET /orderbook/BTC HTTP/1.1"), "{head}");
    }

    #[tokio::test]
    async fn fetch_order_book_maps_failure_statuses() {
        let (base, _request) = canned_server("500 Internal Server Error", "oops").await;
        let client = TradeApiClient::new(base);

        let err = client.fetch_order_book(Asset::Eth).await.unwrap_err();
        assert!(matches!(err, TicketError::Fetch));
        assert_eq!(err.to_string(), "Failed to fetch orderbook");
    }

    #[tokio::test]
    async fn submit_order_posts_the_full_payload() {
        let (base, request) = canned_server("200 OK", "{}").await;
        // trailing slash on the base URL is tolerated
        let client = TradeApiClient::new(format!("{base}/"));

        client.submit_order(&sample_order()).await.expect("submit");

        let head = request.await.expect("request");
        assert!(head.starts_with("POST /trade HTTP/1.1"), "{head}");
        let body = head.split("\r\n\r\n").nth(1).expect("body");
        let payload: serde_json::Value = serde_json::from_str(body).expect("json body");
        assert_eq!(payload["asset"], "BTC");
        assert_eq!(payload["side"], "BUY");
        assert_eq!(payload["type"], "LIMIT");
        assert_eq!(payload["quantity"], 2.0);
        assert_eq!(payload["price"], 100.0);
        assert_eq!(payload["notional"], 200.0);
    }

    #[tokio::test]
    async fn submit_order_surfaces_the_server_error_message() {
        let (base, _request) =
            canned_server("400 Bad Request", r#"{"error":"insufficient balance"}"#).await;
        let client = TradeApiClient::new(base);

        let err = client.submit_order(&sample_order()).await.unwrap_err();
        match err {
            TicketError::Submission(message) => assert_eq!(message, "insufficient balance"),
            other => panic!("expected submission error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn submit_order_falls_back_to_the_generic_message() {
        let (base, _request) = canned_server("500 Internal Server Error", "{}").await;
        let client = TradeApiClient::new(base);

        let err = client.submit_order(&sample_order()).await.unwrap_err();
        match err {
            TicketError::Submission(message) => assert_eq!(message, "Order failed"),
            other => panic!("expected submission error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn from_config_uses_the_configured_base_url() {
        let cfg = AppConfig::default();
        let client = TradeApiClient::from_config(&cfg);
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn error_body_parses_with_and_without_a_message() {
        let body: TradeErrorBody = serde_json::from_str(r#"{"error":"nope"}"#).expect("parse");
        assert_eq!(body.error.as_deref(), Some("nope"));

        let body: TradeErrorBody = serde_json::from_str("{}").expect("parse");
        assert!(body.error.is_none());
    }
}
