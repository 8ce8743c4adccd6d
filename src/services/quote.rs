//! Quote-fetch collaborator for TWSE/TPEx tickers.
//!
//! Exchange routing lives here, never in the gate: a lookup tries the
//! listed-market channel first and falls back to the over-the-counter
//! channel when the exchange returns an empty result. A fetch either
//! yields a complete `Quote` or fails as a unit; the gate never sees
//! partial data.

use std::collections::HashMap;

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::models::market::Quote;

const DEFAULT_MIS_BASE_URL: &str = "https://mis.twse.com.tw";
const QUOTE_CHANNELS: [&str; 2] = ["tse", "otc"];

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("ticker {0} not found on any exchange channel")]
    NotFound(String),
    #[error("quote for {ticker} has no tradable {field} yet")]
    FieldUnavailable {
        ticker: String,
        field: &'static str,
    },
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

#[async_trait]
pub trait QuoteFetcher: Send + Sync {
    async fn fetch(&self, ticker: &str) -> Result<Quote, QuoteError>;
}

/// Wire shape of the MIS `getStockInfo.jsp` payload. Price fields arrive
/// as strings and read `"-"` until the first trade of the session.
#[derive(Debug, Deserialize)]
struct MisResponse {
    #[serde(rename = "msgArray", default)]
    msg_array: Vec<MisEntry>,
}

#[derive(Debug, Deserialize)]
struct MisEntry {
    #[serde(rename = "n", default)]
    name: String,
    #[serde(rename = "z", default)]
    last: String,
    #[serde(rename = "o", default)]
    open: String,
    #[serde(rename = "y", default)]
    prev_close: String,
}

fn parse_price(raw: &str) -> Option<f64> {
    if raw.is_empty() || raw == "-" {
        return None;
    }
    raw.parse().ok()
}

/// Quote fetcher backed by the TWSE market information system.
pub struct MisQuoteFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl MisQuoteFetcher {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_MIS_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn fetch_channel(
        &self,
        channel: &str,
        ticker: &str,
    ) -> Result<Option<MisEntry>, QuoteError> {
        let url = format!(
            "{}/stock/api/getStockInfo.jsp?ex_ch={}_{}.tw&json=1&delay=0",
            self.base_url, channel, ticker
        );

        let send = || async {
            self.client
                .get(&url)
                .send()
                .await?
                .error_for_status()?
                .json::<MisResponse>()
                .await
        };
        let response = send
            .retry(ExponentialBuilder::default().with_max_times(2))
            .await?;

        Ok(response.msg_array.into_iter().next())
    }

    fn quote_from_entry(ticker: &str, entry: MisEntry) -> Result<Quote, QuoteError> {
        let require = |raw: &str, field: &'static str| {
            parse_price(raw).ok_or_else(|| QuoteError::FieldUnavailable {
                ticker: ticker.to_string(),
                field,
            })
        };
        Ok(Quote {
            current: require(&entry.last, "current price")?,
            open: require(&entry.open, "open price")?,
            last_close: require(&entry.prev_close, "last close")?,
            name: entry.name,
        })
    }
}

impl Default for MisQuoteFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteFetcher for MisQuoteFetcher {
    async fn fetch(&self, ticker: &str) -> Result<Quote, QuoteError> {
        for channel in QUOTE_CHANNELS {
            if let Some(entry) = self.fetch_channel(channel, ticker).await? {
                debug!(ticker, channel, "quote resolved");
                return Self::quote_from_entry(ticker, entry);
            }
        }
        Err(QuoteError::NotFound(ticker.to_string()))
    }
}

/// Last-known-good quote store owned by the collaborator. On a failed
/// refresh the previous quote is served unchanged, so callers never have
/// to patch partial data into a snapshot.
pub struct CachedQuoteService {
    fetcher: Box<dyn QuoteFetcher>,
    cache: RwLock<HashMap<String, Quote>>,
}

impl CachedQuoteService {
    pub fn new(fetcher: Box<dyn QuoteFetcher>) -> Self {
        Self {
            fetcher,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Freshest quote available: a live fetch when the upstream answers,
    /// the cached quote when it does not, an error only when there is
    /// nothing to fall back to.
    pub async fn latest(&self, ticker: &str) -> Result<Quote, QuoteError> {
        match self.fetcher.fetch(ticker).await {
            Ok(quote) => {
                let mut cache = self.cache.write().await;
                cache.insert(ticker.to_string(), quote.clone());
                Ok(quote)
            }
            Err(err) => {
                let cache = self.cache.read().await;
                match cache.get(ticker) {
                    Some(previous) => {
                        warn!(ticker, error = %err, "quote refresh failed, serving cached quote");
                        Ok(previous.clone())
                    }
                    None => Err(err),
                }
            }
        }
    }

    pub async fn cached(&self, ticker: &str) -> Option<Quote> {
        self.cache.read().await.get(ticker).cloned()
    }
}
