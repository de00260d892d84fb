//! Real-time quote endpoints

use super::join_symbols;
use crate::transport::{QueryParams, Transport};
use fmp_core::types::QuoteExchange;
use fmp_core::{Endpoint, Result};
use fmp_models::quote::{Quote, QuoteShort};
use std::sync::Arc;
use tracing::instrument;

/// Quote endpoints for single symbols, symbol batches and whole exchanges
#[derive(Debug, Clone)]
pub struct QuoteEndpoints {
  transport: Arc<Transport>,
}

impl QuoteEndpoints {
  /// Create a new quote endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get the short real-time quote (price and volume) for a symbol
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let quote = client.quotes().quote_short("AAPL").await?;
  /// ```
  #[instrument(skip(self))]
  pub async fn quote_short(&self, symbol: &str) -> Result<Vec<QuoteShort>> {
    self.transport.get(Endpoint::QuoteShort, &[symbol], QueryParams::new()).await
  }

  /// Get the full real-time quote for a symbol
  #[instrument(skip(self))]
  pub async fn quote(&self, symbol: &str) -> Result<Vec<Quote>> {
    self.transport.get(Endpoint::Quote, &[symbol], QueryParams::new()).await
  }

  /// Get full real-time quotes for several symbols in one request
  ///
  /// # Arguments
  ///
  /// * `symbols` - Tickers, sent comma joined in the path (e.g. `AAPL,MSFT`)
  ///
  /// # Errors
  ///
  /// Returns `Error::InvalidParameter` for an empty symbol list.
  #[instrument(skip(self))]
  pub async fn batch_quote(&self, symbols: &[&str]) -> Result<Vec<Quote>> {
    let joined = join_symbols(symbols)?;
    self.transport.get(Endpoint::Quote, &[joined.as_str()], QueryParams::new()).await
  }

  /// Get quotes for every instrument of a market group
  #[instrument(skip(self))]
  pub async fn quotes_by_exchange(&self, exchange: QuoteExchange) -> Result<Vec<Quote>> {
    self.transport.get(Endpoint::QuotesByExchange, &[exchange.as_str()], QueryParams::new()).await
  }
}
