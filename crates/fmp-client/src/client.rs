/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Top-level client handing out endpoint groups

use crate::endpoints::{
  company::CompanyEndpoints, indexes::IndexEndpoints, market::MarketEndpoints,
  prices::PriceEndpoints, quotes::QuoteEndpoints, symbols::SymbolEndpoints,
};

use crate::transport::Transport;
use fmp_core::{Config, Result};
use std::sync::Arc;

/// Main fmpcloud API client
///
/// Provides access to the stock endpoints through endpoint groups that share
/// one transport. The client is cheap to clone and holds no mutable state, so
/// one instance can serve any number of concurrent tasks, and several clients
/// with different keys can live side by side.
///
/// # Examples
///
/// ```ignore
/// use fmp_client::FmpClient;
/// use fmp_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = FmpClient::new(Config::from_env()?)?;
///
///     let quotes = client.quotes().quote("AAPL").await?;
///     println!("Apple price: {:?}", quotes.first().and_then(|q| q.price));
///
///     let gainers = client.market().gainers().await?;
///     println!("{} gainers today", gainers.len());
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct FmpClient {
  transport: Arc<Transport>,
}

impl FmpClient {
  /// Create a new fmpcloud API client
  ///
  /// # Arguments
  ///
  /// * `config` - Configuration containing API key, base URL and timeout
  ///
  /// # Errors
  ///
  /// Returns an error if the configuration is invalid or the HTTP client
  /// cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    let transport = Arc::new(Transport::new(&config)?);
    Ok(Self { transport })
  }

  /// Create a client from `FMP_API_KEY`, `FMP_BASE_URL` and `FMP_TIMEOUT_SECS`
  ///
  /// # Errors
  ///
  /// Returns an error if the API key is missing or a value is invalid.
  pub fn from_env() -> Result<Self> {
    Self::new(Config::from_env()?)
  }

  /// Get access to real-time quote endpoints
  pub fn quotes(&self) -> QuoteEndpoints {
    QuoteEndpoints::new(self.transport.clone())
  }

  /// Get access to symbol search and listing endpoints
  pub fn symbols(&self) -> SymbolEndpoints {
    SymbolEndpoints::new(self.transport.clone())
  }

  /// Get access to company profile, executive, dividend and split endpoints
  pub fn company(&self) -> CompanyEndpoints {
    CompanyEndpoints::new(self.transport.clone())
  }

  /// Get access to intraday, daily and end-of-day price endpoints
  pub fn prices(&self) -> PriceEndpoints {
    PriceEndpoints::new(self.transport.clone())
  }

  /// Get access to index constituent endpoints
  pub fn indexes(&self) -> IndexEndpoints {
    IndexEndpoints::new(self.transport.clone())
  }

  /// Get access to trading hours, movers and sector performance endpoints
  pub fn market(&self) -> MarketEndpoints {
    MarketEndpoints::new(self.transport.clone())
  }

  /// Base URL requests are sent to
  pub fn base_url(&self) -> &str {
    self.transport.base_url()
  }
}

impl std::fmt::Debug for FmpClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("FmpClient").field("transport", &self.transport).finish()
  }
}
