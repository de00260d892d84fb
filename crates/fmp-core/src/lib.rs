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

//! # fmp-core
//!
//! Configuration, error handling, endpoint descriptors and enumerated request
//! filters shared by the fmp-* crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};

/// The supported remote stock endpoints.
///
/// Each variant owns a fixed path template in which `%s` marks a positional
/// path segment. Templates are relative to the configured base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
  // Quotes
  QuoteShort,
  Quote,
  QuotesByExchange,

  // Symbol lookup
  Search,
  SearchTicker,
  SymbolsByExchange,
  SymbolList,

  // Company data
  CompanyProfile,
  CompanyExecutives,
  Dividends,
  Splits,

  // Prices
  HistoricalChart,
  HistoricalPriceFull,
  EodPrices,
  BatchEodPrices,

  // Index constituents
  Sp500Constituent,
  HistoricalSp500Constituent,
  DowJonesConstituent,
  HistoricalDowJonesConstituent,
  NasdaqConstituent,
  HistoricalNasdaqConstituent,

  // Market overview
  MarketHours,
  Actives,
  Losers,
  Gainers,
  SectorsPerformance,
  HistoricalSectorsPerformance,
}

impl Endpoint {
  /// Path template for the endpoint
  pub fn template(&self) -> &'static str {
    match self {
      Endpoint::QuoteShort => "/quote-short/%s",
      Endpoint::Quote => "/quote/%s",
      Endpoint::QuotesByExchange => "/quotes/%s",

      Endpoint::Search => "/search",
      Endpoint::SearchTicker => "/search-ticker",
      Endpoint::SymbolsByExchange => "/symbol/%s",
      Endpoint::SymbolList => "/stock/list",

      Endpoint::CompanyProfile => "/profile/%s",
      Endpoint::CompanyExecutives => "/key-executives/%s",
      Endpoint::Dividends => "/historical-price-full/stock_dividend/%s",
      Endpoint::Splits => "/historical-price-full/stock_split/%s",

      Endpoint::HistoricalChart => "/historical-chart/%s/%s",
      Endpoint::HistoricalPriceFull => "/historical-price-full/%s",
      Endpoint::EodPrices => "/batch-request-end-of-day-prices",
      Endpoint::BatchEodPrices => "/batch-request-end-of-day-prices/%s",

      Endpoint::Sp500Constituent => "/sp500_constituent",
      Endpoint::HistoricalSp500Constituent => "/historical/sp500_constituent",
      Endpoint::DowJonesConstituent => "/dowjones_constituent",
      Endpoint::HistoricalDowJonesConstituent => "/historical/dowjones_constituent",
      Endpoint::NasdaqConstituent => "/nasdaq_constituent",
      Endpoint::HistoricalNasdaqConstituent => "/historical/nasdaq_constituent",

      Endpoint::MarketHours => "/market-hours",
      Endpoint::Actives => "/actives",
      Endpoint::Losers => "/losers",
      Endpoint::Gainers => "/gainers",
      Endpoint::SectorsPerformance => "/sectors-performance",
      Endpoint::HistoricalSectorsPerformance => "/historical-sectors-performance",
    }
  }

  /// Number of `%s` segments the template expects
  pub fn segment_count(&self) -> usize {
    self.template().matches("%s").count()
  }

  /// Render the template, substituting `segments` positionally.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidParameter`] when the number of segments does not
  /// match the template or a segment is empty.
  pub fn path(&self, segments: &[&str]) -> Result<String> {
    let expected = self.segment_count();
    if segments.len() != expected {
      return Err(Error::InvalidParameter(format!(
        "{} expects {} path segment(s), got {}",
        self,
        expected,
        segments.len()
      )));
    }

    if segments.iter().any(|s| s.trim().is_empty()) {
      return Err(Error::InvalidParameter(format!("empty path segment for {}", self)));
    }

    if let Some(bad) = segments.iter().find(|s| !is_plain_segment(s)) {
      return Err(Error::InvalidParameter(format!(
        "path segment {:?} for {} contains reserved URL characters",
        bad, self
      )));
    }

    let mut path = String::with_capacity(
      self.template().len() + segments.iter().map(|s| s.len()).sum::<usize>(),
    );
    let mut rest = self.template();
    for segment in segments {
      if let Some(idx) = rest.find("%s") {
        path.push_str(&rest[..idx]);
        path.push_str(segment);
        rest = &rest[idx + 2..];
      }
    }
    path.push_str(rest);

    Ok(path)
  }
}

/// A segment must stay a single path component once the URL is parsed
fn is_plain_segment(segment: &str) -> bool {
  !segment.contains(|c: char| matches!(c, '/' | '\\' | '?' | '#' | '%'))
    && !matches!(segment.trim(), "." | "..")
}

impl std::fmt::Display for Endpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.template())
  }
}

/// Base URL for the fmpcloud API
pub const FMPCLOUD_BASE_URL: &str = "https://fmpcloud.io/api/v3";

/// Base URL for the Financial Modeling Prep API, which serves the same catalog
pub const FMP_BASE_URL: &str = "https://financialmodelingprep.com/api/v3";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
