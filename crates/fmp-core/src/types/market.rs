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

//! Exchange and index selectors used in endpoint paths and filters.

use crate::error::{Error, Result};
use crate::Endpoint;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Market groups accepted by the exchange quote endpoint and the search
/// `exchange` filter. Rendered lower case on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteExchange {
  Nasdaq,
  Nyse,
  /// Toronto Stock Exchange
  Tsx,
  Euronext,
  MutualFund,
  Etf,
  Amex,
  Index,
  Commodity,
  Forex,
  Crypto,
}

impl QuoteExchange {
  /// Every accepted market group
  pub const ALL: [QuoteExchange; 11] = [
    QuoteExchange::Nasdaq,
    QuoteExchange::Nyse,
    QuoteExchange::Tsx,
    QuoteExchange::Euronext,
    QuoteExchange::MutualFund,
    QuoteExchange::Etf,
    QuoteExchange::Amex,
    QuoteExchange::Index,
    QuoteExchange::Commodity,
    QuoteExchange::Forex,
    QuoteExchange::Crypto,
  ];

  /// Wire code for the market group
  pub fn as_str(&self) -> &'static str {
    match self {
      QuoteExchange::Nasdaq => "nasdaq",
      QuoteExchange::Nyse => "nyse",
      QuoteExchange::Tsx => "tsx",
      QuoteExchange::Euronext => "euronext",
      QuoteExchange::MutualFund => "mutual_fund",
      QuoteExchange::Etf => "etf",
      QuoteExchange::Amex => "amex",
      QuoteExchange::Index => "index",
      QuoteExchange::Commodity => "commodity",
      QuoteExchange::Forex => "forex",
      QuoteExchange::Crypto => "crypto",
    }
  }
}

impl std::fmt::Display for QuoteExchange {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for QuoteExchange {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let wanted = s.trim().to_lowercase().replace('-', "_");
    QuoteExchange::ALL
      .into_iter()
      .find(|e| e.as_str() == wanted)
      .ok_or_else(|| Error::InvalidParameter(format!("unknown exchange: {}", s)))
  }
}

/// Exchange codes accepted by the symbol listing endpoint. Rendered upper case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SymbolExchange {
  Nyse,
  Nasdaq,
  Amex,
  Tsx,
  Euronext,
  Etf,
  MutualFund,
  Index,
  Commodity,
  Forex,
  Crypto,
}

impl SymbolExchange {
  /// Every accepted exchange code
  pub const ALL: [SymbolExchange; 11] = [
    SymbolExchange::Nyse,
    SymbolExchange::Nasdaq,
    SymbolExchange::Amex,
    SymbolExchange::Tsx,
    SymbolExchange::Euronext,
    SymbolExchange::Etf,
    SymbolExchange::MutualFund,
    SymbolExchange::Index,
    SymbolExchange::Commodity,
    SymbolExchange::Forex,
    SymbolExchange::Crypto,
  ];

  /// Wire code for the exchange
  pub fn as_str(&self) -> &'static str {
    match self {
      SymbolExchange::Nyse => "NYSE",
      SymbolExchange::Nasdaq => "NASDAQ",
      SymbolExchange::Amex => "AMEX",
      SymbolExchange::Tsx => "TSX",
      SymbolExchange::Euronext => "EURONEXT",
      SymbolExchange::Etf => "ETF",
      SymbolExchange::MutualFund => "MUTUAL_FUND",
      SymbolExchange::Index => "INDEX",
      SymbolExchange::Commodity => "COMMODITY",
      SymbolExchange::Forex => "FOREX",
      SymbolExchange::Crypto => "CRYPTO",
    }
  }
}

impl std::fmt::Display for SymbolExchange {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for SymbolExchange {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let wanted = s.trim().to_uppercase().replace('-', "_");
    SymbolExchange::ALL
      .into_iter()
      .find(|e| e.as_str() == wanted)
      .ok_or_else(|| Error::InvalidParameter(format!("unknown exchange: {}", s)))
  }
}

/// Index families with constituent listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexFamily {
  /// S&P 500
  Sp500,
  /// Dow Jones Industrial Average
  DowJones,
  /// Nasdaq 100
  Nasdaq100,
}

impl IndexFamily {
  /// Every supported index family
  pub const ALL: [IndexFamily; 3] = [IndexFamily::Sp500, IndexFamily::DowJones, IndexFamily::Nasdaq100];

  /// Identifier for the index family
  pub fn as_str(&self) -> &'static str {
    match self {
      IndexFamily::Sp500 => "sp500",
      IndexFamily::DowJones => "dowjones",
      IndexFamily::Nasdaq100 => "nasdaq100",
    }
  }

  /// Endpoint listing the current constituents
  pub fn constituents_endpoint(&self) -> Endpoint {
    match self {
      IndexFamily::Sp500 => Endpoint::Sp500Constituent,
      IndexFamily::DowJones => Endpoint::DowJonesConstituent,
      IndexFamily::Nasdaq100 => Endpoint::NasdaqConstituent,
    }
  }

  /// Endpoint listing historical additions and removals
  pub fn historical_constituents_endpoint(&self) -> Endpoint {
    match self {
      IndexFamily::Sp500 => Endpoint::HistoricalSp500Constituent,
      IndexFamily::DowJones => Endpoint::HistoricalDowJonesConstituent,
      IndexFamily::Nasdaq100 => Endpoint::HistoricalNasdaqConstituent,
    }
  }
}

impl std::fmt::Display for IndexFamily {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for IndexFamily {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let wanted = s.trim().to_lowercase();
    IndexFamily::ALL
      .into_iter()
      .find(|i| i.as_str() == wanted)
      .ok_or_else(|| Error::InvalidParameter(format!("unknown index family: {}", s)))
  }
}
