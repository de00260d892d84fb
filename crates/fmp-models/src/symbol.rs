//! Symbol search and listing models

use serde::{Deserialize, Serialize};

/// Search hit or exchange listing entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolMatch {
  pub symbol: String,
  pub name: Option<String>,
  pub currency: Option<String>,
  /// Full exchange name, e.g. "NasdaqGS"
  pub stock_exchange: Option<String>,
  /// Exchange code, e.g. "NASDAQ"
  pub exchange_short_name: Option<String>,
}

/// Entry of the full tradable symbol list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolListEntry {
  pub symbol: String,
  pub name: Option<String>,
  pub price: Option<f64>,
  pub exchange: Option<String>,
  pub exchange_short_name: Option<String>,
  /// Instrument type, e.g. "stock", "etf", "trust"
  #[serde(rename = "type")]
  pub security_type: Option<String>,
}
