//! Price series models: intraday bars, daily series and end-of-day snapshots

use serde::{Deserialize, Serialize};

/// Intraday OHLCV bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candle {
  /// Bar timestamp, "YYYY-MM-DD HH:MM:SS" in exchange time
  pub date: String,
  pub open: f64,
  pub low: f64,
  pub high: f64,
  pub close: f64,
  pub volume: f64,
}

impl Candle {
  /// High minus low
  pub fn range(&self) -> f64 {
    self.high - self.low
  }
}

/// Date/close point of a line series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLine {
  pub date: String,
  pub close: f64,
}

/// Daily close-only series
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyLineSeries {
  pub symbol: String,
  pub historical: Vec<DailyLine>,
}

/// Daily bar with change and volume details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCandle {
  pub date: String,
  pub open: f64,
  pub high: f64,
  pub low: f64,
  pub close: f64,
  pub adj_close: Option<f64>,
  pub volume: f64,
  pub unadjusted_volume: Option<f64>,
  pub change: Option<f64>,
  pub change_percent: Option<f64>,
  pub vwap: Option<f64>,
  /// Human readable date, e.g. "March 01, 24"
  pub label: Option<String>,
  pub change_over_time: Option<f64>,
}

/// Daily bar series for one symbol, most recent first
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyCandleSeries {
  pub symbol: String,
  pub historical: Vec<DailyCandle>,
}

impl DailyCandleSeries {
  /// Whether the series holds no bars
  pub fn is_empty(&self) -> bool {
    self.historical.is_empty()
  }
}

/// Body of a multi-symbol daily request
///
/// Several symbols come back wrapped in `historicalStockList`; a request that
/// resolves to one symbol gets the plain single-series object instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatchDailySeries {
  Batch {
    #[serde(rename = "historicalStockList")]
    historical_stock_list: Vec<DailyCandleSeries>,
  },
  Single(DailyCandleSeries),
}

impl BatchDailySeries {
  /// Flatten into one series per symbol; an empty `{}` body yields no series
  pub fn into_series(self) -> Vec<DailyCandleSeries> {
    match self {
      BatchDailySeries::Batch { historical_stock_list } => historical_stock_list,
      BatchDailySeries::Single(series) if series.symbol.is_empty() && series.is_empty() => Vec::new(),
      BatchDailySeries::Single(series) => vec![series],
    }
  }
}

/// End-of-day bar from the batch EOD endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EodCandle {
  pub symbol: String,
  pub date: String,
  pub open: f64,
  pub low: f64,
  pub high: f64,
  pub close: f64,
  pub adj_close: Option<f64>,
  pub volume: f64,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_candle_deserialization() {
    let json = r#"[{"date":"2024-03-01 15:59:00","open":179.55,"low":179.3,"high":179.7,"close":179.66,"volume":1021467}]"#;
    let candles: Vec<Candle> = serde_json::from_str(json).unwrap();
    assert_eq!(candles[0].date, "2024-03-01 15:59:00");
    assert!((candles[0].range() - 0.4).abs() < 1e-9);
  }

  #[test]
  fn test_candle_missing_price_is_error() {
    let json = r#"[{"date":"2024-03-01 15:59:00","open":179.55}]"#;
    assert!(serde_json::from_str::<Vec<Candle>>(json).is_err());
  }

  #[test]
  fn test_daily_candle_series() {
    let json = r#"{
      "symbol": "AAPL",
      "historical": [{
        "date": "2024-03-01",
        "open": 179.55,
        "high": 180.53,
        "low": 177.38,
        "close": 179.66,
        "adjClose": 179.66,
        "volume": 73563082,
        "unadjustedVolume": 73563082.0,
        "change": 0.11,
        "changePercent": 0.06126,
        "vwap": 179.19,
        "label": "March 01, 24",
        "changeOverTime": 0.0006126
      }]
    }"#;
    let series: DailyCandleSeries = serde_json::from_str(json).unwrap();
    assert_eq!(series.symbol, "AAPL");
    assert!(!series.is_empty());
    assert_eq!(series.historical[0].adj_close, Some(179.66));
    assert_eq!(series.historical[0].label.as_deref(), Some("March 01, 24"));
  }

  #[test]
  fn test_batch_envelope() {
    let json = r#"{"historicalStockList":[{"symbol":"AAPL","historical":[]},{"symbol":"MSFT","historical":[]}]}"#;
    let batch: BatchDailySeries = serde_json::from_str(json).unwrap();
    let symbols: Vec<_> = batch.into_series().into_iter().map(|s| s.symbol).collect();
    assert_eq!(symbols, vec!["AAPL", "MSFT"]);
  }

  #[test]
  fn test_batch_single_symbol_body() {
    let json = r#"{"symbol":"AAPL","historical":[{"date":"2024-03-01","open":179.55,"high":180.53,"low":177.38,"close":179.66,"volume":73563082}]}"#;
    let series = serde_json::from_str::<BatchDailySeries>(json).unwrap().into_series();
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].symbol, "AAPL");
    assert_eq!(series[0].historical[0].close, 179.66);
  }

  #[test]
  fn test_batch_empty_body() {
    let batch: BatchDailySeries = serde_json::from_str("{}").unwrap();
    assert!(batch.into_series().is_empty());
  }

  #[test]
  fn test_daily_line_series() {
    let json = r#"{"symbol":"AAPL","historical":[{"date":"2024-03-01","close":179.66}]}"#;
    let series: DailyLineSeries = serde_json::from_str(json).unwrap();
    assert_eq!(series.historical, vec![DailyLine { date: "2024-03-01".to_string(), close: 179.66 }]);
  }
}
