//! Price series endpoints
//!
//! This module provides access to:
//! - Intraday bars (1min, 5min, 15min, 30min, 1hour, 4hour)
//! - Daily series as close-only lines or full bars
//! - Daily bars by explicit date range or trailing day count
//! - Daily bars for several symbols at once
//! - End-of-day snapshots for a given date

use super::{insert_date, join_symbols};
use crate::transport::{QueryParams, Transport};
use chrono::NaiveDate;
use fmp_core::types::{format_date, SeriesType};
use fmp_core::{Endpoint, Result};
use fmp_models::price::{BatchDailySeries, Candle, DailyCandleSeries, DailyLineSeries, EodCandle};
use fmp_models::request::CandleRequest;
use std::sync::Arc;
use tracing::instrument;

/// Historical and end-of-day price endpoints
#[derive(Debug, Clone)]
pub struct PriceEndpoints {
  transport: Arc<Transport>,
}

impl PriceEndpoints {
  /// Create a new price endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get intraday bars
  ///
  /// `from` and `to` are only sent when set on the request.
  ///
  /// # Examples
  ///
  /// ```ignore
  /// use fmp_client::{CandlePeriod, CandleRequest};
  ///
  /// let request = CandleRequest::new("AAPL", CandlePeriod::FiveMinutes);
  /// let bars = client.prices().candles(&request).await?;
  /// ```
  #[instrument(skip(self))]
  pub async fn candles(&self, request: &CandleRequest) -> Result<Vec<Candle>> {
    let mut params = QueryParams::new();
    insert_date(&mut params, "from", request.from);
    insert_date(&mut params, "to", request.to);

    self
      .transport
      .get(Endpoint::HistoricalChart, &[request.period.as_str(), request.symbol.as_str()], params)
      .await
  }

  /// Get the daily close series in the given shape
  #[instrument(skip(self))]
  pub async fn daily_line(&self, symbol: &str, series_type: SeriesType) -> Result<DailyLineSeries> {
    let mut params = QueryParams::new();
    params.insert("serietype".to_string(), series_type.to_string());

    self.transport.get(Endpoint::HistoricalPriceFull, &[symbol], params).await
  }

  /// Get the full daily bar history with change and volume
  #[instrument(skip(self))]
  pub async fn daily(&self, symbol: &str) -> Result<DailyCandleSeries> {
    self.transport.get(Endpoint::HistoricalPriceFull, &[symbol], QueryParams::new()).await
  }

  /// Get daily bars between two dates, both inclusive
  #[instrument(skip(self))]
  pub async fn daily_range(
    &self,
    symbol: &str,
    from: NaiveDate,
    to: NaiveDate,
  ) -> Result<DailyCandleSeries> {
    let mut params = QueryParams::new();
    params.insert("from".to_string(), format_date(from));
    params.insert("to".to_string(), format_date(to));

    self.transport.get(Endpoint::HistoricalPriceFull, &[symbol], params).await
  }

  /// Get the last `days` daily bars
  #[instrument(skip(self))]
  pub async fn daily_last_n_days(&self, symbol: &str, days: u32) -> Result<DailyCandleSeries> {
    let mut params = QueryParams::new();
    params.insert("timeseries".to_string(), days.to_string());

    self.transport.get(Endpoint::HistoricalPriceFull, &[symbol], params).await
  }

  /// Get daily bars for several symbols in one request
  ///
  /// Either bound may be left out; the API then applies its default window.
  #[instrument(skip(self))]
  pub async fn daily_batch(
    &self,
    symbols: &[&str],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
  ) -> Result<Vec<DailyCandleSeries>> {
    let joined = join_symbols(symbols)?;
    let mut params = QueryParams::new();
    insert_date(&mut params, "from", from);
    insert_date(&mut params, "to", to);

    let batch: BatchDailySeries =
      self.transport.get(Endpoint::HistoricalPriceFull, &[joined.as_str()], params).await?;
    Ok(batch.into_series())
  }

  /// Get end-of-day bars for every symbol on a date
  #[instrument(skip(self))]
  pub async fn eod_candles(&self, date: NaiveDate) -> Result<Vec<EodCandle>> {
    let mut params = QueryParams::new();
    params.insert("date".to_string(), format_date(date));

    self.transport.get(Endpoint::EodPrices, &[], params).await
  }

  /// Get end-of-day bars for selected symbols on a date
  #[instrument(skip(self))]
  pub async fn batch_eod_candles(&self, symbols: &[&str], date: NaiveDate) -> Result<Vec<EodCandle>> {
    let joined = join_symbols(symbols)?;
    let mut params = QueryParams::new();
    params.insert("date".to_string(), format_date(date));

    self.transport.get(Endpoint::BatchEodPrices, &[joined.as_str()], params).await
  }
}
