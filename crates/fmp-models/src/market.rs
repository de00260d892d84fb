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

//! Market overview models: trading hours, movers and sector performance

use crate::common::Numeric;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Trading hours and open/closed flags for an exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketHours {
  pub stock_exchange_name: String,
  pub stock_market_hours: Option<TradingSession>,
  #[serde(default)]
  pub stock_market_holidays: Vec<HolidaySchedule>,
  pub is_the_stock_market_open: Option<bool>,
  pub is_the_euronext_market_open: Option<bool>,
  pub is_the_forex_market_open: Option<bool>,
  pub is_the_crypto_market_open: Option<bool>,
}

/// Regular session opening and closing times, e.g. "09:30 a.m. ET"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingSession {
  pub opening_hour: String,
  pub closing_hour: String,
}

/// Holidays observed in one year, keyed by holiday name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolidaySchedule {
  pub year: i32,
  #[serde(flatten)]
  pub holidays: BTreeMap<String, serde_json::Value>,
}

/// Entry of the most active, gainers and losers listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mover {
  pub ticker: String,
  pub changes: Option<f64>,
  pub price: Option<Numeric>,
  /// e.g. "(+4.21%)" or 4.21 depending on the API vintage
  pub changes_percentage: Option<Numeric>,
  pub company_name: Option<String>,
}

/// Current day performance of a sector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorPerformance {
  pub sector: String,
  /// e.g. "0.75%"
  pub changes_percentage: Option<Numeric>,
}

/// One day of per-sector performance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalSectorPerformance {
  pub date: String,
  pub utilities_changes_percentage: Option<f64>,
  pub basic_materials_changes_percentage: Option<f64>,
  pub communication_services_changes_percentage: Option<f64>,
  // upstream misspells this key
  #[serde(alias = "conumerCyclicalChangesPercentage")]
  pub consumer_cyclical_changes_percentage: Option<f64>,
  pub energy_changes_percentage: Option<f64>,
  pub financial_services_changes_percentage: Option<f64>,
  pub healthcare_changes_percentage: Option<f64>,
  pub industrials_changes_percentage: Option<f64>,
  pub real_estate_changes_percentage: Option<f64>,
  pub technology_changes_percentage: Option<f64>,
  pub consumer_defensive_changes_percentage: Option<f64>,
}
