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

//! Company reference data and corporate actions

use serde::{Deserialize, Serialize};

/// Company profile
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
  pub symbol: String,
  pub price: Option<f64>,
  pub beta: Option<f64>,
  /// Average daily volume
  pub vol_avg: Option<f64>,
  /// Market capitalization
  pub mkt_cap: Option<f64>,
  /// Last dividend paid
  pub last_div: Option<f64>,
  /// 52 week range, e.g. "164.08-199.62"
  pub range: Option<String>,
  pub changes: Option<f64>,
  pub company_name: Option<String>,
  pub currency: Option<String>,
  pub cik: Option<String>,
  pub isin: Option<String>,
  pub cusip: Option<String>,
  pub exchange: Option<String>,
  pub exchange_short_name: Option<String>,
  pub industry: Option<String>,
  pub website: Option<String>,
  pub description: Option<String>,
  pub ceo: Option<String>,
  pub sector: Option<String>,
  pub country: Option<String>,
  /// Sent as a string by the API
  pub full_time_employees: Option<String>,
  pub phone: Option<String>,
  pub address: Option<String>,
  pub city: Option<String>,
  pub state: Option<String>,
  pub zip: Option<String>,
  pub dcf_diff: Option<f64>,
  pub dcf: Option<f64>,
  /// Logo URL
  pub image: Option<String>,
  pub ipo_date: Option<String>,
  pub default_image: Option<bool>,
  pub is_etf: Option<bool>,
  pub is_actively_trading: Option<bool>,
  pub is_adr: Option<bool>,
  pub is_fund: Option<bool>,
}

/// Executive or board member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyExecutive {
  pub title: Option<String>,
  pub name: String,
  /// Annual compensation
  pub pay: Option<f64>,
  pub currency_pay: Option<String>,
  pub gender: Option<String>,
  pub year_born: Option<i32>,
  pub title_since: Option<i64>,
}

/// Single dividend event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dividend {
  /// Ex-dividend date
  pub date: String,
  pub label: Option<String>,
  /// Split-adjusted dividend
  pub adj_dividend: Option<f64>,
  pub dividend: Option<f64>,
  pub record_date: Option<String>,
  pub payment_date: Option<String>,
  pub declaration_date: Option<String>,
}

/// Dividend history for one symbol
///
/// An unknown symbol comes back as `{}`, which decodes to an empty history.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DividendHistory {
  pub symbol: String,
  pub historical: Vec<Dividend>,
}

/// Single stock split
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Split {
  pub date: String,
  pub label: Option<String>,
  pub numerator: f64,
  pub denominator: f64,
}

impl Split {
  /// Shares held after the split per share held before it
  pub fn ratio(&self) -> Option<f64> {
    if self.denominator == 0.0 {
      None
    } else {
      Some(self.numerator / self.denominator)
    }
  }
}

/// Split history for one symbol
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitHistory {
  pub symbol: String,
  pub historical: Vec<Split>,
}
