//! Request filter types shared by the price endpoints

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Wire format for every date query parameter
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Render a date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
  date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> Result<NaiveDate> {
  Ok(NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)?)
}

/// Bar period for the intraday chart endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandlePeriod {
  #[serde(rename = "1min")]
  OneMinute,
  #[serde(rename = "5min")]
  FiveMinutes,
  #[serde(rename = "15min")]
  FifteenMinutes,
  #[serde(rename = "30min")]
  ThirtyMinutes,
  #[serde(rename = "1hour")]
  OneHour,
  #[serde(rename = "4hour")]
  FourHours,
}

impl CandlePeriod {
  /// All periods the chart endpoint accepts
  pub const ALL: [CandlePeriod; 6] = [
    CandlePeriod::OneMinute,
    CandlePeriod::FiveMinutes,
    CandlePeriod::FifteenMinutes,
    CandlePeriod::ThirtyMinutes,
    CandlePeriod::OneHour,
    CandlePeriod::FourHours,
  ];

  /// Path segment for the period
  pub fn as_str(&self) -> &'static str {
    match self {
      CandlePeriod::OneMinute => "1min",
      CandlePeriod::FiveMinutes => "5min",
      CandlePeriod::FifteenMinutes => "15min",
      CandlePeriod::ThirtyMinutes => "30min",
      CandlePeriod::OneHour => "1hour",
      CandlePeriod::FourHours => "4hour",
    }
  }
}

impl std::fmt::Display for CandlePeriod {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for CandlePeriod {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    CandlePeriod::ALL
      .into_iter()
      .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
      .ok_or_else(|| Error::InvalidParameter(format!("unknown candle period: {}", s)))
  }
}

/// Series shape selector for the daily price endpoint (`serietype`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
  /// Date and close only
  #[default]
  Line,
}

impl SeriesType {
  /// Query value for the series type
  pub fn as_str(&self) -> &'static str {
    match self {
      SeriesType::Line => "line",
    }
  }
}

impl std::fmt::Display for SeriesType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for SeriesType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_lowercase().as_str() {
      "line" => Ok(SeriesType::Line),
      _ => Err(Error::InvalidParameter(format!("unknown series type: {}", s))),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_format_date() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    assert_eq!(format_date(date), "2024-03-05");
  }

  #[test]
  fn test_parse_date() {
    assert_eq!(parse_date("2023-12-31").unwrap(), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    assert!(matches!(parse_date("12/31/2023"), Err(Error::ParseDate(_))));
  }

  #[test]
  fn test_candle_period_round_trip() {
    for period in CandlePeriod::ALL {
      assert_eq!(period.as_str().parse::<CandlePeriod>().unwrap(), period);
    }
    assert_eq!("1HOUR".parse::<CandlePeriod>().unwrap(), CandlePeriod::OneHour);
    assert!("2min".parse::<CandlePeriod>().is_err());
  }

  #[test]
  fn test_series_type() {
    assert_eq!(SeriesType::default().to_string(), "line");
    assert_eq!("Line".parse::<SeriesType>().unwrap(), SeriesType::Line);
    assert!(matches!("bar".parse::<SeriesType>(), Err(Error::InvalidParameter(_))));
  }
}
