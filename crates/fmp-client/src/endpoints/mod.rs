//! Endpoint groups, one per area of the stock API

pub mod company;
pub mod indexes;
pub mod market;
pub mod prices;
pub mod quotes;
pub mod symbols;

use crate::transport::QueryParams;
use chrono::NaiveDate;
use fmp_core::types::format_date;
use fmp_core::{Error, Result};

/// Join symbols into one comma separated path segment
pub(crate) fn join_symbols(symbols: &[&str]) -> Result<String> {
  let cleaned: Vec<&str> = symbols.iter().map(|s| s.trim()).filter(|s| !s.is_empty()).collect();

  if cleaned.is_empty() {
    return Err(Error::InvalidParameter("at least one symbol is required".to_string()));
  }

  Ok(cleaned.join(","))
}

/// Insert a `YYYY-MM-DD` date parameter; `None` leaves the key out entirely
pub(crate) fn insert_date(params: &mut QueryParams, key: &str, date: Option<NaiveDate>) {
  if let Some(date) = date {
    params.insert(key.to_string(), format_date(date));
  }
}
