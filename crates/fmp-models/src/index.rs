//! Index constituent models

use serde::{Deserialize, Serialize};

/// Current member of an index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexConstituent {
  pub symbol: String,
  pub name: Option<String>,
  pub sector: Option<String>,
  pub sub_sector: Option<String>,
  pub head_quarter: Option<String>,
  pub date_first_added: Option<String>,
  pub cik: Option<String>,
  pub founded: Option<String>,
}

/// Historical addition/removal event of an index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexChange {
  /// Effective date, "YYYY-MM-DD"
  pub date: String,
  /// Ticker added on `date`
  pub symbol: String,
  /// Long form date, e.g. "June 21, 2021"
  pub date_added: Option<String>,
  pub added_security: Option<String>,
  pub removed_ticker: Option<String>,
  pub removed_security: Option<String>,
  pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_constituent_deserialization() {
    let json = r#"[{"symbol":"MMM","name":"3M","sector":"Industrials","subSector":"Industrial Conglomerates","headQuarter":"Saint Paul, Minnesota","dateFirstAdded":"1976-08-09","cik":"0000066740","founded":"1902"}]"#;
    let list: Vec<IndexConstituent> = serde_json::from_str(json).unwrap();
    assert_eq!(list[0].sub_sector.as_deref(), Some("Industrial Conglomerates"));
    assert_eq!(list[0].head_quarter.as_deref(), Some("Saint Paul, Minnesota"));
  }

  #[test]
  fn test_index_change_deserialization() {
    let json = r#"[{"dateAdded":"March 18, 2024","addedSecurity":"Super Micro Computer","removedTicker":"WHR","removedSecurity":"Whirlpool Corporation","date":"2024-03-18","symbol":"SMCI","reason":"Market capitalization change."}]"#;
    let list: Vec<IndexChange> = serde_json::from_str(json).unwrap();
    assert_eq!(list[0].symbol, "SMCI");
    assert_eq!(list[0].removed_ticker.as_deref(), Some("WHR"));
  }
}
