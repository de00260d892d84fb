//! Company reference data and corporate action endpoints

use crate::transport::{QueryParams, Transport};
use fmp_core::{Endpoint, Result};
use fmp_models::company::{CompanyExecutive, CompanyProfile, DividendHistory, SplitHistory};
use std::sync::Arc;
use tracing::instrument;

/// Company profile, executives, dividends and splits
#[derive(Debug, Clone)]
pub struct CompanyEndpoints {
  transport: Arc<Transport>,
}

impl CompanyEndpoints {
  /// Create a new company endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get general information about a company
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let profile = client.company().profile("AAPL").await?;
  /// println!("{:?}", profile.first().and_then(|p| p.ceo.as_deref()));
  /// ```
  #[instrument(skip(self))]
  pub async fn profile(&self, symbol: &str) -> Result<Vec<CompanyProfile>> {
    self.transport.get(Endpoint::CompanyProfile, &[symbol], QueryParams::new()).await
  }

  /// Get the executives and board members of a company
  #[instrument(skip(self))]
  pub async fn executives(&self, symbol: &str) -> Result<Vec<CompanyExecutive>> {
    self.transport.get(Endpoint::CompanyExecutives, &[symbol], QueryParams::new()).await
  }

  /// Get the dividend history of a symbol
  #[instrument(skip(self))]
  pub async fn dividends(&self, symbol: &str) -> Result<DividendHistory> {
    self.transport.get(Endpoint::Dividends, &[symbol], QueryParams::new()).await
  }

  /// Get the split history of a symbol
  #[instrument(skip(self))]
  pub async fn splits(&self, symbol: &str) -> Result<SplitHistory> {
    self.transport.get(Endpoint::Splits, &[symbol], QueryParams::new()).await
  }
}
