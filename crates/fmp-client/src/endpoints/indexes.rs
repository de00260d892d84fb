//! Index constituent endpoints

use crate::transport::{QueryParams, Transport};
use fmp_core::types::IndexFamily;
use fmp_core::Result;
use fmp_models::index::{IndexChange, IndexConstituent};
use std::sync::Arc;
use tracing::instrument;

/// S&P 500, Dow Jones and Nasdaq 100 membership
#[derive(Debug, Clone)]
pub struct IndexEndpoints {
  transport: Arc<Transport>,
}

impl IndexEndpoints {
  /// Create a new index endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get the current constituents of an index
  #[instrument(skip(self))]
  pub async fn constituents(&self, index: IndexFamily) -> Result<Vec<IndexConstituent>> {
    self.transport.get(index.constituents_endpoint(), &[], QueryParams::new()).await
  }

  /// Get historical additions to and removals from an index
  #[instrument(skip(self))]
  pub async fn historical_constituents(&self, index: IndexFamily) -> Result<Vec<IndexChange>> {
    self.transport.get(index.historical_constituents_endpoint(), &[], QueryParams::new()).await
  }
}
