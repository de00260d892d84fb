//! Market overview endpoints

use crate::transport::{QueryParams, Transport};
use fmp_core::{Endpoint, Result};
use fmp_models::market::{HistoricalSectorPerformance, MarketHours, Mover, SectorPerformance};
use std::sync::Arc;
use tracing::instrument;

/// Trading hours, top movers and sector performance
#[derive(Debug, Clone)]
pub struct MarketEndpoints {
  transport: Arc<Transport>,
}

impl MarketEndpoints {
  /// Create a new market endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get trading hours, holidays and open flags per exchange
  #[instrument(skip(self))]
  pub async fn trading_hours(&self) -> Result<Vec<MarketHours>> {
    self.transport.get(Endpoint::MarketHours, &[], QueryParams::new()).await
  }

  /// Get the most actively traded stocks
  #[instrument(skip(self))]
  pub async fn actives(&self) -> Result<Vec<Mover>> {
    self.transport.get(Endpoint::Actives, &[], QueryParams::new()).await
  }

  /// Get the biggest losers of the day
  #[instrument(skip(self))]
  pub async fn losers(&self) -> Result<Vec<Mover>> {
    self.transport.get(Endpoint::Losers, &[], QueryParams::new()).await
  }

  /// Get the biggest gainers of the day
  #[instrument(skip(self))]
  pub async fn gainers(&self) -> Result<Vec<Mover>> {
    self.transport.get(Endpoint::Gainers, &[], QueryParams::new()).await
  }

  /// Get today's performance per sector
  #[instrument(skip(self))]
  pub async fn sector_performance(&self) -> Result<Vec<SectorPerformance>> {
    self.transport.get(Endpoint::SectorsPerformance, &[], QueryParams::new()).await
  }

  /// Get daily per-sector performance history
  #[instrument(skip(self))]
  pub async fn historical_sector_performance(&self) -> Result<Vec<HistoricalSectorPerformance>> {
    self.transport.get(Endpoint::HistoricalSectorsPerformance, &[], QueryParams::new()).await
  }
}
