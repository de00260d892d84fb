use anyhow::Result;
use clap::{Args, Subcommand};
use fmp_client::FmpClient;

use crate::output::print_json;

#[derive(Args, Debug)]
pub struct MarketCommand {
  #[command(subcommand)]
  command: MarketSubcommands,
}

#[derive(Subcommand, Debug)]
enum MarketSubcommands {
  /// Exchange trading hours and holidays
  Hours,
  /// Most active stocks
  Actives,
  /// Biggest losers
  Losers,
  /// Biggest gainers
  Gainers,
  /// Current sector performance
  Sectors,
  /// Daily sector performance history
  SectorHistory,
}

pub async fn execute(cmd: MarketCommand, client: &FmpClient) -> Result<()> {
  let market = client.market();
  match cmd.command {
    MarketSubcommands::Hours => print_json(&market.trading_hours().await?),
    MarketSubcommands::Actives => print_json(&market.actives().await?),
    MarketSubcommands::Losers => print_json(&market.losers().await?),
    MarketSubcommands::Gainers => print_json(&market.gainers().await?),
    MarketSubcommands::Sectors => print_json(&market.sector_performance().await?),
    MarketSubcommands::SectorHistory => print_json(&market.historical_sector_performance().await?),
  }
}
