use anyhow::Result;
use clap::{Args, Subcommand};
use fmp_client::{FmpClient, IndexFamily};

use crate::output::print_json;

#[derive(Args, Debug)]
pub struct IndexCommand {
  #[command(subcommand)]
  command: IndexSubcommands,
}

#[derive(Subcommand, Debug)]
enum IndexSubcommands {
  /// Current members (sp500, dowjones, nasdaq100)
  Constituents { index: IndexFamily },

  /// Membership changes over time
  History { index: IndexFamily },
}

pub async fn execute(cmd: IndexCommand, client: &FmpClient) -> Result<()> {
  let indexes = client.indexes();
  match cmd.command {
    IndexSubcommands::Constituents { index } => print_json(&indexes.constituents(index).await?),
    IndexSubcommands::History { index } => print_json(&indexes.historical_constituents(index).await?),
  }
}
