use anyhow::Result;
use clap::{Args, Subcommand};
use fmp_client::FmpClient;

use crate::output::print_json;

#[derive(Args, Debug)]
pub struct CompanyCommand {
  #[command(subcommand)]
  command: CompanySubcommands,
}

#[derive(Subcommand, Debug)]
enum CompanySubcommands {
  /// Company profile
  Profile { symbol: String },

  /// Key executives
  Executives { symbol: String },

  /// Dividend history
  Dividends { symbol: String },

  /// Stock split history
  Splits { symbol: String },
}

pub async fn execute(cmd: CompanyCommand, client: &FmpClient) -> Result<()> {
  let company = client.company();
  match cmd.command {
    CompanySubcommands::Profile { symbol } => print_json(&company.profile(&symbol).await?),
    CompanySubcommands::Executives { symbol } => print_json(&company.executives(&symbol).await?),
    CompanySubcommands::Dividends { symbol } => print_json(&company.dividends(&symbol).await?),
    CompanySubcommands::Splits { symbol } => print_json(&company.splits(&symbol).await?),
  }
}
