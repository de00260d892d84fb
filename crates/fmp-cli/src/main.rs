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


use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use fmp_client::FmpClient;
use tracing::debug;

mod commands;
use commands::{
  company::CompanyCommand, index::IndexCommand, market::MarketCommand, prices::PriceCommand,
  quote::QuoteCommand, symbols::SymbolCommand,
};

mod config;
mod output;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "fmp")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// API key
  #[arg(long, global = true, env = "FMP_API_KEY", hide_env_values = true)]
  api_key: Option<String>,

  /// API base URL
  #[arg(long, global = true, env = "FMP_BASE_URL")]
  base_url: Option<String>,

  /// Request timeout in seconds
  #[arg(long, global = true, env = "FMP_TIMEOUT_SECS")]
  timeout: Option<u64>,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Real-time quotes
  Quote(QuoteCommand),
  /// Symbol search and listings
  Symbols(SymbolCommand),
  /// Company profile, executives and corporate actions
  Company(CompanyCommand),
  /// Intraday and daily price history
  Prices(PriceCommand),
  /// Index constituents
  Index(IndexCommand),
  /// Market hours, movers and sector performance
  Market(MarketCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
  dotenv().ok();

  let cli = Cli::parse();

  let log_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt().with_env_filter(log_level).with_writer(std::io::stderr).init();

  let config = config::build(cli.api_key, cli.base_url, cli.timeout)?;
  debug!("Using base URL {}", config.base_url);
  let client = FmpClient::new(config)?;

  match cli.command {
    Commands::Quote(cmd) => commands::quote::execute(cmd, &client).await?,
    Commands::Symbols(cmd) => commands::symbols::execute(cmd, &client).await?,
    Commands::Company(cmd) => commands::company::execute(cmd, &client).await?,
    Commands::Prices(cmd) => commands::prices::execute(cmd, &client).await?,
    Commands::Index(cmd) => commands::index::execute(cmd, &client).await?,
    Commands::Market(cmd) => commands::market::execute(cmd, &client).await?,
  }

  Ok(())
}
