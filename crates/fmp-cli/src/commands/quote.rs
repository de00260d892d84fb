use anyhow::Result;
use clap::{Args, Subcommand};
use fmp_client::{FmpClient, QuoteExchange};

use crate::output::print_json;

#[derive(Args, Debug)]
pub struct QuoteCommand {
  #[command(subcommand)]
  command: QuoteSubcommands,
}

#[derive(Subcommand, Debug)]
enum QuoteSubcommands {
  /// Price and volume only
  Short {
    symbol: String,
  },

  /// Full quote for one symbol
  Get {
    symbol: String,
  },

  /// Full quotes for several symbols in one request
  Batch {
    #[arg(required = true, num_args = 1..)]
    symbols: Vec<String>,
  },

  /// Every quote on a market (nasdaq, nyse, etf, crypto, ...)
  Exchange {
    exchange: QuoteExchange,
  },
}

pub async fn execute(cmd: QuoteCommand, client: &FmpClient) -> Result<()> {
  let quotes = client.quotes();
  match cmd.command {
    QuoteSubcommands::Short { symbol } => print_json(&quotes.quote_short(&symbol).await?),
    QuoteSubcommands::Get { symbol } => print_json(&quotes.quote(&symbol).await?),
    QuoteSubcommands::Batch { symbols } => {
      let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
      print_json(&quotes.batch_quote(&symbols).await?)
    }
    QuoteSubcommands::Exchange { exchange } => print_json(&quotes.quotes_by_exchange(exchange).await?),
  }
}
