use anyhow::Result;
use clap::{Args, Subcommand};
use fmp_client::{FmpClient, QuoteExchange, SearchRequest, SymbolExchange};

use crate::output::print_json;

#[derive(Args, Debug)]
pub struct SymbolCommand {
  #[command(subcommand)]
  command: SymbolSubcommands,
}

#[derive(Args, Debug)]
struct SearchArgs {
  /// Text to search for
  query: String,

  /// Limit results
  #[arg(short, long)]
  limit: Option<u32>,

  /// Filter by market
  #[arg(short, long)]
  exchange: Option<QuoteExchange>,
}

impl From<SearchArgs> for SearchRequest {
  fn from(args: SearchArgs) -> Self {
    SearchRequest { query: args.query, limit: args.limit, exchange: args.exchange }
  }
}

#[derive(Subcommand, Debug)]
enum SymbolSubcommands {
  /// Search company names and tickers
  Search(SearchArgs),

  /// Search tickers only
  SearchTicker(SearchArgs),

  /// List symbols traded on an exchange (NYSE, NASDAQ, ETF, ...)
  Exchange {
    exchange: SymbolExchange,
  },

  /// List every symbol with its price and type
  List,
}

pub async fn execute(cmd: SymbolCommand, client: &FmpClient) -> Result<()> {
  let symbols = client.symbols();
  match cmd.command {
    SymbolSubcommands::Search(args) => print_json(&symbols.search(&args.into()).await?),
    SymbolSubcommands::SearchTicker(args) => print_json(&symbols.search_ticker(&args.into()).await?),
    SymbolSubcommands::Exchange { exchange } => {
      print_json(&symbols.symbols_by_exchange(exchange).await?)
    }
    SymbolSubcommands::List => print_json(&symbols.symbol_list().await?),
  }
}
