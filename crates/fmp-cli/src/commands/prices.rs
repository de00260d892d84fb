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
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use fmp_client::{CandlePeriod, CandleRequest, FmpClient, SeriesType};

use crate::output::print_json;

#[derive(Args, Debug)]
pub struct PriceCommand {
  #[command(subcommand)]
  command: PriceSubcommands,
}

#[derive(Subcommand, Debug)]
enum PriceSubcommands {
  /// Intraday bars
  Candles {
    symbol: String,

    /// Bar size (1min, 5min, 15min, 30min, 1hour, 4hour)
    #[arg(short, long, default_value = "5min")]
    period: CandlePeriod,

    /// First day (YYYY-MM-DD)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Last day (YYYY-MM-DD)
    #[arg(long)]
    to: Option<NaiveDate>,
  },

  /// Daily close series
  Line {
    symbol: String,

    #[arg(long, default_value = "line")]
    series: SeriesType,
  },

  /// Daily bars for one symbol
  Daily {
    symbol: String,

    /// First day (YYYY-MM-DD), requires --to
    #[arg(long, requires = "to", conflicts_with = "last")]
    from: Option<NaiveDate>,

    /// Last day (YYYY-MM-DD), requires --from
    #[arg(long, requires = "from", conflicts_with = "last")]
    to: Option<NaiveDate>,

    /// Only the most recent N days
    #[arg(long)]
    last: Option<u32>,
  },

  /// Daily bars for several symbols in one request
  Batch {
    #[arg(required = true, num_args = 1..)]
    symbols: Vec<String>,

    #[arg(long)]
    from: Option<NaiveDate>,

    #[arg(long)]
    to: Option<NaiveDate>,
  },

  /// End-of-day bars on a date, for every symbol or the ones given
  Eod {
    /// Trading day (YYYY-MM-DD)
    #[arg(short, long)]
    date: NaiveDate,

    symbols: Vec<String>,
  },
}

pub async fn execute(cmd: PriceCommand, client: &FmpClient) -> Result<()> {
  let prices = client.prices();
  match cmd.command {
    PriceSubcommands::Candles { symbol, period, from, to } => {
      let request = CandleRequest { symbol, period, from, to };
      print_json(&prices.candles(&request).await?)
    }
    PriceSubcommands::Line { symbol, series } => print_json(&prices.daily_line(&symbol, series).await?),
    PriceSubcommands::Daily { symbol, from, to, last } => {
      let series = match (from, to, last) {
        (Some(from), Some(to), _) => prices.daily_range(&symbol, from, to).await?,
        (_, _, Some(days)) => prices.daily_last_n_days(&symbol, days).await?,
        _ => prices.daily(&symbol).await?,
      };
      print_json(&series)
    }
    PriceSubcommands::Batch { symbols, from, to } => {
      let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
      print_json(&prices.daily_batch(&symbols, from, to).await?)
    }
    PriceSubcommands::Eod { date, symbols } => {
      let bars = if symbols.is_empty() {
        prices.eod_candles(date).await?
      } else {
        let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
        prices.batch_eod_candles(&symbols, date).await?
      };
      print_json(&bars)
    }
  }
}
