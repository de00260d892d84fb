//! # fmp-client
//!
//! A typed client for the fmpcloud / Financial Modeling Prep stock API.
//!
//! ## Features
//!
//! - **One method per endpoint**: each call renders a path template, adds
//!   the API key and optional filters, performs a single GET and decodes the
//!   JSON body
//! - **Type Safe**: responses decode into fmp-models records; exchange codes,
//!   index families and series types are closed enums
//! - **Configurable**: base URL, API key and timeout via fmp-core
//! - **No hidden behaviour**: no retries, no caching, no rate limiting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fmp_client::{FmpClient, IndexFamily};
//! use fmp_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = FmpClient::new(config)?;
//!
//!     let quotes = client.quotes().batch_quote(&["AAPL", "MSFT"]).await?;
//!     for quote in &quotes {
//!         println!("{}: {:?}", quote.symbol, quote.price);
//!     }
//!
//!     let members = client.indexes().constituents(IndexFamily::DowJones).await?;
//!     println!("{} Dow Jones members", members.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, fmp_core::Error>`. Transport failures,
//! non-success statuses (with the raw body) and decode failures are distinct
//! variants and are never retried.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod transport;

// Re-export the main client and common types
pub use client::FmpClient;
pub use fmp_core::types::{CandlePeriod, IndexFamily, QuoteExchange, SeriesType, SymbolExchange};
pub use fmp_core::{Config, Endpoint, Error, Result};
pub use fmp_models::*;

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
  company::CompanyEndpoints, indexes::IndexEndpoints, market::MarketEndpoints,
  prices::PriceEndpoints, quotes::QuoteEndpoints, symbols::SymbolEndpoints,
};
