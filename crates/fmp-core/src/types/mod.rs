//! Common types used across fmp-* crates

pub mod common;
pub mod market;

pub use common::{format_date, parse_date, CandlePeriod, SeriesType, DATE_FORMAT};
pub use market::{IndexFamily, QuoteExchange, SymbolExchange};
