//! # fmp-models
//!
//! Data models for fmpcloud stock API responses.
//!
//! Every record mirrors the upstream JSON field-for-field. Fields the API may
//! omit or send as `null` are `Option`; unknown fields are ignored.
//!
//! ## Usage
//!
//! ```ignore
//! use fmp_models::quote::Quote;
//!
//! let quotes: Vec<Quote> = serde_json::from_str(&response_json)?;
//! ```

#![warn(clippy::all)]

pub mod common;
pub mod company;
pub mod index;
pub mod market;
pub mod price;
pub mod quote;
pub mod request;
pub mod symbol;

// Re-export common types for convenience
pub use common::*;

// Re-export all model types
pub use company::*;
pub use index::*;
pub use market::*;
pub use price::*;
pub use quote::*;
pub use request::*;
pub use symbol::*;
