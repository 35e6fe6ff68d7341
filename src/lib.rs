//! Interest Cost - mortgage interest cost calculator
//!
//! This library provides:
//! - Fetching the mortgage rate table (binding period, annual rate) over HTTP
//! - Default rate selection once the table has loaded
//! - Monthly interest cost derivation kept in step with its inputs
//! - Loan amount input sanitation and display helpers for a renderer

pub mod calculator;
pub mod config;
pub mod error;
pub mod rates;
pub mod session;

// Re-export commonly used types
pub use calculator::{monthly_cost, monthly_rate_fraction, parse_amount, CalculatorState};
pub use config::RateSourceConfig;
pub use error::{Failure, FetchErrorKind};
pub use rates::{RateEntry, RateFetcher, RateRepository, RateSet};
pub use session::{DisplayMode, Session};
