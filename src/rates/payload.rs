//! Wire format of the mortgage rate endpoint
//!
//! `{ "mortgage_rates": [ { "binding_period_in_months": 3, "mortgage_rate": 2.92 }, ... ] }`
//!
//! Entries that do not decode to a non-negative integral period and a finite,
//! non-negative rate are skipped; `3.0` counts as integral. A body without the
//! `mortgage_rates` array fails as a whole.

use super::{RateEntry, RateSet};
use crate::error::Failure;
use log::warn;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RatesResponse {
    mortgage_rates: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct WireRateEntry {
    /// Read as a number so integral floats such as `3.0` are accepted
    binding_period_in_months: f64,
    mortgage_rate: f64,
}

impl WireRateEntry {
    fn into_entry(self) -> Option<RateEntry> {
        let months = self.binding_period_in_months;
        if months.fract() != 0.0 || !(0.0..=u32::MAX as f64).contains(&months) {
            return None;
        }
        RateEntry::new(months as u32, self.mortgage_rate)
    }
}

/// Parse a response body into a [`RateSet`]
pub fn parse_rate_payload(body: &[u8]) -> Result<RateSet, Failure> {
    let response: RatesResponse = serde_json::from_slice(body)?;

    let mut entries = Vec::with_capacity(response.mortgage_rates.len());
    for (index, raw) in response.mortgage_rates.into_iter().enumerate() {
        let entry = serde_json::from_value::<WireRateEntry>(raw)
            .ok()
            .and_then(WireRateEntry::into_entry);

        match entry {
            Some(entry) => entries.push(entry),
            None => warn!("Skipping malformed mortgage rate entry at index {}", index),
        }
    }

    Ok(RateSet::new(entries))
}
