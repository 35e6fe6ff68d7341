//! Mortgage rate table: data types, wire payload and the fetching repository

mod payload;
mod repository;

pub use payload::parse_rate_payload;
pub use repository::{RateFetcher, RateRepository};

use serde::Serialize;

/// Binding period that the calculator selects by default once rates arrive
pub const DEFAULT_BINDING_PERIOD_MONTHS: u32 = 3;

/// One offered rate for a binding period
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateEntry {
    binding_period_months: u32,
    annual_rate_percent: f64,
}

impl RateEntry {
    /// Returns `None` when the rate is negative or not finite
    pub fn new(binding_period_months: u32, annual_rate_percent: f64) -> Option<Self> {
        if !annual_rate_percent.is_finite() || annual_rate_percent < 0.0 {
            return None;
        }
        Some(Self {
            binding_period_months,
            annual_rate_percent,
        })
    }

    /// Fixed-rate commitment length in months
    pub fn binding_period_months(&self) -> u32 {
        self.binding_period_months
    }

    /// Yearly interest in percent, e.g. `2.92`
    pub fn annual_rate_percent(&self) -> f64 {
        self.annual_rate_percent
    }
}

/// Rates in the order the source returned them
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RateSet {
    entries: Vec<RateEntry>,
}

impl RateSet {
    /// Wrap entries, keeping their order
    pub fn new(entries: Vec<RateEntry>) -> Self {
        Self { entries }
    }

    /// Entries in source order
    pub fn iter(&self) -> std::slice::Iter<'_, RateEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at a position in source order
    pub fn get(&self, index: usize) -> Option<&RateEntry> {
        self.entries.get(index)
    }

    /// First entry for the given binding period
    pub fn find_binding_period(&self, months: u32) -> Option<&RateEntry> {
        self.entries
            .iter()
            .find(|entry| entry.binding_period_months == months)
    }

    /// Whether `rate` is one of the offered rates
    pub fn contains_rate(&self, rate: f64) -> bool {
        self.entries.iter().any(|entry| entry.annual_rate_percent == rate)
    }

    /// Rate to select by default, if the table offers the default binding period
    pub fn default_rate(&self) -> Option<f64> {
        self.find_binding_period(DEFAULT_BINDING_PERIOD_MONTHS)
            .map(RateEntry::annual_rate_percent)
    }
}

impl<'a> IntoIterator for &'a RateSet {
    type Item = &'a RateEntry;
    type IntoIter = std::slice::Iter<'a, RateEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
