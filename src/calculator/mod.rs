//! Monthly interest cost derivation and the session's calculator state
//!
//! The cost is a simple interest approximation, no amortization:
//! `loan_amount * round(annual_rate_percent / 100, 4) / 12`.

mod format;
mod input;

pub use format::{
    binding_period_label, format_loan_amount, format_monthly_cost, format_rate_heading,
    format_rate_option,
};
pub use input::parse_amount;

use crate::rates::RateSet;
use log::debug;

/// Rate selected before the rate table has loaded
pub const PLACEHOLDER_RATE_PERCENT: f64 = 2.92;

/// Decimal places kept on the fractional annual rate
pub const RATE_FRACTION_DECIMALS: i32 = 4;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Round to a fixed number of decimal places, half away from zero
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Annual rate in percent to the rounded fraction used for the monthly cost
pub fn monthly_rate_fraction(annual_rate_percent: f64) -> f64 {
    round_to_places(annual_rate_percent / 100.0, RATE_FRACTION_DECIMALS)
}

/// Monthly interest cost; rounding happens only on the rate fraction
pub fn monthly_cost(annual_rate_percent: f64, loan_amount: f64) -> f64 {
    loan_amount * monthly_rate_fraction(annual_rate_percent) / MONTHS_PER_YEAR
}

/// Mutable calculator state for one session.
///
/// `monthly_cost` is only written by the setters, which recompute it
/// immediately after changing an input.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    selected_rate_percent: Option<f64>,
    loan_amount: f64,
    monthly_cost: f64,
}

impl CalculatorState {
    /// Placeholder rate selected, amount unset, cost zero
    pub fn new() -> Self {
        Self::with_selection(Some(PLACEHOLDER_RATE_PERCENT))
    }

    /// Start from an explicit selection, amount unset
    pub fn with_selection(selected_rate_percent: Option<f64>) -> Self {
        Self {
            selected_rate_percent,
            loan_amount: 0.0,
            monthly_cost: 0.0,
        }
    }

    pub fn selected_rate_percent(&self) -> Option<f64> {
        self.selected_rate_percent
    }

    /// `0.0` means the amount is unset
    pub fn loan_amount(&self) -> f64 {
        self.loan_amount
    }

    pub fn monthly_cost(&self) -> f64 {
        self.monthly_cost
    }

    /// Whether a non-zero amount has been entered
    pub fn has_amount(&self) -> bool {
        self.loan_amount > 0.0
    }

    /// Whether the renderer should show the result block
    pub fn show_result(&self) -> bool {
        self.has_amount() && self.monthly_cost > 0.0
    }

    /// Change the selected rate and recompute; `None` keeps the last cost
    pub fn set_selected_rate(&mut self, rate: Option<f64>) {
        self.selected_rate_percent = rate;
        self.recompute();
    }

    /// Negative or non-finite amounts are treated as unset
    pub fn set_loan_amount(&mut self, amount: f64) {
        self.loan_amount = if amount.is_finite() && amount > 0.0 {
            amount.trunc()
        } else {
            0.0
        };
        self.recompute();
    }

    /// Apply raw amount text from the input field.
    ///
    /// Text that does not parse clears the amount and zeroes the cost even
    /// when no rate is selected.
    pub fn set_amount_text(&mut self, text: &str) {
        match parse_amount(text) {
            Some(amount) => self.set_loan_amount(amount as f64),
            None => {
                self.loan_amount = 0.0;
                self.monthly_cost = 0.0;
            }
        }
    }

    /// Select the default binding period's rate when the table offers one.
    /// Returns whether the selection changed.
    pub fn apply_default_selection(&mut self, rates: &RateSet) -> bool {
        match rates.default_rate() {
            Some(rate) => {
                self.set_selected_rate(Some(rate));
                true
            }
            None => false,
        }
    }

    fn recompute(&mut self) {
        if let Some(rate) = self.selected_rate_percent {
            self.monthly_cost = monthly_cost(rate, self.loan_amount);
            debug!(
                "Recomputed monthly cost {:.2} for amount {} at {}%",
                self.monthly_cost, self.loan_amount, rate
            );
        }
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}
