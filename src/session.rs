//! One user session: rate repository, calculator state and display mode
//!
//! The renderer drives the session with raw edits and reads everything it
//! displays back from here.

use crate::calculator::CalculatorState;
use crate::error::Failure;
use crate::rates::{RateEntry, RateFetcher, RateRepository, RateSet};
use log::{info, warn};

/// Which view the renderer should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Calculator,
    /// Secondary comparison view; nothing in it depends on the calculator
    Comparison,
}

/// Rate table, calculator inputs and current view for one user.
///
/// All edits go through methods that keep the monthly cost in step with its
/// inputs and the selection within the loaded table.
#[derive(Debug)]
pub struct Session {
    repository: RateRepository,
    state: CalculatorState,
    display_mode: DisplayMode,
}

impl Session {
    /// Fresh session with the placeholder rate selected
    pub fn new(repository: RateRepository) -> Self {
        Self::with_state(repository, CalculatorState::new())
    }

    /// Session starting from an existing calculator state
    pub fn with_state(repository: RateRepository, state: CalculatorState) -> Self {
        Self {
            repository,
            state,
            display_mode: DisplayMode::Calculator,
        }
    }

    /// Run the single startup load and apply it
    pub async fn start(&mut self) -> Result<(), &Failure> {
        let outcome = self.fetcher().fetch().await;
        self.apply_load(outcome)
    }

    /// Fetch handle for running the startup load as a background task
    pub fn fetcher(&self) -> RateFetcher {
        self.repository.fetcher()
    }

    /// Record a fetch outcome and select the default rate when the table
    /// goes from absent or empty to populated.
    pub fn apply_load(&mut self, outcome: Result<RateSet, Failure>) -> Result<(), &Failure> {
        let was_populated = self.repository.rates().is_some_and(|rates| !rates.is_empty());

        let rates = self.repository.record(outcome)?;
        if !was_populated && !rates.is_empty() && self.state.apply_default_selection(rates) {
            info!(
                "Selected default rate {:?}%",
                self.state.selected_rate_percent()
            );
        }
        Ok(())
    }

    /// `None` until a load has succeeded
    pub fn rates(&self) -> Option<&RateSet> {
        self.repository.rates()
    }

    pub fn failure(&self) -> Option<&Failure> {
        self.repository.failure()
    }

    /// Localized message while a fetch failure is held
    pub fn error_message(&self) -> Option<&'static str> {
        self.failure().map(Failure::user_message)
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn show_result(&self) -> bool {
        self.state.show_result()
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// Raw text from the amount field
    pub fn set_amount_text(&mut self, text: &str) {
        self.state.set_amount_text(text);
    }

    /// Select a rate by value.
    ///
    /// Once a table is loaded only its rates are accepted; anything else is
    /// ignored and `false` returned. Before the load any rate is taken.
    pub fn select_rate(&mut self, rate_percent: f64) -> bool {
        if let Some(rates) = self.repository.rates() {
            if !rates.contains_rate(rate_percent) {
                warn!("Ignoring rate {}% not offered in the loaded table", rate_percent);
                return false;
            }
        }
        self.state.set_selected_rate(Some(rate_percent));
        true
    }

    /// Select the rate offered for a binding period.
    /// Returns the entry, or `None` when the loaded table has no such period.
    pub fn select_binding_period(&mut self, months: u32) -> Option<RateEntry> {
        let entry = *self.repository.rates()?.find_binding_period(months)?;
        self.state.set_selected_rate(Some(entry.annual_rate_percent()));
        Some(entry)
    }

    /// Select the entry at `index` in the loaded table.
    /// Returns the entry, or `None` when nothing is loaded at that position.
    pub fn select_entry(&mut self, index: usize) -> Option<RateEntry> {
        let entry = *self.repository.rates()?.get(index)?;
        self.state.set_selected_rate(Some(entry.annual_rate_percent()));
        Some(entry)
    }

    /// Switch to the comparison view; calculator state is left as is
    pub fn request_comparison(&mut self) {
        self.display_mode = DisplayMode::Comparison;
    }

    pub fn return_to_calculator(&mut self) {
        self.display_mode = DisplayMode::Calculator;
    }
}
