//! Display helpers for the renderer. Not part of the cost computation.

use crate::rates::RateEntry;

/// "3 mån" under a year, otherwise whole years: "1 år", "5 år"
pub fn binding_period_label(months: u32) -> String {
    let years = months / 12;
    if years == 0 {
        format!("{} mån", months)
    } else {
        format!("{} år", years)
    }
}

/// Menu label for a rate, e.g. "3 mån - 2.92%"
pub fn format_rate_option(entry: &RateEntry) -> String {
    format!(
        "{} - {}%",
        binding_period_label(entry.binding_period_months()),
        entry.annual_rate_percent()
    )
}

/// Rate shown above the result, two decimals
pub fn format_rate_heading(rate_percent: f64) -> String {
    format!("{:.2}%", rate_percent)
}

/// Whole kronor with space grouping, e.g. "2 433 kr/mån"
pub fn format_monthly_cost(cost: f64) -> String {
    let whole = cost.max(0.0).round() as u64;
    format!("{} kr/mån", group_thousands(whole))
}

/// Loan amount as typed back into the field, e.g. "1 000 000 kr"; empty when unset
pub fn format_loan_amount(amount: f64) -> String {
    if amount <= 0.0 {
        return String::new();
    }
    format!("{} kr", group_thousands(amount.trunc() as u64))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    grouped
}
