//! Loan amount input sanitation

/// Currency suffix the amount field may carry
const CURRENCY_SUFFIX: &str = "kr";

/// Parse raw amount text into whole currency units.
///
/// Grouping whitespace and a trailing `kr` are stripped. A fractional part
/// after `.` or `,` is truncated. Returns `None` for empty, negative or
/// non-numeric text, which the calculator treats as an unset amount.
pub fn parse_amount(text: &str) -> Option<u64> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    let digits = strip_suffix_ignore_case(&compact, CURRENCY_SUFFIX).unwrap_or(&compact);

    let (whole, fraction) = match digits.find(|c: char| c == '.' || c == ',') {
        Some(pos) => (&digits[..pos], &digits[pos + 1..]),
        None => (digits, ""),
    };

    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    whole.parse().ok()
}

fn strip_suffix_ignore_case<'a>(text: &'a str, suffix: &str) -> Option<&'a str> {
    let split = text.len().checked_sub(suffix.len())?;
    if !text.is_char_boundary(split) {
        return None;
    }
    let (head, tail) = text.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}
