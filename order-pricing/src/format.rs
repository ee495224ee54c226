//! Price display formatting
//!
//! Vietnamese dong: whole units, comma thousands separator, `đ` suffix.
//! Not locale driven.

use crate::money::round_whole;

/// Currency suffix appended to every formatted amount
pub const CURRENCY_SUFFIX: &str = "đ";

const THOUSANDS_SEPARATOR: char = ',';

/// Format an amount as `100,000đ`
///
/// The amount is rounded to whole units first (half away from zero);
/// non-finite input formats as `0đ`.
pub fn format_price(amount: f64) -> String {
    let rounded = round_whole(amount);

    let sign = if rounded < 0.0 { "-" } else { "" };
    format!(
        "{}{}{}",
        sign,
        group_thousands(&format!("{:.0}", rounded.abs())),
        CURRENCY_SUFFIX
    )
}

/// Insert separators every three digits from the right
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}
