// In crates/calculator/src/format.rs

/// Formats an amount as a whole-yen string, e.g. `¥10,000` or `¥-7,500`.
///
/// The amount is rounded to the nearest yen and the integer part grouped
/// with thousands separators.
pub fn format_jpy(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("¥-{}", grouped)
    } else {
        format!("¥{}", grouped)
    }
}
