/// Two decimals with thousands separators, e.g. `$45,230.00`.
///
/// A negative amount keeps its sign after the symbol (`$-230.00`); anything
/// that rounds to zero prints unsigned.
pub fn format_money(value: f64, currency_symbol: &str) -> String {
    if !value.is_finite() {
        return format!("{currency_symbol}{value}");
    }

    let fixed = format!("{:.2}", value.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let nonzero = fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let sign = if value < 0.0 && nonzero { "-" } else { "" };
    format!("{currency_symbol}{sign}{}.{frac}", group_digits(whole))
}

/// Insert a comma every three digits from the right
pub fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
