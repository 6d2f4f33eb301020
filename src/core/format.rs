/// Rounds the way `Math.round` does: halves go toward positive infinity.
fn round_half_up(amount: f64) -> i64 {
    (amount + 0.5).floor() as i64
}

/// Indian digit grouping: last three digits, then groups of two.
fn group_indian(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut parts: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 2 {
            parts.push(&head[end - 2..end]);
            end -= 2;
        }
        parts.push(&head[..end]);
        parts.reverse();
        format!("{},{}", parts.join(","), tail)
    };

    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Rounds to the nearest rupee and formats with the lakh/crore convention,
/// e.g. `₹12,34,567`.
pub fn format_currency(amount: f64) -> String {
    format!("₹{}", group_indian(round_half_up(amount)))
}

/// Same grouping as [`format_currency`], without the currency prefix.
pub fn format_number(amount: f64) -> String {
    group_indian(round_half_up(amount))
}
