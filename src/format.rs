//! Display formatting for dashboard numbers.

/// Format a USD amount as `$123,456`, rounded to whole dollars.
pub fn usd(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(rounded.abs() as u64))
}

/// Format a count with comma thousands separators.
pub fn count(value: usize) -> String {
    group_thousands(value as u64)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_usd() {
        assert_eq!(usd(105_000.0), "$105,000");
        assert_eq!(usd(999.6), "$1,000");
        assert_eq!(usd(0.0), "$0");
        assert_eq!(usd(-1234.0), "-$1,234");
        assert_eq!(usd(1_234_567.0), "$1,234,567");
    }

    #[test]
    fn formats_count() {
        assert_eq!(count(4), "4");
        assert_eq!(count(12_345), "12,345");
    }
}
