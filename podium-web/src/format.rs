//! Display formatting for scores and ranks.

/// Round to the nearest integer and insert thousands separators.
#[must_use]
pub fn format_number(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative && grouped != "0" {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// `#1`-style rank display.
#[must_use]
pub fn format_rank(rank: usize) -> String {
    format!("#{rank}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_then_groups_thousands() {
        assert_eq!(format_number(1_234_567.4), "1,234,567");
        assert_eq!(format_number(999.6), "1,000");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(1_000.0), "1,000");
    }

    #[test]
    fn negative_values_keep_their_sign() {
        assert_eq!(format_number(-1_234.5), "-1,235");
        assert_eq!(format_number(-0.2), "0");
    }

    #[test]
    fn ranks_are_hash_prefixed() {
        assert_eq!(format_rank(1), "#1");
        assert_eq!(format_rank(12), "#12");
    }
}
