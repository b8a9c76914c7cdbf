//! Number formatting shared by the dashboard and the CLI

/// Format a whole number with comma grouping
pub fn format_count(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    if negative {
        result.insert(0, '-');
    }
    result
}

/// Format revenue rounded to whole VND with comma grouping
pub fn format_vnd(value: f64) -> String {
    format_count(value.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_group_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_500_000), "1,500,000");
        assert_eq!(format_count(-12_345), "-12,345");
    }

    #[test]
    fn vnd_rounds_to_whole_units() {
        assert_eq!(format_vnd(1_499_999.6), "1,500,000");
        assert_eq!(format_vnd(0.4), "0");
    }
}
