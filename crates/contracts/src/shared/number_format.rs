//! Number formatting for tables and the budget report

/// Formats a number with a thousands separator and a fixed number of decimals
///
/// # Examples
///
/// ```
/// use contracts::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2, ','), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8, separator: char) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        3 => format!("{:.3}", value),
        _ => format!("{:.2}", value),
    };

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    // separator every 3 digits from the right
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Dollar amount with comma grouping and two decimals
///
/// # Examples
///
/// ```
/// use contracts::shared::number_format::format_currency;
/// assert_eq!(format_currency(1234567.891), "$1,234,567.89");
/// assert_eq!(format_currency(-500.0), "-$500.00");
/// ```
pub fn format_currency(value: f64) -> String {
    let amount = format_number_with_decimals(value.abs(), 2, ',');
    if value < 0.0 && amount.chars().any(|c| c.is_ascii_digit() && c != '0') {
        format!("-${}", amount)
    } else {
        format!("${}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.56), "$1,234.56");
        assert_eq!(format_currency(10000.0), "$10,000.00");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(-1234.5), "-$1,234.50");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0, ' '), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1, ' '), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3, ','), "1,234.567");
        assert_eq!(format_number_with_decimals(-1234567.0, 0, ','), "-1,234,567");
        assert_eq!(format_number_with_decimals(999.0, 0, ','), "999");
    }
}
