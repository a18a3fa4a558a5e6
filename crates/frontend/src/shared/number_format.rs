//! Number formatting for tables and cards

/// Currency sign used for every amount on the dashboard
pub const CURRENCY: &str = "₦";

/// Groups the integer part by thousands with `,`
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // "-0.00" is printed as "0.00"
    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// "₦1,234.50"
pub fn format_money(value: f64) -> String {
    let number = format_number(value, 2);
    match number.strip_prefix('-') {
        Some(abs) => format!("-{}{}", CURRENCY, abs),
        None => format!("{}{}", CURRENCY, number),
    }
}

pub fn format_count(value: u64) -> String {
    format_number(value as f64, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234.567, 2), "1,234.57");
        assert_eq!(format_number(1234567.0, 0), "1,234,567");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(-1234.5, 1), "-1,234.5");
        assert_eq!(format_number(-0.001, 2), "0.00");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "₦0.00");
        assert_eq!(format_money(4100.0), "₦4,100.00");
        assert_eq!(format_money(-250.75), "-₦250.75");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(1_250_000), "1,250,000");
    }
}
