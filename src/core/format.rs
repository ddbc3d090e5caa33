//! Display formatting for catalog and route values

/// "1.5km" at or above one kilometer, whole meters below
pub fn format_distance(meters: f64) -> String {
    if meters >= 1000.0 {
        format!("{:.1}km", meters / 1000.0)
    } else {
        format!("{}m", meters.round() as i64)
    }
}

/// Minutes rendered as "45 min" or "1 hr 30 min"; whole hours drop the
/// minute part
pub fn format_time(minutes: u32) -> String {
    if minutes >= 60 {
        let hours = minutes / 60;
        let mins = minutes % 60;
        if mins > 0 {
            format!("{} hr {} min", hours, mins)
        } else {
            format!("{} hr", hours)
        }
    } else {
        format!("{} min", minutes)
    }
}

/// Rewrite a dash-separated price range as won amounts with thousand
/// separators, e.g. "10000-20000" -> "₩10,000-₩20,000"
///
/// Inputs that carry no parseable amounts come back unchanged.
pub fn format_price_range(range: &str) -> String {
    let parts: Vec<u64> = range
        .split('-')
        .filter_map(|part| {
            let digits: String = part.chars().filter(|c| c.is_ascii_digit()).collect();
            digits.parse().ok()
        })
        .collect();

    match parts.as_slice() {
        [min, max] => format!(
            "\u{20a9}{}-\u{20a9}{}",
            group_thousands(*min),
            group_thousands(*max)
        ),
        [only] => format!("\u{20a9}{}", group_thousands(*only)),
        _ => range.to_string(),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Hyphenate a Korean phone number: Seoul 02 numbers split 2-3-4 or 2-4-4,
/// mobile numbers 3-4-4, other landlines 3-3-4
///
/// Anything that does not fit those shapes is returned as given.
pub fn format_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    let split = |a: usize, b: usize| {
        format!("{}-{}-{}", &digits[..a], &digits[a..a + b], &digits[a + b..])
    };

    if digits.starts_with("02") && digits.len() == 9 {
        split(2, 3)
    } else if digits.starts_with("02") && digits.len() == 10 {
        split(2, 4)
    } else if digits.len() == 11 {
        split(3, 4)
    } else if digits.len() == 10 {
        split(3, 3)
    } else {
        phone.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_under_a_kilometer_in_meters() {
        assert_eq!(format_distance(500.0), "500m");
        assert_eq!(format_distance(999.4), "999m");
    }

    #[test]
    fn test_distance_at_a_kilometer_switches_unit() {
        assert_eq!(format_distance(1000.0), "1.0km");
        assert_eq!(format_distance(1500.0), "1.5km");
        assert_eq!(format_distance(2449.0), "2.4km");
    }

    #[test]
    fn test_time_under_an_hour() {
        assert_eq!(format_time(0), "0 min");
        assert_eq!(format_time(45), "45 min");
    }

    #[test]
    fn test_time_with_hours() {
        assert_eq!(format_time(60), "1 hr");
        assert_eq!(format_time(90), "1 hr 30 min");
        assert_eq!(format_time(131), "2 hr 11 min");
    }

    #[test]
    fn test_price_range_grouping() {
        assert_eq!(format_price_range("10000-20000"), "\u{20a9}10,000-\u{20a9}20,000");
        assert_eq!(format_price_range("9000"), "\u{20a9}9,000");
    }

    #[test]
    fn test_price_range_tolerates_catalog_spelling() {
        // Catalog entries carry separators and a currency suffix already
        assert_eq!(
            format_price_range("15,000-25,000 KRW"),
            "\u{20a9}15,000-\u{20a9}25,000"
        );
    }

    #[test]
    fn test_unparseable_price_passes_through() {
        assert_eq!(format_price_range("free"), "free");
        assert_eq!(format_price_range(""), "");
    }

    #[test]
    fn test_seoul_landline() {
        assert_eq!(format_phone_number("021234567"), "02-123-4567");
        assert_eq!(format_phone_number("02-1234-5678"), "02-1234-5678");
    }

    #[test]
    fn test_mobile_number() {
        assert_eq!(format_phone_number("01012345678"), "010-1234-5678");
    }

    #[test]
    fn test_regional_landline() {
        assert_eq!(format_phone_number("0312345678"), "031-234-5678");
    }

    #[test]
    fn test_unrecognized_shape_unchanged() {
        assert_eq!(format_phone_number("12345"), "12345");
        assert_eq!(format_phone_number("+82-2-1234"), "+82-2-1234");
    }
}
