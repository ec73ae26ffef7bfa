/// Shared formatting utilities for the UI layer.
///
/// Timestamps are ISO-8601 strings (e.g. "2026-03-04T14:05:00Z"); amounts
/// are Philippine pesos.

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn parse_month(s: &str) -> Option<usize> {
    s.parse::<usize>().ok().filter(|m| (1..=12).contains(m))
}

/// Format an ISO timestamp as "Mar 4, 2026 2:05 PM".
///
/// Strings too short to carry a date are returned unchanged; a missing or
/// malformed time part yields the date alone.
pub fn format_timestamp(ts: &str) -> String {
    if ts.len() < 10 || !ts.is_char_boundary(10) {
        return ts.to_string();
    }
    let Some(month) = parse_month(&ts[5..7]) else {
        return ts[..10].to_string();
    };
    let day: u32 = ts[8..10].parse().unwrap_or(0);
    let date = format!("{} {}, {}", MONTH_NAMES[month - 1], day, &ts[..4]);

    if ts.len() < 16 || !ts.is_char_boundary(16) {
        return date;
    }
    let (Ok(hour), Ok(minute)) = (ts[11..13].parse::<u32>(), ts[14..16].parse::<u32>()) else {
        return date;
    };
    let (display_hour, ampm) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{date} {display_hour}:{minute:02} {ampm}")
}

/// Format an amount as "₱1,499.00".
pub fn format_peso(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}₱{grouped}.{:02}", cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn timestamp_with_time() {
        assert_eq!(format_timestamp("2026-03-04T14:05:00Z"), "Mar 4, 2026 2:05 PM");
        assert_eq!(format_timestamp("2026-12-31T00:30:00Z"), "Dec 31, 2026 12:30 AM");
    }

    #[test]
    fn timestamp_date_only() {
        assert_eq!(format_timestamp("2026-01-20"), "Jan 20, 2026");
    }

    #[test]
    fn timestamp_malformed() {
        assert_eq!(format_timestamp("soon"), "soon");
        assert_eq!(format_timestamp("2026-13-01T00:00"), "2026-13-01");
    }

    #[test]
    fn peso_grouping() {
        assert_eq!(format_peso(0.0), "₱0.00");
        assert_eq!(format_peso(999.5), "₱999.50");
        assert_eq!(format_peso(1499.0), "₱1,499.00");
        assert_eq!(format_peso(1234567.891), "₱1,234,567.89");
        assert_eq!(format_peso(-250.0), "-₱250.00");
    }
}
