use chrono::{Months, NaiveDate};

/// Date format used by the metrics API.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// The day one year before `d`. February 29th maps to February 28th.
pub fn one_year_before(d: NaiveDate) -> NaiveDate {
    d.checked_sub_months(Months::new(12)).unwrap_or(d)
}

/// Default `(from, to)` range: one year ago through `today`.
pub fn default_range(today: NaiveDate) -> (String, String) {
    (format_date(one_year_before(today)), format_date(today))
}

/// Default range ending on the local current date.
pub fn default_range_today() -> (String, String) {
    default_range(chrono::Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(
            format_date(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()),
            "2024-04-01"
        );
    }

    #[test]
    fn test_default_range() {
        let today = NaiveDate::from_ymd_opt(2024, 4, 16).unwrap();
        assert_eq!(
            default_range(today),
            ("2023-04-16".to_string(), "2024-04-16".to_string())
        );
    }

    #[test]
    fn test_one_year_before_leap_day() {
        assert_eq!(
            one_year_before(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_default_range_today_shape() {
        let (from, to) = default_range_today();
        assert!(NaiveDate::parse_from_str(&from, DATE_FORMAT).is_ok());
        assert!(NaiveDate::parse_from_str(&to, DATE_FORMAT).is_ok());
        assert!(from < to);
    }
}
