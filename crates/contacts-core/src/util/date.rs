use chrono::{NaiveDate, Utc};

pub type DateTimeUtc = chrono::DateTime<Utc>;

/// The format calendar dates are stored in
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn now() -> DateTimeUtc {
    Utc::now()
}

/// Parses a YYYY-MM-DD date string
pub fn parse_date_string(date: &str) -> chrono::ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_string_baseline() {
        let date = parse_date_string("2024-01-05").unwrap();
        assert_eq!(format_date(&date), "2024-01-05");
    }

    #[test]
    fn parse_date_string_rejects_other_formats() {
        assert!(parse_date_string("05.01.2024").is_err());
        assert!(parse_date_string("2024-13-01").is_err());
        assert!(parse_date_string("").is_err());
    }
}
