use chrono::{NaiveDate, NaiveDateTime};

mod dashboard;
mod expenses;
mod goals;
mod incomes;
mod investments;
mod login;
mod profile;
mod register;

pub use dashboard::Dashboard;
pub use expenses::Expenses;
pub use goals::Goals;
pub use incomes::Incomes;
pub use investments::Investments;
pub use login::Login;
pub use profile::Profile;
pub use register::Register;

/// Parse a positive amount out of a form field.
pub(crate) fn parse_amount(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    (value > 0.0 && value.is_finite()).then_some(value)
}

/// Parse a `<input type="date">` value (midnight, as the backend expects
/// datetimes).
pub(crate) fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Empty form fields become absent optional payload fields.
pub(crate) fn non_empty(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Date field value for editing an existing record.
pub(crate) fn date_input_value(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_must_be_positive_numbers() {
        assert_eq!(parse_amount("12.50"), Some(12.5));
        assert_eq!(parse_amount(" 7 "), Some(7.0));
        assert_eq!(parse_amount("0"), None);
        assert_eq!(parse_amount("-3"), None);
        assert_eq!(parse_amount("abc"), None);
    }

    #[test]
    fn dates_parse_from_date_inputs() {
        let parsed = parse_date("2024-03-05").unwrap();
        assert_eq!(date_input_value(&parsed), "2024-03-05");
        assert!(parse_date("05/03/2024").is_none());
    }
}
