use chrono::{DateTime, NaiveDate, Utc};

use crate::error::Error;

/// Net income percentage for a closed trade, rounded to two decimals.
/// A "buy" position profits when the price rises, anything else is
/// treated as a short and profits when the price falls.
pub fn net_income(trade_type: &str, open: f64, close: f64) -> f64 {
    let percent = if trade_type.eq_ignore_ascii_case("buy") {
        (close - open) / open * 100.0
    } else {
        (open - close) / open * 100.0
    };

    round2(percent)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Parses a form date ("YYYY-MM-DD") into a UTC midnight timestamp.
pub fn parse_date(value: &str) -> Result<DateTime<Utc>, Error> {
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| Error::Validation(format!("invalid date: {}", value)))?;

    date.and_hms_opt(0, 0, 0)
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
        .ok_or_else(|| Error::Validation(format!("invalid date: {}", value)))
}

/// Empty or missing form fields mean NULL.
pub fn parse_optional_date(
    value: Option<&str>,
) -> Result<Option<DateTime<Utc>>, Error> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(Some(parse_date(v)?)),
        _ => Ok(None),
    }
}

/// An open position has all three close columns null, a closed one has
/// all three set. The store does not enforce this, the forms do.
pub fn check_close_fields(
    date_close: &Option<DateTime<Utc>>,
    trade_close: &Option<f64>,
    net_income: &Option<f64>,
) -> Result<(), Error> {
    let set = [
        date_close.is_some(),
        trade_close.is_some(),
        net_income.is_some(),
    ];

    if set.iter().all(|v| *v) || set.iter().all(|v| !*v) {
        Ok(())
    } else {
        Err(Error::Validation(String::from(
            "date_close, trade_close and net_income must be set together",
        )))
    }
}

pub fn parse_optional_f64(
    value: Option<&str>,
) -> Result<Option<f64>, Error> {
    match value {
        Some(v) if !v.trim().is_empty() => {
            v.trim().parse::<f64>().map(Some).map_err(|_| {
                Error::Validation(format!("invalid number: {}", v))
            })
        },
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn net_income_buy_profits_on_rise() {
        assert_eq!(net_income("buy", 100.0, 110.0), 10.0);
        assert_eq!(net_income("Buy", 100.0, 110.0), 10.0);
    }

    #[test]
    fn net_income_sell_profits_on_fall() {
        assert_eq!(net_income("sell", 100.0, 90.0), 10.0);
    }

    #[test]
    fn net_income_rounds_to_two_decimals() {
        // (10/3)% = 3.333...
        assert_eq!(net_income("buy", 3.0, 3.1), 3.33);
        assert_eq!(net_income("sell", 3.0, 2.9), 3.33);
    }

    #[test]
    fn net_income_negative_when_losing() {
        assert_eq!(net_income("buy", 100.0, 90.0), -10.0);
        assert_eq!(net_income("sell", 100.0, 110.0), -10.0);
    }

    #[test]
    fn parse_date_accepts_iso_days() {
        let parsed = parse_date("2024-03-01").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-03-01T00:00:00+00:00");
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(matches!(
            parse_date("01.03.2024"),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn close_fields_are_all_or_nothing() {
        let now = Utc::now();

        assert!(check_close_fields(&None, &None, &None).is_ok());
        assert!(check_close_fields(&Some(now), &Some(1.0), &Some(2.0)).is_ok());
        assert!(check_close_fields(&Some(now), &None, &None).is_err());
        assert!(check_close_fields(&None, &Some(1.0), &Some(2.0)).is_err());
    }

    #[test]
    fn optional_fields_treat_empty_as_null() {
        assert_eq!(parse_optional_f64(None).unwrap(), None);
        assert_eq!(parse_optional_f64(Some("  ")).unwrap(), None);
        assert_eq!(parse_optional_f64(Some("1.5")).unwrap(), Some(1.5));
        assert!(parse_optional_f64(Some("abc")).is_err());

        assert_eq!(parse_optional_date(None).unwrap(), None);
        assert_eq!(parse_optional_date(Some("")).unwrap(), None);
        assert!(parse_optional_date(Some("2024-01-15")).unwrap().is_some());
    }
}
