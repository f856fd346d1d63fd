/// A calendar date without time or timezone information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date(time::Date);

impl Date {
    /// Bound on day offsets, well past the span of representable dates.
    const MAX_SHIFT_DAYS: u64 = 10_000 * 366;

    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day).ok().map(Self)
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Month of year, 1-based.
    pub fn month(self) -> u8 {
        self.0.month().into()
    }

    /// Returns the local date, falling back to UTC if the local offset cannot
    /// be determined.
    #[cfg(not(test))]
    pub fn today() -> Self {
        let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| {
            tracing::debug!("local offset unavailable, using UTC for today's date");
            time::OffsetDateTime::now_utc()
        });
        Self(now.date())
    }

    /// Returns the local date.
    #[cfg(test)]
    pub fn today() -> Self {
        Self::from_ymd(2024, 3, 15).expect("'today' for tests should be valid")
    }

    /// Offsets the date by the given number of days, returning `None` if the
    /// result is out of range.
    pub fn shift_days(self, offset: i64) -> Option<Self> {
        if offset.unsigned_abs() > Self::MAX_SHIFT_DAYS {
            return None;
        }
        self.0
            .checked_add(time::Duration::days(offset))
            .map(Self)
    }

    /// Parses the ISO 8601 calendar form `yyyy-mm-dd`. Unlike [`str::parse`],
    /// relative forms are rejected.
    pub fn parse_iso(s: &str) -> Result<Self, ParseError> {
        let fmt = time::macros::format_description!("[year]-[month]-[day]");
        time::Date::parse(s, fmt)
            .map(Self)
            .map_err(ParseError::BadFormat)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let fmt = time::macros::format_description!("[year]-[month]-[day]");
        let s = self.0.format(fmt).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error(transparent)]
    BadFormat(#[from] time::error::Parse),
    #[error("date is out of range")]
    OutOfRange,
    #[error(transparent)]
    InvalidOffset(#[from] std::num::ParseIntError),
}

impl std::str::FromStr for Date {
    type Err = ParseError;

    /// Parses a string to a date. Inputs must be in one of the following formats:
    /// - `yyyy-mm-dd`
    /// - `dn` where `n` is an optional signed number of days from today
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Self::Err::Empty);
        }
        let offset = match s.strip_prefix(['d', 'D']) {
            Some("") => 0,
            Some(n) => n.parse::<i64>()?,
            None => return Self::parse_iso(s),
        };
        Self::today()
            .shift_days(offset)
            .ok_or(Self::Err::OutOfRange)
    }
}

impl TryFrom<&str> for Date {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("2024-03-05", Date::from_ymd(2024, 3, 5).unwrap())]
    #[case("0000-01-01", Date::from_ymd(0, 1, 1).unwrap())]
    #[case("9999-12-31", Date::from_ymd(9999, 12, 31).unwrap())]
    fn test_iso8601_conv(#[case] s: &str, #[case] dt: Date) {
        assert_eq!(s.parse::<Date>().unwrap(), dt);
        assert_eq!(dt.to_string(), s);
    }

    #[test]
    fn test_parts() {
        let dt = Date::from_ymd(2024, 2, 29).unwrap();
        assert_eq!((dt.year(), dt.month()), (2024, 2));
        assert_eq!(dt.to_string(), "2024-02-29");
        assert_eq!(Date::from_ymd(2023, 2, 29), None);
        assert_eq!(Date::from_ymd(2023, 13, 1), None);
    }

    #[rstest]
    #[case("d", Date::from_ymd(2024, 3, 15))]
    #[case("D", Date::from_ymd(2024, 3, 15))]
    #[case("d1", Date::from_ymd(2024, 3, 16))]
    #[case("d+17", Date::from_ymd(2024, 4, 1))]
    #[case("d-15", Date::from_ymd(2024, 2, 29))]
    #[case("2024-03-05", Date::from_ymd(2024, 3, 5))]
    #[case("", None)]
    #[case("dd", None)]
    #[case("d-99999999999", None)]
    #[case("d-9223372036854775808", None)]
    #[case("m", None)]
    #[case("2024-3-5", None)]
    #[case("2024-02-30", None)]
    #[case("05/03/2024", None)]
    #[case("2024-03-05T00:00:00", None)]
    fn test_from_str(#[case] s: &str, #[case] want: Option<Date>) {
        assert_eq!(s.parse::<Date>().ok(), want)
    }

    #[test]
    fn test_parse_iso_rejects_relative() {
        assert!(Date::parse_iso("d").is_err());
        assert!(Date::parse_iso("2024-03-05").is_ok());
    }
}
