use crate::base;

/// A calendar month of a specific year, used as the key for all period views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Period {
    year: i32,
    month: u8,
}

impl Period {
    /// Returns `None` unless `month` is in `1..=12`.
    pub fn new(year: i32, month: u8) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The period containing `date`.
    pub fn of(date: base::Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn current() -> Self {
        Self::of(base::Date::today())
    }

    pub fn contains(self, date: base::Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Offsets the period by the given number of months, returning `None` on
    /// overflow.
    pub fn shift(self, months: i32) -> Option<Self> {
        let index = self
            .year
            .checked_mul(12)?
            .checked_add(self.month as i32 - 1)?
            .checked_add(months)?;
        Some(Self {
            year: index.div_euclid(12),
            month: (index.rem_euclid(12) + 1) as u8,
        })
    }

    /// Human-readable name, e.g. `March 2024`.
    pub fn label(self) -> String {
        let month =
            time::Month::try_from(self.month).expect("month should be validated on construction");
        format!("{} {}", month, self.year)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("expected 'yyyy-mm' or 'm' with an optional month offset")]
    BadFormat,
    #[error("month must be between 1 and 12")]
    InvalidMonth,
    #[error("period is out of range")]
    OutOfRange,
    #[error(transparent)]
    InvalidNumber(#[from] std::num::ParseIntError),
}

impl std::str::FromStr for Period {
    type Err = ParseError;

    /// Parses a string to a period. Inputs must be in one of the following
    /// formats:
    /// - `yyyy-mm`
    /// - `mn` where `n` is an optional signed number of months from the
    ///   current month
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Self::Err::Empty);
        }
        if let Some(offset) = s.strip_prefix(['m', 'M']) {
            let offset = if offset.is_empty() {
                0
            } else {
                offset.parse::<i32>()?
            };
            return Self::current()
                .shift(offset)
                .ok_or(Self::Err::OutOfRange);
        }
        let (year, month) = s.split_once('-').ok_or(Self::Err::BadFormat)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(Self::Err::BadFormat);
        }
        Self::new(year.parse()?, month.parse()?).ok_or(Self::Err::InvalidMonth)
    }
}

impl TryFrom<&str> for Period {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
