use crate::base;

/// A single income or expense entry.
///
/// The date is kept as its stored text. A record whose date does not parse
/// stays in the book but never shows up in a period view.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    id: u64,
    date: String,
    amount: Amount,
    #[serde(flatten)]
    details: Details,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Details {
    Income {
        #[serde(default)]
        client: String,
        #[serde(default)]
        destination: String,
    },
    Expense {
        #[serde(default)]
        category: String,
        #[serde(default, skip_serializing_if = "String::is_empty")]
        description: String,
    },
}

impl Details {
    pub fn kind(&self) -> base::Kind {
        match self {
            Details::Income { .. } => base::Kind::Income,
            Details::Expense { .. } => base::Kind::Expense,
        }
    }
}

/// Stored amount in cents. Anything that is not an integer is kept verbatim so
/// rewriting the book never loses data, and reads as [`Amount::cents`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Cents(base::Cents),
    Other(serde_json::Value),
}

impl Amount {
    /// Coerces the stored value:
    /// - integers are cents
    /// - fractional numbers are rounded to the nearest cent
    /// - strings are parsed as a decimal quantity of currency units
    /// - anything else, or anything unparseable, is zero
    ///
    /// The result is clamped to [`base::Cents::MAX`] in either direction.
    pub fn cents(&self) -> base::Cents {
        let cents = match self {
            Amount::Cents(c) => *c,
            Amount::Other(serde_json::Value::Number(n)) => n
                .as_f64()
                .map(|f| base::Cents(f.round() as i64))
                .unwrap_or_default(),
            Amount::Other(serde_json::Value::String(s)) => s.parse().unwrap_or_default(),
            Amount::Other(_) => base::Cents::ZERO,
        };
        cents.bounded()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NewRecordError {
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
    #[error("amount must not be greater than {}", base::Cents::MAX)]
    AmountTooLarge,
}

impl Record {
    /// Creates a record. Amounts must be positive and at most
    /// [`base::Cents::MAX`].
    pub fn new(
        id: u64,
        date: base::Date,
        amount: base::Cents,
        details: Details,
    ) -> Result<Self, NewRecordError> {
        if !amount.is_positive() {
            return Err(NewRecordError::NonPositiveAmount);
        }
        if amount > base::Cents::MAX {
            return Err(NewRecordError::AmountTooLarge);
        }
        Ok(Self::from_parts(id, date.to_string(), Amount::Cents(amount), details))
    }

    /// Assembles a record from already-stored parts without validation.
    pub fn from_parts(id: u64, date: String, amount: Amount, details: Details) -> Self {
        Self {
            id,
            date,
            amount,
            details,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> base::Kind {
        self.details.kind()
    }

    /// Parsed date, or `None` if the stored text is not a valid `yyyy-mm-dd`
    /// date.
    pub fn date(&self) -> Option<base::Date> {
        base::Date::parse_iso(&self.date).ok()
    }

    pub fn raw_date(&self) -> &str {
        &self.date
    }

    pub fn amount(&self) -> base::Cents {
        self.amount.cents()
    }

    /// Client and destination of an income record.
    pub fn trip(&self) -> Option<(&str, &str)> {
        match &self.details {
            Details::Income {
                client,
                destination,
            } => Some((client.as_str(), destination.as_str())),
            Details::Expense { .. } => None,
        }
    }

    /// Category of an expense record.
    pub fn category(&self) -> Option<&str> {
        match &self.details {
            Details::Expense { category, .. } => Some(category.as_str()),
            Details::Income { .. } => None,
        }
    }

    /// Description of an expense record, `None` if absent or blank.
    pub fn description(&self) -> Option<&str> {
        match &self.details {
            Details::Expense { description, .. } if !description.trim().is_empty() => {
                Some(description.as_str())
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl std::str::FromStr for Record {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}
