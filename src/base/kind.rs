/// Whether a record brings money in or takes it out.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::VariantNames,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Income,
    Expense,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("income", Some(Kind::Income))]
    #[case("Expense", Some(Kind::Expense))]
    #[case("EXPENSE", Some(Kind::Expense))]
    #[case("expenses", None)]
    #[case("", None)]
    fn test_from_str(#[case] s: &str, #[case] want: Option<Kind>) {
        assert_eq!(s.parse::<Kind>().ok(), want)
    }

    #[test]
    fn test_to_string() {
        assert_eq!(Kind::Income.to_string(), "income");
        assert_eq!(Kind::Expense.to_string(), "expense");
    }
}
