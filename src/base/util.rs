pub const BOUNDING_SPACES_COUNT: usize = 2;
pub const MIN_DASHES_COUNT: usize = 2;
pub const MIN_TERM_WIDTH: usize = 60;
pub const COLUMN_GAP: &str = "  ";

/// Display width of `s`, counted in chars.
pub fn charlen(s: &str) -> usize {
    s.chars().count()
}

/// Milliseconds since the Unix epoch, used to stamp new records.
#[cfg(not(test))]
pub fn now_millis() -> u64 {
    let nanos = time::OffsetDateTime::now_utc().unix_timestamp_nanos();
    u64::try_from(nanos / 1_000_000).unwrap_or_default()
}

/// Milliseconds since the Unix epoch, used to stamp new records.
#[cfg(test)]
pub fn now_millis() -> u64 {
    1_710_460_800_000
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 0)]
    #[case("abc", 3)]
    #[case("R$ 1,00", 7)]
    #[case("Pedágio", 7)]
    #[case("\u{2500}\u{2500}", 2)]
    fn test_charlen(#[case] s: &str, #[case] want: usize) {
        assert_eq!(charlen(s), want)
    }
}
