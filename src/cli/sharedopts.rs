pub const PERIOD_HELP: &str = "Month of interest [default: m]";
pub const PERIOD_HELP_LONG: &str = "Month of interest [default: m]

Either 'yyyy-mm', or a month relative to the current one ('n' is optional and defaults to 0):
mn: the nth month from the current month

For example, 'm-1' is last month and '2024-03' is March 2024.";

pub const DATE_HELP: &str = "Date of the record";
pub const DATE_HELP_LONG: &str = "Date of the record

Either an ISO 8601 date (yyyy-mm-dd), or a date relative to today ('n' is optional and defaults to 0):
dn: n days from today

For example, 'd' is today and 'd-1' is yesterday.";

#[derive(clap::Args)]
pub struct CategoriesOpts {
    /// Wildcard patterns to match expense categories of interest
    ///
    /// Use commas to separate multiple patterns. An expense is included if its
    /// category matches any pattern. Matching is case-insensitive.
    #[arg(
        short,
        long,
        value_name = "PATTERNS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub categories: Vec<String>,

    /// Wildcard patterns to match expense categories to exclude
    ///
    /// Use commas to separate multiple patterns. An expense is excluded if its
    /// category matches any pattern. Takes precedence over '--categories'.
    #[arg(
        short = 'x',
        long,
        value_name = "PATTERNS",
        value_delimiter = ',',
        default_value = "",
        hide_default_value = true
    )]
    pub not_categories: Vec<String>,
}

#[derive(clap::Args)]
pub struct SearchOpts {
    /// Only show income whose client or destination contains TERM
    ///
    /// Matching is case-insensitive. Expenses are not affected.
    #[arg(
        short,
        long,
        value_name = "TERM",
        default_value_t,
        hide_default_value = true
    )]
    pub search: String,
}
