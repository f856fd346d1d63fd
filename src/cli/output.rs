use crate::base;

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq)]
pub enum Output {
    Str(String),
    TreeForSum(base::tree::forsum::Config),
    TableForView(base::table::forview::Config),
    Barchart(base::barchart::Config),
    Report(base::report::Config),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::TreeForSum(config) => write!(f, "{}", config.to_tree()),
            Output::TableForView(config) => write!(f, "{}", config.to_view()),
            Output::Barchart(config) => {
                if config.is_empty() {
                    writeln!(f, "{}", base::report::Config::NO_RECORDS)
                } else {
                    write!(f, "{}", config.to_barchart())
                }
            }
            Output::Report(config) => write!(f, "{}", config.to_report()),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Output::Str("asdf".into()), "asdf\n")]
    #[case(Output::Str("asdf\n".into()), "asdf\n")]
    #[case(
        Output::Barchart(base::barchart::Config {
            charset: Default::default(),
            currency: Default::default(),
            period: "2024-03".parse().unwrap(),
            term_width: 80,
            rl: Default::default(),
        }),
        "No records for this period.\n"
    )]
    fn test_to_string(#[case] output: Output, #[case] want: &str) {
        assert_eq!(output.to_string(), want)
    }
}
