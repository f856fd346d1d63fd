use crate::base;
use crate::cli;

/// Plot a month's gross income against each expense category
#[derive(clap::Parser)]
pub struct Plot {
    #[arg(
        default_value = "m",
        help = cli::sharedopts::PERIOD_HELP,
        long_help = cli::sharedopts::PERIOD_HELP_LONG,
    )]
    period: base::Period,
}

impl Plot {
    pub fn run(self, rl: base::Recordlist, config: &base::Config) -> anyhow::Result<cli::Output> {
        let chart_config = base::barchart::Config {
            charset: cli::util::charset_from_config(config),
            currency: config.currency.clone(),
            period: self.period,
            term_width: cli::util::term_width(),
            rl,
        };
        Ok(cli::Output::Barchart(chart_config))
    }
}
