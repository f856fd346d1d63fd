use crate::base;
use crate::cli;

/// View a month's totals and expenses by category
#[derive(clap::Parser)]
pub struct Sum {
    #[arg(
        default_value = "m",
        help = cli::sharedopts::PERIOD_HELP,
        long_help = cli::sharedopts::PERIOD_HELP_LONG,
    )]
    period: base::Period,
}

impl Sum {
    pub fn run(&self, rl: base::Recordlist, config: &base::Config) -> anyhow::Result<cli::Output> {
        let tr_config = base::tree::forsum::Config {
            charset: cli::util::charset_from_config(config),
            currency: config.currency.clone(),
            period: self.period,
            rl,
        };
        Ok(cli::Output::TreeForSum(tr_config))
    }
}
