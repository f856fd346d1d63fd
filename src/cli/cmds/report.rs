use crate::base;
use crate::cli;

/// Print a month's summary, chart and records as one document
#[derive(clap::Parser)]
pub struct Report {
    #[arg(
        default_value = "m",
        help = cli::sharedopts::PERIOD_HELP,
        long_help = cli::sharedopts::PERIOD_HELP_LONG,
    )]
    period: base::Period,

    #[command(flatten)]
    search_opts: cli::sharedopts::SearchOpts,
}

impl Report {
    pub fn run(self, rl: base::Recordlist, config: &base::Config) -> anyhow::Result<cli::Output> {
        let charset = cli::util::charset_from_config(config);
        Ok(cli::Output::Report(base::report::Config {
            sum: base::tree::forsum::Config {
                charset: charset.clone(),
                currency: config.currency.clone(),
                period: self.period,
                rl: rl.clone(),
            },
            chart: base::barchart::Config {
                charset: charset.clone(),
                currency: config.currency.clone(),
                period: self.period,
                term_width: cli::util::term_width(),
                rl: rl.clone(),
            },
            view: base::table::forview::Config {
                charset,
                currency: config.currency.clone(),
                period: Some(self.period),
                term: self.search_opts.search,
                sections: base::table::forview::Sections::Both,
                marker: None,
                rl,
            },
        }))
    }
}
