use crate::base;
use crate::cli;

/// View a month's income and expense records, newest first
#[derive(clap::Parser)]
pub struct View {
    #[arg(
        default_value = "m",
        help = cli::sharedopts::PERIOD_HELP,
        long_help = cli::sharedopts::PERIOD_HELP_LONG,
    )]
    period: base::Period,

    #[command(flatten)]
    search_opts: cli::sharedopts::SearchOpts,

    #[command(flatten)]
    categories_opts: cli::sharedopts::CategoriesOpts,

    #[command(flatten)]
    sections: Sections,
}

#[derive(clap::Args)]
#[group(required = false, multiple = false)]
struct Sections {
    /// Only show income records
    #[arg(long)]
    income: bool,

    /// Only show expense records
    #[arg(long)]
    expenses: bool,
}

impl View {
    pub fn run(self, rl: base::Recordlist, config: &base::Config) -> anyhow::Result<cli::Output> {
        let rl = cli::util::filter_rl(
            &rl,
            &self.categories_opts.categories,
            &self.categories_opts.not_categories,
        );
        let sections = if self.sections.income {
            base::table::forview::Sections::Income
        } else if self.sections.expenses {
            base::table::forview::Sections::Expenses
        } else {
            base::table::forview::Sections::Both
        };
        Ok(cli::Output::TableForView(base::table::forview::Config {
            charset: cli::util::charset_from_config(config),
            currency: config.currency.clone(),
            period: Some(self.period),
            term: self.search_opts.search,
            sections,
            marker: None,
            rl,
        }))
    }
}
