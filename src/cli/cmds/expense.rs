use crate::base;
use crate::cli;

/// Record an expense
#[derive(clap::Parser)]
pub struct Expense {
    /// Expense category, e.g. 'Fuel' or 'Maintenance'
    category: String,

    /// Amount spent, e.g. '40' or '40,50'
    #[arg(allow_negative_numbers = true)]
    amount: base::Cents,

    #[arg(
        default_value = "d",
        help = cli::sharedopts::DATE_HELP,
        long_help = cli::sharedopts::DATE_HELP_LONG,
    )]
    date: base::Date,

    /// Optional details about the expense
    #[arg(short, long, default_value_t, hide_default_value = true)]
    description: String,
}

impl Expense {
    pub fn run(
        self,
        rl: base::Recordlist,
        config: &base::Config,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let details = base::Details::Expense {
            category: self.category.trim().to_string(),
            description: self.description.trim().to_string(),
        };
        cli::util::add_record(rl, self.date, self.amount, details, config, fs)
    }
}
