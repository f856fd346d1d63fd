use crate::base;
use crate::cli;

/// Remove every income or expense record in a month
#[derive(clap::Parser)]
pub struct Clear {
    /// Kind of records to remove: 'income' or 'expense'
    kind: base::Kind,

    #[arg(
        default_value = "m",
        help = cli::sharedopts::PERIOD_HELP,
        long_help = cli::sharedopts::PERIOD_HELP_LONG,
    )]
    period: base::Period,

    /// Execute the removal instead of displaying dry run changes
    #[arg(long)]
    confirm: bool,
}

impl Clear {
    pub fn run(
        self,
        mut rl: base::Recordlist,
        config: &base::Config,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let removed = rl.remove_period(self.kind, self.period);
        if removed.is_empty() {
            return Ok(cli::Output::Str("No records to remove.".to_string()));
        }

        let marker = if self.confirm {
            cli::util::write_rl(&rl, fs)?;
            tracing::info!(
                kind = %self.kind,
                period = %self.period,
                count = removed.len(),
                "cleared records"
            );
            base::table::forview::Marker::Removed
        } else {
            base::table::forview::Marker::WouldBeRemoved
        };

        Ok(cli::Output::TableForView(base::table::forview::Config {
            charset: cli::util::charset_from_config(config),
            currency: config.currency.clone(),
            period: Some(self.period),
            term: String::new(),
            sections: match self.kind {
                base::Kind::Income => base::table::forview::Sections::Income,
                base::Kind::Expense => base::table::forview::Sections::Expenses,
            },
            marker: Some(marker),
            rl: removed,
        }))
    }
}
