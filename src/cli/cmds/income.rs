use crate::base;
use crate::cli;

/// Record a ride
#[derive(clap::Parser)]
pub struct Income {
    /// Name of the client
    client: String,

    /// Where the client was taken
    destination: String,

    /// Fare received, e.g. '35' or '35,90'
    #[arg(allow_negative_numbers = true)]
    amount: base::Cents,

    #[arg(
        default_value = "d",
        help = cli::sharedopts::DATE_HELP,
        long_help = cli::sharedopts::DATE_HELP_LONG,
    )]
    date: base::Date,
}

impl Income {
    pub fn run(
        self,
        rl: base::Recordlist,
        config: &base::Config,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let details = base::Details::Income {
            client: self.client.trim().to_string(),
            destination: self.destination.trim().to_string(),
        };
        cli::util::add_record(rl, self.date, self.amount, details, config, fs)
    }
}
