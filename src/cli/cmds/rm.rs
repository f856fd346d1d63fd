use crate::base;
use crate::cli;

/// Remove a record
#[derive(clap::Parser)]
pub struct Rm {
    /// ID of the record, as shown by 'view'
    id: u64,

    /// Execute the removal instead of displaying dry run changes
    #[arg(long)]
    confirm: bool,
}

impl Rm {
    pub fn run(
        self,
        mut rl: base::Recordlist,
        config: &base::Config,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let Some(r) = rl.get(self.id).cloned() else {
            anyhow::bail!("nonexistent record");
        };

        let marker = if self.confirm {
            rl.remove(self.id)
                .expect("record should have already been verified to exist");
            cli::util::write_rl(&rl, fs)?;
            tracing::info!(id = self.id, kind = %r.kind(), "removed record");
            base::table::forview::Marker::Removed
        } else {
            base::table::forview::Marker::WouldBeRemoved
        };

        Ok(cli::Output::TableForView(base::table::forview::Config {
            charset: cli::util::charset_from_config(config),
            currency: config.currency.clone(),
            period: None,
            term: String::new(),
            sections: base::table::forview::Sections::Both,
            marker: Some(marker),
            rl: std::iter::once(r).collect(),
        }))
    }
}
