use anyhow::Context;

use crate::base;
use crate::cli;

/// Income and expense book for ride-hailing and taxi drivers
#[derive(clap::Parser)]
#[command(version, color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Income(cli::cmds::income::Income),
    Expense(cli::cmds::expense::Expense),
    Rm(cli::cmds::rm::Rm),
    Clear(cli::cmds::clear::Clear),
    Sum(cli::cmds::sum::Sum),
    View(cli::cmds::view::View),
    Plot(cli::cmds::plot::Plot),
    Report(cli::cmds::report::Report),
    Years(cli::cmds::years::Years),
    Import(cli::cmds::import::Import),
}

impl Root {
    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        if !fs.is_repo() {
            anyhow::bail!("not a repository")
        }
        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Config>().display()))?;
        let rl = fs.read::<base::Recordlist>().with_context(|| {
            format!(
                "failed to read '{}'",
                fs.path::<base::Recordlist>().display()
            )
        })?;
        tracing::debug!(records = rl.len(), "loaded book");

        match self.command {
            Commands::Init(_) => unreachable!(),
            Commands::Income(cmd) => cmd.run(rl, &config, fs),
            Commands::Expense(cmd) => cmd.run(rl, &config, fs),
            Commands::Rm(cmd) => cmd.run(rl, &config, fs),
            Commands::Clear(cmd) => cmd.run(rl, &config, fs),
            Commands::Sum(cmd) => cmd.run(rl, &config),
            Commands::View(cmd) => cmd.run(rl, &config),
            Commands::Plot(cmd) => cmd.run(rl, &config),
            Commands::Report(cmd) => cmd.run(rl, &config),
            Commands::Years(cmd) => cmd.run(rl),
            Commands::Import(cmd) => cmd.run(rl, fs),
        }
    }
}
