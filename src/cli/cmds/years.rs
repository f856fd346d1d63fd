use crate::base;
use crate::cli;

/// List the years that have records, newest first
#[derive(clap::Parser)]
pub struct Years {}

impl Years {
    pub fn run(self, rl: base::Recordlist) -> anyhow::Result<cli::Output> {
        let mut years = rl.years();
        years.push(base::Date::today().year());
        years.sort_unstable_by(|a, b| b.cmp(a));
        years.dedup();
        let s = years
            .iter()
            .map(i32::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        Ok(cli::Output::Str(s))
    }
}
