use anyhow::Context;

use crate::base;
use crate::cli;

/// Merge records exported by the browser edition of the book
///
/// Records whose ID is already in the book are skipped, so importing the same
/// file twice is harmless.
#[derive(clap::Parser)]
pub struct Import {
    /// Path to the exported JSON file, relative to the book's directory
    file: std::path::PathBuf,
}

impl Import {
    pub fn run(self, mut rl: base::Recordlist, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let path = fs.dir().join(&self.file);
        let export = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read '{}'", path.display()))?
            .parse::<base::legacy::Export>()
            .with_context(|| format!("failed to parse '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), records = export.len(), "loaded export");

        let mut imported = 0;
        let mut skipped = 0;
        for legacy in export {
            if rl.contains_id(legacy.id()) {
                tracing::debug!(id = legacy.id(), "skipping known record");
                skipped += 1;
                continue;
            }
            rl.push(legacy.into());
            imported += 1;
        }
        if imported > 0 {
            cli::util::write_rl(&rl, fs)?;
        }
        tracing::info!(imported, skipped, "imported records");

        Ok(cli::Output::Str(format!(
            "Imported {} records, skipped {}.",
            imported, skipped
        )))
    }
}
