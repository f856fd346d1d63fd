use anyhow::Context;

use crate::base;
use crate::cli;

pub fn charset_from_config(config: &base::Config) -> base::Charset {
    let mut charset = base::Charset::default();
    if config.use_unicode_symbols {
        charset = charset.with_unicode()
    }
    if config.use_colored_output {
        charset = charset.with_color()
    }
    charset
}

/// Width of the attached terminal, or 0 if there is none.
pub fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0)
        .unwrap_or_default() as usize
}

/// Returns a new record list keeping every income record, and each expense
/// record whose category:
/// - Matches any wildcard pattern in 'categories'
/// - Does not match any non-empty wildcard pattern in 'not_categories'
pub fn filter_rl<T, U>(
    rl: &base::Recordlist,
    categories: &[T],
    not_categories: &[U],
) -> base::Recordlist
where
    T: AsRef<str>,
    U: AsRef<str>,
{
    let incl = categories
        .iter()
        .map(|s| wildmatch::WildMatch::new_case_insensitive(s.as_ref()))
        .collect::<Vec<_>>();
    let excl = not_categories
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| !s.is_empty())
        .map(wildmatch::WildMatch::new_case_insensitive)
        .collect::<Vec<_>>();
    rl.iter()
        .filter(|r| match r.category() {
            Some(category) => {
                incl.iter().any(|p| p.matches(category))
                    && !excl.iter().any(|p| p.matches(category))
            }
            None => true,
        })
        .collect::<base::Recordlist>()
}

/// Appends a new record dated `date` to the book and persists it. Returns the
/// summary of the record's month.
pub fn add_record(
    mut rl: base::Recordlist,
    date: base::Date,
    amount: base::Cents,
    details: base::Details,
    config: &base::Config,
    fs: &base::Fs,
) -> anyhow::Result<cli::Output> {
    let id = rl.next_id(base::util::now_millis());
    let r = base::Record::new(id, date, amount, details)?;
    tracing::info!(id, kind = %r.kind(), date = %date, amount = %amount, "adding record");
    rl.push(r);
    write_rl(&rl, fs)?;
    Ok(cli::Output::TreeForSum(base::tree::forsum::Config {
        charset: charset_from_config(config),
        currency: config.currency.clone(),
        period: base::Period::of(date),
        rl,
    }))
}

pub fn write_rl(rl: &base::Recordlist, fs: &base::Fs) -> anyhow::Result<()> {
    fs.write(rl).with_context(|| {
        format!(
            "failed to write '{}'",
            fs.path::<base::Recordlist>().display()
        )
    })
}
