use anyhow::Context;

use crate::base;
use crate::cli;

/// Initialize a book in the current directory
#[derive(clap::Parser)]
pub struct Init {
    /// Restore an existing book's config to defaults
    #[arg(long)]
    reset_config: bool,
}

fn initial_config() -> base::Config {
    base::Config {
        use_colored_output: true,
        use_unicode_symbols: true,
        ..Default::default()
    }
}

impl Init {
    pub fn run(&self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let already_repo = fs.is_repo();

        let path = fs.path::<base::Config>();
        let config = if self.reset_config || !path.exists() {
            initial_config()
        } else {
            fs.read::<base::Config>()
                .with_context(|| format!("failed to read '{}'", path.display()))?
        };
        fs.write(&config)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        tracing::info!(dir = %fs.dir().display(), reset = self.reset_config, "initialized book");

        Ok(if !already_repo {
            cli::Output::Str(format!("Book initialized in '{}'", fs.dir().display()))
        } else if self.reset_config {
            cli::Output::Str("Book configuration reset to defaults.".to_string())
        } else {
            cli::Output::Str(format!("Book reinitialized in '{}'", fs.dir().display()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    cli::testing::generate_testcases![
        (
            empty_dir,
            cli::testing::MutCase {
                invocations: &[cli::testing::Invocation {
                    args: &["", "init"],
                    res: cli::testing::ResultMatcher::OkStrGlob("book initialized in*"),
                }],
                initial_state: cli::testing::StrState::new(),
                final_state: cli::testing::State::new().with_config(initial_config()),
            }
        ),
        (
            empty_dir_reset_config,
            cli::testing::MutCase {
                invocations: &[cli::testing::Invocation {
                    args: &["", "init", "--reset-config"],
                    res: cli::testing::ResultMatcher::OkStrGlob("book initialized in*"),
                }],
                initial_state: cli::testing::StrState::new(),
                final_state: cli::testing::State::new().with_config(initial_config()),
            }
        ),
        (
            existing_book,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "init"],
                    res: cli::testing::ResultMatcher::OkStrGlob("book reinitialized in*"),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config(r#"{"currency":{"symbol":"$"},"useColoredOutput":true}"#)
                    .with_rl(
                        r#"{"id":1,"date":"2024-03-05","amount":100,"kind":"expense","category":"a"}"#
                    ),
            }
        ),
        (
            existing_book_reset_config,
            cli::testing::MutCase {
                invocations: &[cli::testing::Invocation {
                    args: &["", "init", "--reset-config"],
                    res: cli::testing::ResultMatcher::OkStrGlob(
                        "book configuration reset to defaults."
                    ),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config(r#"{"currency":{"symbol":"$"},"useColoredOutput":true}"#)
                    .with_rl(
                        r#"{"id":1,"date":"2024-03-05","amount":100,"kind":"expense","category":"a"}"#
                    ),
                final_state: cli::testing::State::new()
                    .with_config(initial_config())
                    .with_rl(
                        r#"{"id":1,"date":"2024-03-05","amount":100,"kind":"expense","category":"a"}"#
                    ),
            }
        ),
    ];
}
