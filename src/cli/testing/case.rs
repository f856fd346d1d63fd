use crate::base;
use crate::cli;

/// A single command invocation.
pub struct Invocation<'a> {
    /// Command line arguments. First arg is the binary name, which doesn't do
    /// anything useful, so can be empty.
    pub args: &'a [&'a str],
    pub res: cli::testing::ResultMatcher<'a>,
}

impl Invocation<'_> {
    fn run(&self, fs: &base::Fs) {
        let root = match <cli::Root as clap::Parser>::try_parse_from(self.args) {
            Ok(cmd) => cmd,
            Err(e) => panic!("{:?}: {}", self.args, e),
        };
        self.res.assert_matches(root.run(fs));
    }
}

/// Test case encapsulating expectations for the given command invocations.
/// Commands may mutate the repository.
pub struct MutCase<'a> {
    pub invocations: &'a [Invocation<'a>],

    /// Repository files prior to running the commands.
    pub initial_state: cli::testing::StrState<'a>,

    /// Desired repository state after running every command.
    pub final_state: cli::testing::State,
}

impl MutCase<'_> {
    /// 1. Creates a tempdir and writes files based on `initial_state`
    /// 1. Runs each invocation in order and checks its result
    /// 1. Checks if files match `final_state`
    pub fn run(self) {
        let (fs, _td) = cli::testing::tempfs();
        self.initial_state.to_fs(&fs);
        for inv in self.invocations {
            inv.run(&fs);
        }
        assert_eq!(cli::testing::State::from_fs(&fs), self.final_state);
    }
}

/// Test case for commands that must leave the repository untouched.
pub struct Case<'a> {
    pub invocations: &'a [Invocation<'a>],
    pub initial_state: cli::testing::StrState<'a>,
}

impl Case<'_> {
    pub fn run(self) {
        MutCase {
            invocations: self.invocations,
            final_state: self.initial_state.to_state(),
            initial_state: self.initial_state,
        }
        .run()
    }
}
