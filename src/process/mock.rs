use std::sync::Mutex;

use crate::error::{BumpError, Result};
use crate::process::{CommandOutput, CommandRunner, Invocation};

/// Scripted failure: invocations starting with `prefix` fail, either all of
/// them or only the n-th one (1-based)
#[derive(Debug, Clone)]
struct Failure {
    prefix: Vec<String>,
    occurrence: Option<usize>,
    code: i32,
    stderr: String,
}

impl Failure {
    fn matches(&self, words: &[&str]) -> bool {
        self.prefix.len() <= words.len()
            && self
                .prefix
                .iter()
                .zip(words.iter())
                .all(|(expected, actual)| expected == actual)
    }
}

fn words(invocation: &Invocation) -> Vec<&str> {
    std::iter::once(invocation.program.as_str())
        .chain(invocation.args.iter().map(String::as_str))
        .collect()
}

/// Mock runner for testing without spawning processes
#[derive(Debug, Default)]
pub struct MockRunner {
    invocations: Mutex<Vec<Invocation>>,
    failures: Vec<Failure>,
}

impl MockRunner {
    /// Create a mock where every command succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every invocation whose program + leading args equal `prefix` fail.
    ///
    /// `fail_on(&["git", "commit", "-a", "-m", "release"])` only fails that
    /// exact commit, while `fail_on(&["git", "push"])` fails every push.
    pub fn fail_on(mut self, prefix: &[&str], stderr: impl Into<String>) -> Self {
        self.failures.push(Failure {
            prefix: prefix.iter().map(|s| s.to_string()).collect(),
            occurrence: None,
            code: 1,
            stderr: stderr.into(),
        });
        self
    }

    /// Fail only the `occurrence`-th (1-based) invocation matching `prefix`.
    ///
    /// `fail_on_nth(&["npm", "version"], 2, ..)` lets the first stamp succeed
    /// and fails the second one.
    pub fn fail_on_nth(
        mut self,
        prefix: &[&str],
        occurrence: usize,
        stderr: impl Into<String>,
    ) -> Self {
        self.failures.push(Failure {
            prefix: prefix.iter().map(|s| s.to_string()).collect(),
            occurrence: Some(occurrence),
            code: 1,
            stderr: stderr.into(),
        });
        self
    }

    /// All invocations seen so far, in order
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Invocations rendered as command lines
    pub fn command_lines(&self) -> Vec<String> {
        self.invocations().iter().map(|i| i.to_string()).collect()
    }

    /// Number of invocations of `program` whose first argument is `subcommand`
    pub fn count(&self, program: &str, subcommand: &str) -> usize {
        self.invocations()
            .iter()
            .filter(|i| {
                i.program == program && i.args.first().map(String::as_str) == Some(subcommand)
            })
            .count()
    }

    /// Failure for the latest recorded invocation, if any is scripted
    fn matching_failure(&self, invocation: &Invocation) -> Option<&Failure> {
        let current = words(invocation);
        let history = self.invocations();

        self.failures.iter().find(|failure| {
            if !failure.matches(&current) {
                return false;
            }
            match failure.occurrence {
                None => true,
                Some(n) => {
                    let seen = history
                        .iter()
                        .filter(|call| failure.matches(&words(call)))
                        .count();
                    seen == n
                }
            }
        })
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput> {
        if let Ok(mut calls) = self.invocations.lock() {
            calls.push(invocation.clone());
        }

        match self.matching_failure(invocation) {
            Some(failure) => Err(BumpError::command(
                invocation.display_line(),
                failure.code,
                "",
                failure.stderr.clone(),
            )),
            None => Ok(CommandOutput::default()),
        }
    }
}
