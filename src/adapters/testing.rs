use std::{cell::Cell, path::PathBuf, process::Command};

use anyhow::Context;

use crate::domain::adapters::TestResults;

/// A test suite backed by a shell command, passing when it exits successfully.
pub struct CommandSuite {
    name: String,
    command: Vec<String>,
    root: PathBuf,
    passed: Cell<Option<bool>>,
}

impl CommandSuite {
    pub fn new(name: String, command: Vec<String>, root: PathBuf) -> Self {
        CommandSuite {
            name,
            command,
            root,
            passed: Cell::new(None),
        }
    }

    pub fn run(&self) -> anyhow::Result<bool> {
        let (program, args) = self
            .command
            .split_first()
            .with_context(|| format!("Test suite '{}' has no command", self.name))?;

        log::info!("running test suite '{}': {:?}", self.name, self.command);

        let status = Command::new(program)
            .args(args)
            .current_dir(&self.root)
            .status()
            .with_context(|| format!("Failed to run test suite '{}'", self.name))?;

        let passed = status.success();
        self.passed.set(Some(passed));

        Ok(passed)
    }
}

impl TestResults for CommandSuite {
    fn name(&self) -> &str {
        &self.name
    }

    /// A suite that has not run yet has not passed.
    fn all_tests_passed(&self) -> bool {
        self.passed.get().unwrap_or(false)
    }
}
