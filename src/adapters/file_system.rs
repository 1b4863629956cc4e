use std::{cell::Cell, path::PathBuf, process::Command};

use anyhow::Context;

use crate::domain::{adapters::FileSystem, models::ProcessOutcome};

/// Runs commands as child processes of the current working tree.
pub struct SystemFileSystem {
    root: PathBuf,
    dirty: Cell<bool>,
}

impl SystemFileSystem {
    pub fn new(root: PathBuf) -> Self {
        SystemFileSystem {
            root,
            dirty: Cell::new(false),
        }
    }
}

impl FileSystem for SystemFileSystem {
    fn execute_command(&self, argv: &[&str]) -> anyhow::Result<ProcessOutcome> {
        let (program, args) = argv.split_first().context("Expected a non empty command")?;

        let output = Command::new(program)
            .args(args)
            .current_dir(&self.root)
            .output()
            .with_context(|| format!("Failed to execute '{}'", argv.join(" ")))?;

        Ok(ProcessOutcome {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into(),
            stderr: String::from_utf8_lossy(&output.stderr).into(),
        })
    }

    fn dirty(&self) -> bool {
        self.dirty.get()
    }

    fn set_dirty(&self, dirty: bool) {
        self.dirty.set(dirty)
    }
}
