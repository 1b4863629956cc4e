use std::path::PathBuf;

use crate::domain::{
    adapters::{self, BranchScope, CheckoutStatus, FileSystem},
    errors::GitError,
    models::{Identity, ProcessOutcome, WorkingTreeStatus},
};

pub struct Git<F: FileSystem> {
    pub fs: F,
}

impl<F: FileSystem> Git<F> {
    pub fn new(fs: F) -> Self {
        Git { fs }
    }

    fn command(&self, args: &[&str]) -> Result<ProcessOutcome, GitError> {
        let command = args.join(" ");
        log::info!("git {}", command);

        let argv: Vec<&str> = std::iter::once("git").chain(args.iter().copied()).collect();

        let outcome = self.fs.execute_command(&argv).map_err(|e| {
            log::error!("Failed to start 'git {}': {}", command, e);
            GitError::Spawn {
                command: command.clone(),
                source: e,
            }
        })?;

        if !outcome.success() {
            let message = outcome.failure_message();
            log::error!("'git {}' failed: {}", command, message);

            return Err(GitError::Command { command, message });
        }

        Ok(outcome)
    }
}

impl<F: FileSystem> adapters::Git for Git<F> {
    fn root_directory(&self) -> Result<PathBuf, GitError> {
        let outcome = self.command(&["rev-parse", "--show-toplevel"])?;
        let dir = outcome.stdout.trim();

        log::info!("git root directory {}", dir);

        Ok(PathBuf::from(dir))
    }

    fn branch_name(&self) -> Result<String, GitError> {
        let outcome = self.command(&["branch", "--show-current"])?;
        let branch = outcome.stdout.trim().to_string();

        log::info!("current git branch name '{}'", branch);

        Ok(branch)
    }

    fn branches(&self, scope: BranchScope) -> Result<Vec<String>, GitError> {
        let outcome = match scope {
            BranchScope::All => self.command(&["branch", "-a"])?,
            BranchScope::Local => self.command(&["branch"])?,
        };

        Ok(outcome.lines().map(String::from).collect())
    }

    fn checkout(&self, name: &str, status: CheckoutStatus) -> Result<(), GitError> {
        log::info!("checkout '{:?}' branch", status);

        match status {
            CheckoutStatus::New => self.command(&["checkout", "-b", name])?,
            CheckoutStatus::Existing => self.command(&["checkout", name])?,
        };

        Ok(())
    }

    fn delete_branch(&self, name: &str) -> Result<(), GitError> {
        self.command(&["branch", "-d", name])?;

        Ok(())
    }

    fn stage_all(&self) -> Result<(), GitError> {
        self.command(&["add", "."])?;

        Ok(())
    }

    fn commit(&self, identity: &Identity, message: &str) -> Result<(), GitError> {
        let config = identity.config_args();

        let mut args: Vec<&str> = config.iter().map(String::as_str).collect();
        args.extend(["commit", "-m", message]);

        self.command(&args)?;

        Ok(())
    }

    fn status(&self) -> Result<WorkingTreeStatus, GitError> {
        let outcome = self.command(&["status", "--porcelain"])?;

        Ok(WorkingTreeStatus::from_porcelain(&outcome.stdout))
    }

    fn reset_hard(&self, reference: &str) -> Result<(), GitError> {
        self.command(&["reset", "--hard", reference])?;

        Ok(())
    }

    fn is_dirty(&self) -> bool {
        self.fs.dirty()
    }

    fn mark_clean(&self) {
        log::info!("clearing working tree dirty flag");
        self.fs.set_dirty(false);
    }
}
