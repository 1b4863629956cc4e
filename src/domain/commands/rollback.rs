use std::num::NonZeroU32;

use crate::{
    domain::{
        adapters::{Git, Reporter},
        errors::{Errors, PreconditionError, UserInputError},
    },
    utils::string::OptionStr,
};

use super::positional;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollbackTarget {
    /// Reset onto an explicit commit hash or ref.
    Commit(String),
    /// Reset this many commits back from `HEAD`.
    Steps(NonZeroU32),
}

impl Default for RollbackTarget {
    fn default() -> Self {
        RollbackTarget::Steps(NonZeroU32::MIN)
    }
}

impl RollbackTarget {
    /// An explicit commit wins over steps, with neither one step back is used.
    pub fn new(commit: Option<String>, steps: Option<u32>) -> Result<Self, UserInputError> {
        if let Some(commit) = commit.none_if_empty() {
            let commit = positional("commit", commit.trim().into())?;

            return Ok(RollbackTarget::Commit(commit));
        }

        match steps {
            Some(steps) => NonZeroU32::new(steps)
                .map(RollbackTarget::Steps)
                .ok_or(UserInputError::InvalidSteps {
                    value: steps.to_string(),
                }),
            None => Ok(RollbackTarget::default()),
        }
    }

    pub fn reference(&self) -> String {
        match self {
            RollbackTarget::Commit(commit) => commit.clone(),
            RollbackTarget::Steps(steps) => format!("HEAD~{steps}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rollback {
    pub target: RollbackTarget,
}

pub fn handler<G: Git, R: Reporter>(
    git: &G,
    reporter: &R,
    rollback: Rollback,
) -> Result<String, Errors> {
    // Never reset over uncommitted work.
    let status = git.status().map_err(Errors::Git)?;
    if !status.is_clean() {
        log::error!("uncommitted changes: {:?}", status.changes());
        return Err(Errors::Precondition(PreconditionError::UncommittedChanges));
    }

    let summary = match &rollback.target {
        RollbackTarget::Commit(commit) => {
            reporter.info(&format!("Rolling back to commit {commit}..."));
            format!("Rolled back to commit {commit}")
        }
        RollbackTarget::Steps(steps) if steps.get() == 1 => {
            reporter.info("Rolling back to previous commit...");
            "Rolled back 1 commit(s)".to_string()
        }
        RollbackTarget::Steps(steps) => {
            reporter.info(&format!("Rolling back {steps} commit(s)..."));
            format!("Rolled back {steps} commit(s)")
        }
    };

    git.reset_hard(&rollback.target.reference())
        .map_err(Errors::Git)?;

    git.mark_clean();
    reporter.info("Rollback completed successfully.");

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_takes_precedence_over_steps() {
        let target = RollbackTarget::new(Some("abc123".into()), Some(3)).unwrap();

        assert_eq!(target, RollbackTarget::Commit("abc123".into()));
        assert_eq!(target.reference(), "abc123");
    }

    #[test]
    fn blank_commit_falls_through_to_steps() {
        let target = RollbackTarget::new(Some("  ".into()), Some(3)).unwrap();

        assert_eq!(target.reference(), "HEAD~3");
    }

    #[test]
    fn option_like_commit_is_rejected() {
        let err = RollbackTarget::new(Some("--hard".into()), None).unwrap_err();

        assert_eq!(
            err,
            UserInputError::OptionLike {
                name: "commit".into(),
                value: "--hard".into()
            }
        );
    }

    #[test]
    fn no_selector_defaults_to_one_step() {
        let target = RollbackTarget::new(None, None).unwrap();

        assert_eq!(target, RollbackTarget::default());
        assert_eq!(target.reference(), "HEAD~1");
    }

    #[test]
    fn zero_steps_is_rejected() {
        let err = RollbackTarget::new(None, Some(0)).unwrap_err();

        assert_eq!(err, UserInputError::InvalidSteps { value: "0".into() });
    }
}
