use std::path::PathBuf;

use crate::domain::{
    errors::GitError,
    models::{Identity, WorkingTreeStatus},
};

#[derive(Debug, PartialEq, Eq)]
pub enum CheckoutStatus {
    New,
    Existing,
}

#[derive(Debug, PartialEq, Eq)]
pub enum BranchScope {
    Local,
    All,
}

/// Used to abstract cli git commands for testing.
pub trait Git {
    /// Get the root directory of the current git repo.
    fn root_directory(&self) -> Result<PathBuf, GitError>;

    /// Get the current checked out branch name.
    fn branch_name(&self) -> Result<String, GitError>;

    /// Branch listing lines as printed by git, blank lines removed.
    fn branches(&self, scope: BranchScope) -> Result<Vec<String>, GitError>;

    /// Checkout an existing branch or create a new branch.
    fn checkout(&self, name: &str, status: CheckoutStatus) -> Result<(), GitError>;

    fn delete_branch(&self, name: &str) -> Result<(), GitError>;

    /// Stage every change in the working tree.
    fn stage_all(&self) -> Result<(), GitError>;

    fn commit(&self, identity: &Identity, message: &str) -> Result<(), GitError>;

    fn status(&self) -> Result<WorkingTreeStatus, GitError>;

    /// Hard reset the current branch onto `reference`.
    fn reset_hard(&self, reference: &str) -> Result<(), GitError>;

    /// Dirty flag of the underlying working tree service.
    fn is_dirty(&self) -> bool;

    /// Clear the dirty flag after history has been updated.
    fn mark_clean(&self);
}
