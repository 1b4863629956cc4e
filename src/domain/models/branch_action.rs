use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::errors::UserInputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchAction {
    /// List all local and remote branches.
    List,
    /// Show the checked out branch.
    Current,
    /// Create and switch to a new branch.
    Create,
    /// Switch to an existing branch.
    Switch,
    /// Delete a branch.
    Delete,
}

impl BranchAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            BranchAction::List => "list",
            BranchAction::Current => "current",
            BranchAction::Create => "create",
            BranchAction::Switch => "switch",
            BranchAction::Delete => "delete",
        }
    }
}

impl Display for BranchAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BranchAction {
    type Err = UserInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "list" => Ok(BranchAction::List),
            "current" => Ok(BranchAction::Current),
            "create" => Ok(BranchAction::Create),
            "switch" => Ok(BranchAction::Switch),
            "delete" => Ok(BranchAction::Delete),
            _ => Err(UserInputError::InvalidBranchAction { name: s.into() }),
        }
    }
}
