use crate::{
    domain::{
        adapters::{BranchScope, CheckoutStatus, Git, Reporter},
        errors::{Errors, UserInputError},
        models::BranchAction,
    },
    utils::string::OptionStr,
};

use super::positional;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Branch {
    /// Action to perform, `None` shows the current branch and local branches.
    pub action: Option<BranchAction>,
    /// Name of the branch, required to create, switch or delete.
    pub name: Option<String>,
}

pub fn handler<G: Git, R: Reporter>(git: &G, reporter: &R, branch: Branch) -> Result<String, Errors> {
    let action = match branch.action {
        Some(action) => action,
        None => return overview(git, reporter),
    };

    match action {
        BranchAction::List => {
            reporter.info("Listing all branches...");
            let branches = git.branches(BranchScope::All).map_err(Errors::Git)?;

            Ok(listing("Branches:", &branches, reporter))
        }
        BranchAction::Current => {
            let current = git.branch_name().map_err(Errors::Git)?;
            let summary = format!("Current branch: {current}");
            reporter.info(&summary);

            Ok(summary)
        }
        BranchAction::Create => {
            let name = branch_name(action, branch.name)?;

            reporter.info(&format!("Creating new branch: {name}..."));
            git.checkout(&name, CheckoutStatus::New)
                .map_err(Errors::Git)?;
            reporter.info(&format!("Successfully created and switched to branch: {name}"));

            Ok(format!("Branch '{name}' created and checked out"))
        }
        BranchAction::Switch => {
            let name = branch_name(action, branch.name)?;

            reporter.info(&format!("Switching to branch: {name}..."));
            git.checkout(&name, CheckoutStatus::Existing)
                .map_err(Errors::Git)?;
            reporter.info(&format!("Successfully switched to branch: {name}"));

            Ok(format!("Switched to branch '{name}'"))
        }
        BranchAction::Delete => {
            let name = branch_name(action, branch.name)?;

            reporter.info(&format!("Deleting branch: {name}..."));
            git.delete_branch(&name).map_err(Errors::Git)?;
            reporter.info(&format!("Successfully deleted branch: {name}"));

            Ok(format!("Branch '{name}' deleted"))
        }
    }
}

/// Name for an action that changes branches, checked before git runs.
fn branch_name(action: BranchAction, name: Option<String>) -> Result<String, UserInputError> {
    let name = name
        .none_if_empty()
        .ok_or_else(|| UserInputError::Required {
            name: "branch name".into(),
            action: action.to_string(),
        })?;

    positional("branch name", name)
}

fn overview<G: Git, R: Reporter>(git: &G, reporter: &R) -> Result<String, Errors> {
    let current = git.branch_name().map_err(Errors::Git)?;
    let branches = git.branches(BranchScope::Local).map_err(Errors::Git)?;

    let current = format!("Current branch: {current}");
    reporter.info(&current);

    let local = listing("Local branches:", &branches, reporter);

    Ok(format!("{current}\n{local}"))
}

fn listing<R: Reporter>(title: &str, branches: &[String], reporter: &R) -> String {
    reporter.info(title);

    let mut lines = vec![title.to_string()];
    for branch in branches {
        let line = format!("  {branch}");
        reporter.info(&line);
        lines.push(line);
    }

    lines.join("\n")
}
