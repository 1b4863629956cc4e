use std::{num::NonZeroU32, str::FromStr};

use crate::{
    app_context::AppContext,
    domain::{
        adapters::{Chat, Git, Reporter, TestResults},
        errors::{Errors, UserInputError},
        models::BranchAction,
    },
    utils::string::strip_quotes,
};

use super::{
    branch::{self, Branch},
    commit::{self, Commit},
    rollback::{self, Rollback, RollbackTarget},
};

pub const USAGE: &str = "/git <commit|rollback|branch> [options]";

pub const HELP: &str = "\
Git operations

Usage: /git <action> [options]

  /git commit [message]
      Stage and commit every change. Without a message one is generated
      from the conversation.

  /git rollback [steps]
      Hard reset back a number of commits (default: 1). Fails when there
      are uncommitted changes.

  /git branch [action] [name]
      Without an action shows the current branch and local branches.
        list              list all local and remote branches
        current           show the current branch
        create <name>     create and switch to a new branch
        switch <name>     switch to an existing branch
        delete <name>     delete a branch

Examples:
  /git commit \"Fix authentication bug\"
  /git rollback 3
  /git branch create feature-xyz";

/// A single git request, from either a command line or a tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Commit(Commit),
    Rollback(Rollback),
    Branch(Branch),
}

impl FromStr for Operation {
    type Err = UserInputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let args: Vec<&str> = line.split_whitespace().collect();

        let (action, rest) = args.split_first().ok_or_else(|| UserInputError::Usage {
            usage: USAGE.into(),
        })?;

        log::info!("parsing git action '{}' with {:?}", action, rest);

        match action.to_lowercase().as_str() {
            "commit" => {
                let message = match rest {
                    [] => None,
                    words => Some(strip_quotes(&words.join(" ")).to_string()),
                };

                Ok(Operation::Commit(Commit { message }))
            }
            "rollback" => {
                let target = match rest.first() {
                    Some(token) => RollbackTarget::Steps(parse_steps(token)?),
                    None => RollbackTarget::default(),
                };

                Ok(Operation::Rollback(Rollback { target }))
            }
            "branch" => {
                let action = rest.first().map(|token| token.parse::<BranchAction>()).transpose()?;
                let name = rest.get(1).map(|name| name.to_string());

                Ok(Operation::Branch(Branch { action, name }))
            }
            _ => Err(UserInputError::InvalidCommand {
                name: action.to_string(),
            }),
        }
    }
}

/// Base 10 digits only, so signs, blanks and fractions are rejected alongside zero.
fn parse_steps(token: &str) -> Result<NonZeroU32, UserInputError> {
    let invalid = || UserInputError::InvalidSteps {
        value: token.into(),
    };

    if !token.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    token
        .parse::<u32>()
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(invalid)
}

impl Operation {
    pub fn execute<G: Git, C: Chat, R: Reporter, T: TestResults>(
        self,
        context: &AppContext<G, C, R, T>,
    ) -> Result<String, Errors> {
        log::info!("executing {:?}", self);

        match self {
            Operation::Commit(args) => commit::handler(
                &context.git,
                &context.chat,
                &context.reporter,
                &context.config,
                args,
            ),
            Operation::Rollback(args) => rollback::handler(&context.git, &context.reporter, args),
            Operation::Branch(args) => branch::handler(&context.git, &context.reporter, args),
        }
    }
}
