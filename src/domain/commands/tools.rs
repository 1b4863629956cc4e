use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    app_context::AppContext,
    domain::{
        adapters::{Chat, Git, Reporter, TestResults},
        errors::{Errors, UserInputError},
        models::BranchAction,
    },
};

use super::{
    branch::Branch,
    commit::Commit,
    rollback::{Rollback, RollbackTarget},
    Operation,
};

pub const COMMIT_TOOL: &str = "git_commit";
pub const ROLLBACK_TOOL: &str = "git_rollback";
pub const BRANCH_TOOL: &str = "git_branch";

/// Tool advertised to the model, with a json schema for its input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

#[derive(Debug, Deserialize)]
struct CommitArgs {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RollbackArgs {
    commit: Option<String>,
    steps: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BranchArgs {
    action: BranchAction,
    branch_name: Option<String>,
}

pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: COMMIT_TOOL,
            description: "Commits changes in the source directory to git.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "message": {
                        "type": "string",
                        "description": "Optional commit message. If not provided, a message will be generated based on the chat context."
                    }
                }
            }),
        },
        ToolDefinition {
            name: ROLLBACK_TOOL,
            description: "Rolls back to a previous git commit.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "commit": {
                        "type": "string",
                        "description": "The commit hash to rollback to"
                    },
                    "steps": {
                        "type": "integer",
                        "minimum": 1,
                        "description": "Number of commits to roll back"
                    }
                }
            }),
        },
        ToolDefinition {
            name: BRANCH_TOOL,
            description: "Manages git branches - list, create, switch, or delete branches.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "action": {
                        "type": "string",
                        "enum": ["list", "create", "switch", "delete", "current"],
                        "description": "The branch action to perform"
                    },
                    "branchName": {
                        "type": "string",
                        "description": "The name of the branch (required for create, switch, and delete actions)"
                    }
                },
                "required": ["action"]
            }),
        },
    ]
}

pub fn names() -> Vec<String> {
    definitions()
        .into_iter()
        .map(|tool| tool.name.to_string())
        .collect()
}

fn arguments<T: DeserializeOwned>(name: &str, args: Value) -> Result<T, UserInputError> {
    // Models sometimes send `null` for a call without arguments.
    let args = match args {
        Value::Null => json!({}),
        args => args,
    };

    serde_json::from_value(args).map_err(|e| UserInputError::InvalidArguments {
        name: name.into(),
        message: e.to_string(),
    })
}

/// Map a tool call onto the same operations the command line produces.
pub fn parse(name: &str, args: Value) -> Result<Operation, UserInputError> {
    log::info!("parsing tool call '{}' with {}", name, args);

    match name {
        COMMIT_TOOL => {
            let args: CommitArgs = arguments(name, args)?;

            Ok(Operation::Commit(Commit {
                message: args.message,
            }))
        }
        ROLLBACK_TOOL => {
            let args: RollbackArgs = arguments(name, args)?;
            let target = RollbackTarget::new(args.commit, args.steps)?;

            Ok(Operation::Rollback(Rollback { target }))
        }
        BRANCH_TOOL => {
            let args: BranchArgs = arguments(name, args)?;

            Ok(Operation::Branch(Branch {
                action: Some(args.action),
                name: args.branch_name,
            }))
        }
        _ => Err(UserInputError::InvalidCommand { name: name.into() }),
    }
}

pub fn execute<G: Git, C: Chat, R: Reporter, T: TestResults>(
    context: &AppContext<G, C, R, T>,
    name: &str,
    args: Value,
) -> Result<String, Errors> {
    let operation = parse(name, args).map_err(Errors::UserInput)?;

    operation.execute(context)
}
