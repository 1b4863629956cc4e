use clap::Subcommand;
use colored::Colorize;

use crate::{
    adapters::testing::CommandSuite,
    app_context::AppContext,
    domain::{
        adapters::{Chat, Git, Reporter},
        commands::{operation::HELP, Operation},
        errors::{Errors, UserInputError},
    },
};

use super::{shell, suites, tool};

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run a git operation such as `commit [message]`, `rollback [steps]` or `branch [action] [name]`.
    #[clap(after_help = HELP)]
    Git {
        #[clap(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Invoke a git tool call with json arguments.
    Tool {
        /// Name of the tool, see `tools`.
        name: String,
        /// Json object holding the tool arguments.
        #[clap(default_value = "{}")]
        args: String,
    },
    /// Print the tool definitions offered to the model.
    Tools,
    /// Run the configured test suites and commit when the tree is dirty and they all pass.
    Test,
    /// Interactive `/git` prompt.
    Shell,
}

impl Commands {
    pub fn execute<G: Git, C: Chat, R: Reporter>(
        self,
        context: &AppContext<G, C, R, CommandSuite>,
    ) -> Result<(), Errors> {
        match self {
            Commands::Git { args } => {
                let operation: Operation = args.join(" ").parse().map_err(Errors::UserInput)?;
                let summary = operation.execute(context)?;
                print_summary(&summary);

                Ok(())
            }
            Commands::Tool { name, args } => tool::handler(context, &name, &args),
            Commands::Tools => tool::definitions(),
            Commands::Test => suites::handler(context),
            Commands::Shell => shell::handler(context),
        }
    }
}

pub(super) fn print_summary(summary: &str) {
    println!("{}", summary.green());
}

pub(super) fn invalid_json(name: &str, e: serde_json::Error) -> Errors {
    Errors::UserInput(UserInputError::InvalidArguments {
        name: name.into(),
        message: e.to_string(),
    })
}
