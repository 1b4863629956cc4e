use thiserror::Error;

#[derive(Error, Debug)]
pub enum Errors {
    #[error(transparent)]
    UserInput(UserInputError),

    #[error(transparent)]
    Precondition(PreconditionError),

    #[error(transparent)]
    Git(GitError),

    #[error("Failed writing output")]
    Output(#[source] std::io::Error),

    #[error("Invalid configuration {message}")]
    Configuration {
        message: String,
        source: anyhow::Error,
    },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UserInputError {
    #[error("Usage: {usage}")]
    Usage { usage: String },

    #[error("Unknown git action {name:?}, use 'commit', 'rollback', or 'branch'")]
    InvalidCommand { name: String },

    #[error("Invalid rollback position {value:?}, must be a positive integer")]
    InvalidSteps { value: String },

    #[error(
        "Invalid branch action {name:?}, valid actions are: list, current, create, switch, delete"
    )]
    InvalidBranchAction { name: String },

    #[error("Missing required {name:?} input for {action} action")]
    Required { name: String, action: String },

    #[error("Invalid input {name:?} found {message}")]
    InvalidArguments { name: String, message: String },

    #[error("Invalid {name} {value:?}, must not start with '-'")]
    OptionLike { name: String, value: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PreconditionError {
    #[error("Rollback aborted: uncommitted changes detected")]
    UncommittedChanges,
}

#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed running 'git {command}': {message}")]
    Command { command: String, message: String },

    #[error("Failed to start 'git {command}'")]
    Spawn {
        command: String,
        source: anyhow::Error,
    },
}

impl From<UserInputError> for Errors {
    fn from(value: UserInputError) -> Self {
        Errors::UserInput(value)
    }
}

impl From<PreconditionError> for Errors {
    fn from(value: PreconditionError) -> Self {
        Errors::Precondition(value)
    }
}

impl From<GitError> for Errors {
    fn from(value: GitError) -> Self {
        Errors::Git(value)
    }
}
