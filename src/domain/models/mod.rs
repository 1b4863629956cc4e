mod branch_action;
mod identity;
mod message;
mod process;
mod status;

pub use branch_action::BranchAction;
pub use identity::Identity;
pub use message::{ChatMessage, CompletionRequest, Role};
pub use process::ProcessOutcome;
pub use status::WorkingTreeStatus;
