mod chat;
mod file_system;
mod git;
mod reporter;
mod testing;

pub use chat::Chat;
pub use file_system::FileSystem;
pub use git::{BranchScope, CheckoutStatus, Git};
pub use reporter::Reporter;
pub use testing::TestResults;
