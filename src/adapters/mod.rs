pub mod chat;
mod console;
mod file_system;
mod git;
pub mod testing;

pub use console::Console;
pub use file_system::SystemFileSystem;
pub use git::Git;
