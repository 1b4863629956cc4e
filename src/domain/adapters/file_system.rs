use crate::domain::models::ProcessOutcome;

/// Used to abstract the terminal / working tree service for testing.
pub trait FileSystem {
    /// Run an argv list in the working tree, a non-zero exit is still `Ok`.
    fn execute_command(&self, argv: &[&str]) -> anyhow::Result<ProcessOutcome>;

    /// Whether files have been written since the last successful commit.
    fn dirty(&self) -> bool;

    fn set_dirty(&self, dirty: bool);
}
