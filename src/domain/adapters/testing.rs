/// Outcome of the most recent run of a registered test suite.
pub trait TestResults {
    fn name(&self) -> &str;

    fn all_tests_passed(&self) -> bool;
}
