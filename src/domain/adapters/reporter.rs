/// Progress lines shown to the user while an operation runs.
pub trait Reporter {
    fn info(&self, line: &str);

    fn warning(&self, line: &str);

    fn error(&self, line: &str);
}
