/// Captured result of a single subprocess invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// Exit code, `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutcome {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Non blank lines of standard output, trailing whitespace removed.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.stdout
            .lines()
            .map(|line| line.trim_end())
            .filter(|line| !line.trim().is_empty())
    }

    /// Short failure description, stderr then stdout, otherwise the exit status.
    ///
    /// Git reports some failures, such as `nothing to commit`, on stdout only.
    pub fn failure_message(&self) -> String {
        let output = [self.stderr.trim(), self.stdout.trim()]
            .into_iter()
            .find(|output| !output.is_empty());

        match (output, self.code) {
            (Some(output), _) => output.into(),
            (None, Some(code)) => format!("exited with status {code}"),
            (None, None) => "terminated by signal".into(),
        }
    }
}
