/// Output of `git status --porcelain`, reduced to whether anything changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingTreeStatus {
    changes: Vec<String>,
}

impl WorkingTreeStatus {
    pub fn from_porcelain(output: &str) -> Self {
        let changes = output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.to_string())
            .collect();

        WorkingTreeStatus { changes }
    }

    pub fn is_clean(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn changes(&self) -> &[String] {
        &self.changes
    }
}
