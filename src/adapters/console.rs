use colored::Colorize;

use crate::domain::adapters::Reporter;

/// Prints progress lines to stdout, tagged with the operation producing them.
pub struct Console {
    tag: String,
}

impl Console {
    pub fn new<S: Into<String>>(tag: S) -> Self {
        Console { tag: tag.into() }
    }

    fn prefix(&self) -> String {
        format!("[{}]", self.tag).dimmed().to_string()
    }
}

impl Reporter for Console {
    fn info(&self, line: &str) {
        log::info!("{}", line);
        println!("{} {}", self.prefix(), line);
    }

    fn warning(&self, line: &str) {
        log::warn!("{}", line);
        println!("{} {}", self.prefix(), line.yellow());
    }

    fn error(&self, line: &str) {
        log::error!("{}", line);
        println!("{} {}", self.prefix(), line.red());
    }
}
