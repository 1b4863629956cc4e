mod level;

pub use level::LogLevel;
