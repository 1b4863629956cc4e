pub mod file;
pub mod string;

pub use file::get_file_contents;
