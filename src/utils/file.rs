use std::{fs::File, io::Read, path::Path};

use anyhow::Context;

pub fn get_file_contents(path: &Path) -> anyhow::Result<String> {
    let file_name = path.display();
    let mut buff = String::new();

    let mut reader =
        File::open(path).with_context(|| format!("Failed to open file at '{}'", file_name))?;

    reader
        .read_to_string(&mut buff)
        .with_context(|| format!("Failed to read file at '{}'", file_name))?;

    Ok(buff)
}
