pub mod branch;
pub mod commit;
pub mod hook;
pub mod operation;
pub mod rollback;
pub mod tools;

pub use operation::Operation;

use super::errors::UserInputError;

/// Refs are passed to git as positional arguments, so a leading `-` would be read as an option.
fn positional(name: &str, value: String) -> Result<String, UserInputError> {
    if value.starts_with('-') {
        return Err(UserInputError::OptionLike {
            name: name.into(),
            value,
        });
    }

    Ok(value)
}
