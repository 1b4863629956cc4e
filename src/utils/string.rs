pub trait OptionStr<T> {
    fn none_if_empty(self) -> Option<T>;
}

impl OptionStr<String> for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        match self {
            Some(value) if value.trim().is_empty() => None,
            Some(value) => Some(value),
            None => None,
        }
    }
}

/// Remove one pair of matching quotes wrapping the whole value.
pub fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strings_wrapped_in_some_should_be_mapped_to_none() {
        for item in ["", " ", "\t", "\n"] {
            let option = Some(item.to_string());

            assert!(option.none_if_empty().is_none());
        }
    }

    #[test]
    fn non_empty_strings_are_kept_verbatim() {
        for item in [" h ", "hello"] {
            let option = Some(item.to_string()).none_if_empty();

            assert_eq!(option.as_deref(), Some(item));
        }
    }

    #[test]
    fn matching_quotes_are_stripped() {
        assert_eq!(strip_quotes("\"Fix bug\""), "Fix bug");
        assert_eq!(strip_quotes("'Fix bug'"), "Fix bug");
    }

    #[test]
    fn unbalanced_or_inner_quotes_are_kept() {
        assert_eq!(strip_quotes("\"Fix bug"), "\"Fix bug");
        assert_eq!(strip_quotes("Fix \"the\" bug"), "Fix \"the\" bug");
        assert_eq!(strip_quotes("\""), "\"");
        assert_eq!(strip_quotes("\"Fix bug'"), "\"Fix bug'");
    }
}
