//! Input checks that run before any task is dispatched.
//!
//! Rules are applied in order and the first failing rule wins, so a caller
//! always sees the most basic problem with its input first.

use crate::domain::Task;
use crate::error::{CoreError, Result};

pub const MIN_TEXT_LENGTH: usize = 3;
pub const MIN_SUMMARY_LENGTH: usize = 200;

/// Validate the text fields of a task request.
///
/// `task` is `None` when the caller named a task that does not exist; the
/// text rules still apply so that an empty submission is reported as such
/// before the unknown task name.
pub fn validate_text_input(
    text: &str,
    task: Option<Task>,
    comparison_text: Option<&str>,
) -> Result<()> {
    if text.is_empty() {
        return Err(invalid("Text input cannot be empty"));
    }

    let length = text.chars().count();
    if length < MIN_TEXT_LENGTH {
        return Err(invalid(format!(
            "Text input must be at least {} characters long",
            MIN_TEXT_LENGTH
        )));
    }

    if task == Some(Task::TextSummarization) && length < MIN_SUMMARY_LENGTH {
        return Err(invalid(format!(
            "For text summarization, input must be at least {} characters long",
            MIN_SUMMARY_LENGTH
        )));
    }

    if task == Some(Task::TextSimilarity) {
        let comparison = match comparison_text {
            Some(c) if !c.is_empty() => c,
            _ => {
                return Err(invalid(
                    "Comparison text is required for text similarity analysis",
                ))
            }
        };
        if comparison.chars().count() < MIN_TEXT_LENGTH {
            return Err(invalid(format!(
                "Comparison text must be at least {} characters long",
                MIN_TEXT_LENGTH
            )));
        }
    }

    Ok(())
}

/// Reject submissions above the configured size limit.
pub fn validate_text_length(text: &str, max_chars: usize) -> Result<()> {
    if text.chars().count() > max_chars {
        return Err(invalid(format!(
            "Text input must be at most {} characters long",
            max_chars
        )));
    }
    Ok(())
}

fn invalid(message: impl Into<String>) -> CoreError {
    CoreError::Validation(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: Result<()>) -> String {
        match result {
            Err(CoreError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn empty_text_wins_over_unknown_task() {
        let msg = message(validate_text_input("", None, None));
        assert!(msg.contains("empty"));
    }

    #[test]
    fn short_text_names_threshold() {
        let msg = message(validate_text_input("hi", Some(Task::Tokenization), None));
        assert!(msg.contains("3 characters"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(validate_text_input("été", Some(Task::Tokenization), None).is_ok());
    }

    #[test]
    fn max_length_is_enforced() {
        assert!(validate_text_length("abcd", 4).is_ok());
        let msg = message(validate_text_length("abcde", 4));
        assert!(msg.contains("at most 4"));
    }
}
