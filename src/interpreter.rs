//! Keyword command interpreter.
//!
//! Maps a normalized transcript (lowercased, trimmed) to an [`Intent`] by
//! substring keyword matching. Checks run in a fixed order and the first
//! matching category wins, so a transcript containing both "add" and "list"
//! is an add.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a single leading "add " or "create " token.
static LEADING_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(add|create)\s+").unwrap());

/// Matches the first run of digits anywhere in a transcript.
static TASK_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// The interpreted user request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Add a task with the given text.
    AddTask(String),
    /// Remove the task at the given 1-based position.
    RemoveTask(u64),
    /// Flip the completed flag of the task at the given 1-based position.
    ToggleTask(u64),
    /// Report how many tasks are on the list.
    ListTasks,
    /// The transcript matched no known command.
    Unrecognized,
}

/// Interpret a normalized transcript.
///
/// Returns `None` when a command keyword matched but its argument was missing
/// (an "add" with no text, or a "remove"/"complete" with no digits). Such
/// transcripts are dropped silently: no mutation and no status.
#[must_use]
pub fn interpret(transcript: &str) -> Option<Intent> {
    if transcript.contains("add") || transcript.contains("create") {
        let text = LEADING_KEYWORD.replace(transcript, "").trim().to_string();
        if text.is_empty() {
            return None;
        }
        Some(Intent::AddTask(text))
    } else if transcript.contains("delete") || transcript.contains("remove") {
        find_task_number(transcript).map(Intent::RemoveTask)
    } else if transcript.contains("complete") || transcript.contains("done") {
        find_task_number(transcript).map(Intent::ToggleTask)
    } else if transcript.contains("list") || transcript.contains("show") {
        Some(Intent::ListTasks)
    } else {
        Some(Intent::Unrecognized)
    }
}

/// Extract the first digit run from a transcript as a task position.
///
/// Digit runs too large for `u64` still name *some* position; they map to
/// `u64::MAX`, which is out of range for any real list and reported the same
/// way as any other missing position.
fn find_task_number(transcript: &str) -> Option<u64> {
    let digits = TASK_NUMBER.find(transcript)?.as_str();
    Some(digits.parse().unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_strips_leading_keyword() {
        assert_eq!(interpret("add buy milk"), Some(Intent::AddTask("buy milk".to_string())));
        assert_eq!(interpret("create call mum"), Some(Intent::AddTask("call mum".to_string())));
    }

    #[test]
    fn test_add_keyword_in_the_middle_keeps_whole_text() {
        // Only a leading token is stripped; "add" anywhere still selects the
        // add category.
        assert_eq!(
            interpret("please add milk"),
            Some(Intent::AddTask("please add milk".to_string()))
        );
    }

    #[test]
    fn test_bare_add_keyword_becomes_its_own_text() {
        // No trailing token to strip, so the keyword itself is the task
        // text. Matches the original behavior exactly.
        assert_eq!(interpret("add"), Some(Intent::AddTask("add".to_string())));
        assert_eq!(interpret("create"), Some(Intent::AddTask("create".to_string())));
    }

    #[test]
    fn test_empty_remainder_is_dropped() {
        // Only reachable when the input was not pre-trimmed; the guard is
        // preserved anyway.
        assert_eq!(interpret("add "), None);
        assert_eq!(interpret("create \t "), None);
    }

    #[test]
    fn test_remove_extracts_first_digit_run() {
        assert_eq!(interpret("remove 2"), Some(Intent::RemoveTask(2)));
        assert_eq!(interpret("delete task 3"), Some(Intent::RemoveTask(3)));
        assert_eq!(interpret("remove 12 and 15"), Some(Intent::RemoveTask(12)));
    }

    #[test]
    fn test_remove_without_number_is_dropped() {
        assert_eq!(interpret("remove the last one"), None);
        assert_eq!(interpret("delete everything"), None);
    }

    #[test]
    fn test_toggle_matches_complete_and_done() {
        assert_eq!(interpret("complete task 1"), Some(Intent::ToggleTask(1)));
        assert_eq!(interpret("task 4 is done"), Some(Intent::ToggleTask(4)));
        assert_eq!(interpret("mark it done"), None);
    }

    #[test]
    fn test_list_matches_list_and_show() {
        assert_eq!(interpret("list my tasks"), Some(Intent::ListTasks));
        assert_eq!(interpret("show everything"), Some(Intent::ListTasks));
    }

    #[test]
    fn test_unknown_transcript() {
        assert_eq!(interpret("banana"), Some(Intent::Unrecognized));
        assert_eq!(interpret(""), Some(Intent::Unrecognized));
    }

    #[test]
    fn test_first_category_wins_on_ties() {
        // "add" beats "list".
        assert_eq!(
            interpret("add list of groceries"),
            Some(Intent::AddTask("list of groceries".to_string()))
        );
        // "delete" beats "done".
        assert_eq!(interpret("delete the done task 2"), Some(Intent::RemoveTask(2)));
    }

    #[test]
    fn test_oversized_position_maps_to_max() {
        assert_eq!(
            interpret("remove 99999999999999999999999999"),
            Some(Intent::RemoveTask(u64::MAX))
        );
    }
}
