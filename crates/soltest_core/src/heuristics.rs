//! Name heuristics: marker lists and phrase tables.
//!
//! Every lookup here is a case-insensitive substring match against an identifier taken from an IDL document.
//! Tables are ordered; the first matching rule wins.
//!
//! ## Notes
//! - These heuristics are approximate by nature. They live in one place so the tables can be tuned without
//!   touching classification, dependency resolution or synthesis.

/// Map a name marker to a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseRule {
    /// Lowercase substring to look for.
    pub marker: &'static str,
    /// Phrase produced when the marker is present.
    pub phrase: &'static str,
}

const fn rule(marker: &'static str, phrase: &'static str) -> PhraseRule {
    PhraseRule { marker, phrase }
}

/// Markers for instructions that bring an account into existence.
pub const CREATE_MARKERS: &[&str] = &["init", "create", "add"];

/// Markers for instructions that mutate an existing account.
pub const UPDATE_MARKERS: &[&str] = &["update"];

/// Markers for instructions that remove an account.
pub const DELETE_MARKERS: &[&str] = &["delete", "close"];

/// Create markers honored by instruction selection.
///
/// Narrower than [`CREATE_MARKERS`]: `add` instructions are not preferred during selection.
pub const SELECTION_CREATE_MARKERS: &[&str] = &["init", "create"];

/// Delete markers honored by instruction selection.
pub const SELECTION_DELETE_MARKERS: &[&str] = &["delete"];

/// Action verbs for test titles, keyed by instruction-name marker.
pub const ACTION_RULES: &[PhraseRule] = &[
    rule("create", "create"),
    rule("init", "create"),
    rule("update", "update"),
    rule("delete", "delete"),
    rule("add", "add"),
    rule("vote", "cast vote for"),
];

/// Subjects for test titles, keyed by instruction-name marker.
pub const SUBJECT_RULES: &[PhraseRule] = &[
    rule("poll", "a poll"),
    rule("candidate", "a candidate"),
    rule("entry", "a journal entry"),
    rule("journal", "a journal entry"),
    rule("favorite", "favorites"),
];

/// Subject used when no [`SUBJECT_RULES`] entry matches.
pub const DEFAULT_SUBJECT: &str = "data";

/// Representative string values, keyed by argument-name marker.
pub const STRING_PHRASE_RULES: &[PhraseRule] = &[
    rule("title", "Test Title"),
    rule("message", "Test message"),
    rule("description", "Test description"),
    rule("name", "Test"),
    rule("color", "blue"),
    rule("candidate", "Alice"),
];

/// String value used when no [`STRING_PHRASE_RULES`] entry matches.
pub const DEFAULT_STRING_PHRASE: &str = "test";

/// Check whether `name` contains any of `markers` (case-insensitive).
///
/// ## Parameters
/// - `name`: identifier to inspect.
/// - `markers`: lowercase substrings.
///
/// ## Returns
/// - (`bool`): `true` if at least one marker occurs in `name`.
pub fn mentions(name: &str, markers: &[&str]) -> bool {
    let lowered = name.to_lowercase();
    markers.iter().any(|marker| lowered.contains(marker))
}

/// Return the phrase of the first rule whose marker occurs in `name`.
pub fn first_phrase(name: &str, rules: &[PhraseRule]) -> Option<&'static str> {
    let lowered = name.to_lowercase();
    rules
        .iter()
        .find(|rule| lowered.contains(rule.marker))
        .map(|rule| rule.phrase)
}

/// Derive the action verb used in test titles.
///
/// ## Returns
/// - (`String`): the mapped verb, or the instruction name with `_` replaced by spaces.
///
/// ## Examples
/// ```rust
/// use soltest_core::heuristics::action_for;
///
/// assert_eq!(action_for("initialize_poll"), "create");
/// assert_eq!(action_for("vote"), "cast vote for");
/// assert_eq!(action_for("transfer_funds"), "transfer funds");
/// ```
pub fn action_for(instruction_name: &str) -> String {
    match first_phrase(instruction_name, ACTION_RULES) {
        Some(phrase) => phrase.to_string(),
        None => instruction_name.replace('_', " "),
    }
}

/// Derive the subject used in test titles.
pub fn subject_for(instruction_name: &str) -> &'static str {
    first_phrase(instruction_name, SUBJECT_RULES).unwrap_or(DEFAULT_SUBJECT)
}

/// Guess a representative string value for an argument.
pub fn string_phrase_for(arg_name: &str) -> &'static str {
    first_phrase(arg_name, STRING_PHRASE_RULES).unwrap_or(DEFAULT_STRING_PHRASE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentions_is_case_insensitive() {
        assert!(mentions("InitializePoll", CREATE_MARKERS));
        assert!(mentions("close_account", DELETE_MARKERS));
        assert!(!mentions("vote", CREATE_MARKERS));
    }

    #[test]
    fn test_selection_markers_skip_add() {
        assert!(mentions("add_candidate", CREATE_MARKERS));
        assert!(!mentions("add_candidate", SELECTION_CREATE_MARKERS));
    }

    #[test]
    fn test_action_priority_follows_table_order() {
        // `create` wins over `add`, `add` wins over `vote`
        assert_eq!(action_for("create_and_add"), "create");
        assert_eq!(action_for("add_vote"), "add");
        assert_eq!(action_for("update_entry"), "update");
        assert_eq!(action_for("delete_entry"), "delete");
    }

    #[test]
    fn test_action_fallback_spaces_underscores() {
        assert_eq!(action_for("withdraw_all"), "withdraw all");
    }

    #[test]
    fn test_subject_for() {
        assert_eq!(subject_for("initialize_poll"), "a poll");
        assert_eq!(subject_for("add_candidate"), "a candidate");
        assert_eq!(subject_for("create_journal_entry"), "a journal entry");
        assert_eq!(subject_for("set_favorites"), "favorites");
        assert_eq!(subject_for("transfer"), DEFAULT_SUBJECT);
    }

    #[test]
    fn test_string_phrase_for() {
        assert_eq!(string_phrase_for("title"), "Test Title");
        assert_eq!(string_phrase_for("_message"), "Test message");
        assert_eq!(string_phrase_for("poll_description"), "Test description");
        assert_eq!(string_phrase_for("candidate_name"), "Test");
        assert_eq!(string_phrase_for("color"), "blue");
        assert_eq!(string_phrase_for("candidate"), "Alice");
        assert_eq!(string_phrase_for("memo"), DEFAULT_STRING_PHRASE);
    }
}
