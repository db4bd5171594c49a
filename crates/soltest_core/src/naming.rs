//! Naming conventions shared between IDL identifiers and generated TypeScript.
//!
//! IDL identifiers are snake_case. The Anchor TypeScript client exposes methods and account keys in camelCase and
//! program types in PascalCase. Argument names may carry a single leading underscore (an "alias") that the
//! program's seed definitions omit.

/// Strip a single leading underscore from an argument name.
///
/// ## Examples
/// ```rust
/// use soltest_core::naming::strip_alias;
///
/// assert_eq!(strip_alias("_poll_id"), "poll_id");
/// assert_eq!(strip_alias("__x"), "_x");
/// assert_eq!(strip_alias("amount"), "amount");
/// ```
pub fn strip_alias(name: &str) -> &str {
    name.strip_prefix('_').unwrap_or(name)
}

/// Check whether an argument named `arg_name` answers to a seed path.
///
/// ## Parameters
/// - `arg_name`: declared argument name.
/// - `path`: argument reference as written in a seed.
///
/// ## Returns
/// - (`bool`): `true` on an exact match, or when `arg_name` is `path` with one leading underscore.
pub fn answers_to(arg_name: &str, path: &str) -> bool {
    arg_name == path || arg_name.strip_prefix('_') == Some(path)
}

/// Convert a snake_case identifier to camelCase.
///
/// Only an underscore followed by a lowercase ASCII letter is folded; other underscores are kept.
///
/// ## Examples
/// ```rust
/// use soltest_core::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("initialize_poll"), "initializePoll");
/// assert_eq!(to_camel_case("system_program"), "systemProgram");
/// assert_eq!(to_camel_case("vote"), "vote");
/// ```
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '_' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_lowercase() {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        out.push(ch);
    }
    out
}

/// Convert a snake_case identifier to PascalCase (the Anchor program type name).
///
/// ## Examples
/// ```rust
/// use soltest_core::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("voting"), "Voting");
/// assert_eq!(to_pascal_case("crud_app"), "CrudApp");
/// ```
pub fn to_pascal_case(name: &str) -> String {
    name.split(['_', '-'])
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_to_exact_and_alias() {
        assert!(answers_to("poll_id", "poll_id"));
        assert!(answers_to("_poll_id", "poll_id"));
        assert!(!answers_to("poll_id", "_poll_id"));
        assert!(!answers_to("__poll_id", "poll_id"));
    }

    #[test]
    fn test_camel_case_keeps_odd_underscores() {
        assert_eq!(to_camel_case("_private"), "Private");
        assert_eq!(to_camel_case("seed_1"), "seed_1");
        assert_eq!(to_camel_case("trailing_"), "trailing_");
    }

    #[test]
    fn test_pascal_case_handles_dashes_and_repeats() {
        assert_eq!(to_pascal_case("my-program"), "MyProgram");
        assert_eq!(to_pascal_case("a__b"), "AB");
        assert_eq!(to_pascal_case(""), "");
    }
}
