//! Generation configuration.

/// Default number of instructions a suite exercises.
pub const DEFAULT_MAX_INSTRUCTIONS: usize = 3;

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Maximum number of instructions to test; `None` tests every instruction
    pub max_instructions: Option<usize>,
    /// Fail instead of dropping arg-bound seeds that name no argument in scope
    pub strict_seeds: bool,
    /// Number of spaces per indentation level in the emitted suite
    pub indent_width: usize,
    /// Whether multi-line arrays and objects get trailing commas
    pub trailing_commas: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            max_instructions: Some(DEFAULT_MAX_INSTRUCTIONS),
            strict_seeds: false,
            indent_width: 2,
            trailing_commas: true,
        }
    }
}

impl GenerateConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection limit
    pub fn with_max_instructions(mut self, limit: usize) -> Self {
        self.max_instructions = Some(limit);
        self
    }

    /// Select every instruction of the program
    pub fn with_all_instructions(mut self) -> Self {
        self.max_instructions = None;
        self
    }

    /// Fail on unresolved seed references
    pub fn with_strict_seeds(mut self, strict: bool) -> Self {
        self.strict_seeds = strict;
        self
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Toggle trailing commas
    pub fn with_trailing_commas(mut self, enabled: bool) -> Self {
        self.trailing_commas = enabled;
        self
    }

    /// Number of instructions to select out of `total`.
    pub fn selection_limit(&self, total: usize) -> usize {
        self.max_instructions.map_or(total, |limit| limit.min(total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GenerateConfig::default();
        assert_eq!(config.max_instructions, Some(3));
        assert!(!config.strict_seeds);
        assert_eq!(config.indent_width, 2);
        assert!(config.trailing_commas);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(GenerateConfig::new(), GenerateConfig::default());
    }

    #[test]
    fn test_selection_limit() {
        let config = GenerateConfig::new();
        assert_eq!(config.selection_limit(10), 3);
        assert_eq!(config.selection_limit(2), 2);
        assert_eq!(config.selection_limit(0), 0);

        let all = GenerateConfig::new().with_all_instructions();
        assert_eq!(all.selection_limit(10), 10);
    }

    #[test]
    fn test_builder_chain() {
        let config = GenerateConfig::new()
            .with_max_instructions(5)
            .with_strict_seeds(true)
            .with_indent_width(4)
            .with_trailing_commas(false);
        assert_eq!(config.max_instructions, Some(5));
        assert!(config.strict_seeds);
        assert_eq!(config.indent_width, 4);
        assert!(!config.trailing_commas);
    }

    #[test]
    fn test_builder_override() {
        let config = GenerateConfig::new().with_all_instructions().with_max_instructions(1);
        assert_eq!(config.max_instructions, Some(1)); // Last value wins
    }
}
