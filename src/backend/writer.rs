//! Output writer with indentation tracking
//!
//! Handles writing generated TypeScript with proper indentation.

/// Writer that tracks indentation and builds the emitted suite
pub struct SourceWriter {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    /// Spaces per indentation level
    indent_width: usize,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl SourceWriter {
    /// Create a new writer with the given indentation width
    pub fn new(indent_width: usize) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_width,
            at_line_start: true,
        }
    }

    /// Get the written output
    pub fn finish(self) -> String {
        self.output
    }

    /// Increase indentation level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write indentation if at line start
    fn write_indent(&mut self) {
        if self.at_line_start {
            let indent = " ".repeat(self.indent_level * self.indent_width);
            self.output.push_str(&indent);
            self.at_line_start = false;
        }
    }

    /// Write a string (with auto-indent)
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(s);
    }

    /// Write a string and newline
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    /// Write just a newline
    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Write a line, then indent everything written by `body`, then write the closing line.
    pub fn block(&mut self, open: &str, close: &str, body: impl FnOnce(&mut Self)) {
        self.writeln(open);
        self.indent();
        body(self);
        self.dedent();
        self.writeln(close);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_writer() -> SourceWriter {
        SourceWriter::new(2)
    }

    #[test]
    fn test_new_writer_empty_output() {
        let writer = default_writer();
        assert_eq!(writer.finish(), "");
    }

    #[test]
    fn test_write_empty_string_does_not_indent() {
        let mut writer = default_writer();
        writer.indent();
        writer.write("");
        writer.newline();
        assert_eq!(writer.finish(), "\n");
    }

    #[test]
    fn test_writeln_indents_each_line() {
        let mut writer = default_writer();
        writer.writeln("a");
        writer.indent();
        writer.writeln("b");
        writer.write("c");
        writer.write("d");
        assert_eq!(writer.finish(), "a\n  b\n  cd");
    }

    #[test]
    fn test_dedent_saturates_at_zero() {
        let mut writer = default_writer();
        writer.dedent();
        writer.writeln("x");
        assert_eq!(writer.finish(), "x\n");
    }

    #[test]
    fn test_block_nests() {
        let mut writer = SourceWriter::new(4);
        writer.block("outer {", "}", |w| {
            w.block("inner {", "}", |w| w.writeln("x;"));
        });
        assert_eq!(writer.finish(), "outer {\n    inner {\n        x;\n    }\n}\n");
        let mut writer = default_writer();
        writer.block("a(", ");", |_| {});
        writer.writeln("b");
        assert_eq!(writer.finish(), "a(\n);\nb\n");
    }
}
