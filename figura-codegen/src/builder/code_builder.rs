//! Line-oriented text builder with indentation tracking.

/// One indent level.
const INDENT: &str = "  ";

/// Fluent API for building indented source text.
///
/// Methods return `&mut Self`, so calls chain and also work inside loops.
///
/// # Example
///
/// ```
/// use figura_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::web();
/// builder
///     .push_line("<div>")
///     .push_indent()
///     .push_line("<p>Hello</p>")
///     .push_dedent()
///     .push_line("</div>");
///
/// assert_eq!(builder.build(), "<div>\n  <p>Hello</p>\n</div>\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create an empty builder at column zero.
    pub fn web() -> Self {
        Self {
            indent_level: 0,
            buffer: String::new(),
        }
    }

    /// Start at `level` instead of column zero.
    pub fn at_level(mut self, level: usize) -> Self {
        self.indent_level = level;
        self
    }

    /// Add a line with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Build the final string.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        self.buffer.push_str(&INDENT.repeat(self.indent_level));
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::web()
    }
}
