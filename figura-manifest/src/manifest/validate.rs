//! Locating offending values in the manifest source.

use miette::SourceSpan;

use crate::{Error, Result, error::SourceContext};

/// Source and filename of the manifest under validation.
///
/// Validation works on the deserialized manifest, which has no positions,
/// so spans are recovered by searching the source text.
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    src: &'a str,
    filename: &'a str,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    pub fn src(&self) -> &'a str {
        self.src
    }

    pub fn filename(&self) -> &'a str {
        self.filename
    }

    fn error(&self, message: impl Into<String>, span: Option<SourceSpan>) -> Box<Error> {
        SourceContext::new(self.src, self.filename).validation_error(message, span)
    }

    /// Error pointing at the `key = ...` assignment.
    pub fn error_at_key(&self, message: impl Into<String>, key: &str) -> Box<Error> {
        self.error(message, find_key_span(self.src, key))
    }

    /// Error pointing at the quoted `value`, or at `key` if the value is not found.
    pub fn error_at_value(&self, message: impl Into<String>, key: &str, value: &str) -> Box<Error> {
        let span = find_value_span(self.src, value).or_else(|| find_key_span(self.src, key));
        self.error(message, span)
    }

    /// Reject an empty (or whitespace) string value.
    pub fn require_non_empty(&self, key: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(self.error_at_key(format!("'{key}' cannot be empty"), key));
        }
        Ok(())
    }
}

/// Find the span of `key` where it is assigned (`key = ...` at line start).
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        let rest = trimmed
            .strip_prefix(key)
            .or_else(|| quoted(trimmed, key));
        if let Some(rest) = rest
            && rest.trim_start().starts_with('=')
        {
            let key_len = trimmed.len() - rest.len();
            return Some(SourceSpan::from((offset + indent, key_len)));
        }
        offset += line.len();
    }
    None
}

fn quoted<'s>(line: &'s str, key: &str) -> Option<&'s str> {
    line.strip_prefix('"')?.strip_prefix(key)?.strip_prefix('"')
}

/// Find the span of a non-empty string value, inside its quotes.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    if value.is_empty() {
        return None;
    }
    let needle = format!("\"{value}\"");
    src.find(&needle).map(|pos| SourceSpan::from((pos + 1, value.len())))
}
