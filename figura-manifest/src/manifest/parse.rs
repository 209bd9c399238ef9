//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{MANIFEST_FILE, Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE)
    }
}

impl Manifest {
    /// Parse a figura.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a figura.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, &ParseContext::new(content, filename))?;
    Ok(manifest)
}

fn validate_manifest(manifest: &Manifest, ctx: &ParseContext<'_>) -> Result<()> {
    let source = &manifest.source;
    ctx.require_non_empty("file_key", &source.file_key)?;
    ctx.require_non_empty("node_id", &source.node_id)?;
    ctx.require_non_empty("token_env", &source.token_env)?;
    if !(source.base_url.starts_with("https://") || source.base_url.starts_with("http://")) {
        return Err(ctx.error_at_value(
            format!("base_url must be an http(s) URL, got '{}'", source.base_url),
            "base_url",
            &source.base_url,
        ));
    }

    let output = &manifest.output;
    if output.dir.as_os_str().is_empty() {
        return Err(ctx.error_at_key("output dir cannot be empty", "dir"));
    }
    if output.targets.is_empty() {
        return Err(ctx.error_at_key("at least one target is required", "targets"));
    }
    for (i, target) in output.targets.iter().enumerate() {
        if output.targets[..i].contains(target) {
            return Err(ctx.error_at_key(
                format!("target '{target}' is listed twice"),
                "targets",
            ));
        }
    }
    if !figura_core::is_kebab_case(&output.page) {
        return Err(ctx.error_at_value(
            format!("page name '{}' must be kebab-case", output.page),
            "page",
            &output.page,
        ));
    }

    let scale = manifest.assets.scale;
    if !(scale > 0.0 && scale <= 4.0) {
        return Err(ctx.error_at_key(
            format!("asset scale must be in (0, 4], got {scale}"),
            "scale",
        ));
    }

    for (hex, var) in &manifest.tokens {
        if !is_hex_color(hex) {
            return Err(ctx.error_at_value(
                format!("token key '{hex}' must be a 6-digit hex color"),
                hex,
                hex,
            ));
        }
        if var.trim().trim_start_matches("--").is_empty() {
            return Err(ctx.error_at_value(
                format!("token '{hex}' needs a CSS custom property name"),
                hex,
                var,
            ));
        }
    }

    for (i, section) in manifest.sections.iter().enumerate() {
        if !figura_core::is_pascal_case(&section.name) {
            return Err(ctx.error_at_value(
                format!("section name '{}' must be PascalCase", section.name),
                "name",
                &section.name,
            ));
        }
        if manifest.sections[..i].iter().any(|s| s.name == section.name) {
            return Err(ctx.error_at_value(
                format!("section '{}' is defined twice", section.name),
                "name",
                &section.name,
            ));
        }
        ctx.require_non_empty("node_id", &section.node_id)?;
    }

    Ok(())
}

/// `2563eb` or `#2563eb`.
fn is_hex_color(value: &str) -> bool {
    let digits = value.strip_prefix('#').unwrap_or(value);
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hex_color() {
        assert!(is_hex_color("2563eb"));
        assert!(is_hex_color("#FFFFFF"));
        assert!(!is_hex_color("fff"));
        assert!(!is_hex_color("2563eg"));
        assert!(!is_hex_color("#2563eb00"));
    }
}
