//! Generate command report data structures.

use std::path::PathBuf;

use figura_codegen::Activation;
use figura_core::{Target, WriteResult};

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    pub page: String,
    pub targets: Vec<Target>,
    pub sections: Vec<SectionSummary>,
    pub result: GenerationResult,
}

/// A section as mounted on the page.
#[derive(Debug)]
pub struct SectionSummary {
    pub name: String,
    pub activation: Activation,
}

/// Result of a generation run.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(Vec<WrittenFile>),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// A file handled during a write.
#[derive(Debug)]
pub struct WrittenFile {
    /// Path relative to the project root.
    pub path: PathBuf,
    pub status: WriteResult,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub content: String,
}

impl GenerateReport {
    /// Files that were written or would be.
    pub fn file_count(&self) -> usize {
        match &self.result {
            GenerationResult::Written(files) => files.len(),
            GenerationResult::Preview(files) => files.len(),
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(files) => self.render_written(out, files),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_summary(&self, out: &mut dyn Output) {
        let targets: Vec<&str> = self.targets.iter().map(Target::as_str).collect();
        out.preformatted(&format!("{} ({})", self.page, targets.join(", ")));
        out.newline();

        out.section(&format!("Sections ({})", self.sections.len()));
        for section in &self.sections {
            out.list_item(&format!("{} ({})", section.name, section.activation));
        }
    }

    fn render_written(&self, out: &mut dyn Output, files: &[WrittenFile]) {
        if self.sections.is_empty() {
            out.warning("no sections found; the page renders the design statically");
        }
        self.render_summary(out);
        out.newline();

        out.section("Files");
        for file in files {
            let path = file.path.display().to_string();
            match file.status {
                WriteResult::Written => out.added_item(&path),
                WriteResult::Unchanged => out.kept_item(&path),
                WriteResult::Skipped => out.kept_item(&format!("{path} (exists, kept)")),
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path.display().to_string());
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        self.render_summary(out);
        out.newline();
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::Recorder;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            page: "index".to_string(),
            targets: vec![Target::React, Target::Vue],
            sections: vec![
                SectionSummary {
                    name: "Hero".to_string(),
                    activation: Activation::Eager,
                },
                SectionSummary {
                    name: "Footer".to_string(),
                    activation: Activation::None,
                },
            ],
            result,
        }
    }

    #[test]
    fn test_render_written() {
        let files = vec![
            WrittenFile {
                path: PathBuf::from("generated/components/sections/Hero.tsx"),
                status: WriteResult::Written,
            },
            WrittenFile {
                path: PathBuf::from("generated/pages/index.astro"),
                status: WriteResult::Unchanged,
            },
            WrittenFile {
                path: PathBuf::from("generated/styles/global.css"),
                status: WriteResult::Skipped,
            },
        ];
        let mut out = Recorder::default();
        report(GenerationResult::Written(files)).render(&mut out);

        assert_eq!(
            out.lines,
            [
                "index (react, vue)",
                "",
                "Sections (2):",
                "  - Hero (eager)",
                "  - Footer (none)",
                "",
                "Files:",
                "  + generated/components/sections/Hero.tsx",
                "  = generated/pages/index.astro",
                "  = generated/styles/global.css (exists, kept)",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let files = vec![PreviewFile {
            path: PathBuf::from("generated/pages/index.astro"),
            content: "<main />".to_string(),
        }];
        let report = report(GenerationResult::Preview(files));
        let mut out = Recorder::default();
        report.render(&mut out);

        assert_eq!(report.file_count(), 1);
        assert_eq!(out.lines[0], "── generated/pages/index.astro ──");
        assert_eq!(out.lines[1], "<main />");
        assert_eq!(out.lines[2], "── Summary ──");
        assert_eq!(out.lines.last().unwrap(), "1 files would be generated");
    }
}
