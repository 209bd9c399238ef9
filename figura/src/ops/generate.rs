//! Generate operation - components and page from an IR tree.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use figura_codegen::{ChildComponent, TokenMap, assemble_page, builder::CodeBuilder};
use figura_core::{File, Overwrite, Target};
use figura_ir::IrDesignTree;
use figura_manifest::Manifest;
use tracing::{debug, info};

use super::sections::{PageSection, sections};
use crate::{
    reports::{GenerateReport, GenerationResult, PreviewFile, SectionSummary, WrittenFile},
    targets,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the manifest's output paths are relative to.
    pub root: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Extracts the page sections, emits each for every configured target and
/// assembles the page around the first target's components.
pub fn generate(
    manifest: &Manifest,
    tree: &IrDesignTree,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let sections = sections(manifest, tree)?;
    let files = plan(manifest, tree, &sections, opts.root);
    info!(
        sections = sections.len(),
        files = files.len(),
        "generated sources"
    );

    let result = if opts.dry_run {
        GenerationResult::Preview(
            files
                .iter()
                .map(|file| PreviewFile {
                    path: relative(file.path(), opts.root),
                    content: file.content().to_string(),
                })
                .collect(),
        )
    } else {
        let mut written = Vec::with_capacity(files.len());
        for file in &files {
            let status = file
                .write()
                .wrap_err_with(|| format!("Failed to write {}", file.path().display()))?;
            debug!(path = %file.path().display(), ?status, "wrote file");
            written.push(WrittenFile {
                path: relative(file.path(), opts.root),
                status,
            });
        }
        GenerationResult::Written(written)
    };

    Ok(GenerateReport {
        page: manifest.output.page.clone(),
        targets: manifest.output.targets.clone(),
        sections: sections
            .iter()
            .map(|section| SectionSummary {
                name: section.name.clone(),
                activation: section.activation,
            })
            .collect(),
        result,
    })
}

/// Every file a generation run produces, under `root`.
///
/// Components come first (grouped by target), then the page, then the
/// stylesheet, which is only created when missing.
pub fn plan(
    manifest: &Manifest,
    tree: &IrDesignTree,
    sections: &[PageSection],
    root: &Path,
) -> Vec<File> {
    let output = &manifest.output;
    let tokens = manifest.token_map();
    let components_dir = root.join(output.components_dir());

    let mut files = Vec::new();
    for &target in &output.targets {
        let generator = targets::generator(target, Some(&tokens));
        for section in sections {
            let component = generator.generate(&section.node, &section.name);
            files.push(component.to_file(&components_dir));
        }
    }

    let page_target = output.targets.first().copied().unwrap_or(Target::React);
    let mounts: Vec<ChildComponent> = sections
        .iter()
        .map(|section| ChildComponent::new(&section.name, page_target, section.activation))
        .collect();
    let page = assemble_page(
        tree,
        &output.page,
        &mounts,
        &output.title,
        &output.description,
    );
    files.push(File::new(root.join(output.page_path()), page));
    files.push(
        File::new(root.join(output.stylesheet_path()), stylesheet(&tokens))
            .with_overwrite(Overwrite::IfMissing),
    );
    files
}

/// Tailwind entry point, declaring every design token as a custom property.
fn stylesheet(tokens: &TokenMap) -> String {
    let mut builder = CodeBuilder::web();
    builder
        .push_line("@tailwind base;")
        .push_line("@tailwind components;")
        .push_line("@tailwind utilities;");
    if !tokens.is_empty() {
        builder.push_blank().push_line(":root {").push_indent();
        for (hex, var) in tokens.iter() {
            builder.push_line(&format!("{var}: #{hex};"));
        }
        builder.push_dedent().push_line("}");
    }
    builder.build()
}

fn relative(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
