use figura_codegen::{
    ComponentEmitter, ComponentGenerator, GeneratedComponent, ImportCollector, MappingTable,
    TargetRenderer, TokenMap,
    builder::CodeBuilder,
    markup::{MarkupStyle, SelfClose, escape_with},
};
use figura_core::Target;
use figura_ir::IrNode;

use crate::SHADCN;

/// Indent level of the JSX root inside `return (`.
const JSX_LEVEL: usize = 2;

/// Escape JSX text so braces and markup characters render literally.
pub fn escape_jsx_text(text: &str) -> String {
    escape_with(
        text,
        &[
            ('&', "&amp;"),
            ('<', "&lt;"),
            ('>', "&gt;"),
            ('{', "&#123;"),
            ('}', "&#125;"),
            ('"', "&quot;"),
        ],
    )
}

/// React component generator.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    tokens: Option<TokenMap>,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefer design-token variables over palette colors.
    pub fn with_tokens(mut self, tokens: TokenMap) -> Self {
        self.tokens = Some(tokens);
        self
    }
}

impl TargetRenderer for Generator {
    fn target(&self) -> Target {
        Target::React
    }

    fn markup_style(&self) -> MarkupStyle {
        MarkupStyle {
            class_attr: "className",
            escape_text: escape_jsx_text,
            self_close: SelfClose::Always,
            base_level: JSX_LEVEL,
        }
    }

    fn mappings(&self) -> &MappingTable {
        &SHADCN
    }

    fn wrap(&self, name: &str, template: &str, imports: &ImportCollector) -> String {
        let mut builder = CodeBuilder::web();
        builder.push_line("import React from 'react';");
        for (module, symbols) in imports.iter() {
            let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
            builder.push_line(&format!(
                "import {{ {} }} from '{module}';",
                symbols.join(", ")
            ));
        }

        builder
            .push_blank()
            .push_line(&format!("export interface {name}Props {{"))
            .push_indent()
            .push_line("className?: string;")
            .push_dedent()
            .push_line("}")
            .push_blank()
            .push_line(&format!(
                "export function {name}({{ className }}: {name}Props) {{"
            ))
            .push_indent()
            .push_line("return (")
            .push_raw(template)
            .push_raw("\n")
            .push_line(");")
            .push_dedent()
            .push_line("}");
        builder.build()
    }
}

impl ComponentGenerator for Generator {
    fn target(&self) -> Target {
        Target::React
    }

    fn generate(&self, node: &IrNode, name: &str) -> GeneratedComponent {
        let content = ComponentEmitter::new(self)
            .with_tokens(self.tokens.as_ref())
            .emit(node, name);
        GeneratedComponent::new(name, self.file_extension(), content)
    }
}

#[cfg(test)]
mod tests {
    use figura_ir::ComponentType;

    use super::*;

    #[test]
    fn test_escape_jsx_text() {
        assert_eq!(
            escape_jsx_text("{count} < 3 & \"ok\""),
            "&#123;count&#125; &lt; 3 &amp; &quot;ok&quot;"
        );
    }

    #[test]
    fn test_wrapper_without_imports() {
        let text = IrNode::new("1", "Note", ComponentType::Text).with_text("Hi");
        let out = Generator::new().generate(&text, "Note");

        assert_eq!(out.path, "Note.tsx");
        assert_eq!(
            out.content,
            "import React from 'react';\n\nexport interface NoteProps {\n  className?: string;\n}\n\n\
             export function Note({ className }: NoteProps) {\n  return (\n    <p>Hi</p>\n  );\n}\n"
        );
    }

    #[test]
    fn test_tokens_reach_class_names() {
        let mut hero = IrNode::new("1", "Hero", ComponentType::Hero);
        hero.fills = vec![figura_ir::Fill::Solid {
            color: figura_ir::Color::rgb(0x25, 0x63, 0xeb),
        }];
        let tokens: TokenMap = [("2563eb", "color-primary")].into_iter().collect();

        let out = Generator::new().with_tokens(tokens).generate(&hero, "Hero");
        assert!(out.content.contains(r#"<div className="bg-[var(--color-primary)]" />"#));
    }
}
