use figura_codegen::{
    ComponentEmitter, ComponentGenerator, GeneratedComponent, ImportCollector, MappingTable,
    TargetRenderer, TokenMap,
    builder::CodeBuilder,
    markup::{MarkupStyle, SelfClose, escape_with},
};
use figura_core::{Target, to_kebab_case};
use figura_ir::IrNode;

use crate::SPARTAN;

/// Symbols every standalone component imports.
const BASE_IMPORTS: [(&str, &str); 2] = [
    ("@angular/core", "Component"),
    ("@angular/common", "CommonModule"),
];

/// Escape template text. `@` starts a control-flow block in Angular 17+.
pub fn escape_angular_text(text: &str) -> String {
    escape_with(
        text,
        &[
            ('&', "&amp;"),
            ('<', "&lt;"),
            ('>', "&gt;"),
            ('{', "&#123;"),
            ('}', "&#125;"),
            ('@', "&#64;"),
        ],
    )
}

/// Make a printed template safe inside a JavaScript template literal.
pub fn escape_template_literal(template: &str) -> String {
    template
        .replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// Angular standalone component generator.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    tokens: Option<TokenMap>,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokens(mut self, tokens: TokenMap) -> Self {
        self.tokens = Some(tokens);
        self
    }
}

impl TargetRenderer for Generator {
    fn target(&self) -> Target {
        Target::Angular
    }

    fn markup_style(&self) -> MarkupStyle {
        MarkupStyle {
            class_attr: "class",
            escape_text: escape_angular_text,
            self_close: SelfClose::VoidOrCustom,
            base_level: 2,
        }
    }

    fn mappings(&self) -> &MappingTable {
        &SPARTAN
    }

    fn wrap(&self, name: &str, template: &str, imports: &ImportCollector) -> String {
        let mut builder = CodeBuilder::web();
        for (module, symbol) in BASE_IMPORTS {
            builder.push_line(&format!("import {{ {symbol} }} from '{module}';"));
        }
        for (module, symbols) in imports.iter() {
            let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
            builder.push_line(&format!(
                "import {{ {} }} from '{module}';",
                symbols.join(", ")
            ));
        }

        let standalone_imports: Vec<&str> = std::iter::once("CommonModule")
            .chain(imports.symbols())
            .collect();

        builder
            .push_blank()
            .push_line("@Component({")
            .push_indent()
            .push_line(&format!("selector: 'app-{}',", to_kebab_case(name)))
            .push_line("standalone: true,")
            .push_line(&format!("imports: [{}],", standalone_imports.join(", ")))
            .push_line("template: `")
            .push_raw(&escape_template_literal(template))
            .push_raw("\n")
            .push_line("`,")
            .push_dedent()
            .push_line("})")
            .push_line(&format!("export class {name}Component {{}}"));
        builder.build()
    }
}

impl ComponentGenerator for Generator {
    fn target(&self) -> Target {
        Target::Angular
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
    fn test_escape_angular_text() {
        assert_eq!(
            escape_angular_text("mail@acme {x}"),
            "mail&#64;acme &#123;x&#125;"
        );
    }

    #[test]
    fn test_escape_template_literal() {
        assert_eq!(escape_template_literal("a `b` ${c} \\d"), "a \\`b\\` \\${c} \\\\d");
    }

    #[test]
    fn test_component_without_library_imports() {
        let text = IrNode::new("1", "Note", ComponentType::Text).with_text("Price: $5");
        let out = Generator::new().generate(&text, "PriceNote");

        assert_eq!(out.path, "PriceNote.component.ts");
        assert_eq!(
            out.content,
            "import { Component } from '@angular/core';\n\
             import { CommonModule } from '@angular/common';\n\n\
             @Component({\n  selector: 'app-price-note',\n  standalone: true,\n  \
             imports: [CommonModule],\n  template: `\n    <p>Price: $5</p>\n  `,\n})\n\
             export class PriceNoteComponent {}\n"
        );
    }

    #[test]
    fn test_html_elements_never_self_close() {
        let root = IrNode::new("1", "Root", ComponentType::Container).with_children([
            IrNode::new("2", "Notes", ComponentType::Textarea),
            IrNode::new("3", "Toggle", ComponentType::Switch),
            IrNode::new("4", "Email", ComponentType::Input),
        ]);
        let content = Generator::new().generate(&root, "Form").content;

        assert!(content.contains("<textarea hlmInput></textarea>"));
        assert!(content.contains("<brn-switch hlm />"));
        assert!(content.contains(r#"<input hlmInput type="text" />"#));
        assert!(content.contains(
            "imports: [CommonModule, HlmInputDirective, BrnSwitchComponent, HlmSwitchDirective],"
        ));
    }
}
