use figura_codegen::{
    ComponentEmitter, ComponentGenerator, GeneratedComponent, ImportCollector, MappingTable,
    TargetRenderer, TokenMap,
    builder::CodeBuilder,
    markup::{MarkupStyle, SelfClose, escape_with},
};
use figura_core::Target;
use figura_ir::IrNode;

use crate::SHADCN_VUE;

/// Escape template text; braces would otherwise open an interpolation.
pub fn escape_vue_text(text: &str) -> String {
    escape_with(
        text,
        &[
            ('&', "&amp;"),
            ('<', "&lt;"),
            ('>', "&gt;"),
            ('{', "&#123;"),
            ('}', "&#125;"),
        ],
    )
}

/// Vue single-file component generator.
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
        Target::Vue
    }

    fn markup_style(&self) -> MarkupStyle {
        MarkupStyle {
            class_attr: "class",
            escape_text: escape_vue_text,
            self_close: SelfClose::Always,
            base_level: 1,
        }
    }

    fn mappings(&self) -> &MappingTable {
        &SHADCN_VUE
    }

    fn wrap(&self, _name: &str, template: &str, imports: &ImportCollector) -> String {
        let mut builder = CodeBuilder::web();
        builder.push_line("<script setup lang=\"ts\">");
        for (module, symbols) in imports.iter() {
            let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
            builder.push_line(&format!(
                "import {{ {} }} from '{module}'",
                symbols.join(", ")
            ));
        }
        if !imports.is_empty() {
            builder.push_blank();
        }

        builder
            .push_line("interface Props {")
            .push_indent()
            .push_line("class?: string")
            .push_dedent()
            .push_line("}")
            .push_blank()
            .push_line("defineProps<Props>()")
            .push_line("</script>")
            .push_blank()
            .push_line("<template>")
            .push_raw(template)
            .push_raw("\n")
            .push_line("</template>");
        builder.build()
    }
}

impl ComponentGenerator for Generator {
    fn target(&self) -> Target {
        Target::Vue
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
    fn test_escape_vue_text() {
        assert_eq!(escape_vue_text("{{ x }} & <y>"), "&#123;&#123; x &#125;&#125; &amp; &lt;y&gt;");
    }

    #[test]
    fn test_sfc_without_imports() {
        let text = IrNode::new("1", "Note", ComponentType::Text).with_text("Hi");
        let out = Generator::new().generate(&text, "Note");

        assert_eq!(out.path, "Note.vue");
        assert_eq!(
            out.content,
            "<script setup lang=\"ts\">\ninterface Props {\n  class?: string\n}\n\n\
             defineProps<Props>()\n</script>\n\n<template>\n  <p>Hi</p>\n</template>\n"
        );
    }

    #[test]
    fn test_accordion_flag_prop() {
        let accordion = IrNode::new("1", "FAQ", ComponentType::Accordion)
            .with_children([IrNode::new("2", "q", ComponentType::Text).with_text("Why?")]);
        let out = Generator::new().generate(&accordion, "Faq");

        assert!(out.content.contains("import { Accordion, AccordionContent, AccordionItem, AccordionTrigger } from '@/components/ui/accordion'\n"));
        assert!(out.content.contains("  <Accordion type=\"single\" collapsible>\n    <p>Why?</p>\n  </Accordion>\n"));
    }
}
