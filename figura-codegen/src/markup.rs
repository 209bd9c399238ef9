//! Target-neutral markup tree and its printer.
//!
//! Emitters lower IR nodes to [`Markup`]; a [`MarkupStyle`] decides how the
//! tree is spelled for one target (class attribute name, text escaping and
//! which empty elements may self-close).

use crate::builder::CodeBuilder;

/// Elements that never have content in HTML.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// An attribute on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attr {
    Flag(String),
    Value(String, String),
}

impl Attr {
    pub fn flag(name: impl Into<String>) -> Self {
        Attr::Flag(name.into())
    }

    pub fn value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attr::Value(name.into(), value.into())
    }

    pub fn name(&self) -> &str {
        match self {
            Attr::Flag(name) | Attr::Value(name, _) => name,
        }
    }

    fn render(&self) -> String {
        match self {
            Attr::Flag(name) => name.clone(),
            Attr::Value(name, value) => format!("{name}=\"{}\"", escape_attr(value)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<Attr>,
    children: Vec<Markup>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    pub fn children(&self) -> &[Markup] {
        &self.children
    }

    pub fn push_attr(&mut self, attr: Attr) {
        self.attrs.push(attr);
    }

    /// Add the class attribute unless `classes` is empty.
    pub fn push_class(&mut self, class_attr: &str, classes: &str) {
        if !classes.is_empty() {
            self.attrs.push(Attr::value(class_attr, classes));
        }
    }

    pub fn push_child(&mut self, child: impl Into<Markup>) {
        self.children.push(child.into());
    }

    pub fn attr(mut self, attr: Attr) -> Self {
        self.push_attr(attr);
        self
    }

    pub fn class(mut self, class_attr: &str, classes: &str) -> Self {
        self.push_class(class_attr, classes);
        self
    }

    pub fn child(mut self, child: impl Into<Markup>) -> Self {
        self.push_child(child);
        self
    }

    pub fn children_from(mut self, children: impl IntoIterator<Item = Markup>) -> Self {
        self.children.extend(children);
        self
    }

    fn open_tag(&self) -> String {
        let mut open = format!("<{}", self.tag);
        for attr in &self.attrs {
            open.push(' ');
            open.push_str(&attr.render());
        }
        open
    }
}

/// A node of the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    Element(Element),
    /// Unescaped text; the printer escapes it.
    Text(String),
}

impl Markup {
    pub fn text(text: impl Into<String>) -> Self {
        Markup::Text(text.into())
    }
}

impl From<Element> for Markup {
    fn from(element: Element) -> Self {
        Markup::Element(element)
    }
}

/// Which childless elements may be written as `<tag />`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfClose {
    /// JSX and Vue templates accept self-closing on any element.
    Always,
    /// HTML templates: only void elements and custom elements.
    VoidOrCustom,
}

/// Target-specific spelling of a markup tree.
#[derive(Debug, Clone, Copy)]
pub struct MarkupStyle {
    /// `className` for JSX, `class` elsewhere.
    pub class_attr: &'static str,
    pub escape_text: fn(&str) -> String,
    pub self_close: SelfClose,
    /// Indent level of the outermost element.
    pub base_level: usize,
}

impl MarkupStyle {
    fn self_closes(&self, tag: &str) -> bool {
        match self.self_close {
            SelfClose::Always => true,
            SelfClose::VoidOrCustom => VOID_ELEMENTS.contains(&tag) || tag.contains('-'),
        }
    }

    /// Serialize `markup` without a trailing newline.
    pub fn print(&self, markup: &Markup) -> String {
        let mut builder = CodeBuilder::web().at_level(self.base_level);
        self.print_into(&mut builder, markup);
        builder.build().trim_end_matches('\n').to_string()
    }

    fn print_into(&self, builder: &mut CodeBuilder, markup: &Markup) {
        let element = match markup {
            Markup::Text(text) => {
                builder.push_line(&(self.escape_text)(text));
                return;
            }
            Markup::Element(element) => element,
        };

        let open = element.open_tag();
        let close = format!("</{}>", element.tag);

        if element.children.is_empty() {
            if self.self_closes(&element.tag) {
                builder.push_line(&format!("{open} />"));
            } else {
                builder.push_line(&format!("{open}>{close}"));
            }
            return;
        }

        if let Some(inline) = self.inline_text(&element.children) {
            builder.push_line(&format!("{open}>{inline}{close}"));
            return;
        }

        builder.push_line(&format!("{open}>")).push_indent();
        for child in &element.children {
            self.print_into(builder, child);
        }
        builder.push_dedent().push_line(&close);
    }

    /// Escaped, concatenated text when every child is text.
    fn inline_text(&self, children: &[Markup]) -> Option<String> {
        children
            .iter()
            .map(|child| match child {
                Markup::Text(text) => Some((self.escape_text)(text)),
                Markup::Element(_) => None,
            })
            .collect()
    }
}

/// Replace each listed character with its entity.
pub fn escape_with(text: &str, table: &[(char, &str)]) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match table.iter().find(|(from, _)| *from == c) {
            Some((_, entity)) => out.push_str(entity),
            None => out.push(c),
        }
    }
    out
}

/// Escape a double-quoted attribute value.
pub fn escape_attr(value: &str) -> String {
    escape_with(value, &[('&', "&amp;"), ('"', "&quot;")])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> String {
        escape_with(text, &[('<', "&lt;")])
    }

    fn style(self_close: SelfClose) -> MarkupStyle {
        MarkupStyle {
            class_attr: "class",
            escape_text: plain,
            self_close,
            base_level: 0,
        }
    }

    #[test]
    fn test_inline_text_children() {
        let markup: Markup = Element::new("p")
            .class("class", "text-sm")
            .child(Markup::text("a < b"))
            .into();
        assert_eq!(
            style(SelfClose::Always).print(&markup),
            r#"<p class="text-sm">a &lt; b</p>"#
        );
    }

    #[test]
    fn test_nested_block() {
        let markup: Markup = Element::new("div")
            .child(Element::new("p").child(Markup::text("Hello")))
            .child(Element::new("hr"))
            .into();
        assert_eq!(
            style(SelfClose::Always).print(&markup),
            "<div>\n  <p>Hello</p>\n  <hr />\n</div>"
        );
    }

    #[test]
    fn test_self_close_policy() {
        let empty: Markup = Element::new("div").class("class", "flex").into();
        let custom: Markup = Element::new("brn-switch").into();
        let void: Markup = Element::new("img").into();

        let html = style(SelfClose::VoidOrCustom);
        assert_eq!(html.print(&empty), r#"<div class="flex"></div>"#);
        assert_eq!(html.print(&custom), "<brn-switch />");
        assert_eq!(html.print(&void), "<img />");

        assert_eq!(
            style(SelfClose::Always).print(&empty),
            r#"<div class="flex" />"#
        );
    }

    #[test]
    fn test_base_level_and_attrs() {
        let markup: Markup = Element::new("Button")
            .attr(Attr::flag("disabled"))
            .attr(Attr::value("title", "say \"hi\" & go"))
            .child(Markup::text("Go"))
            .into();
        let printed = MarkupStyle {
            base_level: 2,
            ..style(SelfClose::Always)
        }
        .print(&markup);
        assert_eq!(
            printed,
            r#"    <Button disabled title="say &quot;hi&quot; &amp; go">Go</Button>"#
        );
    }
}
