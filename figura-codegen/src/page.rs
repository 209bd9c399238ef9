//! Astro page assembly.
//!
//! A page either mounts the emitted section components in order, each with
//! a hydration directive, or, when there are none, renders the design tree
//! as static HTML.

use std::{fmt, str::FromStr};

use figura_core::Target;
use figura_ir::{ComponentType, IrDesignTree, IrNode};
use serde::{Deserialize, Serialize};

use crate::{
    builder::CodeBuilder,
    emit::prune_decorative,
    markup::{Attr, Element, Markup, MarkupStyle, SelfClose, escape_with},
    style::{ClassList, container_classes, fill_classes, node_classes},
};

/// Classes appended to the section container.
const CONTAINER_CLASSES: [&str; 5] = ["mx-auto", "max-w-7xl", "px-4", "sm:px-6", "lg:px-8"];

/// Indent level of content inside `<main>`.
const MAIN_CONTENT_LEVEL: usize = 3;

/// When a mounted component hydrates on the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    /// Hydrate on page load.
    Eager,
    /// Hydrate when scrolled into view.
    Lazy,
    /// Static HTML only.
    #[default]
    None,
}

impl Activation {
    /// Eager when anything in the subtree is interactive.
    pub fn for_subtree(node: &IrNode) -> Self {
        if node.contains_interactive() {
            Activation::Eager
        } else {
            Activation::None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Activation::Eager => "eager",
            Activation::Lazy => "lazy",
            Activation::None => "none",
        }
    }

    /// The Astro client directive, if any.
    pub fn directive(&self) -> Option<&'static str> {
        match self {
            Activation::Eager => Some("client:load"),
            Activation::Lazy => Some("client:visible"),
            Activation::None => None,
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Activation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "eager" | "load" => Ok(Activation::Eager),
            "lazy" | "visible" => Ok(Activation::Lazy),
            "none" | "static" => Ok(Activation::None),
            _ => Err(format!(
                "unknown activation '{}', expected 'eager', 'lazy' or 'none'",
                s
            )),
        }
    }
}

/// An emitted section component mounted by the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildComponent {
    pub name: String,
    pub target: Target,
    pub activation: Activation,
}

impl ChildComponent {
    pub fn new(name: impl Into<String>, target: Target, activation: Activation) -> Self {
        Self {
            name: name.into(),
            target,
            activation,
        }
    }

    /// Symbol exported by the component file.
    pub fn symbol(&self) -> String {
        match self.target {
            Target::Angular => format!("{}Component", self.name),
            Target::React | Target::Vue => self.name.clone(),
        }
    }

    fn import_line(&self) -> String {
        format!(
            "import {{ {} }} from '../components/sections/{}.{}';",
            self.symbol(),
            self.name,
            self.target.extension()
        )
    }

    fn mount_line(&self) -> String {
        let symbol = self.symbol();
        match (self.target, self.activation.directive()) {
            (Target::Angular, _) => format!("<{symbol} client:only=\"angular\" />"),
            (_, Some(directive)) => format!("<{symbol} {directive} />"),
            (_, None) => format!("<{symbol} />"),
        }
    }
}

/// Build the Astro page for `tree`.
///
/// An empty `title` falls back to `page_name`.
pub fn assemble_page(
    tree: &IrDesignTree,
    page_name: &str,
    components: &[ChildComponent],
    title: &str,
    description: &str,
) -> String {
    let root = &tree.root;
    let title = if title.is_empty() { page_name } else { title };

    let mut builder = CodeBuilder::web();
    builder
        .push_line("---")
        .push_line("import '../styles/global.css';");
    for component in components {
        builder.push_line(&component.import_line());
    }
    builder
        .push_blank()
        .push_line(&format!("const title = \"{}\";", escape_js_string(title)))
        .push_line(&format!(
            "const description = \"{}\";",
            escape_js_string(description)
        ))
        .push_line("---")
        .push_blank()
        .push_line("<!doctype html>")
        .push_line("<html lang=\"en\">")
        .push_indent()
        .push_line("<head>")
        .push_indent()
        .push_line("<meta charset=\"UTF-8\" />")
        .push_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />")
        .push_line("<meta name=\"description\" content={description} />")
        .push_line("<title>{title}</title>")
        .push_line("<link rel=\"icon\" type=\"image/svg+xml\" href=\"/favicon.svg\" />")
        .push_dedent()
        .push_line("</head>")
        .push_line(&format!("<body class=\"{}\">", body_classes(root)))
        .push_indent()
        .push_line("<main class=\"min-h-screen w-full\">");

    let mut page = builder.build();
    if components.is_empty() {
        page.push_str(&render_static(root));
    } else {
        page.push_str(&render_mounts(root, components));
    }
    page.push('\n');

    let mut tail = CodeBuilder::web().at_level(2);
    tail.push_line("</main>")
        .push_dedent()
        .push_line("</body>")
        .push_dedent()
        .push_line("</html>");
    page.push_str(&tail.build());
    page
}

fn body_classes(root: &IrNode) -> String {
    let mut classes = ClassList::new();
    classes.push("antialiased");
    let background = fill_classes(&root.fills, None);
    if background.is_empty() {
        classes.push("bg-background");
    } else {
        classes.extend(background);
    }
    classes.push("text-foreground");
    classes.to_string()
}

fn render_mounts(root: &IrNode, components: &[ChildComponent]) -> String {
    let mut classes: ClassList = container_classes(root).into_iter().collect();
    classes.extend(CONTAINER_CLASSES);

    let mut builder = CodeBuilder::web().at_level(MAIN_CONTENT_LEVEL);
    builder
        .push_line(&format!("<div class=\"{classes}\">"))
        .push_indent();
    for component in components {
        builder.push_line(&component.mount_line());
    }
    builder.push_dedent().push_line("</div>");
    builder.build().trim_end_matches('\n').to_string()
}

fn astro_style() -> MarkupStyle {
    MarkupStyle {
        class_attr: "class",
        escape_text: escape_astro_text,
        self_close: SelfClose::Always,
        base_level: MAIN_CONTENT_LEVEL,
    }
}

fn render_static(root: &IrNode) -> String {
    let pruned = prune_decorative(root);
    astro_style().print(&lower_static(&pruned))
}

fn lower_static(node: &IrNode) -> Markup {
    let classes = node_classes(node, None).to_string();
    match node.component_type {
        ComponentType::Text => {
            let mut element = Element::new(heading_tag(node)).class("class", &classes);
            if let Some(text) = node.text() {
                element.push_child(Markup::text(text));
            }
            element.into()
        }
        ComponentType::Image => Element::new("img")
            .class("class", &classes)
            .attr(Attr::value("src", node.asset_url.as_deref().unwrap_or("")))
            .attr(Attr::value("alt", node.name.as_str()))
            .into(),
        ComponentType::Divider => Element::new("hr").class("class", &classes).into(),
        ty => Element::new(semantic_tag(ty))
            .class("class", &classes)
            .children_from(node.children.iter().map(lower_static))
            .into(),
    }
}

/// Heading level by font size.
fn heading_tag(node: &IrNode) -> &'static str {
    let Some(style) = &node.text_style else {
        return "p";
    };
    match style.font_size {
        size if size >= 48.0 => "h1",
        size if size >= 36.0 => "h2",
        size if size >= 24.0 => "h3",
        size if size >= 20.0 => "h4",
        size if size >= 16.0 => "p",
        _ => "span",
    }
}

fn semantic_tag(ty: ComponentType) -> &'static str {
    match ty {
        ComponentType::Navbar => "nav",
        ComponentType::Footer => "footer",
        ComponentType::Hero => "section",
        ComponentType::Sidebar => "aside",
        ComponentType::Card => "article",
        _ => "div",
    }
}

/// Escape text content of an Astro template.
pub fn escape_astro_text(text: &str) -> String {
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

/// Escape a value for a double-quoted JavaScript string literal.
pub fn escape_js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use figura_ir::{Color, Direction, Fill, Layout, SourceMeta, TextStyle};

    use super::*;

    fn tree(root: IrNode) -> IrDesignTree {
        IrDesignTree::new(SourceMeta::default(), root)
    }

    fn heading(font_size: f64) -> IrNode {
        let mut node = IrNode::new("t", "Heading", ComponentType::Text).with_text("Hello");
        node.text_style = Some(TextStyle {
            font_size,
            ..TextStyle::default()
        });
        node
    }

    #[test]
    fn test_activation_for_subtree() {
        let mut button = IrNode::new("2", "Buy", ComponentType::Button);
        button.is_interactive = true;
        let root = IrNode::new("1", "Hero", ComponentType::Hero).with_children([button]);

        assert_eq!(Activation::for_subtree(&root), Activation::Eager);
        assert_eq!(
            Activation::for_subtree(&IrNode::new("3", "Plain", ComponentType::Container)),
            Activation::None
        );
    }

    #[test]
    fn test_activation_parsing() {
        assert_eq!("lazy".parse::<Activation>().unwrap(), Activation::Lazy);
        assert_eq!("EAGER".parse::<Activation>().unwrap(), Activation::Eager);
        assert!("later".parse::<Activation>().is_err());
        let json: Activation = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(json, Activation::None);
    }

    #[test]
    fn test_heading_tags() {
        assert_eq!(heading_tag(&heading(48.0)), "h1");
        assert_eq!(heading_tag(&heading(36.0)), "h2");
        assert_eq!(heading_tag(&heading(24.0)), "h3");
        assert_eq!(heading_tag(&heading(20.0)), "h4");
        assert_eq!(heading_tag(&heading(16.0)), "p");
        assert_eq!(heading_tag(&heading(12.0)), "span");
        let unstyled = IrNode::new("t", "t", ComponentType::Text);
        assert_eq!(heading_tag(&unstyled), "p");
    }

    #[test]
    fn test_mount_lines() {
        let hero = ChildComponent::new("Hero", Target::React, Activation::Eager);
        let faq = ChildComponent::new("Faq", Target::Vue, Activation::Lazy);
        let footer = ChildComponent::new("Footer", Target::React, Activation::None);
        let nav = ChildComponent::new("Nav", Target::Angular, Activation::None);

        assert_eq!(hero.mount_line(), "<Hero client:load />");
        assert_eq!(faq.mount_line(), "<Faq client:visible />");
        assert_eq!(footer.mount_line(), "<Footer />");
        assert_eq!(nav.mount_line(), "<NavComponent client:only=\"angular\" />");
        assert_eq!(
            nav.import_line(),
            "import { NavComponent } from '../components/sections/Nav.component.ts';"
        );
        assert_eq!(
            faq.import_line(),
            "import { Faq } from '../components/sections/Faq.vue';"
        );
    }

    #[test]
    fn test_page_with_components() {
        let mut root = IrNode::new("1", "Landing", ComponentType::Container);
        root.layout = Layout {
            direction: Direction::Vertical,
            ..Layout::default()
        };
        root.fills = vec![Fill::Solid {
            color: Color::rgb(255, 255, 255),
        }];
        let components = [
            ChildComponent::new("Hero", Target::React, Activation::Eager),
            ChildComponent::new("Features", Target::React, Activation::None),
        ];

        let page = assemble_page(&tree(root), "index", &components, "Acme \"Pro\"", "");

        insta::assert_snapshot!(page, @r#"
        ---
        import '../styles/global.css';
        import { Hero } from '../components/sections/Hero.tsx';
        import { Features } from '../components/sections/Features.tsx';

        const title = "Acme \"Pro\"";
        const description = "";
        ---

        <!doctype html>
        <html lang="en">
          <head>
            <meta charset="UTF-8" />
            <meta name="viewport" content="width=device-width, initial-scale=1.0" />
            <meta name="description" content={description} />
            <title>{title}</title>
            <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
          </head>
          <body class="antialiased bg-white text-foreground">
            <main class="min-h-screen w-full">
              <div class="flex flex-col items-start justify-start mx-auto max-w-7xl px-4 sm:px-6 lg:px-8">
                <Hero client:load />
                <Features />
              </div>
            </main>
          </body>
        </html>
        "#);
    }

    #[test]
    fn test_static_fallback() {
        let mut photo = IrNode::new("3", "Photo", ComponentType::Image);
        photo.asset_url = Some("https://cdn/p.png".into());
        let root = IrNode::new("1", "Hero", ComponentType::Hero).with_children([
            heading(48.0),
            photo,
            IrNode::new("4", "Rule", ComponentType::Divider),
            IrNode::new("5", "icon", ComponentType::Icon),
        ]);

        let page = assemble_page(&tree(root), "landing", &[], "", "");

        assert!(page.contains("const title = \"landing\";"));
        assert!(page.contains("<body class=\"antialiased bg-background text-foreground\">"));
        assert!(page.contains(
            "      <section>\n        <h1 class=\"text-5xl font-normal\">Hello</h1>\n        \
             <img src=\"https://cdn/p.png\" alt=\"Photo\" />\n        <hr />\n      </section>\n"
        ));
        assert!(!page.contains("max-w-7xl"));
        assert!(!page.contains("<div"));
    }

    #[test]
    fn test_static_text_is_escaped() {
        let root = IrNode::new("1", "Root", ComponentType::Container)
            .with_children([IrNode::new("2", "t", ComponentType::Text).with_text("{a} < b")]);
        let page = assemble_page(&tree(root), "p", &[], "T", "");
        assert!(page.contains("<p>&#123;a&#125; &lt; b</p>"));
    }

    #[test]
    fn test_escape_js_string() {
        assert_eq!(escape_js_string("a\"b\\c\nd"), "a\\\"b\\\\c\\nd");
    }
}
