//! shadcn-vue mapping table.
//!
//! shadcn-vue mirrors the React registry, so tags and symbols match; the
//! table is kept separate because the two libraries version independently.

use figura_codegen::{CardParts, LibraryMapping, MappingTable, PartElement, Prop};
use figura_ir::ComponentType;

const fn component(
    tag: &'static str,
    module: &'static str,
    imports: &'static [&'static str],
    props: &'static [Prop],
    children_slot: bool,
) -> LibraryMapping {
    LibraryMapping {
        tag,
        directives: &[],
        module,
        imports,
        props,
        children_slot,
    }
}

const DEFAULT_VARIANT: &[Prop] = &[Prop::Value("variant", "default")];

static ENTRIES: &[(ComponentType, LibraryMapping)] = &[
    (
        ComponentType::Button,
        component("Button", "@/components/ui/button", &["Button"], DEFAULT_VARIANT, true),
    ),
    (
        ComponentType::Input,
        component(
            "Input",
            "@/components/ui/input",
            &["Input"],
            &[Prop::Value("type", "text")],
            false,
        ),
    ),
    (
        ComponentType::Textarea,
        component("Textarea", "@/components/ui/textarea", &["Textarea"], &[], false),
    ),
    (
        ComponentType::Select,
        component(
            "Select",
            "@/components/ui/select",
            &["Select", "SelectContent", "SelectItem", "SelectTrigger", "SelectValue"],
            &[],
            true,
        ),
    ),
    (
        ComponentType::Checkbox,
        component("Checkbox", "@/components/ui/checkbox", &["Checkbox"], &[], false),
    ),
    (
        ComponentType::Switch,
        component("Switch", "@/components/ui/switch", &["Switch"], &[], false),
    ),
    (
        ComponentType::Card,
        component(
            "Card",
            "@/components/ui/card",
            &["Card", "CardHeader", "CardTitle", "CardContent", "CardFooter"],
            &[],
            true,
        ),
    ),
    (
        ComponentType::Dialog,
        component(
            "Dialog",
            "@/components/ui/dialog",
            &["Dialog", "DialogContent", "DialogHeader", "DialogTitle", "DialogTrigger"],
            &[],
            true,
        ),
    ),
    (
        ComponentType::Avatar,
        component(
            "Avatar",
            "@/components/ui/avatar",
            &["Avatar", "AvatarFallback", "AvatarImage"],
            &[],
            true,
        ),
    ),
    (
        ComponentType::Badge,
        component("Badge", "@/components/ui/badge", &["Badge"], DEFAULT_VARIANT, true),
    ),
    (
        ComponentType::Alert,
        component(
            "Alert",
            "@/components/ui/alert",
            &["Alert", "AlertDescription", "AlertTitle"],
            &[],
            true,
        ),
    ),
    (
        ComponentType::Tabs,
        component(
            "Tabs",
            "@/components/ui/tabs",
            &["Tabs", "TabsContent", "TabsList", "TabsTrigger"],
            &[],
            true,
        ),
    ),
    (
        ComponentType::Accordion,
        component(
            "Accordion",
            "@/components/ui/accordion",
            &["Accordion", "AccordionContent", "AccordionItem", "AccordionTrigger"],
            &[Prop::Value("type", "single"), Prop::Flag("collapsible")],
            true,
        ),
    ),
    (
        ComponentType::Table,
        component(
            "Table",
            "@/components/ui/table",
            &["Table", "TableBody", "TableCell", "TableHead", "TableHeader", "TableRow"],
            &[],
            true,
        ),
    ),
    (
        ComponentType::Label,
        component("Label", "@/components/ui/label", &["Label"], &[], true),
    ),
    (
        ComponentType::Divider,
        component("Separator", "@/components/ui/separator", &["Separator"], &[], false),
    ),
];

/// shadcn-vue wrappers by component type.
pub static SHADCN_VUE: MappingTable = MappingTable::new(ENTRIES).with_card_parts(CardParts {
    header: PartElement::new("CardHeader"),
    title: PartElement::new("CardTitle"),
    content: PartElement::new("CardContent"),
    footer: PartElement::new("CardFooter"),
});
