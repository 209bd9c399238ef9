//! shadcn/ui mapping table.

use figura_codegen::{CardParts, LibraryMapping, MappingTable, PartElement, Prop};
use figura_ir::ComponentType;

const fn shadcn(
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

static ENTRIES: &[(ComponentType, LibraryMapping)] = &[
    (
        ComponentType::Button,
        shadcn(
            "Button",
            "@/components/ui/button",
            &["Button"],
            &[Prop::Value("variant", "default")],
            true,
        ),
    ),
    (
        ComponentType::Input,
        shadcn(
            "Input",
            "@/components/ui/input",
            &["Input"],
            &[Prop::Value("type", "text")],
            false,
        ),
    ),
    (
        ComponentType::Textarea,
        shadcn("Textarea", "@/components/ui/textarea", &["Textarea"], &[], false),
    ),
    (
        ComponentType::Select,
        shadcn(
            "Select",
            "@/components/ui/select",
            &["Select", "SelectContent", "SelectItem", "SelectTrigger", "SelectValue"],
            &[],
            true,
        ),
    ),
    (
        ComponentType::Checkbox,
        shadcn("Checkbox", "@/components/ui/checkbox", &["Checkbox"], &[], false),
    ),
    (
        ComponentType::Switch,
        shadcn("Switch", "@/components/ui/switch", &["Switch"], &[], false),
    ),
    (
        ComponentType::Card,
        shadcn(
            "Card",
            "@/components/ui/card",
            &["Card", "CardHeader", "CardTitle", "CardContent", "CardFooter"],
            &[],
            true,
        ),
    ),
    (
        ComponentType::Dialog,
        shadcn(
            "Dialog",
            "@/components/ui/dialog",
            &[
                "Dialog",
                "DialogContent",
                "DialogDescription",
                "DialogHeader",
                "DialogTitle",
                "DialogTrigger",
            ],
            &[],
            true,
        ),
    ),
    (
        ComponentType::Avatar,
        shadcn(
            "Avatar",
            "@/components/ui/avatar",
            &["Avatar", "AvatarFallback", "AvatarImage"],
            &[],
            true,
        ),
    ),
    (
        ComponentType::Badge,
        shadcn(
            "Badge",
            "@/components/ui/badge",
            &["Badge"],
            &[Prop::Value("variant", "default")],
            true,
        ),
    ),
    (
        ComponentType::Alert,
        shadcn(
            "Alert",
            "@/components/ui/alert",
            &["Alert", "AlertDescription", "AlertTitle"],
            &[],
            true,
        ),
    ),
    (
        ComponentType::Tabs,
        shadcn(
            "Tabs",
            "@/components/ui/tabs",
            &["Tabs", "TabsContent", "TabsList", "TabsTrigger"],
            &[],
            true,
        ),
    ),
    (
        ComponentType::Accordion,
        shadcn(
            "Accordion",
            "@/components/ui/accordion",
            &["Accordion", "AccordionContent", "AccordionItem", "AccordionTrigger"],
            &[Prop::Value("type", "single"), Prop::Flag("collapsible")],
            true,
        ),
    ),
    (
        ComponentType::Table,
        shadcn(
            "Table",
            "@/components/ui/table",
            &["Table", "TableBody", "TableCell", "TableHead", "TableHeader", "TableRow"],
            &[],
            true,
        ),
    ),
    (
        ComponentType::Label,
        shadcn("Label", "@/components/ui/label", &["Label"], &[], true),
    ),
    (
        ComponentType::Divider,
        shadcn("Separator", "@/components/ui/separator", &["Separator"], &[], false),
    ),
];

/// shadcn/ui wrappers by component type.
pub static SHADCN: MappingTable = MappingTable::new(ENTRIES).with_card_parts(CardParts {
    header: PartElement::new("CardHeader"),
    title: PartElement::new("CardTitle"),
    content: PartElement::new("CardContent"),
    footer: PartElement::new("CardFooter"),
});
