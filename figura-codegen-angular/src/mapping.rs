//! spartan-ui mapping table.
//!
//! Helm wrappers are native elements carrying an attribute directive
//! (`<button hlmBtn>`); brain primitives are custom elements.

use figura_codegen::{CardParts, LibraryMapping, MappingTable, PartElement, Prop};
use figura_ir::ComponentType;

static ENTRIES: &[(ComponentType, LibraryMapping)] = &[
    (
        ComponentType::Button,
        LibraryMapping {
            tag: "button",
            directives: &["hlmBtn"],
            module: "@spartan-ng/ui-button-helm",
            imports: &["HlmButtonDirective"],
            props: &[Prop::Value("variant", "default")],
            children_slot: true,
        },
    ),
    (
        ComponentType::Input,
        LibraryMapping {
            tag: "input",
            directives: &["hlmInput"],
            module: "@spartan-ng/ui-input-helm",
            imports: &["HlmInputDirective"],
            props: &[Prop::Value("type", "text")],
            children_slot: false,
        },
    ),
    (
        ComponentType::Textarea,
        LibraryMapping {
            tag: "textarea",
            directives: &["hlmInput"],
            module: "@spartan-ng/ui-input-helm",
            imports: &["HlmInputDirective"],
            props: &[],
            children_slot: false,
        },
    ),
    (
        ComponentType::Checkbox,
        LibraryMapping {
            tag: "brn-checkbox",
            directives: &["hlm"],
            module: "@spartan-ng/ui-checkbox-brain",
            imports: &["BrnCheckboxComponent", "HlmCheckboxDirective"],
            props: &[],
            children_slot: false,
        },
    ),
    (
        ComponentType::Switch,
        LibraryMapping {
            tag: "brn-switch",
            directives: &["hlm"],
            module: "@spartan-ng/ui-switch-brain",
            imports: &["BrnSwitchComponent", "HlmSwitchDirective"],
            props: &[],
            children_slot: false,
        },
    ),
    (
        ComponentType::Card,
        LibraryMapping {
            tag: "section",
            directives: &["hlmCard"],
            module: "@spartan-ng/ui-card-helm",
            imports: &[
                "HlmCardDirective",
                "HlmCardHeaderDirective",
                "HlmCardTitleDirective",
                "HlmCardContentDirective",
                "HlmCardFooterDirective",
            ],
            props: &[],
            children_slot: true,
        },
    ),
    (
        ComponentType::Dialog,
        LibraryMapping {
            tag: "hlm-dialog",
            directives: &[],
            module: "@spartan-ng/ui-dialog-brain",
            imports: &[
                "BrnDialogTriggerDirective",
                "BrnDialogContentDirective",
                "HlmDialogComponent",
                "HlmDialogHeaderComponent",
                "HlmDialogTitleDirective",
            ],
            props: &[],
            children_slot: true,
        },
    ),
    (
        ComponentType::Avatar,
        LibraryMapping {
            tag: "hlm-avatar",
            directives: &[],
            module: "@spartan-ng/ui-avatar-helm",
            imports: &[
                "HlmAvatarComponent",
                "HlmAvatarImageDirective",
                "HlmAvatarFallbackDirective",
            ],
            props: &[],
            children_slot: true,
        },
    ),
    (
        ComponentType::Badge,
        LibraryMapping {
            tag: "span",
            directives: &["hlmBadge"],
            module: "@spartan-ng/ui-badge-helm",
            imports: &["HlmBadgeDirective"],
            props: &[Prop::Value("variant", "default")],
            children_slot: true,
        },
    ),
    (
        ComponentType::Alert,
        LibraryMapping {
            tag: "section",
            directives: &["hlmAlert"],
            module: "@spartan-ng/ui-alert-helm",
            imports: &[
                "HlmAlertDirective",
                "HlmAlertTitleDirective",
                "HlmAlertDescriptionDirective",
            ],
            props: &[],
            children_slot: true,
        },
    ),
    (
        ComponentType::Tabs,
        LibraryMapping {
            tag: "brn-tabs",
            directives: &[],
            module: "@spartan-ng/ui-tabs-brain",
            imports: &[
                "BrnTabsComponent",
                "BrnTabsListComponent",
                "BrnTabsTriggerDirective",
                "BrnTabsContentDirective",
                "HlmTabsListComponent",
                "HlmTabsTriggerDirective",
                "HlmTabsContentDirective",
            ],
            props: &[],
            children_slot: true,
        },
    ),
    (
        ComponentType::Accordion,
        LibraryMapping {
            tag: "brn-accordion",
            directives: &[],
            module: "@spartan-ng/ui-accordion-brain",
            imports: &[
                "BrnAccordionComponent",
                "BrnAccordionItemComponent",
                "BrnAccordionTriggerComponent",
                "BrnAccordionContentComponent",
                "HlmAccordionDirective",
                "HlmAccordionItemDirective",
            ],
            props: &[],
            children_slot: true,
        },
    ),
    (
        ComponentType::Table,
        LibraryMapping {
            tag: "hlm-table",
            directives: &[],
            module: "@spartan-ng/ui-table-helm",
            imports: &[
                "HlmTableComponent",
                "HlmTrowComponent",
                "HlmThComponent",
                "HlmTdComponent",
                "HlmCaptionComponent",
            ],
            props: &[],
            children_slot: true,
        },
    ),
    (
        ComponentType::Label,
        LibraryMapping {
            tag: "label",
            directives: &["hlmLabel"],
            module: "@spartan-ng/ui-label-helm",
            imports: &["HlmLabelDirective"],
            props: &[],
            children_slot: true,
        },
    ),
    (
        ComponentType::Divider,
        LibraryMapping {
            tag: "brn-separator",
            directives: &["hlmSeparator"],
            module: "@spartan-ng/ui-separator-helm",
            imports: &["HlmSeparatorDirective"],
            props: &[],
            children_slot: false,
        },
    ),
];

/// spartan-ui wrappers by component type. `select` has no spartan
/// counterpart and renders as generic markup.
pub static SPARTAN: MappingTable = MappingTable::new(ENTRIES).with_card_parts(CardParts {
    header: PartElement::with_directive("div", &["hlmCardHeader"]),
    title: PartElement::with_directive("h3", &["hlmCardTitle"]),
    content: PartElement::with_directive("div", &["hlmCardContent"]),
    footer: PartElement::with_directive("div", &["hlmCardFooter"]),
});
