//! Snapshot tests for Vue emission.

use figura_codegen::{ComponentGenerator, testing};
use figura_codegen_vue::Generator;
use figura_ir::{ComponentType, IrNode};

#[test]
fn test_hello_submit_component() {
    let component = Generator::new().generate(&testing::hello_submit(), "HeroSection");

    assert_eq!(component.path, "HeroSection.vue");
    insta::assert_snapshot!(component.content, @r#"
    <script setup lang="ts">
    import { Button } from '@/components/ui/button'

    interface Props {
      class?: string
    }

    defineProps<Props>()
    </script>

    <template>
      <div class="flex flex-col items-start justify-start gap-6 p-8 w-full h-fit">
        <p class="text-5xl font-bold text-gray-900">Hello</p>
        <Button class="flex items-start justify-start px-4 py-2 w-fit h-fit bg-blue-600 rounded-lg md:flex-row" variant="default">Submit</Button>
      </div>
    </template>
    "#);
}

#[test]
fn test_form_controls_self_close() {
    let form = IrNode::new("1", "Form", ComponentType::Container).with_children([
        IrNode::new("2", "Email", ComponentType::Input)
            .with_children([IrNode::new("3", "hint", ComponentType::Text).with_text("Email")]),
        IrNode::new("4", "Terms", ComponentType::Checkbox),
        IrNode::new("5", "Rule", ComponentType::Divider),
    ]);

    let content = Generator::new().generate(&form, "SignupForm").content;

    assert!(content.contains("import { Input } from '@/components/ui/input'\n"));
    assert!(content.contains("import { Checkbox } from '@/components/ui/checkbox'\n"));
    assert!(content.contains("import { Separator } from '@/components/ui/separator'\n"));
    assert!(content.contains(r#"<Input type="text" placeholder="Email" />"#));
    assert!(content.contains("<Checkbox />"));
    assert!(content.contains("<Separator />"));
}
