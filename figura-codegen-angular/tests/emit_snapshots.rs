//! Snapshot tests for Angular emission.

use figura_codegen::{ComponentGenerator, testing};
use figura_codegen_angular::Generator;

#[test]
fn test_hello_submit_component() {
    let component = Generator::new().generate(&testing::hello_submit(), "HeroSection");

    assert_eq!(component.path, "HeroSection.component.ts");
    insta::assert_snapshot!(component.content, @r#"
    import { Component } from '@angular/core';
    import { CommonModule } from '@angular/common';
    import { HlmButtonDirective } from '@spartan-ng/ui-button-helm';

    @Component({
      selector: 'app-hero-section',
      standalone: true,
      imports: [CommonModule, HlmButtonDirective],
      template: `
        <div class="flex flex-col items-start justify-start gap-6 p-8 w-full h-fit">
          <p class="text-5xl font-bold text-gray-900">Hello</p>
          <button hlmBtn class="flex items-start justify-start px-4 py-2 w-fit h-fit bg-blue-600 rounded-lg md:flex-row" variant="default">Submit</button>
        </div>
      `,
    })
    export class HeroSectionComponent {}
    "#);
}

#[test]
fn test_pricing_card_uses_helm_parts() {
    let content = Generator::new()
        .generate(&testing::pricing_card(), "PricingCard")
        .content;

    assert!(content.contains(
        "import { HlmCardDirective, HlmCardHeaderDirective, HlmCardTitleDirective, \
         HlmCardContentDirective, HlmCardFooterDirective } from '@spartan-ng/ui-card-helm';"
    ));
    assert!(content.contains(
        "    <section hlmCard class=\"border border-gray-200 rounded-xl\">\n      \
         <div hlmCardHeader>\n        <h3 hlmCardTitle>Pro</h3>\n      </div>\n      \
         <div hlmCardContent>\n        <p>$12 / month</p>\n      </div>\n      \
         <div hlmCardFooter>\n        <div>\n          <button hlmBtn"
    ));
    assert!(content.ends_with("export class PricingCardComponent {}\n"));
}
