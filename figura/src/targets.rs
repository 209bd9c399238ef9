//! Unified target dispatch.

use figura_codegen::{ComponentGenerator, GeneratedComponent, TokenMap};
use figura_codegen_angular::Generator as AngularGenerator;
use figura_codegen_react::Generator as ReactGenerator;
use figura_codegen_vue::Generator as VueGenerator;
use figura_core::Target;
use figura_ir::IrNode;

/// Create the generator for `target`.
pub fn generator(target: Target, tokens: Option<&TokenMap>) -> Box<dyn ComponentGenerator> {
    let tokens = tokens.cloned().unwrap_or_default();
    match target {
        Target::React => Box::new(ReactGenerator::new().with_tokens(tokens)),
        Target::Vue => Box::new(VueGenerator::new().with_tokens(tokens)),
        Target::Angular => Box::new(AngularGenerator::new().with_tokens(tokens)),
    }
}

/// Emit `node` as the component `name` for `target`.
pub fn emit(
    node: &IrNode,
    target: Target,
    name: &str,
    tokens: Option<&TokenMap>,
) -> GeneratedComponent {
    generator(target, tokens).generate(node, name)
}
