//! Import collection for emitted components.

use indexmap::{IndexMap, IndexSet};

/// Tracks imports and deduplicates them.
///
/// Modules and their symbols both keep first-seen order, so output follows
/// the order in which component types appear in the tree.
///
/// # Example
///
/// ```
/// use figura_codegen::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("@/components/ui/card", "Card");
/// imports.add("@/components/ui/button", "Button");
/// imports.add("@/components/ui/card", "CardHeader");
///
/// for (module, symbols) in imports.iter() {
///     let symbols: Vec<&str> = symbols.iter().map(|s| s.as_str()).collect();
///     println!("import {{ {} }} from '{}';", symbols.join(", "), module);
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportCollector {
    imports: IndexMap<String, IndexSet<String>>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Check if a specific symbol is imported from a module.
    pub fn has_symbol(&self, module: &str, symbol: &str) -> bool {
        self.imports
            .get(module)
            .is_some_and(|symbols| symbols.contains(symbol))
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Every imported symbol across modules, in insertion order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.imports.values().flatten().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of modules.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_collector_basic() {
        let mut imports = ImportCollector::new();
        imports.add("@/components/ui/button", "Button");
        imports.add("@/components/ui/button", "Button");
        imports.add("@/components/ui/card", "Card");

        assert!(imports.has_symbol("@/components/ui/card", "Card"));
        assert!(!imports.has_symbol("@/components/ui/card", "CardFooter"));
        assert_eq!(imports.len(), 2);
        assert_eq!(imports.symbols().count(), 2);
    }

    #[test]
    fn test_first_seen_order() {
        let mut imports = ImportCollector::new();
        imports.add("z", "Zed");
        imports.add("a", "Beta");
        imports.add("a", "Alpha");

        let modules: Vec<&str> = imports.iter().map(|(m, _)| m).collect();
        assert_eq!(modules, ["z", "a"]);
        let symbols: Vec<&str> = imports.symbols().collect();
        assert_eq!(symbols, ["Zed", "Beta", "Alpha"]);
    }
}
