//! Shared naming helpers.

/// Fallback identifier when a label has no usable characters.
const FALLBACK_NAME: &str = "Component";

/// Split a free-form design label into words.
///
/// Breaks on any non-alphanumeric character and on lower→upper case
/// boundaries, so "heroSection", "Hero Section" and "hero_section" agree.
fn words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in s.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Convert a design label to a PascalCase identifier
/// (e.g., "site header / dark" -> "SiteHeaderDark").
///
/// Identifiers never start with a digit; such labels get a `Component`
/// prefix.
pub fn to_pascal_case(s: &str) -> String {
    let mut out: String = words(s)
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect();

    if out.is_empty() {
        return FALLBACK_NAME.to_string();
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert_str(0, FALLBACK_NAME);
    }
    out
}

/// Convert a label or identifier to kebab-case (e.g., "HeroSection" -> "hero-section").
pub fn to_kebab_case(s: &str) -> String {
    words(s)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// True for identifiers like `HeroSection`.
pub fn is_pascal_case(s: &str) -> bool {
    s.starts_with(|c: char| c.is_ascii_uppercase()) && s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// True for names like `landing-page`.
pub fn is_kebab_case(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('-')
        && !s.ends_with('-')
        && !s.contains("--")
        && s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("site header / dark"), "SiteHeaderDark");
        assert_eq!(to_pascal_case("hero_section"), "HeroSection");
        assert_eq!(to_pascal_case("heroSection"), "HeroSection");
        assert_eq!(to_pascal_case("Frame 12"), "Frame12");
        assert_eq!(to_pascal_case("404 page"), "Component404Page");
        assert_eq!(to_pascal_case("///"), "Component");
        assert_eq!(to_pascal_case(""), "Component");
    }

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("HeroSection"), "hero-section");
        assert_eq!(to_kebab_case("Primary Button"), "primary-button");
        assert_eq!(to_kebab_case("site_header"), "site-header");
        assert_eq!(to_kebab_case("Frame12"), "frame12");
        assert_eq!(to_kebab_case(""), "");
    }

    #[test]
    fn test_is_pascal_case() {
        assert!(is_pascal_case("HeroSection"));
        assert!(is_pascal_case("Card2"));
        assert!(!is_pascal_case("heroSection"));
        assert!(!is_pascal_case("Hero-Section"));
        assert!(!is_pascal_case(""));
    }

    #[test]
    fn test_is_kebab_case() {
        assert!(is_kebab_case("index"));
        assert!(is_kebab_case("landing-page-2"));
        assert!(!is_kebab_case("Landing"));
        assert!(!is_kebab_case("-page"));
        assert!(!is_kebab_case("a--b"));
        assert!(!is_kebab_case(""));
    }
}
