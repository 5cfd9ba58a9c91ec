use scraper::{ElementRef, Html, Selector};

/// Returns the elements matched by `tag_selector` whose class list contains
/// `class_name` as a whole token, in document order.
pub fn extract_containers<'a>(
    document: &'a Html,
    tag_selector: &Selector,
    class_name: &str,
) -> Vec<ElementRef<'a>> {
    document
        .select(tag_selector)
        .filter(|element| element.value().classes().any(|class| class == class_name))
        .collect()
}
