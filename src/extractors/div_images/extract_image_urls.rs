use scraper::{ElementRef, Selector};

/// Collects `attr_name` from every image nested (at any depth) inside `container`.
///
/// An image without the attribute yields an empty string, so the number of
/// entries always equals the number of images found.
pub fn extract_image_urls(
    container: ElementRef,
    image_selector: &Selector,
    attr_name: &str,
) -> Vec<String> {
    container
        .select(image_selector)
        .map(|img| img.value().attr(attr_name).unwrap_or_default().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::extract_image_urls;

    fn urls(html: &str) -> Vec<String> {
        let document = Html::parse_fragment(html);
        let container_selector = Selector::parse("div.gallery").unwrap();
        let image_selector = Selector::parse("img").unwrap();
        let container = document.select(&container_selector).next().unwrap();
        extract_image_urls(container, &image_selector, "src")
    }

    #[test]
    fn collects_nested_images_in_order() {
        let html = r#"
            <div class="gallery">
                <img src="a.jpg">
                <figure><picture><img src="b.jpg"></picture></figure>
                <img src="c.jpg">
            </div>
        "#;
        assert_eq!(urls(html), vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn missing_attribute_becomes_empty_entry() {
        let html = r#"<div class="gallery"><img alt="no source"><img src="b.jpg"></div>"#;
        assert_eq!(urls(html), vec!["", "b.jpg"]);
    }

    #[test]
    fn keeps_duplicates() {
        let html = r#"<div class="gallery"><img src="a.jpg"><img src="a.jpg"></div>"#;
        assert_eq!(urls(html), vec!["a.jpg", "a.jpg"]);
    }

    #[test]
    fn container_without_images_yields_nothing() {
        let html = r#"<div class="gallery"><p>text only</p></div>"#;
        assert!(urls(html).is_empty());
    }

    #[test]
    fn attribute_value_is_kept_verbatim() {
        let html = r#"<div class="gallery"><img src="https://cdn.example.com/x.png?w=200&amp;h=100"></div>"#;
        assert_eq!(urls(html), vec!["https://cdn.example.com/x.png?w=200&h=100"]);
    }
}
