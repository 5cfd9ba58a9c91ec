use anyhow::Result;

use crate::config::SelectorConfig;
use crate::extractors::div_images::extract_containers::extract_containers;
use crate::extractors::div_images::extract_image_urls::extract_image_urls;
use crate::utilities::parse_html_document::parse_html_document;
use crate::utilities::parse_selector::parse_selector;

/// Result of one extraction pass over a page.
#[derive(Debug, Default, PartialEq)]
pub struct Extraction {
    /// Number of matching containers found in the page.
    pub containers: usize,
    /// Image URLs in document order, one per image element.
    pub urls: Vec<String>,
}

/// Parses `html_content` and extracts the image URLs nested in the marked containers.
///
/// Malformed markup is recovered by the parser and never reported. Only an
/// unusable tag name in `selector_config` is an error.
pub fn extract_img_urls_from_divs(
    html_content: &str,
    selector_config: &SelectorConfig,
) -> Result<Extraction> {
    let container_selector = parse_selector(&selector_config.container_tag)?;
    let image_selector = parse_selector(&selector_config.image_tag)?;

    let document = parse_html_document(html_content);
    let containers = extract_containers(
        &document,
        &container_selector,
        &selector_config.container_class,
    );

    let mut urls = Vec::new();
    for container in &containers {
        urls.extend(extract_image_urls(
            *container,
            &image_selector,
            &selector_config.image_attr,
        ));
    }

    Ok(Extraction {
        containers: containers.len(),
        urls,
    })
}
