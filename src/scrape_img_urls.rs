use anyhow::Result;
use colored::Colorize;

use crate::config::AppConfig;
use crate::extractors::div_images::extract_img_urls_from_divs::{
    extract_img_urls_from_divs, Extraction,
};
use crate::utilities::read_html_file::read_html_file;
use crate::utilities::write_url_list::write_url_list;

/// Reads the saved page, extracts the image URLs of the marked containers
/// and writes them to the output file, one per line.
pub fn scrape_img_urls(config: &AppConfig) -> Result<Extraction> {
    let html_content = read_html_file(&config.file.source_html)?;

    let extraction = extract_img_urls_from_divs(&html_content, &config.selector)?;

    if extraction.containers == 0 {
        println!(
            "{}",
            format!(
                "No <{}> elements with class '{}' found in {}",
                config.selector.container_tag,
                config.selector.container_class,
                config.file.source_html
            )
            .yellow()
        );
    } else {
        println!(
            "Found {} <{}> elements with class '{}' containing {} images",
            extraction.containers,
            config.selector.container_tag,
            config.selector.container_class,
            extraction.urls.len()
        );
    }

    write_url_list(&config.file.output_urls, &extraction.urls)?;

    Ok(extraction)
}
