use std::process;

use colored::Colorize;

use div_img_scrapping::config;
use div_img_scrapping::scrape_img_urls::scrape_img_urls;

fn main() {
    // Load configuration settings
    let config = match config::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", format!("Failed to load configuration: {}", e).red());
            process::exit(1);
        }
    };

    if let Err(e) = scrape_img_urls(&config) {
        eprintln!("{}", format!("Failed to extract image URLs: {:?}", e).red());
        process::exit(1);
    }

    println!(
        "{}",
        format!(
            "Image URLs extracted from <{}> elements with class '{}' have been successfully written to {}",
            config.selector.container_tag,
            config.selector.container_class,
            config.file.output_urls
        )
        .green()
    );
}
