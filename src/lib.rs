pub mod config;
pub mod extractors;
pub mod scrape_img_urls;
pub mod utilities;
