pub mod extract_containers;
pub mod extract_image_urls;
pub mod extract_img_urls_from_divs;
