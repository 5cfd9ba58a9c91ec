pub mod parse_html_document;
pub mod parse_selector;
pub mod read_html_file;
pub mod write_url_list;
