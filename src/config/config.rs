use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;

pub const SETTINGS_FILE: &str = "Settings.toml";

pub const DEFAULT_SOURCE_HTML: &str = "page_content.html";
pub const DEFAULT_OUTPUT_URLS: &str = "img_urls_from_divs.txt";
pub const DEFAULT_CONTAINER_TAG: &str = "div";
pub const DEFAULT_CONTAINER_CLASS: &str = "sc-1e6b52c1-1";
pub const DEFAULT_IMAGE_TAG: &str = "img";
pub const DEFAULT_IMAGE_ATTR: &str = "src";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    pub file: FileConfig,
    pub selector: SelectorConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileConfig {
    pub source_html: String,
    pub output_urls: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectorConfig {
    pub container_tag: String,
    pub container_class: String,
    pub image_tag: String,
    pub image_attr: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            source_html: DEFAULT_SOURCE_HTML.to_string(),
            output_urls: DEFAULT_OUTPUT_URLS.to_string(),
        }
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            container_tag: DEFAULT_CONTAINER_TAG.to_string(),
            container_class: DEFAULT_CONTAINER_CLASS.to_string(),
            image_tag: DEFAULT_IMAGE_TAG.to_string(),
            image_attr: DEFAULT_IMAGE_ATTR.to_string(),
        }
    }
}

/// Loads settings from `Settings.toml` in the working directory.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(SETTINGS_FILE)
}

/// Loads settings from `settings_path` on top of the built-in defaults.
/// The settings file is optional. The environment is never consulted.
pub fn load_config_from(settings_path: &str) -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        .set_default("file.source_html", DEFAULT_SOURCE_HTML)?
        .set_default("file.output_urls", DEFAULT_OUTPUT_URLS)?
        .set_default("selector.container_tag", DEFAULT_CONTAINER_TAG)?
        .set_default("selector.container_class", DEFAULT_CONTAINER_CLASS)?
        .set_default("selector.image_tag", DEFAULT_IMAGE_TAG)?
        .set_default("selector.image_attr", DEFAULT_IMAGE_ATTR)?
        .add_source(File::new(settings_path, FileFormat::Toml).required(false))
        .build()?;

    settings.try_deserialize::<AppConfig>()
}
