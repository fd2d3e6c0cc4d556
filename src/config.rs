use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Scraper configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScraperConfig {
    /// Catalog page listing the recipes to collect
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,
    /// Origin that recipe hrefs are resolved against
    ///
    /// Hrefs are joined as URLs, so a root-relative href replaces any path
    /// on the origin: `https://1000.menu/ru` + `/cooking/1` resolves to
    /// `https://1000.menu/cooking/1`.
    #[serde(default = "default_site_origin")]
    pub site_origin: String,
    /// Maximum number of recipes to collect
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Courtesy delay between recipe fetches in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Spreadsheet output path
    #[serde(default = "default_output")]
    pub output: String,
    /// Optional JSON dump of the collected recipes
    #[serde(default)]
    pub json_output: Option<String>,
    /// User-Agent header; the HTTP library default is used when unset
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Skip recipes that fail to fetch instead of aborting the run
    #[serde(default)]
    pub skip_failed: bool,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            catalog_url: default_catalog_url(),
            site_origin: default_site_origin(),
            limit: default_limit(),
            delay_ms: default_delay_ms(),
            timeout: default_timeout(),
            output: default_output(),
            json_output: None,
            user_agent: None,
            skip_failed: false,
        }
    }
}

// Default value functions
fn default_catalog_url() -> String {
    "https://1000.menu/catalog/gruzinskaya-kuxnya".to_string()
}

fn default_site_origin() -> String {
    "https://1000.menu".to_string()
}

fn default_limit() -> usize {
    8
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_timeout() -> u64 {
    30
}

fn default_output() -> String {
    "georgian_recipes.xlsx".to_string()
}

impl ScraperConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MENU_RECIPES__ prefix
    /// 2. menu_recipes.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MENU_RECIPES__LIMIT
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Parse configuration from a TOML document, filling gaps with defaults
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

/// Load configuration from file and environment variables
///
/// See [`ScraperConfig::load`] for the precedence rules.
pub fn load_config() -> Result<ScraperConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("menu_recipes").required(false))
        .add_source(
            Environment::with_prefix("MENU_RECIPES")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
