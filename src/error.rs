use thiserror::Error;

/// Errors that can occur while scraping a catalog or exporting its recipes
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Network failure, timeout or undecodable body
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    HttpStatus { url: String, status: u16 },

    /// A URL could not be parsed or resolved against the site origin
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A required field (link title or href) is missing from the page
    #[error("Failed to parse page: {0}")]
    ParseError(String),

    /// Failed to build or save the spreadsheet
    #[error("Failed to write spreadsheet: {0}")]
    WriteError(#[from] rust_xlsxwriter::XlsxError),

    /// Filesystem failure while writing an output file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to serialize recipes to JSON
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),
}
