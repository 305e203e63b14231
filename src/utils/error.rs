use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    /// A deployment asset the page cannot render without. Fatal at startup.
    #[error("Required asset missing: {path}")]
    RequiredAssetMissing { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
