pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, CliConfig};
pub use crate::core::animations::AnimationCache;
pub use crate::core::catalog::ContentCatalog;
pub use crate::core::fetcher::HttpAssetFetcher;
pub use crate::core::site::{PageContext, SiteAssembler, RESUME_FILE_NAME, RESUME_MIME};
pub use crate::domain::model::{
    AnimationUrls, ContactLink, ContactSubmission, EducationEntry, ProjectEntry, RemoteAsset,
    ResumeDocument, SkillEntry,
};
pub use crate::utils::error::{PortfolioError, Result};
