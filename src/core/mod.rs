pub mod animations;
pub mod catalog;
pub mod fetcher;
pub mod site;

pub use crate::domain::model::{AnimationUrls, RemoteAsset, ResumeDocument};
pub use crate::domain::ports::{AssetSource, ConfigProvider, Storage};
pub use crate::utils::error::Result;
