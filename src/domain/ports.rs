use crate::domain::model::AnimationUrls;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Retrieves one decorative JSON document. Absence covers every failure
/// mode: non-200 status, transport fault, unparseable body.
#[async_trait]
pub trait AssetSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Option<serde_json::Value>;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn resume_path(&self) -> &str;
    fn animation_urls(&self) -> AnimationUrls;
}
