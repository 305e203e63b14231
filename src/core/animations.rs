use crate::domain::model::{AnimationUrls, RemoteAsset};
use crate::domain::ports::AssetSource;
use std::collections::HashMap;

/// Decorative animation documents, one slot per tab that shows one.
///
/// Populated by sequential fetches at startup and read-only afterwards.
/// A slot whose fetch failed stays in the cache with an absent payload;
/// the page simply renders that tab without its animation.
#[derive(Debug, Default)]
pub struct AnimationCache {
    assets: HashMap<String, RemoteAsset>,
}

impl AnimationCache {
    pub async fn load<F: AssetSource + ?Sized>(fetcher: &F, urls: &AnimationUrls) -> Self {
        let mut assets = HashMap::new();

        for (slot, url) in urls.iter() {
            tracing::debug!("fetching animation '{}' from {}", slot, url);
            let payload = fetcher.fetch(url).await;
            if payload.is_none() {
                tracing::warn!("animation '{}' unavailable, rendering without it", slot);
            }
            assets.insert(
                slot.to_string(),
                RemoteAsset {
                    url: url.to_string(),
                    payload,
                },
            );
        }

        Self { assets }
    }

    /// The parsed animation document for a slot, if its fetch succeeded.
    pub fn get(&self, slot: &str) -> Option<&serde_json::Value> {
        self.assets
            .get(slot)
            .and_then(|asset| asset.payload.as_ref())
    }

    pub fn available(&self) -> usize {
        self.assets
            .values()
            .filter(|asset| asset.is_available())
            .count()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
