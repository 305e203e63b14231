use crate::core::animations::AnimationCache;
use crate::core::catalog::ContentCatalog;
use crate::domain::model::{ContactSubmission, ResumeDocument};
use crate::domain::ports::{AssetSource, ConfigProvider, Storage};
use crate::utils::error::{PortfolioError, Result};

/// Fixed download filename and MIME type for the resume artifact.
/// The file may live anywhere on disk; the download control always
/// presents it under this name.
pub const RESUME_FILE_NAME: &str = "Madhu_Sekhar_Resume.pdf";
pub const RESUME_MIME: &str = "application/pdf";

/// Everything the rendering layer needs to draw the page, assembled once
/// at startup and never mutated afterwards.
pub struct PageContext {
    pub catalog: ContentCatalog,
    pub resume: ResumeDocument,
    pub animations: AnimationCache,
}

impl PageContext {
    /// Converts the contact form widget's submit event into a submission
    /// record. `submitted` is the widget's "Send was pressed" signal; when
    /// it is false there is nothing to accept. The fields are free text
    /// and pass through unvalidated. How the acknowledgment is displayed
    /// is the caller's business.
    pub fn accept_contact(
        &self,
        submitted: bool,
        name: &str,
        email: &str,
        message: &str,
    ) -> Option<ContactSubmission> {
        if !submitted {
            return None;
        }

        tracing::info!("contact message received from '{}'", name);
        Some(ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

/// Startup assembly: catalog from literals, resume from disk, animations
/// over the network. The resume is the only required asset; each animation
/// slot fails independently and silently.
pub struct SiteAssembler<S: Storage, C: ConfigProvider, F: AssetSource> {
    storage: S,
    config: C,
    fetcher: F,
}

impl<S: Storage, C: ConfigProvider, F: AssetSource> SiteAssembler<S, C, F> {
    pub fn new(storage: S, config: C, fetcher: F) -> Self {
        Self {
            storage,
            config,
            fetcher,
        }
    }

    pub async fn assemble(&self) -> Result<PageContext> {
        tracing::info!("Building content catalog");
        let catalog = ContentCatalog::new();

        tracing::info!("Loading resume from {}", self.config.resume_path());
        let resume = self.load_resume().await?;
        tracing::info!("Resume loaded ({} bytes)", resume.data.len());

        let urls = self.config.animation_urls();
        tracing::info!("Fetching {} animation assets", urls.len());
        let animations = AnimationCache::load(&self.fetcher, &urls).await;
        tracing::info!(
            "{} of {} animations available",
            animations.available(),
            animations.len()
        );

        Ok(PageContext {
            catalog,
            resume,
            animations,
        })
    }

    async fn load_resume(&self) -> Result<ResumeDocument> {
        let path = self.config.resume_path();
        let data = self.storage.read_file(path).await.map_err(|e| {
            tracing::error!("cannot read resume at {}: {}", path, e);
            PortfolioError::RequiredAssetMissing {
                path: path.to_string(),
            }
        })?;

        Ok(ResumeDocument {
            file_name: RESUME_FILE_NAME,
            mime: RESUME_MIME,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_context() -> PageContext {
        PageContext {
            catalog: ContentCatalog::new(),
            resume: ResumeDocument {
                file_name: RESUME_FILE_NAME,
                mime: RESUME_MIME,
                data: vec![0u8; 4],
            },
            animations: AnimationCache::default(),
        }
    }

    #[test]
    fn test_accept_contact_returns_record_on_submit() {
        let page = empty_context();
        let submission = page.accept_contact(true, "Ada", "ada@example.com", "Hello there");

        let submission = submission.expect("submitted form produces a record");
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(submission.message, "Hello there");
    }

    #[test]
    fn test_accept_contact_absent_without_submit() {
        let page = empty_context();
        assert!(page
            .accept_contact(false, "Ada", "ada@example.com", "Hello")
            .is_none());
    }

    #[test]
    fn test_accept_contact_passes_free_text_through() {
        // No validation in scope: empty and odd values are accepted as-is.
        let page = empty_context();
        let submission = page.accept_contact(true, "", "not-an-email", "").unwrap();
        assert_eq!(submission.name, "");
        assert_eq!(submission.email, "not-an-email");
        assert_eq!(submission.message, "");
    }
}
