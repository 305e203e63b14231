pub mod cli;

use crate::domain::model::AnimationUrls;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "portfolio")]
#[command(about = "Assembles the data behind a single-page personal portfolio site")]
pub struct CliConfig {
    #[arg(long, default_value = "Madhu_Sekhar_Resume.pdf")]
    pub resume_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn resume_path(&self) -> &str {
        &self.resume_path
    }

    fn animation_urls(&self) -> AnimationUrls {
        AnimationUrls::default()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("resume_path", &self.resume_path)?;
        for (slot, url) in self.animation_urls().iter() {
            validate_url(slot, url)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CliConfig {
            resume_path: "Madhu_Sekhar_Resume.pdf".to_string(),
            verbose: false,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_resume_path_rejected() {
        let config = CliConfig {
            resume_path: String::new(),
            verbose: false,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_animation_urls_cover_all_slots() {
        let config = CliConfig {
            resume_path: "Madhu_Sekhar_Resume.pdf".to_string(),
            verbose: false,
        };
        let urls = config.animation_urls();

        assert_eq!(urls.len(), 5);
        let slots: Vec<&str> = urls.iter().map(|(slot, _)| slot).collect();
        assert_eq!(
            slots,
            vec!["coding", "skills", "projects", "education", "contact"]
        );
    }
}
