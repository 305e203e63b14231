use serde::{Deserialize, Serialize};

/// Result of one fetch attempt for a decorative animation document.
/// `payload` is present only when the request returned HTTP 200 with a
/// parseable JSON body; every other outcome is absence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteAsset {
    pub url: String,
    pub payload: Option<serde_json::Value>,
}

impl RemoteAsset {
    pub fn is_available(&self) -> bool {
        self.payload.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillEntry {
    pub name: &'static str,
    /// Percentage shown on the progress indicator, within 0..=100.
    pub proficiency: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectEntry {
    pub title: &'static str,
    /// One-line description shown in the project table.
    pub summary: &'static str,
    /// Markdown body shown when the project entry is expanded.
    pub details: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EducationEntry {
    pub degree: &'static str,
    pub field: &'static str,
    pub institution: &'static str,
    pub year: &'static str,
}

/// Outbound link rendered as a button next to the resume download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// What the contact form widget reports when the visitor hits "Send".
/// Free text all the way through; the core only acknowledges receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// The resume PDF exposed verbatim as a downloadable artifact.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub data: Vec<u8>,
}

/// The five animation slots and the URL each one is fetched from.
/// Declaration order is fetch order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationUrls(pub Vec<(String, String)>);

impl Default for AnimationUrls {
    fn default() -> Self {
        Self(vec![
            (
                "coding".to_string(),
                "https://assets2.lottiefiles.com/packages/lf20_tno6cg2w.json".to_string(),
            ),
            (
                "skills".to_string(),
                "https://assets4.lottiefiles.com/packages/lf20_jtbfg2nb.json".to_string(),
            ),
            (
                "projects".to_string(),
                "https://assets2.lottiefiles.com/packages/lf20_ydo1amjm.json".to_string(),
            ),
            (
                "education".to_string(),
                "https://assets4.lottiefiles.com/packages/lf20_yr6zz3wv.json".to_string(),
            ),
            (
                "contact".to_string(),
                "https://assets9.lottiefiles.com/packages/lf20_u25cckyh.json".to_string(),
            ),
        ])
    }
}

impl AnimationUrls {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(slot, url)| (slot.as_str(), url.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
