use std::io::ErrorKind;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::{info, warn};

pub const BRAND_TITLE: &str = "jobFitAI";
pub const BRAND_SUBTITLE: &str = "Smart Resume Skill Matcher for Smarter Careers";

/// Header shown on every page. Without a logo the header falls back to text.
#[derive(Debug, Clone, Default)]
pub struct Branding {
    /// Base64 JPEG, ready for a `data:` URI.
    pub logo_base64: Option<String>,
}

impl Branding {
    /// Reads the logo once. A missing or unreadable file is not an error.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read(path) {
            Ok(bytes) => {
                info!("Loaded logo from {} ({} bytes)", path.display(), bytes.len());
                Self {
                    logo_base64: Some(STANDARD.encode(bytes)),
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No logo at {}; using text header", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("Could not read logo {}: {e}; using text header", path.display());
                Self::default()
            }
        }
    }
}
