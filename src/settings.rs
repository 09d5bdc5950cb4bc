use serde::{Deserialize, Serialize};

use crate::embed::{EmbedOptions, VideoStyle};
use crate::i18n::Language;

/// Persisted plugin configuration. The host owns storage; this is only the
/// in-memory representation. Unknown fields in stored JSON are ignored and
/// missing ones fall back to their defaults, so a settings file written by an
/// older version still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GyazoSettings {
    pub access_token: String,
    pub language: Language,
    pub include_permalink_links: bool,
    pub enable_image_width: bool,
    pub image_width: u32,
    pub video_style: VideoStyle,
}

impl Default for GyazoSettings {
    fn default() -> Self {
        GyazoSettings {
            access_token: String::new(),
            language: Language::En,
            include_permalink_links: true,
            enable_image_width: false,
            image_width: 250,
            video_style: VideoStyle::Markdown,
        }
    }
}

impl GyazoSettings {
    /// Project the formatting-relevant fields into embed options.
    pub fn embed_options(&self) -> EmbedOptions {
        EmbedOptions {
            include_permalink_link: self.include_permalink_links,
            image_width_enabled: self.enable_image_width,
            image_width: self.image_width,
            video_style: self.video_style,
        }
    }

    /// Token rendered for display: first and last four characters with the
    /// middle elided. `None` when the token is empty or too short to mask.
    pub fn masked_token(&self) -> Option<String> {
        let chars: Vec<char> = self.access_token.chars().collect();
        if chars.len() < 9 {
            return None;
        }
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        Some(format!("{}...{}", head, tail))
    }
}
