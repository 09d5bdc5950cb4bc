use serde::{Deserialize, Serialize};

use crate::models::{CaptureKind, CaptureRecord};

// ── Options ──────────────────────────────────────────────────────────────────

/// How a video capture is rendered. Markdown image syntax and an HTML
/// `<video>` tag both appear in the wild; the choice is left to the caller
/// rather than picked per capture kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoStyle {
    #[default]
    Markdown,
    HtmlTag,
}

/// User-configurable formatting rules. Supplied by the caller and never
/// mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedOptions {
    pub include_permalink_link: bool,
    pub image_width_enabled: bool,
    pub image_width: u32,
    pub video_style: VideoStyle,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        EmbedOptions {
            include_permalink_link: true,
            image_width_enabled: false,
            image_width: 250,
            video_style: VideoStyle::Markdown,
        }
    }
}

// ── Formatting ───────────────────────────────────────────────────────────────

/// Generate the markdown embed for a capture.
///
/// The bracket label is the alt text (when non-empty) and the configured
/// width (when enabled and positive), joined with `|`. Unless permalink
/// wrapping is explicitly disabled, the image embed is wrapped as a link to
/// the capture's permalink page. URLs and alt text are passed through
/// verbatim; no markdown escaping is attempted.
pub fn markdown_embed(capture: &CaptureRecord, options: Option<&EmbedOptions>) -> String {
    let defaults = EmbedOptions::default();
    let opts = options.unwrap_or(&defaults);

    if capture.kind == CaptureKind::Video && opts.video_style == VideoStyle::HtmlTag {
        // HTML block embeds do not nest inside a markdown link, so the
        // permalink wrapper never applies to this branch.
        return format!(r#"<video controls src="{}"></video>"#, capture.url);
    }

    let mut segments: Vec<&str> = Vec::new();
    if let Some(alt) = capture.alt_text.as_deref() {
        if !alt.is_empty() {
            segments.push(alt);
        }
    }
    let width;
    if opts.image_width_enabled && opts.image_width > 0 {
        width = opts.image_width.to_string();
        segments.push(&width);
    }

    let embed = format!("![{}]({})", segments.join("|"), capture.url);

    if opts.include_permalink_link {
        format!("[{}]({})", embed, capture.permalink_url)
    } else {
        embed
    }
}

/// The bare `![](url)` form used when a capture is dropped straight into a
/// document, ignoring all formatting options.
pub fn plain_embed(capture: &CaptureRecord) -> String {
    format!("![]({})", capture.url)
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(kind: CaptureKind, alt_text: Option<&str>) -> CaptureRecord {
        CaptureRecord {
            id: "abc123".into(),
            permalink_url: "https://gyazo.com/abc123".into(),
            thumb_url: "https://thumb.gyazo.com/abc123".into(),
            url: "https://i.gyazo.com/abc123.png".into(),
            kind,
            created_at: "2024-01-01T00:00:00+0000".into(),
            alt_text: alt_text.map(str::to_string),
            metadata: None,
        }
    }

    #[test]
    fn defaults_wrap_embed_in_permalink_link() {
        let record = capture(CaptureKind::Still, None);
        assert_eq!(
            markdown_embed(&record, None),
            "[![](https://i.gyazo.com/abc123.png)](https://gyazo.com/abc123)"
        );
    }

    #[test]
    fn disabling_permalink_returns_bare_embed() {
        let record = capture(CaptureKind::Still, Some("cap"));
        let opts = EmbedOptions {
            include_permalink_link: false,
            ..EmbedOptions::default()
        };
        assert_eq!(
            markdown_embed(&record, Some(&opts)),
            "![cap](https://i.gyazo.com/abc123.png)"
        );
    }

    #[test]
    fn width_joins_alt_text_with_pipe() {
        let record = capture(CaptureKind::Still, Some("cap"));
        let opts = EmbedOptions {
            image_width_enabled: true,
            image_width: 250,
            ..EmbedOptions::default()
        };
        assert_eq!(
            markdown_embed(&record, Some(&opts)),
            "[![cap|250](https://i.gyazo.com/abc123.png)](https://gyazo.com/abc123)"
        );
    }

    #[test]
    fn width_without_alt_text_stands_alone() {
        let record = capture(CaptureKind::Still, None);
        let opts = EmbedOptions {
            image_width_enabled: true,
            image_width: 320,
            include_permalink_link: false,
            ..EmbedOptions::default()
        };
        assert_eq!(
            markdown_embed(&record, Some(&opts)),
            "![320](https://i.gyazo.com/abc123.png)"
        );
    }

    #[test]
    fn zero_width_is_treated_as_disabled() {
        let record = capture(CaptureKind::Still, Some("cap"));
        let enabled_zero = EmbedOptions {
            image_width_enabled: true,
            image_width: 0,
            ..EmbedOptions::default()
        };
        let disabled = EmbedOptions {
            image_width_enabled: false,
            ..EmbedOptions::default()
        };
        assert_eq!(
            markdown_embed(&record, Some(&enabled_zero)),
            markdown_embed(&record, Some(&disabled))
        );
    }

    #[test]
    fn empty_alt_text_matches_absent_alt_text() {
        let with_empty = capture(CaptureKind::Still, Some(""));
        let without = capture(CaptureKind::Still, None);
        assert_eq!(markdown_embed(&with_empty, None), markdown_embed(&without, None));
    }

    #[test]
    fn video_defaults_to_markdown_syntax() {
        let mut record = capture(CaptureKind::Video, None);
        record.url = "https://i.gyazo.com/abc123.mp4".into();
        assert_eq!(
            markdown_embed(&record, None),
            "[![](https://i.gyazo.com/abc123.mp4)](https://gyazo.com/abc123)"
        );
    }

    #[test]
    fn video_html_style_emits_tag_without_permalink() {
        let mut record = capture(CaptureKind::Video, Some("clip"));
        record.url = "https://i.gyazo.com/abc123.mp4".into();
        let opts = EmbedOptions {
            video_style: VideoStyle::HtmlTag,
            ..EmbedOptions::default()
        };
        assert_eq!(
            markdown_embed(&record, Some(&opts)),
            r#"<video controls src="https://i.gyazo.com/abc123.mp4"></video>"#
        );
    }

    #[test]
    fn html_style_leaves_still_images_untouched() {
        let record = capture(CaptureKind::Still, None);
        let opts = EmbedOptions {
            video_style: VideoStyle::HtmlTag,
            ..EmbedOptions::default()
        };
        assert_eq!(
            markdown_embed(&record, Some(&opts)),
            "[![](https://i.gyazo.com/abc123.png)](https://gyazo.com/abc123)"
        );
    }

    #[test]
    fn plain_embed_ignores_options_entirely() {
        let record = capture(CaptureKind::Still, Some("cap"));
        assert_eq!(plain_embed(&record), "![](https://i.gyazo.com/abc123.png)");
    }
}
