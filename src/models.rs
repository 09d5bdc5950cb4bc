use serde::{Deserialize, Serialize};

// ── Capture kind ─────────────────────────────────────────────────────────────

/// Asset type of a capture: a still image, an animated image, or a video clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureKind {
    Still,
    Animated,
    Video,
}

/// Resolve the capture kind from the server's `type` field, falling back to
/// the asset URL's file extension. An explicit non-default type always wins;
/// the extension check applies only when the type is absent or unrecognized.
pub(crate) fn derive_kind(raw_type: Option<&str>, url: &str) -> CaptureKind {
    match raw_type.map(str::trim) {
        Some("gif") => CaptureKind::Animated,
        Some("mp4") | Some("webm") => CaptureKind::Video,
        _ => {
            if url.ends_with(".gif") {
                CaptureKind::Animated
            } else if url.ends_with(".mp4") || url.ends_with(".webm") {
                CaptureKind::Video
            } else {
                CaptureKind::Still
            }
        }
    }
}

// ── Capture record ───────────────────────────────────────────────────────────

/// One capture from the user's Gyazo library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureRecord {
    pub id: String,
    pub permalink_url: String,
    pub thumb_url: String,
    pub url: String,
    pub kind: CaptureKind,
    pub created_at: String,
    pub alt_text: Option<String>,
    pub metadata: Option<CaptureMetadata>,
}

/// Optional structured annotations attached to a capture. Absence of a field
/// is distinct from an empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptureMetadata {
    pub app: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub desc: Option<String>,
    pub ocr: Option<OcrText>,
}

/// Optical-character-recognition transcript of a capture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OcrText {
    pub locale: Option<String>,
    pub description: Option<String>,
}

impl CaptureRecord {
    /// A record is actionable for embedding only when the identifier, the
    /// permalink page and the raw asset URL are all present.
    pub fn is_complete(&self) -> bool {
        !self.id.is_empty() && !self.permalink_url.is_empty() && !self.url.is_empty()
    }
}

// ── Wire format ──────────────────────────────────────────────────────────────

/// Raw image object as returned by `GET /api/images`. Every field is optional
/// so that a sparse server record still deserializes; completeness is judged
/// after mapping, not during parsing.
#[derive(Debug, Deserialize)]
pub(crate) struct RawCapture {
    #[serde(default)]
    pub image_id: Option<String>,
    #[serde(default)]
    pub permalink_url: Option<String>,
    #[serde(default)]
    pub thumb_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub ocr: Option<RawOcr>,
    #[serde(default)]
    pub metadata: Option<RawMetadata>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawOcr {
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawMetadata {
    #[serde(default)]
    pub app: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
}

impl CaptureRecord {
    /// Map a raw server record into the public shape. The server reports OCR
    /// alongside the image object; it is folded into the metadata block here.
    pub(crate) fn from_raw(raw: RawCapture) -> Self {
        let url = raw.url.unwrap_or_default();
        let kind = derive_kind(raw.kind.as_deref(), &url);

        let ocr = raw.ocr.map(|o| OcrText {
            locale: o.locale,
            description: o.description,
        });

        let metadata = match (raw.metadata, ocr) {
            (None, None) => None,
            (meta, ocr) => {
                let (app, title, url, desc) = meta
                    .map(|m| (m.app, m.title, m.url, m.desc))
                    .unwrap_or_default();
                Some(CaptureMetadata { app, title, url, desc, ocr })
            }
        };

        CaptureRecord {
            id: raw.image_id.unwrap_or_default(),
            permalink_url: raw.permalink_url.unwrap_or_default(),
            thumb_url: raw.thumb_url.unwrap_or_default(),
            url,
            kind,
            created_at: raw.created_at.unwrap_or_default(),
            alt_text: raw.alt_text,
            metadata,
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
