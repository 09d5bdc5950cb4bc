//! Client library for the Gyazo capture service: a REST/OAuth client, a
//! markdown embed formatter, and the settings and message tables shared with
//! a host editor. The host's panels, storage and document surface are
//! external collaborators; they call in through the types re-exported here.

pub mod api;
pub mod embed;
pub mod i18n;
pub mod models;
pub mod settings;

pub use api::{extract_code, ApiError, AuthState, GyazoClient, MAX_PER_PAGE};
pub use embed::{markdown_embed, plain_embed, EmbedOptions, VideoStyle};
pub use i18n::{messages, Language, Messages};
pub use models::{CaptureKind, CaptureMetadata, CaptureRecord, OcrText};
pub use settings::GyazoSettings;
