use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ja,
}

/// Notice and error strings surfaced to the user around the core operations.
/// Panel labels and settings-form copy live with the host UI, not here.
#[derive(Debug)]
pub struct Messages {
    pub loading_captures: &'static str,
    pub no_captures: &'static str,
    pub error_loading_captures: &'static str,
    pub login_required: &'static str,
    pub no_access_token: &'static str,
    pub token_saved: &'static str,
    pub token_revoked: &'static str,
    pub auth_failed: &'static str,
    pub capture_inserted: &'static str,
    pub capture_copied: &'static str,
}

static EN: Messages = Messages {
    loading_captures: "Loading captures...",
    no_captures: "No captures found",
    error_loading_captures: "Error loading captures",
    login_required: "Gyazo Account Required",
    no_access_token: "Please log in or sign up to start using Gyazo",
    token_saved: "Access token saved",
    token_revoked: "Access token has been revoked",
    auth_failed: "Failed to authenticate with Gyazo",
    capture_inserted: "Image inserted into editor",
    capture_copied: "Image copied to clipboard",
};

static JA: Messages = Messages {
    loading_captures: "キャプチャを読み込み中...",
    no_captures: "キャプチャが見つかりません",
    error_loading_captures: "キャプチャの読み込みに失敗しました",
    login_required: "Gyazoアカウントが必要です",
    no_access_token: "Gyazoを使用するにはログインまたはサインアップが必要です",
    token_saved: "アクセストークンを保存しました",
    token_revoked: "アクセストークンが取り消されました",
    auth_failed: "Gyazoへの認証に失敗しました",
    capture_inserted: "エディタに画像を挿入しました",
    capture_copied: "画像をクリップボードにコピーしました",
};

pub fn messages(language: Language) -> &'static Messages {
    match language {
        Language::En => &EN,
        Language::Ja => &JA,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_resolves() {
        assert_eq!(messages(Language::En).no_captures, "No captures found");
        assert_eq!(messages(Language::Ja).no_captures, "キャプチャが見つかりません");
    }

    #[test]
    fn language_codes_round_trip_through_serde() {
        assert_eq!(serde_json::to_string(&Language::Ja).unwrap(), r#""ja""#);
        let parsed: Language = serde_json::from_str(r#""en""#).unwrap();
        assert_eq!(parsed, Language::En);
    }
}
