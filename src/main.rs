use gyazo_embed::{
    extract_code, markdown_embed, messages, ApiError, GyazoClient, GyazoSettings, MAX_PER_PAGE,
};

fn load_settings() -> GyazoSettings {
    let mut settings: GyazoSettings = std::env::var("GYAZO_SETTINGS")
        .ok()
        .and_then(|path| std::fs::read_to_string(path).ok())
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default();

    if let Ok(token) = std::env::var("GYAZO_ACCESS_TOKEN") {
        if !token.is_empty() {
            settings.access_token = token;
        }
    }
    settings
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let settings = load_settings();
    let strings = messages(settings.language);
    let client = GyazoClient::new(settings.access_token.clone());

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("auth-url") => {
            println!("{}", client.authorize_url());
        }
        Some("exchange") => {
            // Accept either the bare code or the full redirect URL the
            // browser was sent to.
            let arg = match args.get(1) {
                Some(a) => a.clone(),
                None => {
                    eprintln!("usage: gyazo-embed exchange <code-or-redirect-url>");
                    std::process::exit(2);
                }
            };
            let code = extract_code(&arg).unwrap_or(arg);
            match client.exchange_code(&code).await {
                Ok(token) => println!("{}", token),
                Err(e) => {
                    tracing::error!(error = %e, "authorization-code exchange failed");
                    eprintln!("{}", strings.auth_failed);
                    std::process::exit(1);
                }
            }
        }
        cmd => {
            let limit = cmd
                .filter(|c| *c == "list")
                .and_then(|_| args.get(1))
                .and_then(|v| v.parse().ok())
                .unwrap_or(MAX_PER_PAGE);

            match client.list_captures(limit).await {
                Ok(captures) if captures.is_empty() => println!("{}", strings.no_captures),
                Ok(captures) => {
                    let options = settings.embed_options();
                    for capture in captures.iter().filter(|c| c.is_complete()) {
                        println!("{}", markdown_embed(capture, Some(&options)));
                    }
                }
                Err(ApiError::Unauthenticated) => {
                    eprintln!("{}", strings.no_access_token);
                    std::process::exit(1);
                }
                Err(e) => {
                    tracing::error!(error = %e, "capture listing failed");
                    eprintln!("{}", strings.error_loading_captures);
                    std::process::exit(1);
                }
            }
        }
    }
}
