use common::session::{SessionProvider, TokenStorage};

/// Local-storage key the platform's sign-in widget writes its tokens to.
const TOKEN_STORAGE_KEY: &str = "okta-token-storage";

/// Session backed by the platform's token storage. Tokens are read on every
/// call so a refresh done by the host is picked up without reloading.
pub struct BrowserSession;

impl BrowserSession {
    fn tokens(&self) -> Option<TokenStorage> {
        let storage = web_sys::window()?.local_storage().ok()??;
        let raw = storage.get_item(TOKEN_STORAGE_KEY).ok()??;
        TokenStorage::parse(&raw)
    }
}

impl SessionProvider for BrowserSession {
    fn access_token(&self) -> String {
        self.tokens()
            .map(|tokens| tokens.access_token())
            .unwrap_or_default()
    }

    fn user_name(&self) -> Option<String> {
        self.tokens()?.user_name()
    }
}
