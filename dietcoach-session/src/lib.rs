pub mod auth;
pub mod identity;
pub mod profile;
pub mod store;

use dietcoach_model::advice::AdviceRequest;

use crate::{auth::AuthStore, profile::ProfileStore};

/// Client-side state handed explicitly to whatever builds advice requests.
pub struct Session {
    pub profile: ProfileStore,
    pub auth: AuthStore,
}

impl Session {
    pub fn new(profile: ProfileStore, auth: AuthStore) -> Self {
        Self { profile, auth }
    }

    /// Builds a chat request from the stored profile and signed-in user.
    pub fn chat_request(&self, user_input: &str) -> AdviceRequest {
        let metrics = self.profile.get().to_metrics().unwrap_or_default();
        let username = self
            .auth
            .current()
            .map(|user| user.name().to_owned())
            .unwrap_or_default();
        AdviceRequest::chat(metrics, user_input, &username)
    }
}
