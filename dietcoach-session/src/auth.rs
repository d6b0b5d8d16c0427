use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::info;

use crate::store::{Store, Subscription};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("identity provider unreachable")]
    CommunicationError,
    #[error("sign out rejected: {0}")]
    SignOutRejected(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub signed_in_at: DateTime<Utc>,
}

impl User {
    pub fn new(uid: &str, email: Option<&str>, display_name: Option<&str>) -> Self {
        Self {
            uid: uid.to_owned(),
            email: email.map(str::to_owned),
            display_name: display_name.map(str::to_owned),
            signed_in_at: Utc::now(),
        }
    }

    /// Name to address the user by.
    pub fn name(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.uid)
    }
}

pub type AuthCallback = Box<dyn Fn(&Option<User>) + Send + Sync>;

/// Third-party identity provider, seen only through its sign-in state.
#[mockall::automock]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    fn current_user(&self) -> Option<User>;
    async fn sign_out(&self) -> Result<(), AuthError>;
    fn on_auth_state_changed(&self, callback: AuthCallback) -> Subscription;
}

/// Signed-in user as seen by the client: the provider's user when known,
/// otherwise the user supplied with the page data.
pub struct AuthStore {
    provider: Arc<dyn IdentityProvider>,
    user: Store<Option<User>>,
    page_user: Option<User>,
    _listener: Subscription,
}

impl AuthStore {
    pub fn new(provider: Arc<dyn IdentityProvider>, page_user: Option<User>) -> Self {
        let user = Store::new(None);
        let sink = user.clone();
        let listener = provider.on_auth_state_changed(Box::new(move |changed: &Option<User>| {
            sink.set(changed.clone());
        }));

        Self {
            provider,
            user,
            page_user,
            _listener: listener,
        }
    }

    pub fn current(&self) -> Option<User> {
        self.user.get().or_else(|| self.page_user.clone())
    }

    pub fn subscribe(
        &self,
        callback: impl Fn(Option<&User>) + Send + Sync + 'static,
    ) -> Subscription {
        let page_user = self.page_user.clone();
        self.user
            .subscribe(move |user| callback(user.as_ref().or(page_user.as_ref())))
    }

    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.provider.sign_out().await?;
        self.user.set(None);
        info!("Signed out");
        Ok(())
    }
}
