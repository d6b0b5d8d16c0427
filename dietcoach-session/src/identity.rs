use std::{env, sync::Arc};

use async_trait::async_trait;
use dotenv::dotenv;
use log::{debug, error, info};
use once_cell::sync::OnceCell;

use crate::{
    auth::{AuthCallback, AuthError, IdentityProvider, User},
    store::{Store, Subscription},
};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InitError {
    #[error("{0} must be set")]
    MissingSetting(&'static str),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentityConfig {
    pub api_key: Option<String>,
    pub auth_domain: Option<String>,
    pub project_id: Option<String>,
    pub storage_bucket: Option<String>,
    pub messaging_sender_id: Option<String>,
    pub app_id: Option<String>,
}

impl IdentityConfig {
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            api_key: get("FIREBASE_API_KEY"),
            auth_domain: get("FIREBASE_AUTH_DOMAIN"),
            project_id: get("FIREBASE_PROJECT_ID"),
            storage_bucket: get("FIREBASE_STORAGE_BUCKET"),
            messaging_sender_id: get("FIREBASE_MESSAGING_SENDER_ID"),
            app_id: get("FIREBASE_APP_ID"),
        }
    }
}

/// Auth handle of the identity client. Keeps the signed-in user locally;
/// sign-in itself happens in the provider's own flow.
pub struct FirebaseAuth {
    user: Store<Option<User>>,
}

impl FirebaseAuth {
    fn new() -> Self {
        Self {
            user: Store::new(None),
        }
    }

    pub fn sign_in(&self, user: User) {
        debug!("User {} signed in", user.uid);
        self.user.set(Some(user));
    }
}

#[async_trait]
impl IdentityProvider for FirebaseAuth {
    fn current_user(&self) -> Option<User> {
        self.user.get()
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.user.set(None);
        Ok(())
    }

    fn on_auth_state_changed(&self, callback: AuthCallback) -> Subscription {
        self.user.subscribe(callback)
    }
}

pub struct IdentityClient {
    project_id: String,
    auth_domain: String,
    auth: Arc<FirebaseAuth>,
}

impl IdentityClient {
    pub fn new(config: IdentityConfig) -> Result<Self, InitError> {
        if config.api_key.is_none() {
            return Err(InitError::MissingSetting("FIREBASE_API_KEY"));
        }
        let project_id = config
            .project_id
            .ok_or(InitError::MissingSetting("FIREBASE_PROJECT_ID"))?;
        let auth_domain = config
            .auth_domain
            .unwrap_or_else(|| format!("{}.firebaseapp.com", project_id));

        Ok(Self {
            project_id,
            auth_domain,
            auth: Arc::new(FirebaseAuth::new()),
        })
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn auth_domain(&self) -> &str {
        &self.auth_domain
    }

    pub fn auth(&self) -> Arc<FirebaseAuth> {
        self.auth.clone()
    }

    pub fn database_path(&self) -> String {
        format!("projects/{}/databases/(default)", self.project_id)
    }
}

static CLIENT: OnceCell<IdentityClient> = OnceCell::new();

/// Initializes the process-wide identity client on first success and
/// returns it. Later calls return the same client and ignore `config`.
/// A failed initialization is not remembered.
pub fn init(config: IdentityConfig) -> Result<&'static IdentityClient, InitError> {
    CLIENT.get_or_try_init(|| {
        IdentityClient::new(config)
            .map(|client| {
                info!("Identity client initialized for {}", client.auth_domain());
                client
            })
            .map_err(|e| {
                error!("Identity client initialization error: {}", e);
                e
            })
    })
}

pub fn client() -> Option<&'static IdentityClient> {
    CLIENT.get()
}
