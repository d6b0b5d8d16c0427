use crate::metrics::{validate, UserMetrics, ValidMetrics, ValidationError};

pub const CHAT_REQUEST_TYPE: &str = "chat";

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AdviceRequest {
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub kind: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub user_metrics: Option<UserMetrics>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub user_input: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub username: String,
}

impl AdviceRequest {
    pub fn chat(user_metrics: UserMetrics, user_input: &str, username: &str) -> Self {
        Self {
            kind: Some(CHAT_REQUEST_TYPE.to_owned()),
            user_metrics: Some(user_metrics),
            user_input: user_input.to_owned(),
            username: username.to_owned(),
        }
    }

    pub fn is_chat(&self) -> bool {
        self.kind.as_deref() == Some(CHAT_REQUEST_TYPE)
    }

    pub fn validated_metrics(&self) -> Result<ValidMetrics, ValidationError> {
        self.user_metrics
            .as_ref()
            .ok_or(ValidationError::IncompleteMetrics)
            .and_then(validate)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AdviceResponse {
    Response(String),
    Error(String),
}
