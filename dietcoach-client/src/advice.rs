use async_trait::async_trait;
use dietcoach_model::{
    advice::{AdviceRequest, AdviceResponse},
    plan::Plan,
};

use crate::{Error, Result};

/// Client for the advice API served by `dietcoach-api`.
#[mockall::automock]
#[async_trait]
pub trait AdviceClient: Send + Sync {
    async fn ask(&self, request: &AdviceRequest) -> Result<AdviceResponse>;
    async fn request_plan(&self, request: &AdviceRequest) -> Result<Plan>;
}

pub struct AdviceClientImpl {
    url: String,
    client: reqwest::Client,
}

impl AdviceClientImpl {
    fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    async fn post(&self, request: &AdviceRequest) -> Result<reqwest::Response> {
        self.client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|_| Error::CommunicationError)
    }
}

pub fn create(url: String) -> impl AdviceClient {
    AdviceClientImpl::new(url)
}

#[async_trait]
impl AdviceClient for AdviceClientImpl {
    async fn ask(&self, request: &AdviceRequest) -> Result<AdviceResponse> {
        let resp = self.post(request).await?;
        let status = resp.status();

        // Error bodies carry a message worth showing; fall back to the
        // status class when they don't.
        match resp.json::<AdviceResponse>().await {
            Ok(body) if status.is_success() || matches!(body, AdviceResponse::Error(_)) => Ok(body),
            _ if status.is_client_error() => Err(Error::RequestError),
            _ if status.is_server_error() => Err(Error::InternalServerError),
            _ => Err(Error::ResponseError),
        }
    }

    async fn request_plan(&self, request: &AdviceRequest) -> Result<Plan> {
        crate::check_status(self.post(request).await?)?
            .json()
            .await
            .map_err(|_| Error::ResponseError)
    }
}
