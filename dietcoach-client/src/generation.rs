use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{check_status, Error, Result};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenerationParameters {
    pub max_length: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub do_sample: bool,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_length: 500,
            temperature: 0.7,
            top_p: 0.9,
            do_sample: true,
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationParameters,
}

#[derive(Debug, Deserialize)]
struct Generation {
    generated_text: Option<String>,
}

/// Remote text-generation capability.
#[mockall::automock]
#[async_trait]
pub trait Generator: Send + Sync {
    /// Returns the first generated text for `prompt`. Blank output is
    /// reported as [`Error::EmptyResponse`].
    async fn generate(&self, prompt: &str) -> Result<String>;
}

pub struct GeneratorImpl {
    url: String,
    api_key: String,
    parameters: GenerationParameters,
    client: reqwest::Client,
}

impl GeneratorImpl {
    fn new(url: String, api_key: String, timeout: Duration) -> reqwest::Result<Self> {
        Ok(Self {
            url,
            api_key,
            parameters: GenerationParameters::default(),
            client: reqwest::Client::builder().timeout(timeout).build()?,
        })
    }
}

pub fn create_generator(
    url: String,
    api_key: String,
    timeout: Duration,
) -> reqwest::Result<impl Generator> {
    GeneratorImpl::new(url, api_key, timeout)
}

#[async_trait]
impl Generator for GeneratorImpl {
    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!("Requesting generation from {}", self.url);
        let generations: Vec<Generation> = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&GenerationRequest {
                inputs: prompt,
                parameters: &self.parameters,
            })
            .send()
            .await
            .map_err(|_| Error::CommunicationError)
            .and_then(check_status)?
            .json()
            .await
            .map_err(|_| Error::ResponseError)?;

        generations
            .into_iter()
            .next()
            .and_then(|generation| generation.generated_text)
            .filter(|text| !text.trim().is_empty())
            .ok_or(Error::EmptyResponse)
    }
}
