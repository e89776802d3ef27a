use crate::{
    error::{AiError, Result},
    flows::{
        suggest_tags::{self, SuggestTagsInput, SuggestTagsOutput, TagSuggester},
        summarize_article::{
            self, ArticleSummarizer, SummarizeArticleInput, SummarizeArticleOutput,
        },
    },
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Client for the Gemini `generateContent` endpoint. Every flow runs in JSON
/// mode with a flow-specific response schema, so candidate text parses
/// directly into the flow's output type.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Result<Self> {
        if api_key.is_empty() {
            return Err(AiError::MissingApiKey);
        }

        Ok(Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key,
            model,
        })
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    async fn generate<Output: DeserializeOwned>(
        &self,
        prompt: String,
        response_schema: Value,
    ) -> Result<Output> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema,
            },
        };

        debug!(model = %self.model, "Requesting generation");

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, self.model
            ))
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AiError::from_status(status, message));
        }

        let body = response.text().await?;
        let reply: GenerateContentResponse = serde_json::from_str(&body)?;

        let text = reply
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or(AiError::EmptyResponse)?;

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl ArticleSummarizer for GeminiClient {
    async fn summarize_article(
        &self,
        input: SummarizeArticleInput,
    ) -> Result<SummarizeArticleOutput> {
        self.generate(
            summarize_article::prompt(&input),
            summarize_article::response_schema(),
        )
        .await
    }
}

#[async_trait]
impl TagSuggester for GeminiClient {
    async fn suggest_tags(&self, input: SuggestTagsInput) -> Result<SuggestTagsOutput> {
        self.generate(suggest_tags::prompt(&input), suggest_tags::response_schema())
            .await
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Clone, Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Clone, Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
