//! Optional language-model consultation on claim support.
//!
//! A judge gives an independent, advisory opinion on whether the document
//! supports each claim. It never alters the deterministic matcher results;
//! callers attach its output alongside them. A judge that is not configured
//! is an ordinary absent capability, surfaced as a construction error with
//! a clear message rather than a mid-run failure.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matcher::Claim;

/// Characters of document text included in the judge prompt
const PROMPT_DOC_LIMIT: usize = 4000;

/// An advisory opinion from a judge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeOpinion {
    /// Model that produced the opinion
    pub model: String,
    /// The model's raw verdict text (one match/no_match line per claim)
    pub verdict: String,
}

/// Trait for external claim judges
#[async_trait]
pub trait ClaimJudge: Send + Sync {
    /// Human-readable judge name
    fn name(&self) -> &str;

    /// Judge whether the document supports each claim
    async fn judge(&self, document_text: &str, claims: &[Claim]) -> Result<JudgeOpinion>;
}

/// Settings for the OpenAI-compatible judge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeSettings {
    /// Model name (e.g. "gpt-4o-mini")
    pub model: String,
    /// API base URL, without the `/v1/...` suffix
    pub api_base: String,
}

impl Default for JudgeSettings {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            api_base: "https://api.openai.com".to_string(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Claim judge backed by an OpenAI-compatible chat completion endpoint
pub struct OpenAiJudge {
    settings: JudgeSettings,
    api_key: String,
    client: reqwest::Client,
}

impl OpenAiJudge {
    /// Create a judge, reading the API key from `OPENAI_API_KEY`. Fails
    /// cleanly when the key is absent so callers can report the missing
    /// capability before doing any work.
    pub fn from_env(settings: JudgeSettings) -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .context("OPENAI_API_KEY is not set; the claim judge is unavailable without it")?;

        Ok(Self {
            settings,
            api_key,
            client: reqwest::Client::new(),
        })
    }

    fn chat_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.settings.api_base.trim_end_matches('/')
        )
    }

    fn build_prompt(document_text: &str, claims: &[Claim]) -> String {
        let excerpt: String = document_text.chars().take(PROMPT_DOC_LIMIT).collect();
        let claim_lines: Vec<String> = claims
            .iter()
            .map(|c| format!("{}: {}", c.id, c.text))
            .collect();

        format!(
            "You are verifying if the following claims are supported by the provided document text.\n\
             Respond for each claim with 'match' or 'no_match'.\n\n\
             Document:\n{}\n\nClaims:\n{}",
            excerpt,
            claim_lines.join("\n")
        )
    }
}

#[async_trait]
impl ClaimJudge for OpenAiJudge {
    fn name(&self) -> &str {
        "openai"
    }

    async fn judge(&self, document_text: &str, claims: &[Claim]) -> Result<JudgeOpinion> {
        let request = ChatRequest {
            model: &self.settings.model,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: Self::build_prompt(document_text, claims),
            }],
            temperature: 0.0,
        };

        debug!(model = %self.settings.model, claims = claims.len(), "consulting claim judge");

        let response = self
            .client
            .post(self.chat_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to reach the claim judge endpoint")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Claim judge returned {}: {}", status, body.trim());
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .context("Failed to parse claim judge response")?;

        let verdict = parsed
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .context("Claim judge response contained no choices")?;

        Ok(JudgeOpinion {
            model: self.settings.model.clone(),
            verdict,
        })
    }
}
