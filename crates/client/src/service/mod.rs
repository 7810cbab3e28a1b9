//! Content services: prompt, grounded model call, extraction.
//!
//! Every operation is a single linear request. Input is validated before any
//! network call, exactly one model call is made (never retried), and every
//! failure is mapped into [`ceylon_core::Error`] at this boundary.
//!
//! Randomness (railway theme, session token, topic shuffle) comes from an
//! injected, seedable [`StdRng`].

pub mod state;

pub use state::{RequestState, ResultSlot, Ticket};

use ceylon_core::prompt::{
    RAILWAY_THEMES, manual_article_prompt, news_trends_prompt, railway_article_prompt, railway_topics_prompt,
};
use ceylon_core::{
    AppConfig, Error, GeneratedArticle, HtmlSanitizer, ModelResponse, NewsTopic, SanitizerMode, extract_article,
    extract_sources, extract_topics, select_sanitizer,
};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use crate::model::{ContentModel, ModelError, ModelRequest};

/// Length of the random session token sent with railway topic prompts.
const SESSION_TOKEN_LEN: usize = 12;

/// Names used to prefix transport failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    TrendingTopics,
    ManualArticle,
    RailwayTopics,
    RailwayArticle,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::TrendingTopics => "fetch trending topics",
            Operation::ManualArticle => "generate article",
            Operation::RailwayTopics => "fetch railway topics",
            Operation::RailwayArticle => "generate railway article",
        }
    }
}

/// Orchestrates the news, manual and railway content flows over a model.
pub struct ContentService<M> {
    model: M,
    sanitizer: Box<dyn HtmlSanitizer>,
    rng: Mutex<StdRng>,
}

impl<M: ContentModel> ContentService<M> {
    /// Service with the best available sanitizer and an entropy-seeded RNG.
    pub fn new(model: M) -> Self {
        Self { model, sanitizer: select_sanitizer(SanitizerMode::Auto), rng: Mutex::new(StdRng::from_entropy()) }
    }

    /// Service configured from the application configuration.
    pub fn from_app_config(model: M, config: &AppConfig) -> Self {
        let service = Self::new(model).with_sanitizer(select_sanitizer(config.sanitizer));
        match config.seed {
            Some(seed) => service.with_rng(StdRng::seed_from_u64(seed)),
            None => service,
        }
    }

    pub fn with_sanitizer(mut self, sanitizer: Box<dyn HtmlSanitizer>) -> Self {
        self.sanitizer = sanitizer;
        self
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = Mutex::new(rng);
        self
    }

    /// Name of the sanitizer in use.
    pub fn sanitizer_name(&self) -> &'static str {
        self.sanitizer.name()
    }

    /// Top Sri Lanka news topics.
    pub async fn trending_topics(&self) -> Result<Vec<NewsTopic>, Error> {
        let response = self.call(Operation::TrendingTopics, news_trends_prompt()).await?;
        extract_topics(&response.text(), &extract_sources(&response))
    }

    /// Article on a user-supplied topic.
    pub async fn manual_article(&self, topic: &str) -> Result<GeneratedArticle, Error> {
        let topic = required_topic(topic)?;
        let response = self.call(Operation::ManualArticle, manual_article_prompt(topic)).await?;
        extract_article(&response.text(), &extract_sources(&response), self.sanitizer.as_ref())
    }

    /// Railway travel topics, in a shuffled order.
    ///
    /// Each call uses a fresh session token and a randomly chosen theme.
    pub async fn railway_topics(&self) -> Result<Vec<NewsTopic>, Error> {
        let (session_token, theme) = {
            let mut rng = self.rng();
            let token: String =
                (&mut *rng).sample_iter(&Alphanumeric).take(SESSION_TOKEN_LEN).map(char::from).collect();
            let theme = RAILWAY_THEMES[rng.gen_range(0..RAILWAY_THEMES.len())];
            (token, theme)
        };

        tracing::debug!(%session_token, theme, "requesting railway topics");

        let response = self
            .call(Operation::RailwayTopics, railway_topics_prompt(&session_token, theme))
            .await?;
        let mut topics = extract_topics(&response.text(), &extract_sources(&response))?;

        topics.shuffle(&mut *self.rng());
        Ok(topics)
    }

    /// Railway travel article on the given topic.
    pub async fn railway_article(&self, topic: &str) -> Result<GeneratedArticle, Error> {
        let topic = required_topic(topic)?;
        let response = self.call(Operation::RailwayArticle, railway_article_prompt(topic)).await?;
        extract_article(&response.text(), &extract_sources(&response), self.sanitizer.as_ref())
    }

    async fn call(&self, operation: Operation, prompt: String) -> Result<ModelResponse, Error> {
        let start = Instant::now();
        let request = ModelRequest::grounded(prompt);

        let response = self
            .model
            .generate(&request)
            .await
            .map_err(|e| transport_error(operation, &e))?;

        tracing::info!(
            operation = operation.as_str(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "model call completed"
        );
        Ok(response)
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn required_topic(topic: &str) -> Result<&str, Error> {
    let topic = topic.trim();
    if topic.is_empty() { Err(Error::topic_required()) } else { Ok(topic) }
}

fn transport_error(operation: Operation, err: &ModelError) -> Error {
    tracing::warn!(operation = operation.as_str(), error = %err, "model call failed");
    Error::transport(operation.as_str(), err.to_string())
}
