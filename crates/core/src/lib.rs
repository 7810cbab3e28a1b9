//! Core types and shared functionality for ceylon.
//!
//! This crate provides:
//! - Fence stripping, HTML sanitization and structured extraction of model output
//! - Prompt builders for the news, manual and railway services
//! - Unified error types
//! - Configuration structures

pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod prompt;
pub mod sanitize;
pub mod text;
pub mod types;

pub use config::{AppConfig, ConfigError};
pub use error::Error;
pub use extract::{extract_article, extract_sources, extract_topics};
pub use model::ModelResponse;
pub use sanitize::{HtmlSanitizer, SanitizerMode, sanitize_article_html, select_sanitizer};
pub use text::strip_code_fences;
pub use types::{GeneratedArticle, GroundingSource, NewsTopic};
