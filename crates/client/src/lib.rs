//! Client code for ceylon.
//!
//! This crate provides the Gemini model client, the [`ContentModel`] seam it
//! implements, and the content service that turns model output into topics
//! and articles.

pub mod gemini;
pub mod model;
pub mod service;

pub use gemini::{GeminiClient, GeminiConfig};
pub use model::{ContentModel, ModelError, ModelRequest};
pub use service::{ContentService, Operation, RequestState, ResultSlot, Ticket};
