//! Google Gemini API client.
//!
//! Implements `GenerativeBackend` for the Generative Language API: text,
//! image, and vision models share one request/response shape.

mod client;
mod config;
mod wire;

#[cfg(test)]
mod tests;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use wire::{
    ApiErrorBody, Candidate, Content, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, InlineData, Part,
};
