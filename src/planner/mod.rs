//! Care plan generation: prompt composition, the completion provider
//! client, and the presentation shell around the generated HTML.

pub mod claude;
pub mod prompt;
pub mod service;
pub mod shell;

pub use claude::{AnthropicClient, CompletionClient, MockCompletionClient};
pub use service::CarePlanService;

use thiserror::Error;

/// Failures from the completion provider.
///
/// The API layer collapses all of these into one generic server error;
/// the full variant detail only reaches the operator logs.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("cannot reach the completion API: {0}")]
    Connection(String),

    #[error("completion request timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("completion API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed completion response: {0}")]
    ResponseParsing(String),

    #[error("completion response contained no text")]
    EmptyResponse,
}
