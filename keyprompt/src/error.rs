//! Error types for the rule-based components and prompt backends.

use thiserror::Error;

/// Internal fault inside the rule-based evaluator or synthesizer.
///
/// Never crosses a component boundary: [`crate::ClarityEvaluator::evaluate`] and
/// [`crate::PromptSynthesizer::synthesize`] turn it into their conservative fallback.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("no feedback text for '{0}'")]
    MissingFeedback(String),
    #[error("no template family '{0}'")]
    MissingFamily(String),
    #[error("template family '{0}' has no templates")]
    EmptyFamily(String),
    #[error("unknown placeholder {{{name}}} in template '{template}'")]
    UnknownPlaceholder { name: String, template: String },
    #[error("unclosed placeholder in template '{0}'")]
    UnclosedPlaceholder(String),
}

/// Failure of a [`crate::PromptBackend`]. The pipeline answers with the rule-based
/// backend instead.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Backend could not be reached or timed out.
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    /// Backend answered with something that does not fit the contract.
    #[error("invalid backend output: {0}")]
    InvalidOutput(String),
    #[error("{0}")]
    Other(String),
}
