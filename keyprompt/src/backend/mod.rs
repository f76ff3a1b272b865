//! Prompt backend abstraction: the capability the pipeline calls to judge clarity and to
//! produce prompts.
//!
//! [`RuleBasedBackend`] is the deterministic default and the fallback used whenever another
//! backend fails. A model-backed implementation plugs in by implementing [`PromptBackend`];
//! the pipeline and HTTP layer do not change.

mod rule_based;

pub use rule_based::RuleBasedBackend;

use async_trait::async_trait;

use crate::category::Context;
use crate::clarity::ClarityVerdict;
use crate::error::BackendError;
use crate::protocol::GeneratedPrompt;

/// Clarity judgment and prompt synthesis behind one interface.
///
/// Implementations may fail; [`crate::PromptPipeline`] isolates failures by answering with
/// [`RuleBasedBackend`] instead.
#[async_trait]
pub trait PromptBackend: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Judges whether `keywords` plus `ctx` are actionable.
    async fn evaluate_clarity(
        &self,
        keywords: &str,
        ctx: &Context,
    ) -> Result<ClarityVerdict, BackendError>;

    /// Produces the finished prompts for clear input.
    async fn synthesize_prompts(
        &self,
        keywords: &str,
        model: Option<&str>,
        ctx: &Context,
    ) -> Result<Vec<GeneratedPrompt>, BackendError>;
}
