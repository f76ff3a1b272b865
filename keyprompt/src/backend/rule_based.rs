//! Deterministic backend built on [`ClarityEvaluator`] and [`PromptSynthesizer`].

use std::sync::Arc;

use async_trait::async_trait;

use super::PromptBackend;
use crate::category::Context;
use crate::clarity::{ClarityEvaluator, ClarityVerdict};
use crate::error::BackendError;
use crate::prompts::PromptCatalog;
use crate::protocol::GeneratedPrompt;
use crate::synth::PromptSynthesizer;

/// Rule-based backend. Never returns `Err`.
#[derive(Clone, Debug)]
pub struct RuleBasedBackend {
    catalog: Arc<PromptCatalog>,
}

impl Default for RuleBasedBackend {
    fn default() -> Self {
        Self::new(Arc::new(PromptCatalog::embedded().clone()))
    }
}

impl RuleBasedBackend {
    pub fn new(catalog: Arc<PromptCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &PromptCatalog {
        &self.catalog
    }

    /// Synchronous clarity evaluation.
    pub fn evaluate(&self, keywords: &str, ctx: &Context) -> ClarityVerdict {
        ClarityEvaluator::new(&self.catalog).evaluate(keywords, ctx)
    }

    /// Synchronous prompt synthesis.
    pub fn synthesize(
        &self,
        keywords: &str,
        model: Option<&str>,
        ctx: &Context,
    ) -> Vec<GeneratedPrompt> {
        PromptSynthesizer::new(&self.catalog).synthesize(keywords, model, ctx)
    }
}

#[async_trait]
impl PromptBackend for RuleBasedBackend {
    fn name(&self) -> &str {
        "rule_based"
    }

    async fn evaluate_clarity(
        &self,
        keywords: &str,
        ctx: &Context,
    ) -> Result<ClarityVerdict, BackendError> {
        Ok(self.evaluate(keywords, ctx))
    }

    async fn synthesize_prompts(
        &self,
        keywords: &str,
        model: Option<&str>,
        ctx: &Context,
    ) -> Result<Vec<GeneratedPrompt>, BackendError> {
        Ok(self.synthesize(keywords, model, ctx))
    }
}
