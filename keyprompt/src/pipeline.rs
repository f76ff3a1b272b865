//! Request pipeline: clarity evaluation, then either clarifying questions or prompts.
//!
//! The primary backend's failures (errors, a verdict whose flag disagrees with its missing
//! categories, an empty prompt list) are logged and answered by the rule-based fallback, so
//! [`PromptPipeline::generate`] always returns a well-formed [`PromptResponse`].

use std::sync::Arc;

use tracing::Instrument;

use crate::backend::{PromptBackend, RuleBasedBackend};
use crate::category::Context;
use crate::clarity::ClarityVerdict;
use crate::error::BackendError;
use crate::prompts::PromptCatalog;
use crate::protocol::{GeneratedPrompt, PromptRequest, PromptResponse};
use crate::questions::QuestionGenerator;

/// Stateless pipeline shared by all requests.
#[derive(Clone)]
pub struct PromptPipeline {
    primary: Arc<dyn PromptBackend>,
    fallback: RuleBasedBackend,
}

impl Default for PromptPipeline {
    fn default() -> Self {
        Self::rule_based(Arc::new(PromptCatalog::embedded().clone()))
    }
}

impl PromptPipeline {
    /// Pipeline that asks `primary` first and `fallback` when it fails.
    pub fn new(primary: Arc<dyn PromptBackend>, fallback: RuleBasedBackend) -> Self {
        Self { primary, fallback }
    }

    /// Pipeline using only the rule-based backend over `catalog`.
    pub fn rule_based(catalog: Arc<PromptCatalog>) -> Self {
        let backend = RuleBasedBackend::new(catalog);
        Self {
            primary: Arc::new(backend.clone()),
            fallback: backend,
        }
    }

    /// Name of the primary backend.
    pub fn backend_name(&self) -> &str {
        self.primary.name()
    }

    /// Clarity verdict from the primary backend, or from the fallback when it fails.
    pub async fn evaluate(&self, keywords: &str, ctx: &Context) -> ClarityVerdict {
        let result = self
            .primary
            .evaluate_clarity(keywords, ctx)
            .await
            .and_then(|v| {
                if v.is_consistent() {
                    Ok(v)
                } else {
                    Err(BackendError::InvalidOutput(format!(
                        "is_clear={} with {} missing categories",
                        v.is_clear,
                        v.missing_categories.len()
                    )))
                }
            });
        match result {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(
                    backend = self.primary.name(),
                    "evaluate_clarity: {}; using rule-based",
                    e
                );
                self.fallback.evaluate(keywords, ctx)
            }
        }
    }

    /// Prompts from the primary backend, or from the fallback when it fails. Never empty.
    pub async fn synthesize(
        &self,
        keywords: &str,
        model: Option<&str>,
        ctx: &Context,
    ) -> Vec<GeneratedPrompt> {
        let result = self
            .primary
            .synthesize_prompts(keywords, model, ctx)
            .await
            .and_then(|p| {
                if p.is_empty() {
                    Err(BackendError::InvalidOutput("no prompts".to_string()))
                } else {
                    Ok(p)
                }
            });
        match result {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(
                    backend = self.primary.name(),
                    "synthesize_prompts: {}; using rule-based",
                    e
                );
                self.fallback.synthesize(keywords, model, ctx)
            }
        }
    }

    /// Runs one request to completion.
    pub async fn generate(&self, req: &PromptRequest) -> PromptResponse {
        let span = tracing::info_span!(
            "generate",
            keywords_len = req.keywords.len(),
            model = req.model.as_deref().unwrap_or("-"),
            backend = self.primary.name(),
        );
        async move {
            let ctx = req.context();
            let keywords = req.keywords.as_str();
            let verdict = self.evaluate(keywords, &ctx).await;
            if !verdict.is_clear {
                let questions = QuestionGenerator::new(self.fallback.catalog()).questions_for(
                    &verdict.missing_categories,
                    keywords,
                    &ctx,
                );
                tracing::info!(questions = questions.len(), "need more info");
                return PromptResponse::need_more_info(verdict.feedback, questions);
            }
            let prompts = self.synthesize(keywords, req.model.as_deref(), &ctx).await;
            tracing::info!(prompts = prompts.len(), "prompts generated");
            PromptResponse::success(prompts)
        }
        .instrument(span)
        .await
    }
}
