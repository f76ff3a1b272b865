//! Clarifying questions for missing categories.
//!
//! One question per category, in input order. Text, options and explanation come from the
//! catalog's question table; a key with no entry gets a generic question instead of an error.
//! The caller's context value for a key, when non-blank, is echoed in `answer`.

use std::collections::BTreeSet;

use crate::category::{context_value_for_key, Category, Context};
use crate::prompts::PromptCatalog;
use crate::protocol::ClarifyingQuestion;

fn generic_question_text(key: &str) -> String {
    format!("Please provide more detail about {}.", key)
}

/// Maps missing categories to [`ClarifyingQuestion`]s using a [`PromptCatalog`].
#[derive(Clone, Copy, Debug)]
pub struct QuestionGenerator<'a> {
    catalog: &'a PromptCatalog,
}

impl<'a> QuestionGenerator<'a> {
    pub fn new(catalog: &'a PromptCatalog) -> Self {
        Self { catalog }
    }

    /// Questions for `categories`, order-preserving, one per category.
    pub fn questions_for(
        &self,
        categories: &[Category],
        keywords: &str,
        ctx: &Context,
    ) -> Vec<ClarifyingQuestion> {
        let keys: Vec<&str> = categories.iter().map(Category::as_str).collect();
        self.questions_for_keys(&keys, keywords, ctx)
    }

    /// Like [`Self::questions_for`] but takes raw keys, so identifiers outside [`Category`]
    /// (e.g. from a model-backed evaluator) still get a question. Repeated keys keep only
    /// their first occurrence.
    pub fn questions_for_keys(
        &self,
        keys: &[&str],
        keywords: &str,
        ctx: &Context,
    ) -> Vec<ClarifyingQuestion> {
        let mut seen = BTreeSet::new();
        let questions: Vec<ClarifyingQuestion> = keys
            .iter()
            .filter(|k| seen.insert(**k))
            .map(|k| self.question_for_key(k, ctx))
            .collect();
        tracing::debug!(
            keywords_len = keywords.len(),
            count = questions.len(),
            "clarifying questions"
        );
        questions
    }

    fn question_for_key(&self, key: &str, ctx: &Context) -> ClarifyingQuestion {
        let answer = context_value_for_key(ctx, key)
            .map(str::to_string)
            .unwrap_or_default();
        match self.catalog.question(key) {
            Some(entry) => ClarifyingQuestion {
                id: key.to_string(),
                question_text: entry.question.clone(),
                answer,
                options: entry.options.clone().filter(|o| !o.is_empty()),
                explanation: entry.explanation.clone(),
            },
            None => ClarifyingQuestion {
                id: key.to_string(),
                question_text: generic_question_text(key),
                answer,
                options: None,
                explanation: None,
            },
        }
    }
}
