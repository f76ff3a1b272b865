//! Clarity evaluation: decides whether keywords plus context are enough to write prompts.
//!
//! Rules, in order (each adds its category independently):
//!
//! 1. `target_audience` when the context has no value for it and the keywords contain no
//!    audience marker ("user", "student", "개발자", ...).
//! 2. `goal` when the context has no value for it and the keywords contain no purpose
//!    marker ("for", "create", "작성", ...).
//! 3. `tone` when the context has no value for it.
//! 4. `specific_details` when the trimmed keywords are shorter than
//!    [`SHORT_KEYWORDS_THRESHOLD`] characters and at least one other category is missing.
//!
//! The verdict is a pure function of its inputs.

use serde::{Deserialize, Serialize};

use crate::category::{context_value, Category, Context};
use crate::error::RuleError;
use crate::prompts::PromptCatalog;

/// Keywords shorter than this (in characters, after trimming) count as too short, but only
/// when another category is missing too.
pub const SHORT_KEYWORDS_THRESHOLD: usize = 10;

/// Lowercase substrings that name an audience.
const AUDIENCE_MARKERS: &[&str] = &[
    "user",
    "customer",
    "reader",
    "student",
    "developer",
    "business",
    "expert",
    "사용자",
    "고객",
    "독자",
    "학생",
    "개발자",
    "비즈니스",
    "전문가",
];

/// Lowercase substrings that state a purpose.
const GOAL_MARKERS: &[&str] = &[
    "for",
    "purpose",
    "create",
    "generate",
    "develop",
    "write",
    "analyze",
    "위한",
    "목적",
    "만들",
    "생성",
    "개발",
    "작성",
    "분석",
];

const CLEAR_FEEDBACK: &str = "The request is clear enough to generate prompts.";
const CONSERVATIVE_FEEDBACK: &str =
    "We could not assess the request. Please add who it is for, what you want to achieve, and more detail.";

/// Evaluator's judgment of whether a request is actionable without further input.
///
/// `missing_categories` is empty exactly when `is_clear` is true.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClarityVerdict {
    pub is_clear: bool,
    pub feedback: String,
    pub missing_categories: Vec<Category>,
}

impl ClarityVerdict {
    pub fn clear() -> Self {
        Self {
            is_clear: true,
            feedback: CLEAR_FEEDBACK.to_string(),
            missing_categories: Vec::new(),
        }
    }

    /// Unclear verdict; `is_clear` follows from `missing_categories` being empty.
    pub fn unclear(feedback: impl Into<String>, missing_categories: Vec<Category>) -> Self {
        Self {
            is_clear: missing_categories.is_empty(),
            feedback: feedback.into(),
            missing_categories,
        }
    }

    /// Verdict used when evaluation faults: asks for audience, goal and detail.
    pub fn conservative() -> Self {
        Self {
            is_clear: false,
            feedback: CONSERVATIVE_FEEDBACK.to_string(),
            missing_categories: vec![
                Category::TargetAudience,
                Category::Goal,
                Category::SpecificDetails,
            ],
        }
    }

    /// True when `is_clear` agrees with `missing_categories` and no category repeats.
    pub fn is_consistent(&self) -> bool {
        let mut seen = std::collections::BTreeSet::new();
        let unique = self.missing_categories.iter().all(|c| seen.insert(*c));
        unique && self.is_clear == self.missing_categories.is_empty()
    }
}

/// Feedback table key, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FeedbackKey {
    TooShort,
    TargetAndGoal,
    Target,
    Goal,
    Generic,
}

impl FeedbackKey {
    fn as_str(&self) -> &'static str {
        match self {
            FeedbackKey::TooShort => "too_short",
            FeedbackKey::TargetAndGoal => "target_and_goal",
            FeedbackKey::Target => "target",
            FeedbackKey::Goal => "goal",
            FeedbackKey::Generic => "generic",
        }
    }

    fn select(missing: &[Category]) -> Self {
        let has = |c: Category| missing.contains(&c);
        if has(Category::SpecificDetails) {
            FeedbackKey::TooShort
        } else if has(Category::TargetAudience) && has(Category::Goal) {
            FeedbackKey::TargetAndGoal
        } else if has(Category::TargetAudience) {
            FeedbackKey::Target
        } else if has(Category::Goal) {
            FeedbackKey::Goal
        } else {
            FeedbackKey::Generic
        }
    }
}

fn contains_any(haystack: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| haystack.contains(m))
}

/// Categories the rules consider missing, in rule order.
pub fn missing_categories(keywords: &str, ctx: &Context) -> Vec<Category> {
    let lowered = keywords.to_lowercase();
    let mut missing = Vec::new();

    if context_value(ctx, Category::TargetAudience).is_none()
        && !contains_any(&lowered, AUDIENCE_MARKERS)
    {
        missing.push(Category::TargetAudience);
    }
    if context_value(ctx, Category::Goal).is_none() && !contains_any(&lowered, GOAL_MARKERS) {
        missing.push(Category::Goal);
    }
    if context_value(ctx, Category::Tone).is_none() {
        missing.push(Category::Tone);
    }
    if keywords.trim().chars().count() < SHORT_KEYWORDS_THRESHOLD && !missing.is_empty() {
        missing.push(Category::SpecificDetails);
    }
    missing
}

/// Rule-based clarity evaluator reading feedback text from a [`PromptCatalog`].
#[derive(Clone, Copy, Debug)]
pub struct ClarityEvaluator<'a> {
    catalog: &'a PromptCatalog,
}

impl<'a> ClarityEvaluator<'a> {
    pub fn new(catalog: &'a PromptCatalog) -> Self {
        Self { catalog }
    }

    /// Evaluates `keywords` with `ctx`. Never fails: an internal fault yields
    /// [`ClarityVerdict::conservative`].
    pub fn evaluate(&self, keywords: &str, ctx: &Context) -> ClarityVerdict {
        match self.try_evaluate(keywords, ctx) {
            Ok(v) => {
                tracing::debug!(
                    is_clear = v.is_clear,
                    missing = ?v.missing_categories,
                    "clarity verdict"
                );
                v
            }
            Err(e) => {
                tracing::warn!("clarity evaluation fault: {}; using conservative verdict", e);
                ClarityVerdict::conservative()
            }
        }
    }

    fn try_evaluate(&self, keywords: &str, ctx: &Context) -> Result<ClarityVerdict, RuleError> {
        let missing = missing_categories(keywords, ctx);
        if missing.is_empty() {
            return Ok(ClarityVerdict::clear());
        }
        let key = FeedbackKey::select(&missing);
        let feedback = self
            .catalog
            .feedback(key.as_str())
            .ok_or_else(|| RuleError::MissingFeedback(key.as_str().to_string()))?;
        Ok(ClarityVerdict::unclear(feedback, missing))
    }
}
