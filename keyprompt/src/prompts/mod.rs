//! Reference data for the rule-based backend: clarifying questions, feedback messages and
//! prompt template families.
//!
//! Default text lives in `keyprompt/prompts/*.yaml` and is embedded at compile time; a
//! directory of YAML files can replace it at startup ([`load`], [`load_or_default`]).
//! A catalog may be incomplete. Consumers treat a missing entry as an internal fault and
//! take their fallback path instead of failing.

mod load;

use std::collections::BTreeMap;

use serde::Deserialize;

pub use load::{default_from_embedded, load, load_or_default, LoadError};

/// Canonical question text, suggested answers and rationale for one category.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct QuestionEntry {
    pub question: String,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// Contents of `questions.yaml`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct QuestionsFile {
    /// Keyed by category identifier.
    #[serde(default)]
    pub questions: BTreeMap<String, QuestionEntry>,
    /// Keyed by feedback name (`too_short`, `target_and_goal`, `target`, `goal`, `generic`).
    #[serde(default)]
    pub feedback: BTreeMap<String, String>,
}

/// One prompt pattern with `{placeholder}` slots.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PromptTemplate {
    pub description: String,
    pub prompt: String,
}

/// A set of templates selected together when `markers` match the keywords.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TemplateFamily {
    #[serde(default)]
    pub markers: Vec<String>,
    /// When set, the family only applies if the context's target audience equals this value.
    #[serde(default)]
    pub required_audience: Option<String>,
    #[serde(default)]
    pub templates: Vec<PromptTemplate>,
}

/// Contents of `templates.yaml`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TemplatesFile {
    #[serde(default)]
    pub families: BTreeMap<String, TemplateFamily>,
}

/// Everything the rule-based evaluator, question generator and synthesizer read.
#[derive(Clone, Debug, Default)]
pub struct PromptCatalog {
    pub questions: QuestionsFile,
    pub templates: TemplatesFile,
}

impl PromptCatalog {
    /// Catalog parsed from the embedded YAML (parsed once per process).
    pub fn embedded() -> &'static PromptCatalog {
        static EMBEDDED: once_cell::sync::Lazy<PromptCatalog> =
            once_cell::sync::Lazy::new(default_from_embedded);
        &EMBEDDED
    }

    pub fn question(&self, key: &str) -> Option<&QuestionEntry> {
        self.questions.questions.get(key)
    }

    pub fn feedback(&self, name: &str) -> Option<&str> {
        self.questions.feedback.get(name).map(String::as_str)
    }

    pub fn family(&self, name: &str) -> Option<&TemplateFamily> {
        self.templates.families.get(name)
    }
}
