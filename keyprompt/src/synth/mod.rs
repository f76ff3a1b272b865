//! Prompt synthesis from template families.
//!
//! Families are tried in order, first match wins:
//!
//! - `study_plan`: a study/learning-plan marker in the keywords and a target audience equal to
//!   the family's `required_audience` ("college student").
//! - `report`: a report marker in the keywords.
//! - `default`: everything else.
//!
//! Each template of the chosen family is rendered by replacing `{keywords}`,
//! `{target_audience}`, `{tone}`, `{goal}` and `{format}`. Missing context values use the
//! `DEFAULT_*` placeholders. If selection or rendering faults, the result is a single
//! generic prompt about the raw keywords, so the output is never empty.

use crate::category::{context_value, Category, Context};
use crate::error::RuleError;
use crate::prompts::{PromptCatalog, TemplateFamily};
use crate::protocol::GeneratedPrompt;

pub const DEFAULT_TARGET_AUDIENCE: &str = "general reader";
pub const DEFAULT_TONE: &str = "professional";
pub const DEFAULT_GOAL: &str = "providing information";
pub const DEFAULT_FORMAT: &str = "structured report";

const FALLBACK_DESCRIPTION: &str = "General expert prompt";

/// The single prompt returned when synthesis faults.
pub fn fallback_prompt(keywords: &str) -> GeneratedPrompt {
    GeneratedPrompt::new(
        format!(
            "You are an expert on \"{}\". Provide detailed and useful information about this topic.",
            keywords.trim()
        ),
        FALLBACK_DESCRIPTION,
    )
}

/// Template family names, in selection order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FamilyKind {
    StudyPlan,
    Report,
    Default,
}

impl FamilyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FamilyKind::StudyPlan => "study_plan",
            FamilyKind::Report => "report",
            FamilyKind::Default => "default",
        }
    }
}

/// Values substituted into templates.
#[derive(Debug)]
struct TemplateVars<'a> {
    keywords: &'a str,
    target_audience: &'a str,
    tone: &'a str,
    goal: &'a str,
    format: &'a str,
}

impl<'a> TemplateVars<'a> {
    fn new(keywords: &'a str, ctx: &'a Context) -> Self {
        Self {
            keywords: keywords.trim(),
            target_audience: context_value(ctx, Category::TargetAudience)
                .unwrap_or(DEFAULT_TARGET_AUDIENCE),
            tone: context_value(ctx, Category::Tone).unwrap_or(DEFAULT_TONE),
            goal: context_value(ctx, Category::Goal).unwrap_or(DEFAULT_GOAL),
            format: context_value(ctx, Category::Format).unwrap_or(DEFAULT_FORMAT),
        }
    }

    fn get(&self, name: &str) -> Option<&'a str> {
        match name {
            "keywords" => Some(self.keywords),
            "target_audience" => Some(self.target_audience),
            "tone" => Some(self.tone),
            "goal" => Some(self.goal),
            "format" => Some(self.format),
            _ => None,
        }
    }
}

/// Replaces every `{name}` in `template`. Unknown names and a `{` without `}` are faults.
fn render(template: &str, vars: &TemplateVars<'_>) -> Result<String, RuleError> {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after
            .find('}')
            .ok_or_else(|| RuleError::UnclosedPlaceholder(template.to_string()))?;
        let name = &after[..close];
        let value = vars.get(name).ok_or_else(|| RuleError::UnknownPlaceholder {
            name: name.to_string(),
            template: template.to_string(),
        })?;
        out.push_str(value);
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

fn markers_match(family: &TemplateFamily, lowered_keywords: &str) -> bool {
    family
        .markers
        .iter()
        .any(|m| !m.is_empty() && lowered_keywords.contains(&m.to_lowercase()))
}

fn audience_matches(family: &TemplateFamily, ctx: &Context) -> bool {
    match &family.required_audience {
        None => true,
        Some(required) => context_value(ctx, Category::TargetAudience)
            .map(|a| a.trim().to_lowercase() == required.trim().to_lowercase())
            .unwrap_or(false),
    }
}

/// Rule-based prompt synthesizer over a [`PromptCatalog`].
#[derive(Clone, Copy, Debug)]
pub struct PromptSynthesizer<'a> {
    catalog: &'a PromptCatalog,
}

impl<'a> PromptSynthesizer<'a> {
    pub fn new(catalog: &'a PromptCatalog) -> Self {
        Self { catalog }
    }

    /// Chooses the template family for `keywords` and `ctx`.
    ///
    /// `study_plan` and `report` are skipped when absent from the catalog; a missing
    /// `default` family or a chosen family without templates is a fault.
    pub fn select_family(
        &self,
        keywords: &str,
        ctx: &Context,
    ) -> Result<(FamilyKind, &'a TemplateFamily), RuleError> {
        let lowered = keywords.to_lowercase();
        for kind in [FamilyKind::StudyPlan, FamilyKind::Report] {
            let Some(family) = self.catalog.family(kind.as_str()) else {
                continue;
            };
            if markers_match(family, &lowered) && audience_matches(family, ctx) {
                return non_empty(kind, family);
            }
        }
        let family = self
            .catalog
            .family(FamilyKind::Default.as_str())
            .ok_or_else(|| RuleError::MissingFamily(FamilyKind::Default.as_str().to_string()))?;
        non_empty(FamilyKind::Default, family)
    }

    /// Produces the prompts for `keywords`. Never empty.
    ///
    /// `model` is an opaque hint; the rule-based templates do not depend on it.
    pub fn synthesize(
        &self,
        keywords: &str,
        model: Option<&str>,
        ctx: &Context,
    ) -> Vec<GeneratedPrompt> {
        match self.try_synthesize(keywords, ctx) {
            Ok((kind, prompts)) => {
                tracing::debug!(
                    family = kind.as_str(),
                    model = model.unwrap_or("-"),
                    count = prompts.len(),
                    "synthesized prompts"
                );
                prompts
            }
            Err(e) => {
                tracing::warn!("prompt synthesis fault: {}; using generic prompt", e);
                vec![fallback_prompt(keywords)]
            }
        }
    }

    fn try_synthesize(
        &self,
        keywords: &str,
        ctx: &Context,
    ) -> Result<(FamilyKind, Vec<GeneratedPrompt>), RuleError> {
        let (kind, family) = self.select_family(keywords, ctx)?;
        let vars = TemplateVars::new(keywords, ctx);
        let prompts = family
            .templates
            .iter()
            .map(|t| Ok(GeneratedPrompt::new(render(&t.prompt, &vars)?, t.description.clone())))
            .collect::<Result<Vec<_>, RuleError>>()?;
        Ok((kind, prompts))
    }
}

fn non_empty(
    kind: FamilyKind,
    family: &TemplateFamily,
) -> Result<(FamilyKind, &TemplateFamily), RuleError> {
    if family.templates.is_empty() {
        Err(RuleError::EmptyFamily(kind.as_str().to_string()))
    } else {
        Ok((kind, family))
    }
}
