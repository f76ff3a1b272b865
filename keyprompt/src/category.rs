//! Category identifiers and the caller-supplied context map.
//!
//! A [`Category`] names one kind of information needed to write a good prompt. The same
//! identifier is used as a key into [`Context`] and as the id of a clarifying question.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Caller-supplied answers keyed by category identifier (`"tone"`, `"goal"`, ...).
///
/// Ordered so that iteration and serialization are deterministic. Keys outside the
/// [`Category`] enumeration are kept but ignored by the rule-based logic.
pub type Context = BTreeMap<String, String>;

/// Kind of missing information.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    TargetAudience,
    Tone,
    Goal,
    Format,
    Context,
    SpecificDetails,
    Topic,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 7] = [
        Category::TargetAudience,
        Category::Tone,
        Category::Goal,
        Category::Format,
        Category::Context,
        Category::SpecificDetails,
        Category::Topic,
    ];

    /// Wire identifier, also the key used in [`Context`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::TargetAudience => "target_audience",
            Category::Tone => "tone",
            Category::Goal => "goal",
            Category::Format => "format",
            Category::Context => "context",
            Category::SpecificDetails => "specific_details",
            Category::Topic => "topic",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

/// Returns the context value for `key` when present and not blank.
pub fn context_value_for_key<'a>(ctx: &'a Context, key: &str) -> Option<&'a str> {
    ctx.get(key)
        .map(String::as_str)
        .filter(|v| !v.trim().is_empty())
}

/// Returns the context value for `category` when present and not blank.
pub fn context_value(ctx: &Context, category: Category) -> Option<&str> {
    context_value_for_key(ctx, category.as_str())
}
