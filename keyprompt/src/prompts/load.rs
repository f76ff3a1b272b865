//! Load the prompt catalog from a directory of YAML files.
//!
//! **Canonical source**: default text lives in `keyprompt/prompts/*.yaml`; it is embedded at
//! compile time and used when no `PROMPTS_DIR` or directory is present.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{PromptCatalog, QuestionsFile, TemplatesFile};

macro_rules! embed_prompt_yaml {
    ($name:literal) => {
        include_str!(concat!("../../prompts/", $name))
    };
}
const EMBED_QUESTIONS: &str = embed_prompt_yaml!("questions.yaml");
const EMBED_TEMPLATES: &str = embed_prompt_yaml!("templates.yaml");

const QUESTIONS_FILE: &str = "questions.yaml";
const TEMPLATES_FILE: &str = "templates.yaml";

/// Default directory name when `PROMPTS_DIR` is not set.
const DEFAULT_PROMPTS_DIR: &str = "prompts";

/// Error when loading the catalog from a directory (missing dir, unreadable file, invalid YAML).
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("prompts directory not found or not readable: {0}")]
    DirNotFound(String),
    #[error("failed to read prompts file {path}: {message}")]
    ReadFile { path: String, message: String },
    #[error("failed to parse YAML in {path}: {message}")]
    ParseYaml { path: String, message: String },
}

/// `dir` if given, else `PROMPTS_DIR` env, else `./prompts`.
fn prompts_dir(dir: Option<&Path>) -> PathBuf {
    dir.map(PathBuf::from).unwrap_or_else(|| {
        std::env::var("PROMPTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_PROMPTS_DIR))
    })
}

/// Reads and parses one YAML file; `Ok(None)` when the file does not exist.
fn read_yaml_file<T>(dir: &Path, name: &str) -> Result<Option<T>, LoadError>
where
    T: for<'de> Deserialize<'de>,
{
    let path = dir.join(name);
    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(LoadError::ReadFile {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        }
    };
    serde_yaml::from_str(&content)
        .map(Some)
        .map_err(|e| LoadError::ParseYaml {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

/// Loads `questions.yaml` and `templates.yaml` from a directory.
///
/// If `dir` is `None`, uses `PROMPTS_DIR` env or `./prompts`. A missing file keeps the
/// embedded default for that file. Errors when the directory is missing or a present file
/// cannot be read or parsed.
pub fn load(dir: Option<&Path>) -> Result<PromptCatalog, LoadError> {
    let base = prompts_dir(dir);
    if !base.is_dir() {
        return Err(LoadError::DirNotFound(base.display().to_string()));
    }
    let embedded = PromptCatalog::embedded();
    let questions = read_yaml_file::<QuestionsFile>(&base, QUESTIONS_FILE)?
        .unwrap_or_else(|| embedded.questions.clone());
    let templates = read_yaml_file::<TemplatesFile>(&base, TEMPLATES_FILE)?
        .unwrap_or_else(|| embedded.templates.clone());
    tracing::debug!(dir = %base.display(), "loaded prompt catalog");
    Ok(PromptCatalog {
        questions,
        templates,
    })
}

/// Parses the embedded YAML. An unparsable embedded file yields an empty section, which the
/// consumers handle through their fallbacks.
pub fn default_from_embedded() -> PromptCatalog {
    PromptCatalog {
        questions: serde_yaml::from_str(EMBED_QUESTIONS).unwrap_or_default(),
        templates: serde_yaml::from_str(EMBED_TEMPLATES).unwrap_or_default(),
    }
}

/// Loads from `dir` when possible; otherwise logs why and returns the embedded catalog.
pub fn load_or_default(dir: Option<&Path>) -> PromptCatalog {
    match load(dir) {
        Ok(c) => c,
        Err(LoadError::DirNotFound(_)) if dir.is_none() => PromptCatalog::embedded().clone(),
        Err(e) => {
            tracing::warn!("prompt catalog: {}; using embedded defaults", e);
            PromptCatalog::embedded().clone()
        }
    }
}
