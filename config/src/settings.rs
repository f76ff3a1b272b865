//! Typed server settings read from the environment.

use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Process bootstrap settings. None of them changes how requests are answered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerSettings {
    /// Bind host (`HOST`, default `0.0.0.0`).
    pub host: String,
    /// Bind port (`PORT`, default `8000`).
    pub port: u16,
    /// Verbose logging (`DEBUG`: `true`/`1`/`yes`, default off).
    pub debug: bool,
    /// Directory with `questions.yaml` / `templates.yaml` overrides (`PROMPTS_DIR`).
    pub prompts_dir: Option<PathBuf>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            debug: false,
            prompts_dir: None,
        }
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl ServerSettings {
    /// Reads `HOST`, `PORT`, `DEBUG`, `PROMPTS_DIR`, falling back to [`Default`] for unset
    /// or invalid values.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        Self {
            host: lookup("HOST")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(default.host),
            port: lookup("PORT")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default.port),
            debug: lookup("DEBUG")
                .and_then(|s| parse_bool(&s))
                .unwrap_or(default.debug),
            prompts_dir: lookup("PROMPTS_DIR")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// `host:port` for binding.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
