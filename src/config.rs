//! Lexicon configuration for the spell checker.
//!
//! ```toml
//! case_sensitive = false
//! words = ["rust", "trait", "borrow"]
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;

const DEFAULT_WORDS: &[&str] = &[
    "borrow", "builder", "clone", "copy", "generic", "instance", "lifetime", "owner", "phone",
    "rust", "singleton", "trait",
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LexiconConfig {
    pub case_sensitive: bool,
    pub words: Vec<String>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        LexiconConfig {
            case_sensitive: false,
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl LexiconConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: LexiconConfig = toml::from_str(source)?;
        debug!(
            words = config.words.len(),
            case_sensitive = config.case_sensitive,
            "parsed lexicon config"
        );
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading lexicon config");
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}
