//! Pattern 3: Singletons
//!
//! - [`Elvis`]: eager. The instance is a `static` built at compile time, so
//!   there is no initialization race and no lazy check on access.
//! - Serialization-safe: decoding an `Elvis` produces a second value, which
//!   [`restore`] immediately throws away in favour of the canonical one.
//! - [`SpellChecker`]: built once on first access via `lazy_static!`, because
//!   its dictionary needs heap allocation. The same type can also be built
//!   from an injected [`LexiconConfig`] when a shared instance is the wrong fit.

use std::borrow::Cow;
use std::collections::HashSet;

use lazy_static::lazy_static;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::LexiconConfig;
use crate::error::Result;

// ============================================================================
// Canonicalization
// ============================================================================

/// A type with one process-wide instance that reconstructed values collapse to.
pub trait Canonical: Sized + 'static {
    fn canonical() -> &'static Self;

    /// Discards `self` and hands back the process-wide instance.
    fn canonicalize(self) -> &'static Self {
        debug!(
            type_name = std::any::type_name::<Self>(),
            "discarding reconstructed instance in favour of canonical one"
        );
        drop(self);
        Self::canonical()
    }
}

pub fn to_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    Ok(bincode::serialize(value)?)
}

/// Decodes `bytes` and returns the canonical instance in place of the decoded one.
pub fn restore<T: DeserializeOwned + Canonical>(bytes: &[u8]) -> Result<&'static T> {
    let fresh: T = bincode::deserialize(bytes)?;
    Ok(fresh.canonicalize())
}

// ============================================================================
// Eager singleton
// ============================================================================

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elvis {
    name: Cow<'static, str>,
}

static ELVIS: Elvis = Elvis {
    name: Cow::Borrowed("Elvis Presley"),
};

impl Elvis {
    pub fn instance() -> &'static Elvis {
        &ELVIS
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Canonical for Elvis {
    fn canonical() -> &'static Self {
        Elvis::instance()
    }
}

// ============================================================================
// Lazily built singleton service
// ============================================================================

#[derive(Debug)]
pub struct SpellChecker {
    dictionary: HashSet<String>,
    case_sensitive: bool,
}

lazy_static! {
    static ref SPELL_CHECKER: SpellChecker = {
        debug!("initializing shared spell checker");
        SpellChecker::from_config(&LexiconConfig::default())
    };
}

impl SpellChecker {
    pub fn instance() -> &'static SpellChecker {
        &SPELL_CHECKER
    }

    pub fn from_config(config: &LexiconConfig) -> Self {
        let dictionary = config
            .words
            .iter()
            .map(|w| w.trim())
            .filter(|w| !w.is_empty())
            .map(|w| normalize(w, config.case_sensitive).into_owned())
            .collect();
        SpellChecker {
            dictionary,
            case_sensitive: config.case_sensitive,
        }
    }

    pub fn is_valid(&self, word: &str) -> bool {
        let word = word.trim();
        !word.is_empty()
            && self
                .dictionary
                .contains(&*normalize(word, self.case_sensitive))
    }

    pub fn len(&self) -> usize {
        self.dictionary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }
}

fn normalize(word: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(word.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IdiomError;

    // ============================================================================
    // Example: Eager Instance Identity
    // ============================================================================

    #[test]
    fn instance_is_always_the_same() {
        assert!(std::ptr::eq(Elvis::instance(), Elvis::instance()));
        assert_eq!(Elvis::instance().name(), "Elvis Presley");
    }

    // ============================================================================
    // Example: Identity Survives Reconstruction
    // ============================================================================

    #[test]
    fn restore_returns_canonical_instance() {
        let bytes = to_bytes(Elvis::instance()).unwrap();
        let restored: &Elvis = restore(&bytes).unwrap();
        assert!(std::ptr::eq(restored, Elvis::instance()));
    }

    #[test]
    fn plain_decode_breaks_identity() {
        let bytes = to_bytes(Elvis::instance()).unwrap();
        let impostor: Elvis = bincode::deserialize(&bytes).unwrap();
        assert_eq!(&impostor, Elvis::instance());
        assert!(!std::ptr::eq(&impostor, Elvis::instance()));
        assert!(std::ptr::eq(impostor.canonicalize(), Elvis::instance()));
    }

    #[test]
    fn truncated_bytes_fail_to_restore() {
        let err = restore::<Elvis>(&[1, 0]).unwrap_err();
        assert!(matches!(err, IdiomError::Encoding(_)));
    }

    // ============================================================================
    // Example: Shared vs Injected Service
    // ============================================================================

    #[test]
    fn shared_checker_is_created_once() {
        let first = SpellChecker::instance();
        let second = SpellChecker::instance();
        assert!(std::ptr::eq(first, second));
        assert!(first.is_valid("Rust"));
        assert!(!first.is_valid("rsut"));
    }

    #[test]
    fn injected_checker_honors_case_sensitivity() {
        let config = LexiconConfig {
            case_sensitive: true,
            words: vec!["Ferris".into(), "  ".into()],
        };
        let checker = SpellChecker::from_config(&config);
        assert_eq!(checker.len(), 1);
        assert!(checker.is_valid(" Ferris "));
        assert!(!checker.is_valid("ferris"));
        assert!(!checker.is_valid(""));
    }

    #[test]
    fn empty_lexicon_accepts_nothing() {
        let checker = SpellChecker::from_config(&LexiconConfig {
            case_sensitive: false,
            words: Vec::new(),
        });
        assert!(checker.is_empty());
        assert!(!checker.is_valid("rust"));
    }
}
