//! # Creational Idioms
//!
//! Object creation and copying patterns, one idiom per module. Each module
//! stands on its own and can be read next to the others.
//!
//! ## Patterns Covered
//!
//! 1. **Simple Builder** ([`builder`])
//!    - One required argument at construction
//!    - Optional fields with zero defaults
//!    - Consuming setters, `build()` finalizes
//!
//! 2. **Hierarchical Builder** ([`hierarchy`])
//!    - Base setters shared through a trait
//!    - Setters return `Self`, so the concrete builder survives the chain
//!    - Derived builders add their own required and optional fields
//!
//! 3. **Singletons** ([`singleton`])
//!    - Eager `static` instance
//!    - Serialization-safe singleton with explicit canonicalization
//!    - Lazily built service that can also be injected
//!
//! 4. **Bounded Generics** ([`bounds`])
//!    - Unbounded, bounded and recursively bounded type parameters
//!
//! 5. **Shallow vs Deep Copies** ([`prototype`])
//!    - Opt-in copy capability
//!    - Deep copy delegating to owned sub-objects
//!
//! ## Key Dependencies
//!
//! - `thiserror` - error enum for copy, encoding and config failures
//! - `serde` + `bincode` - singleton encoding
//! - `toml` - lexicon configuration
//! - `lazy_static` - runtime-initialized singletons
//! - `tracing` - debug events around creation and copying

pub mod bounds;
pub mod builder;
pub mod config;
pub mod error;
pub mod hierarchy;
pub mod prototype;
pub mod singleton;

pub use config::LexiconConfig;
pub use error::{IdiomError, Result};
pub use hierarchy::PhoneBuilder;
pub use prototype::Prototype;
pub use singleton::Canonical;
