//! Deterministic per-site password derivation.
//!
//! A phrase is derived from a secret seed, a site identifier, a master
//! password, and a version counter. Identical inputs always produce the
//! same phrase; changing any input produces an unrelated one. The output
//! satisfies per-character-class min/max composition rules.

pub mod cli;
pub mod config;
pub mod error;
pub mod exits;
pub mod kdf;
pub mod phrase;
pub mod terminal;

pub use config::{ClassRule, ClassSpec, Config};
pub use error::Error;
pub use kdf::{ByteSource, Pbkdf2Sha256};
pub use phrase::{
    Assembly, CharClass, Constraint, PhraseGenerator, QuotaValidator, Validate, assemble,
};
