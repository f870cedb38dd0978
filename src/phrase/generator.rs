//! Phrase derivation with bounded validate-and-retry.

use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use super::assemble::assemble;
use super::constraint::Constraint;
use super::sampler::chunk_width;
use super::validate::{QuotaValidator, Validate};
use crate::config::Config;
use crate::error::Error;
use crate::kdf::{ByteSource, Pbkdf2Sha256};

// Stream bytes requested per output character, on top of the chunk width.
// A minimal-width draw is rejected less than half the time, so this margin
// makes running dry mid-phrase vanishingly rare for sane configurations.
const STREAM_MARGIN: usize = 3;

/// Base KDF round count; the version counter is added on top, so a version
/// bump always changes the derivation input.
const BASE_ROUNDS: u32 = 2048;

/// One derivation pipeline: salt construction, byte-stream requests,
/// assembly, validation, and the bounded retry loop.
///
/// Holds no mutable state across calls; each [`generate`](Self::generate)
/// works on its own copy of the version counter and fresh active sets, so
/// one generator can serve concurrent derivations.
pub struct PhraseGenerator<S = Pbkdf2Sha256, V = QuotaValidator> {
    constraints: Vec<Constraint>,
    salt: String,
    version: u32,
    size: usize,
    max_retries: u32,
    base_rounds: u32,
    source: S,
    validator: V,
}

impl PhraseGenerator {
    /// Build a generator with the default KDF and validation policy.
    pub fn new(config: &Config) -> Result<Self, Error> {
        Self::with_parts(config, Pbkdf2Sha256, QuotaValidator)
    }
}

impl<S: ByteSource, V: Validate> PhraseGenerator<S, V> {
    /// Build a generator with caller-supplied byte-source and validation
    /// strategies.
    ///
    /// Configuration problems surface here, before any byte derivation.
    pub fn with_parts(config: &Config, source: S, validator: V) -> Result<Self, Error> {
        if config.uri.trim().is_empty() {
            return Err(Error::MissingUri);
        }
        let constraints = config.constraints()?;

        // Salt layout: hex(sha256(seed)) "$" uri.
        let seed_hash = hex::encode(Sha256::digest(config.seed.as_bytes()));
        let salt = format!("{}${}", seed_hash, config.uri);

        Ok(Self {
            constraints,
            salt,
            version: config.version,
            size: config.size,
            max_retries: config.max_retries.max(1),
            base_rounds: BASE_ROUNDS,
            source,
            validator,
        })
    }

    /// Override the base KDF round count.
    pub fn base_rounds(mut self, rounds: u32) -> Self {
        self.base_rounds = rounds;
        self
    }

    /// The normalized constraint set this generator packs against.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Derive the phrase for `password`.
    ///
    /// Each attempt requests a fresh stream keyed by the current version,
    /// packs it, and validates the result; failed attempts bump the version
    /// and are scrubbed before the next one. Exceeding the attempt budget
    /// is the only terminal failure.
    pub fn generate(&self, password: &str) -> Result<String, Error> {
        let divisor: usize = self.constraints.iter().map(|c| c.alphabet.len()).sum();
        let request = self.size * chunk_width(divisor) * STREAM_MARGIN;

        let mut version = self.version;
        let mut attempts = 0;
        while attempts < self.max_retries {
            attempts += 1;
            let rounds = self.base_rounds.saturating_add(version);
            let mut bytes =
                self.source
                    .derive(password.as_bytes(), self.salt.as_bytes(), rounds, request);
            let mut assembly = assemble(&bytes, &self.constraints, self.size);
            bytes.zeroize();

            if self
                .validator
                .validate(&assembly.phrase, &self.constraints, self.size)
            {
                return Ok(assembly.phrase);
            }

            assembly.phrase.zeroize();
            version = version.wrapping_add(1);
        }

        Err(Error::RetryLimitExceeded { attempts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            uri: "example.com".into(),
            seed: "test-seed".into(),
            ..Default::default()
        }
    }

    /// Deterministic stand-in stream: repeats a fixed pattern, but still
    /// varies with the round count like a real KDF would.
    struct PatternSource;

    impl ByteSource for PatternSource {
        fn derive(&self, _password: &[u8], _salt: &[u8], rounds: u32, size: usize) -> Vec<u8> {
            (0..size).map(|i| (i as u32 * 7 + rounds) as u8).collect()
        }
    }

    struct RejectAll;

    impl Validate for RejectAll {
        fn validate(&self, _phrase: &str, _constraints: &[Constraint], _size: usize) -> bool {
            false
        }
    }

    #[test]
    fn missing_uri_is_fatal_before_derivation() {
        let mut c = config();
        c.uri.clear();
        assert!(matches!(
            PhraseGenerator::new(&c),
            Err(Error::MissingUri)
        ));
    }

    #[test]
    fn generates_requested_length() {
        let generator = PhraseGenerator::new(&config()).unwrap().base_rounds(4);
        let phrase = generator.generate("hunter2").unwrap();
        assert_eq!(phrase.chars().count(), 16);
    }

    #[test]
    fn same_inputs_same_phrase() {
        let generator = PhraseGenerator::new(&config()).unwrap().base_rounds(4);
        assert_eq!(
            generator.generate("hunter2").unwrap(),
            generator.generate("hunter2").unwrap()
        );
    }

    #[test]
    fn retry_budget_is_finite() {
        let generator =
            PhraseGenerator::with_parts(&config(), PatternSource, RejectAll).unwrap();
        assert_eq!(
            generator.generate("pw"),
            Err(Error::RetryLimitExceeded { attempts: 16 })
        );
    }

    #[test]
    fn zero_retry_budget_still_attempts_once() {
        let mut c = config();
        c.max_retries = 0;
        let generator = PhraseGenerator::with_parts(&c, PatternSource, RejectAll).unwrap();
        assert_eq!(
            generator.generate("pw"),
            Err(Error::RetryLimitExceeded { attempts: 1 })
        );
    }
}
