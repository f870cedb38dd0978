//! The phrase packing loop.

use super::compose::CombinedAlphabet;
use super::constraint::{ActiveConstraint, Constraint};
use super::sampler::Sampler;

/// Result of one packing attempt.
///
/// `exhausted` is set when the byte stream ran dry or every class was
/// retired before the phrase reached its full length. That is an expected
/// outcome for the retry loop to judge, never an error.
#[derive(Debug)]
pub struct Assembly {
    pub phrase: String,
    pub exhausted: bool,
}

/// Pack a byte stream into a phrase of up to `size` characters.
///
/// Pure: consumes only the given bytes and constraints, performs no I/O,
/// and builds a fresh active set per call so concurrent attempts against
/// the same constraints cannot interfere.
pub fn assemble(bytes: &[u8], constraints: &[Constraint], size: usize) -> Assembly {
    let mut active: Vec<ActiveConstraint> = constraints
        .iter()
        .filter(|c| c.min > 0 || c.max > 0)
        .cloned()
        .map(ActiveConstraint::new)
        .collect();

    let mut phrase = String::with_capacity(size);
    let mut emitted = 0;
    let mut sampler = Sampler::new(bytes);
    let mut combined = CombinedAlphabet::compose(&active);

    while emitted < size {
        if active.is_empty() {
            return Assembly {
                phrase,
                exhausted: true,
            };
        }
        let Some(index) = sampler.draw(combined.len()) else {
            return Assembly {
                phrase,
                exhausted: true,
            };
        };

        let (c, owner) = combined.resolve(index);
        phrase.push(c);
        emitted += 1;

        active[owner].count += 1;
        if active[owner].capped() {
            active.remove(owner);
            if !active.is_empty() {
                combined = CombinedAlphabet::compose(&active);
            }
        }
    }

    Assembly {
        phrase,
        exhausted: false,
    }
}
