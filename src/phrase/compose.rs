//! Combined-alphabet composition.

use super::constraint::ActiveConstraint;

/// The merged alphabet of all active constraints, with an owner table
/// mapping each position back to the constraint it came from.
///
/// Must be recomposed whenever a constraint is retired; its length only
/// ever shrinks within a packing run.
#[derive(Debug)]
pub struct CombinedAlphabet {
    chars: Vec<char>,
    owners: Vec<usize>,
}

impl CombinedAlphabet {
    /// Merge the active constraints' alphabets in declaration order.
    pub fn compose(active: &[ActiveConstraint]) -> CombinedAlphabet {
        let total: usize = active.iter().map(|a| a.constraint.alphabet.len()).sum();
        let mut chars = Vec::with_capacity(total);
        let mut owners = Vec::with_capacity(total);
        for (owner, entry) in active.iter().enumerate() {
            for &c in &entry.constraint.alphabet {
                chars.push(c);
                owners.push(owner);
            }
        }
        CombinedAlphabet { chars, owners }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Resolve a sampled index to its character and owning constraint.
    pub fn resolve(&self, index: usize) -> (char, usize) {
        (self.chars[index], self.owners[index])
    }
}
