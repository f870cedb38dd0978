//! Phrase validation policy.

use super::constraint::Constraint;

/// Decide pass/fail for an assembled phrase.
///
/// Injectable so callers can swap the policy wholesale; the default is
/// [`QuotaValidator`].
pub trait Validate {
    fn validate(&self, phrase: &str, constraints: &[Constraint], size: usize) -> bool;
}

/// Default policy: every class minimum is met and the phrase reached the
/// requested length.
///
/// Characters are attributed by alphabet membership; when alphabets
/// overlap, the first declared class claims the character.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuotaValidator;

impl Validate for QuotaValidator {
    fn validate(&self, phrase: &str, constraints: &[Constraint], size: usize) -> bool {
        let mut counts = vec![0usize; constraints.len()];
        let mut length = 0;
        for c in phrase.chars() {
            length += 1;
            if let Some(owner) = constraints.iter().position(|con| con.contains(c)) {
                counts[owner] += 1;
            }
        }
        length >= size
            && constraints
                .iter()
                .zip(&counts)
                .all(|(con, &count)| count >= con.min)
    }
}
