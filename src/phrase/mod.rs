//! Constrained deterministic phrase packing.

pub mod assemble;
pub mod compose;
pub mod constraint;
pub mod generator;
pub mod sampler;
pub mod validate;

pub use assemble::{Assembly, assemble};
pub use compose::CombinedAlphabet;
pub use constraint::{ActiveConstraint, CharClass, Constraint};
pub use generator::PhraseGenerator;
pub use sampler::{Sampler, chunk_width};
pub use validate::{QuotaValidator, Validate};
