//! Derivation configuration.

mod file;

use crate::error::Error;
use crate::phrase::constraint::{CharClass, Constraint};

/// Per-class override: any unset field falls back to its default
/// (`min` 1, `max` 0 = unbounded, `alphabet` the class built-in).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSpec {
    pub min: Option<usize>,
    pub max: Option<usize>,
    pub alphabet: Option<String>,
}

/// How one character class participates in derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClassRule {
    #[default]
    Default,
    Custom(ClassSpec),
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Secret seed ("something you have"); may be empty.
    pub seed: String,
    /// Site identifier the phrase is derived for. Required.
    pub uri: String,
    /// Version counter; bumping it rotates the derived phrase.
    pub version: u32,
    /// Requested phrase length in characters.
    pub size: usize,
    /// Attempt budget for the validate-and-retry loop.
    pub max_retries: u32,
    pub capital: ClassRule,
    pub minuscule: ClassRule,
    pub numeric: ClassRule,
    pub special: ClassRule,
    /// Optional global alphabet, partitioned back into classes by
    /// membership in the built-in alphabets.
    pub alphabet: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: String::new(),
            uri: String::new(),
            version: 1,
            size: 16,
            max_retries: 16,
            capital: ClassRule::Default,
            minuscule: ClassRule::Default,
            numeric: ClassRule::Default,
            special: ClassRule::Default,
            alphabet: None,
        }
    }
}

impl Config {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut config = Config::default();
        file::load(&mut config)?;
        Ok(config)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self)
    }

    pub fn rule(&self, class: CharClass) -> &ClassRule {
        match class {
            CharClass::Capital => &self.capital,
            CharClass::Minuscule => &self.minuscule,
            CharClass::Numeric => &self.numeric,
            CharClass::Special => &self.special,
        }
    }

    pub fn rule_mut(&mut self, class: CharClass) -> &mut ClassRule {
        match class {
            CharClass::Capital => &mut self.capital,
            CharClass::Minuscule => &mut self.minuscule,
            CharClass::Numeric => &mut self.numeric,
            CharClass::Special => &mut self.special,
        }
    }

    /// Normalize the class rules into the constraint set for one run.
    ///
    /// Rejects configurations that could never validate, so the retry
    /// budget is only ever spent on statistically recoverable failures.
    pub fn constraints(&self) -> Result<Vec<Constraint>, Error> {
        let partition = match &self.alphabet {
            Some(global) => Some(partition_global(global)?),
            None => None,
        };

        let mut constraints = Vec::new();
        for (i, class) in CharClass::ALL.into_iter().enumerate() {
            let spec = match self.rule(class) {
                ClassRule::Disabled => continue,
                ClassRule::Default => ClassSpec::default(),
                ClassRule::Custom(spec) => spec.clone(),
            };

            // A global alphabet replaces every class alphabet.
            let alphabet = match &partition {
                Some(parts) => Some(parts[i].clone()),
                None => spec.alphabet.clone(),
            };

            let constraint =
                Constraint::normalize(class, spec.min, spec.max, alphabet.as_deref());
            if constraint.alphabet.is_empty() {
                // A class the custom set cannot express: fine when nothing
                // was demanded of it, fatal when a minimum was.
                if spec.min.is_some_and(|min| min > 0) {
                    return Err(Error::EmptyClassAlphabet(class.name()));
                }
                continue;
            }
            if constraint.min == 0 && constraint.max == 0 {
                continue;
            }
            constraints.push(constraint);
        }

        if constraints.is_empty() {
            return Err(Error::EmptyConstraintSet);
        }

        let required: usize = constraints.iter().map(|c| c.min).sum();
        if required > self.size {
            return Err(Error::MinimaExceedLength {
                required,
                size: self.size,
            });
        }

        if let Some(available) = constraints
            .iter()
            .map(|c| c.cap())
            .sum::<Option<usize>>()
            && available < self.size
        {
            return Err(Error::CapsBelowLength {
                available,
                size: self.size,
            });
        }

        Ok(constraints)
    }
}

/// Split a global alphabet into per-class strings by membership lookup.
fn partition_global(alphabet: &str) -> Result<[String; 4], Error> {
    let mut parts: [String; 4] = Default::default();
    for c in alphabet.chars() {
        match CharClass::classify(c) {
            Some(class) => parts[class as usize].push(c),
            None => return Err(Error::IllegalCharacter(c)),
        }
    }
    Ok(parts)
}
