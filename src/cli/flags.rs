use crate::phrase::CharClass;

/// Per-class command-line overrides.
#[derive(Debug, Default, Clone)]
pub struct ClassFlags {
    pub disabled: bool,
    pub alphabet: Option<String>,
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl ClassFlags {
    pub fn is_set(&self) -> bool {
        self.disabled || self.alphabet.is_some() || self.min.is_some() || self.max.is_some()
    }
}

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub save: bool,
    pub stdin_password: bool,
    pub uri: Option<String>,
    pub seed: Option<String>,
    pub revision: Option<u32>,
    pub length: Option<usize>,
    pub retries: Option<u32>,
    pub alphabet: Option<String>,
    pub capital: ClassFlags,
    pub minuscule: ClassFlags,
    pub numeric: ClassFlags,
    pub special: ClassFlags,
}

impl CliFlags {
    pub fn class(&mut self, class: CharClass) -> &mut ClassFlags {
        match class {
            CharClass::Capital => &mut self.capital,
            CharClass::Minuscule => &mut self.minuscule,
            CharClass::Numeric => &mut self.numeric,
            CharClass::Special => &mut self.special,
        }
    }

    pub fn class_by_name(&mut self, name: &str) -> Option<&mut ClassFlags> {
        CharClass::ALL
            .into_iter()
            .find(|c| c.name() == name)
            .map(|c| self.class(c))
    }
}
