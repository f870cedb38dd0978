//! CLI context - bundles config, flags, and clipboard state.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, print_help, prompts, quiet};
use crate::config::{ClassRule, ClassSpec, Config};
use crate::phrase::{CharClass, PhraseGenerator};
use crate::terminal;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    pub config: Config,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;

        let config = Config::load_from_file().unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load profile: {}", e));
            Config::default()
        });

        Ok(Self {
            config,
            clipboard: None,
            flags,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        quiet::set(self.flags.quiet);
        self.apply_flags();
        self.handle_save()?;
        self.derive_output()
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("rndphrase {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// Apply CLI flags over the loaded profile.
    fn apply_flags(&mut self) {
        if let Some(ref uri) = self.flags.uri {
            self.config.uri = uri.clone();
        }
        if let Some(ref seed) = self.flags.seed {
            self.config.seed = seed.clone();
        }
        if let Some(rev) = self.flags.revision {
            self.config.version = rev;
        }
        if let Some(len) = self.flags.length {
            self.config.size = len;
        }
        if let Some(retries) = self.flags.retries {
            self.config.max_retries = retries;
        }
        if let Some(ref alphabet) = self.flags.alphabet {
            self.config.alphabet = Some(alphabet.clone());
        }

        for class in CharClass::ALL {
            let overrides = self.flags.class(class).clone();
            if !overrides.is_set() {
                continue;
            }
            *self.config.rule_mut(class) = if overrides.disabled {
                ClassRule::Disabled
            } else {
                ClassRule::Custom(ClassSpec {
                    min: overrides.min,
                    max: overrides.max,
                    alphabet: overrides.alphabet,
                })
            };
        }

        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(c) => self.clipboard = Some(c),
                Err(_) => {
                    if !prompts::clipboard_fallback_prompt() {
                        std::process::exit(0);
                    }
                }
            }
        }
    }

    fn handle_save(&mut self) -> Result<(), Done> {
        if !self.flags.save {
            return Ok(());
        }
        if let Err(e) = self.config.save_to_file() {
            prompts::warn(&format!("Failed to save profile: {}", e));
        } else {
            prompts::profile_saved();
        }
        // Saving without a target site is a complete command on its own.
        if self.config.uri.is_empty() {
            return Err(Done);
        }
        Ok(())
    }

    /// Derive the phrase and hand it to the selected output.
    fn derive_output(&mut self) -> Result<(), Done> {
        let generator = match PhraseGenerator::new(&self.config) {
            Ok(g) => g,
            Err(e) => {
                prompts::error(&e.to_string());
                std::process::exit(2);
            }
        };

        let Some(mut password) = self.read_password() else {
            prompts::error("No password given.");
            std::process::exit(2);
        };

        let result = generator.generate(&password);
        password.zeroize();

        match result {
            Ok(mut phrase) => {
                self.output_phrase(&phrase);
                phrase.zeroize();
                Ok(())
            }
            Err(e) => {
                prompts::error(&e.to_string());
                std::process::exit(1);
            }
        }
    }

    /// Read the master password: hidden prompt on a tty, a line from stdin
    /// otherwise (or when --stdin asks for pipe-friendly behavior).
    fn read_password(&self) -> Option<String> {
        if self.flags.stdin_password || !quiet::is_interactive() {
            let mut line = String::new();
            if std::io::stdin().read_line(&mut line).is_err() || line.is_empty() {
                return None;
            }
            let password = line.trim_end_matches(['\r', '\n']).to_string();
            line.zeroize();
            return Some(password);
        }
        terminal::read_secret("Master password")
    }

    fn output_phrase(&mut self, phrase: &str) {
        if let Some(ctx) = self.clipboard.as_mut() {
            match ctx.set_contents(phrase.to_string()) {
                Ok(_) => {
                    // Scrub the round-trip copy some providers hand back.
                    if let Ok(mut retrieved) = ctx.get_contents() {
                        retrieved.zeroize();
                    }
                    prompts::clipboard_copied();
                }
                Err(e) => {
                    prompts::clipboard_error(&e.to_string());
                }
            }
        } else {
            println!("{}", phrase);
        }
    }
}
