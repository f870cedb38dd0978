//! Command-line surface.

mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::{Context, Done};
pub use flags::{ClassFlags, CliFlags};
pub use parse::parse;

/// Entry point for CLI mode.
pub fn run(args: Vec<String>) {
    match Context::new(args) {
        Ok(mut ctx) => {
            let _ = ctx.run();
        }
        Err(e) => {
            prompts::error(&e);
            std::process::exit(2);
        }
    }
}

pub fn print_help() {
    println!(
        "rndphrase {} - deterministic per-site passwords

Usage: rndphrase [URI] [OPTIONS]

The phrase is derived from the seed, the site URI, the master password,
and the version counter; the same inputs always produce the same phrase.

Options:
  -s, --seed <SEED>       Secret seed (profile default if omitted)
  -l, --length <N>        Phrase length in characters [default: 16]
      --rev <N>           Version counter; bump to rotate a password
      --retries <N>       Attempt budget for constraint validation
  -b, --board             Copy the phrase to the clipboard
      --stdin             Read the master password from stdin
      --save              Persist current options as the profile
  -q, --quiet             Suppress warnings and prompts
  -h, --help              Show this help
  -v, --version           Show version

Character classes (capital, minuscule, numeric, special):
      --no-<class>        Disable a class
      --<class> <CHARS>   Replace a class alphabet
      --min-<class> <N>   Require at least N characters of a class
      --max-<class> <N>   Allow at most N characters of a class
      --alphabet <CHARS>  Replace all alphabets with one custom set",
        env!("CARGO_PKG_VERSION")
    );
}
