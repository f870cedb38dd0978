//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use super::quiet;

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Warning to stderr (yellow); suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Error to stderr (red); never suppressed.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Confirmation after the phrase landed on the clipboard; suppressed in
/// quiet mode.
pub fn clipboard_copied() {
    if !quiet::enabled() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

/// Ask whether to print to the terminal when the clipboard is unavailable.
/// Falls back silently (true) when there is nobody to ask.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::suppressed() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    let answered_no = std::io::stdin()
        .read_line(&mut input)
        .is_ok_and(|_| matches!(input.trim().to_lowercase().as_str(), "n" | "no"));

    if answered_no {
        eprintln!("\nAborted.");
        return false;
    }
    eprintln!();
    true
}

/// Confirmation after --save wrote the profile; suppressed in quiet mode.
pub fn profile_saved() {
    if !quiet::enabled() {
        println!("Profile saved.");
    }
}
