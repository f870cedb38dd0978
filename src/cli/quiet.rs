//! Global quiet state for CLI output.

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Enable or disable quiet mode (suppresses warnings and confirmations;
/// errors and the derived phrase are always emitted).
pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Whether stdin is a tty. Decides between the hidden prompt and a piped
/// read for the master password, and gates interactive questions.
pub fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// True when interactive questions should be skipped: quiet mode, or no
/// tty to ask on.
pub fn suppressed() -> bool {
    enabled() || !is_interactive()
}
