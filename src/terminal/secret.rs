//! Hidden-input prompt for secrets.

use crossterm::event::{Event, KeyCode, KeyModifiers, read};
use zeroize::Zeroize;

use super::{RawModeGuard, flush, reset_terminal};

/// Prompt for a secret without echoing it.
///
/// Enter accepts, Esc or Ctrl+Q cancels (returns None), Ctrl+U clears,
/// Ctrl+C exits the process. Nothing typed is ever drawn to the terminal.
pub fn read_secret(prompt: &str) -> Option<String> {
    let mut input = String::new();
    let mut cancelled = false;

    // RawModeGuard ensures raw mode is disabled even if we panic or return early
    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return None,
    };

    print!("{}: ", prompt);
    flush();

    loop {
        match read() {
            Ok(Event::Key(key_event)) => match key_event.code {
                KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                    // Reset terminal BEFORE exit since process::exit doesn't run destructors
                    input.zeroize();
                    reset_terminal();
                    println!();
                    std::process::exit(0);
                }
                KeyCode::Char('q') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                    cancelled = true;
                    break;
                }
                KeyCode::Esc => {
                    cancelled = true;
                    break;
                }
                KeyCode::Char('u') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                    input.zeroize();
                    input.clear();
                }
                KeyCode::Enter => {
                    break;
                }
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Char(c) => {
                    input.push(c);
                }
                _ => {}
            },
            Err(_) => {
                break;
            }
            _ => {}
        }
    }

    // Explicitly drop guard to disable raw mode BEFORE println
    drop(_guard);
    println!();

    if cancelled {
        input.zeroize();
        None
    } else {
        Some(input)
    }
}
