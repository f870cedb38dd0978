//! Exit handling: signal handlers, terminal restoration, graceful shutdown.

/// Put the terminal back into canonical echoing mode via termios, in case
/// a raw-mode secret prompt was interrupted mid-read.
fn restore_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit - runs on every exit path.
extern "C" fn cleanup_on_exit() {
    restore_termios();
    unsafe {
        // Attribute/cursor reset, only when stdout is a tty.
        if libc::isatty(1) == 1 {
            let reset = b"\x1b[0m\x1b[?25h\r\n";
            libc::write(1, reset.as_ptr() as *const libc::c_void, reset.len());
        }
    }
}

extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Reset terminal state (public for use in other modules)
pub fn reset_terminal() {
    restore_termios();
}
