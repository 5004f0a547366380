//! Piped standard input.

use std::io::{self, IsTerminal, Read};
use std::os::fd::AsFd;

use nix::poll::{PollFd, PollFlags, PollTimeout, poll};
use tracing::{debug, warn};

/// Read text piped on stdin without blocking when nothing was piped.
///
/// Returns `None` for a terminal, for a stdin with nothing ready, and for
/// empty input.
pub fn read_piped_stdin() -> io::Result<Option<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() || !has_pending_input(&stdin)? {
        return Ok(None);
    }

    let mut bytes = Vec::new();
    stdin.lock().read_to_end(&mut bytes)?;
    debug!(event = "cli.stdin.read_completed", bytes = bytes.len());

    let text = decode_piped(bytes);
    if text.is_empty() {
        Ok(None)
    } else {
        Ok(Some(text))
    }
}

/// Decode piped bytes as UTF-8, replacing invalid sequences with U+FFFD.
///
/// The user is told when a replacement happened.
fn decode_piped(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            let valid_up_to = e.utf8_error().valid_up_to();
            eprintln!(
                "Warning: piped input is not valid UTF-8 (first bad byte at offset {}). \
                 Invalid bytes were replaced with U+FFFD.",
                valid_up_to
            );
            warn!(
                event = "cli.stdin.decode_lossy",
                valid_up_to = valid_up_to,
                "Piped input is not valid UTF-8"
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

/// Zero-timeout poll: is there data (or EOF) to read right now?
fn has_pending_input(stdin: &io::Stdin) -> io::Result<bool> {
    let mut fds = [PollFd::new(stdin.as_fd(), PollFlags::POLLIN)];
    let ready = poll(&mut fds, PollTimeout::ZERO).map_err(io::Error::from)?;
    Ok(ready > 0
        && fds[0]
            .revents()
            .is_some_and(|events| events.intersects(PollFlags::POLLIN | PollFlags::POLLHUP)))
}
