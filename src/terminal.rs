//! Terminal ownership for the games: raw mode, alternate screen, hidden
//! cursor, and a background thread that feeds key events to the frame loop.

use std::io::Write;
use std::sync::mpsc;
use std::thread;

use crossterm::{
    cursor,
    event::{self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};
use tracing::{debug, warn};

/// Puts the terminal into game mode and restores it on drop, including when
/// the game loop bails out with an error.
pub struct TerminalSession<W: Write> {
    out: W,
    keyboard_enhanced: bool,
}

impl<W: Write> TerminalSession<W> {
    pub fn enter(mut out: W) -> std::io::Result<Self> {
        terminal::enable_raw_mode()?;
        out.execute(terminal::EnterAlternateScreen)?;
        out.execute(cursor::Hide)?;

        // Ask for key-release (and key-repeat) events.  Kitty-protocol
        // terminals support this; others fall back to press-only input.
        let keyboard_enhanced = out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
        debug!(keyboard_enhanced, "terminal session entered");

        Ok(TerminalSession {
            out,
            keyboard_enhanced,
        })
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        if self.keyboard_enhanced {
            let _ = self.out.execute(PopKeyboardEnhancementFlags);
        }
        let _ = self.out.execute(cursor::Show);
        let _ = self.out.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Dedicate a thread to blocking event reads so the frame loop never blocks
/// on I/O.  The thread exits once the receiver is dropped.
pub fn spawn_event_reader() -> mpsc::Receiver<Event> {
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break;
                }
            }
            Err(e) => {
                warn!(error = %e, "terminal event reader stopped");
                break;
            }
        }
    });
    rx
}
