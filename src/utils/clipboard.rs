// src/utils/clipboard.rs
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard init error: {0}")]
    Init(String),

    #[error("Clipboard set error: {0}")]
    Set(String),

    #[error("Clipboard support is not compiled in (rebuild with --features clipboard)")]
    Unavailable,
}

#[cfg(feature = "clipboard")]
mod backend {
    use super::ClipboardError;
    use ::clipboard::{ClipboardContext, ClipboardProvider};

    pub fn open() -> Result<ClipboardContext, ClipboardError> {
        ClipboardProvider::new().map_err(|e| ClipboardError::Init(e.to_string()))
    }

    pub fn set(ctx: &mut ClipboardContext, text: &str) -> Result<(), ClipboardError> {
        ctx.set_contents(text.to_string())
            .map_err(|e| ClipboardError::Set(e.to_string()))
    }

    // Empty the clipboard unless something else was copied in the meantime
    pub fn clear_if_unchanged(ctx: &mut ClipboardContext, text: &str) -> bool {
        let current_result: Result<String, _> = ctx.get_contents();
        if current_result.ok().as_deref() == Some(text) {
            return ctx.set_contents(String::new()).is_ok();
        }
        false
    }
}

/// Copies `text` to the system clipboard. When `clear_after` is set, a
/// background thread empties the clipboard once it elapses, provided the
/// clipboard still holds `text`. The thread only fires while the process
/// is alive, so this suits long-running sessions.
#[cfg(feature = "clipboard")]
pub fn copy_to_clipboard_with_timeout(text: &str, clear_after: Option<Duration>) -> Result<(), ClipboardError> {
    let mut ctx = backend::open()?;
    backend::set(&mut ctx, text)?;

    if let Some(delay) = clear_after {
        let text = text.to_string();
        std::thread::spawn(move || {
            std::thread::sleep(delay);

            if let Ok(mut ctx2) = backend::open() {
                if backend::clear_if_unchanged(&mut ctx2, &text) {
                    log::debug!("Clipboard cleared after {}s", delay.as_secs());
                }
            }
        });
    }

    Ok(())
}

/// Copies `text`, blocks for `hold`, then clears the clipboard if it still
/// holds `text`. On X11 the selection is owned by this process, so one-shot
/// callers must stay alive for the copy to be usable.
#[cfg(feature = "clipboard")]
pub fn copy_and_hold(text: &str, hold: Duration) -> Result<(), ClipboardError> {
    let mut ctx = backend::open()?;
    backend::set(&mut ctx, text)?;

    std::thread::sleep(hold);

    if backend::clear_if_unchanged(&mut ctx, text) {
        log::debug!("Clipboard cleared after {}s", hold.as_secs());
    }
    Ok(())
}

#[cfg(not(feature = "clipboard"))]
pub fn copy_to_clipboard_with_timeout(_text: &str, _clear_after: Option<Duration>) -> Result<(), ClipboardError> {
    Err(ClipboardError::Unavailable)
}

#[cfg(not(feature = "clipboard"))]
pub fn copy_and_hold(_text: &str, _hold: Duration) -> Result<(), ClipboardError> {
    Err(ClipboardError::Unavailable)
}
