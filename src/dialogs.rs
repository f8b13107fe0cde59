//! Blocking Dialogs
//!
//! Confirmation and alert prompts, behind a trait so the journal can run without a browser.

/// Modal yes/no confirmation and alert
pub trait Prompt {
    /// Ask the user; `false` when declined or when no dialog can be shown
    fn confirm(&self, message: &str) -> bool;

    fn alert(&self, message: &str);
}

/// `window.confirm` / `window.alert`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPrompt;

impl Prompt for BrowserPrompt {
    fn confirm(&self, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            tracing::warn!("no window, treating confirmation as declined");
            return false;
        };
        window.confirm_with_message(message).unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if window.alert_with_message(message).is_err() {
                    tracing::error!(text = message, "alert could not be shown");
                }
            }
            None => tracing::error!(text = message, "no window for alert"),
        }
    }
}
