//! Journal Controller
//!
//! Owns the theme collection and the transient app state, and turns
//! dispatched actions into copy-on-write edits. Removals are gated
//! behind a confirmation; demo mode swaps in bundled data that is
//! never persisted.

use chrono::Local;

use crate::actions::{self, Action, Edit};
use crate::config::AppConfig;
use crate::dialogs::Prompt;
use crate::models::{display_date, AppState, Theme};
use crate::storage::{self, BlobStore, StorageError, KEY_THEMES};

/// Bundled demo collection
pub const DEMO_THEMES: &str = include_str!("demo.json");

/// Which parts of the snapshot a dispatch touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Changed {
    pub themes: bool,
    pub state: bool,
    /// Set when only this theme was rewritten
    pub theme: Option<usize>,
}

impl Changed {
    const NONE: Changed = Changed { themes: false, state: false, theme: None };
    const STATE: Changed = Changed { themes: false, state: true, theme: None };
    const BOTH: Changed = Changed { themes: true, state: true, theme: None };
}

pub struct Journal<S, P> {
    store: S,
    prompt: P,
    config: AppConfig,
    state: AppState,
    themes: Vec<Theme>,
    /// The stored collection was unreadable; keep it until the user edits
    load_failed: bool,
}

impl<S: BlobStore, P: Prompt> Journal<S, P> {
    /// Load the stored collection (empty, with one alert, if unreadable)
    pub fn open(store: S, prompt: P, config: AppConfig) -> Self {
        let loaded = storage::try_load_themes(&store, &prompt, KEY_THEMES);
        let load_failed = loaded.is_none();
        let themes = loaded.unwrap_or_default();
        tracing::info!(themes = themes.len(), load_failed, "journal opened");
        Self {
            store,
            prompt,
            config,
            state: AppState::default(),
            themes,
            load_failed,
        }
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn dispatch(&mut self, action: Action) -> Changed {
        tracing::debug!(?action, "dispatch");
        match action {
            Action::AddTheme => {
                let date = self.config.date_new_themes.then(|| Local::now().date_naive());
                self.edit(Edit::AddTheme { date, day_count: self.config.day_count })
            }
            Action::RemoveTheme { theme } => {
                if !self.confirm_remove_theme(theme) {
                    return Changed::NONE;
                }
                self.edit(Edit::RemoveTheme { theme })
            }
            Action::UpdateTheme { theme, field } => self.edit(Edit::UpdateTheme { theme, field }),
            Action::AddDay { theme } => self.edit(Edit::AddDay { theme }),
            Action::RemoveDay { theme, day } => self.edit(Edit::RemoveDay { theme, day }),
            Action::AddTask { theme } => self.edit(Edit::AddTask { theme }),
            Action::RemoveTask { theme, task } => {
                if self.config.confirm_task_removal && !self.confirm_remove_task(theme, task) {
                    return Changed::NONE;
                }
                self.edit(Edit::RemoveTask { theme, task })
            }
            Action::UpdateTask { theme, task, field } => self.edit(Edit::UpdateTask { theme, task, field }),
            Action::UpdateDay { theme, task, day } => self.edit(Edit::UpdateDay { theme, task, day }),
            Action::UpdateLabel { theme, day, value } => self.edit(Edit::UpdateLabel { theme, day, value }),
            Action::HoverDay(target) => {
                if self.state.hover == Some(target) {
                    return Changed::NONE;
                }
                self.state.hover = Some(target);
                Changed::STATE
            }
            Action::HoverReset => {
                if self.state.hover.take().is_none() {
                    return Changed::NONE;
                }
                Changed::STATE
            }
            Action::ToggleDemo => self.toggle_demo(),
        }
    }

    /// Save the collection unless demo data is showing or the stored
    /// collection failed to load and nothing has been edited since
    pub fn persist(&self) -> Result<(), StorageError> {
        if self.state.demo {
            tracing::debug!("demo mode, not saving");
            return Ok(());
        }
        if self.load_failed {
            tracing::warn!("stored themes were unreadable, not overwriting");
            return Ok(());
        }
        storage::save_themes(&self.store, &self.prompt, KEY_THEMES, &self.themes)
    }

    fn edit(&mut self, edit: Edit) -> Changed {
        match actions::apply(&edit, &self.themes) {
            Ok(themes) => {
                self.themes = themes;
                self.load_failed = false;
                // Positions shifted, so a hover index may now point elsewhere
                let state = edit.is_structural() && self.state.hover.take().is_some();
                Changed { themes: true, state, theme: edit.theme() }
            }
            Err(_) => {
                tracing::warn!(?edit, "index out of range, edit ignored");
                Changed::NONE
            }
        }
    }

    fn toggle_demo(&mut self) -> Changed {
        self.state.demo = !self.state.demo;
        self.state.hover = None;
        self.themes = if self.state.demo {
            storage::parse_themes(DEMO_THEMES).unwrap_or_else(|error| {
                tracing::error!(%error, "bundled demo data is invalid");
                Vec::new()
            })
        } else {
            let loaded = storage::try_load_themes(&self.store, &self.prompt, KEY_THEMES);
            self.load_failed = loaded.is_none();
            loaded.unwrap_or_default()
        };
        tracing::info!(demo = self.state.demo, themes = self.themes.len(), "demo toggled");
        Changed::BOTH
    }

    fn confirm_remove_theme(&self, index: usize) -> bool {
        let Some(theme) = self.themes.get(index) else {
            tracing::warn!(index, "remove of missing theme ignored");
            return false;
        };
        let message = match theme.date {
            Some(date) => format!(
                "Are you sure you want to remove the theme \"{}\" for {}?",
                theme.title,
                display_date(date)
            ),
            None => format!("Are you sure you want to remove the theme \"{}\"?", theme.title),
        };
        self.prompt.confirm(&message)
    }

    fn confirm_remove_task(&self, theme: usize, task: usize) -> bool {
        let Some(task) = self.themes.get(theme).and_then(|t| t.tasks.get(task)) else {
            tracing::warn!(theme, task, "remove of missing task ignored");
            return false;
        };
        self.prompt
            .confirm(&format!("Are you sure you want to remove the task \"{}\"?", task.title))
    }
}
