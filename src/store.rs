//! Reactive Journal Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The
//! journal is the single owner of the data; after each dispatch the
//! fields it reports as changed are republished into the store. An
//! edit scoped to one theme rewrites only that element of `themes`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions::{Action, TaskField, ThemeField};
use crate::dialogs::BrowserPrompt;
use crate::journal::{Changed, Journal};
use crate::models::{HoverTarget, Task, Theme};
use crate::storage::BrowserStorage;

pub type BrowserJournal = Journal<BrowserStorage, BrowserPrompt>;

/// What the view tree reads, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct Snapshot {
    /// Demo data is showing
    pub demo: bool,
    /// Cross-highlight target
    pub hover: Option<HoverTarget>,
    /// The theme collection
    pub themes: Vec<Theme>,
}

/// Handle passed explicitly to every component
#[derive(Clone, Copy)]
pub struct JournalHandle {
    journal: StoredValue<BrowserJournal>,
    store: Store<Snapshot>,
}

impl JournalHandle {
    pub fn new(journal: BrowserJournal) -> Self {
        let state = journal.state();
        let snapshot = Snapshot {
            demo: state.demo,
            hover: state.hover,
            themes: journal.themes().to_vec(),
        };
        Self {
            journal: StoredValue::new(journal),
            store: Store::new(snapshot),
        }
    }

    pub fn dispatch(&self, action: Action) {
        let changed = self
            .journal
            .try_update_value(|journal| journal.dispatch(action))
            .unwrap_or_default();
        self.publish(changed);
    }

    fn publish(&self, changed: Changed) {
        self.journal.with_value(|journal| {
            if changed.state {
                let state = journal.state();
                *self.store.demo().write() = state.demo;
                *self.store.hover().write() = state.hover;
            }
            if !changed.themes {
                return;
            }
            match changed.theme.and_then(|index| journal.themes().get(index).map(|theme| (index, theme))) {
                Some((index, theme)) => {
                    if let Some(slot) = self.store.themes().write().get_mut(index) {
                        *slot = theme.clone();
                    }
                }
                None => *self.store.themes().write() = journal.themes().to_vec(),
            }
        });
    }

    /// Save the current collection; failures are already alerted and logged
    pub fn persist(&self) {
        self.journal.with_value(|journal| {
            if let Err(error) = journal.persist() {
                tracing::debug!(%error, "save skipped");
            }
        });
    }

    // ========================
    // Reads
    // ========================

    /// Subscribe the running effect to collection changes
    pub fn track_themes(&self) {
        self.store.themes().track();
    }

    pub fn demo(&self) -> bool {
        self.store.demo().get()
    }

    pub fn theme_count(&self) -> usize {
        self.store.themes().with(|themes| themes.len())
    }

    pub fn with_theme<U>(&self, theme: usize, f: impl FnOnce(&Theme) -> U) -> Option<U> {
        self.store.themes().with(|themes| themes.get(theme).map(f))
    }

    pub fn with_task<U>(&self, theme: usize, task: usize, f: impl FnOnce(&Task) -> U) -> Option<U> {
        self.store
            .themes()
            .with(|themes| themes.get(theme).and_then(|t| t.tasks.get(task)).map(f))
    }

    /// Current label text, without subscribing
    pub fn label(&self, theme: usize, day: usize) -> String {
        self.journal.with_value(|journal| {
            journal
                .themes()
                .get(theme)
                .and_then(|t| t.days.get(day).cloned())
                .unwrap_or_default()
        })
    }

    pub fn is_day_hovered(&self, theme: usize, day: usize) -> bool {
        self.store
            .hover()
            .with(|hover| hover.is_some_and(|h| h.matches_day(theme, day)))
    }

    pub fn is_task_hovered(&self, theme: usize, task: usize) -> bool {
        self.store
            .hover()
            .with(|hover| hover.is_some_and(|h| h.matches_task(theme, task)))
    }

    // ========================
    // Actions
    // ========================

    pub fn add_theme(&self) {
        self.dispatch(Action::AddTheme);
    }

    pub fn remove_theme(&self, theme: usize) {
        self.dispatch(Action::RemoveTheme { theme });
    }

    pub fn update_theme(&self, theme: usize, field: ThemeField) {
        self.dispatch(Action::UpdateTheme { theme, field });
    }

    pub fn add_day(&self, theme: usize) {
        self.dispatch(Action::AddDay { theme });
    }

    pub fn remove_day(&self, theme: usize, day: usize) {
        self.dispatch(Action::RemoveDay { theme, day });
    }

    pub fn add_task(&self, theme: usize) {
        self.dispatch(Action::AddTask { theme });
    }

    pub fn remove_task(&self, theme: usize, task: usize) {
        self.dispatch(Action::RemoveTask { theme, task });
    }

    pub fn update_task(&self, theme: usize, task: usize, field: TaskField) {
        self.dispatch(Action::UpdateTask { theme, task, field });
    }

    pub fn update_day(&self, theme: usize, task: usize, day: usize) {
        self.dispatch(Action::UpdateDay { theme, task, day });
    }

    pub fn update_label(&self, theme: usize, day: usize, value: String) {
        self.dispatch(Action::UpdateLabel { theme, day, value });
    }

    pub fn hover(&self, target: HoverTarget) {
        self.dispatch(Action::HoverDay(target));
    }

    pub fn hover_reset(&self) {
        self.dispatch(Action::HoverReset);
    }

    pub fn toggle_demo(&self) {
        self.dispatch(Action::ToggleDemo);
    }
}
