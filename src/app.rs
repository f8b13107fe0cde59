//! Theme System App
//!
//! Root component: opens the journal, saves it whenever the collection
//! changes, and renders the header, theme list and footer.

use leptos::prelude::*;

use crate::components::ThemeCard;
use crate::config::AppConfig;
use crate::dialogs::BrowserPrompt;
use crate::journal::Journal;
use crate::storage::BrowserStorage;
use crate::store::JournalHandle;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load(&BrowserStorage);
    let handle = JournalHandle::new(Journal::open(BrowserStorage, BrowserPrompt, config));

    // Save after every collection change; the first run only subscribes,
    // so an unreadable store is not overwritten on startup
    Effect::new(move |previous: Option<()>| {
        handle.track_themes();
        if previous.is_some() {
            handle.persist();
        }
    });

    view! {
        <h1 class="app-header">
            "The Theme System"
            <button class="demo-toggle" on:click=move |_| handle.toggle_demo()>
                {move || if handle.demo() { "Hide Demo" } else { "Show Demo" }}
            </button>
            <span class="credit">"Inspired by CGP Grey"</span>
            " / "
            <a
                title="This Journal Keeps Me Productive (& Maybe You Too)"
                href="https://www.youtube.com/watch?v=fSwpe8r50_o"
            >
                "YouTube"
            </a>
            " / "
            <a
                title="The Theme System Journal by Cortex Brand"
                href="https://cottonbureau.com/p/TZ4WZJ/journal/the-theme-system-journal"
            >
                "Journal"
            </a>
        </h1>

        <For
            each=move || 0..handle.theme_count()
            key=|index| *index
            children=move |index| view! { <ThemeCard handle=handle index=index /> }
        />

        <div class="app-footer">
            <button class="add-theme" on:click=move |_| handle.add_theme()>"Add Theme"</button>
            <div class="storage-note">
                "Data is saved to your browser local storage and persists between refreshes and restarts."
            </div>
        </div>
    }
}
