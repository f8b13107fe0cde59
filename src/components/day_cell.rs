//! Day Cell Component
//!
//! A two-half circle; each click advances the status one step.

use leptos::prelude::*;

use crate::status::Status;
use crate::store::JournalHandle;

#[component]
pub fn DayCell(
    handle: JournalHandle,
    theme: usize,
    task: usize,
    day: usize,
    #[prop(into)] status: Signal<Status>,
) -> impl IntoView {
    view! {
        <div class="day-cell" on:click=move |_| handle.update_day(theme, task, day)>
            <div class=move || if status.get().fills_upper() { "day-half upper filled" } else { "day-half upper" } />
            <div class="day-divider" />
            <div class=move || if status.get().fills_lower() { "day-half lower filled" } else { "day-half lower" } />
        </div>
    }
}
