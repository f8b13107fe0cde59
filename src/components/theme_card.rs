//! Theme Card Component
//!
//! One theme laid out as a grid: title and date, day headings, task
//! rows, and the add/remove controls along the edges.

use leptos::prelude::*;

use crate::actions::ThemeField;
use crate::components::{DayHeading, TaskRow};
use crate::models::{parse_date, HoverTarget, DATE_FORMAT};
use crate::store::JournalHandle;

#[component]
pub fn ThemeCard(handle: JournalHandle, index: usize) -> impl IntoView {
    let day_count = move || handle.with_theme(index, |t| t.days.len()).unwrap_or(0);
    let task_count = move || handle.with_theme(index, |t| t.tasks.len()).unwrap_or(0);
    let title = move || handle.with_theme(index, |t| t.title.clone()).unwrap_or_default();
    let date_value = move || {
        handle
            .with_theme(index, |t| t.date.map(|d| d.format(DATE_FORMAT).to_string()))
            .flatten()
            .unwrap_or_default()
    };

    view! {
        <div
            class="theme"
            style=move || format!("grid-template-columns: 1fr repeat({}, max-content)", day_count() + 1)
        >
            <div class="theme-title">
                <textarea
                    prop:value=title
                    on:input=move |ev| handle.update_theme(index, ThemeField::Title(event_target_value(&ev)))
                />
                <input
                    class="theme-date"
                    type="date"
                    prop:value=date_value
                    on:input=move |ev| handle.update_theme(index, ThemeField::Date(parse_date(&event_target_value(&ev))))
                />
            </div>

            <For
                each=move || 0..day_count()
                key=|day| *day
                children=move |day| view! { <DayHeading handle=handle theme=index day=day /> }
            />

            <button class="add-day" on:click=move |_| handle.add_day(index)>"+"</button>

            <For
                each=move || 0..task_count()
                key=|task| *task
                children=move |task| view! { <TaskRow handle=handle theme=index task=task /> }
            />

            <button class="add-task" on:click=move |_| handle.add_task(index)>"+"</button>

            <For
                each=move || 0..day_count()
                key=|day| *day
                children=move |day| view! {
                    <button
                        class=move || if handle.is_day_hovered(index, day) { "remove-day hovered" } else { "remove-day" }
                        on:click=move |_| handle.remove_day(index, day)
                        on:pointerover=move |_| handle.hover(HoverTarget::day(index, day))
                        on:pointerout=move |_| handle.hover_reset()
                    >
                        "-"
                    </button>
                }
            />

            <button class="remove-theme" on:click=move |_| handle.remove_theme(index)>"x"</button>
        </div>
    }
}
