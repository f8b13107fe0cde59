//! Task Row Component
//!
//! Title input, one day cell per theme column, and a remove button.

use leptos::prelude::*;

use crate::actions::TaskField;
use crate::components::DayCell;
use crate::models::HoverTarget;
use crate::store::JournalHandle;

#[component]
pub fn TaskRow(handle: JournalHandle, theme: usize, task: usize) -> impl IntoView {
    let title = move || handle.with_task(theme, task, |t| t.title.clone()).unwrap_or_default();
    let day_count = move || handle.with_theme(theme, |t| t.days.len()).unwrap_or(0);
    // Padded or truncated to the theme's columns for display only
    let statuses = Memo::new(move |_| {
        let len = day_count();
        handle.with_task(theme, task, |t| t.aligned_days(len)).unwrap_or_default()
    });
    let class = move |base: &str| {
        if handle.is_task_hovered(theme, task) {
            format!("{} hovered", base)
        } else {
            base.to_string()
        }
    };

    view! {
        <input
            class=move || class("task-title")
            prop:value=title
            on:input=move |ev| handle.update_task(theme, task, TaskField::Title(event_target_value(&ev)))
            on:pointerover=move |_| handle.hover(HoverTarget::task(theme, task))
            on:pointerout=move |_| handle.hover_reset()
        />

        <For
            each=move || 0..statuses.with(|s| s.len())
            key=|day| *day
            children=move |day| {
                let status = Signal::derive(move || statuses.with(|s| s.get(day).copied().unwrap_or_default()));
                view! { <DayCell handle=handle theme=theme task=task day=day status=status /> }
            }
        />

        <button
            class=move || class("remove-task")
            on:click=move |_| handle.remove_task(theme, task)
            on:pointerover=move |_| handle.hover(HoverTarget::task(theme, task))
            on:pointerout=move |_| handle.hover_reset()
        >
            "-"
        </button>
    }
}
