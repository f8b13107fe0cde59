//! Day Heading Component
//!
//! Column heading: weekday letter and day-of-month when the theme is
//! dated, otherwise two editable lines stored in the day label.

use leptos::prelude::*;

use crate::models::{compose_label, label_bottom, label_top, HoverTarget};
use crate::store::JournalHandle;

#[component]
pub fn DayHeading(handle: JournalHandle, theme: usize, day: usize) -> impl IntoView {
    let heading = move || handle.with_theme(theme, |t| t.day_heading(day)).unwrap_or_default();
    let dated = move || handle.with_theme(theme, |t| t.date.is_some()).unwrap_or(false);
    let hovered = move || handle.is_day_hovered(theme, day);

    let on_input_top = move |ev: web_sys::Event| {
        let label = handle.label(theme, day);
        handle.update_label(theme, day, compose_label(&event_target_value(&ev), label_bottom(&label)));
    };
    let on_input_bottom = move |ev: web_sys::Event| {
        let label = handle.label(theme, day);
        handle.update_label(theme, day, compose_label(label_top(&label), &event_target_value(&ev)));
    };

    view! {
        <div
            class=move || if hovered() { "day-heading hovered" } else { "day-heading" }
            on:pointerover=move |_| handle.hover(HoverTarget::day(theme, day))
            on:pointerout=move |_| handle.hover_reset()
        >
            <Show
                when=dated
                fallback=move || view! {
                    <input
                        class=move || if hovered() { "day-top hovered" } else { "day-top" }
                        type="text"
                        prop:value=move || heading().0
                        on:input=on_input_top
                    />
                    <br />
                    <input
                        class="day-bottom"
                        type="text"
                        prop:value=move || heading().1
                        on:input=on_input_bottom
                    />
                }
            >
                <div class=move || if hovered() { "day-letter hovered" } else { "day-letter" }>
                    {move || heading().0}
                </div>
                <div class="day-digit">{move || heading().1}</div>
            </Show>
        </div>
    }
}
