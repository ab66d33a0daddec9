//! Category Selector Component
//!
//! `<select>` over the task categories, optionally with an "all" entry.

use leptos::prelude::*;

use crate::models::TaskCategory;

const ALL_KEY: &str = "all";

/// Category dropdown. With `all_label`, `None` means no filter.
#[component]
pub fn CategorySelector(
    current: ReadSignal<Option<TaskCategory>>,
    on_change: impl Fn(Option<TaskCategory>) + Copy + 'static,
    /// Use the long topic labels (social feed)
    #[prop(optional)] topic_labels: bool,
    #[prop(optional)] all_label: Option<&'static str>,
) -> impl IntoView {
    let label = move |c: TaskCategory| if topic_labels { c.topic_label() } else { c.label() };

    view! {
        <select
            class="category-select"
            on:change=move |ev| on_change(TaskCategory::from_key(&event_target_value(&ev)))
        >
            {all_label.map(|text| view! {
                <option value=ALL_KEY selected=move || current.get().is_none()>{text}</option>
            })}
            {TaskCategory::ALL.into_iter().map(|c| view! {
                <option value=c.as_str() selected=move || current.get() == Some(c)>{label(c)}</option>
            }).collect_view()}
        </select>
    }
}
