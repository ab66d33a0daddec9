//! Task Tracker Component
//!
//! Full checklist: progress summary, mandatory and custom tasks, add form.

use leptos::prelude::*;

use crate::components::{CategorySelector, DeleteConfirmButton};
use crate::context::use_portal;
use crate::models::{Task, TaskCategory, TaskDraft};
use crate::store::{use_app_store, Action};
use crate::validation::validate_task_title;
use crate::views;

/// Form for a new custom task
#[component]
fn AddTaskForm(on_done: impl Fn() + Copy + 'static) -> impl IntoView {
    let ctx = use_portal();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (category, set_category) = signal(Some(TaskCategory::Other));
    let (link, set_link) = signal(String::new());
    let (due_date, set_due_date) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let optional = |s: String| {
        let s = s.trim().to_string();
        if s.is_empty() { None } else { Some(s) }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match validate_task_title(&title.get()) {
            Ok(title) => {
                ctx.dispatch(Action::AddCustomTask(TaskDraft {
                    title,
                    description: description.get(),
                    category: category.get().unwrap_or_default(),
                    link: optional(link.get()),
                    due_date: optional(due_date.get()),
                }));
                on_done();
            }
            Err(e) => set_error.set(Some(e.message().to_string())),
        }
    };

    view! {
        <form class="add-task-form" on:submit=on_submit>
            <h4>"Add Custom Task"</h4>
            <p class="muted">"Create a personal task to track"</p>
            <label>"Title"</label>
            <input
                type="text"
                placeholder="Task title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <label>"Description"</label>
            <textarea
                placeholder="Task description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
            <label>"Category"</label>
            <CategorySelector
                current=category
                on_change={move |c: Option<TaskCategory>| {
                    set_category.set(c.or(Some(TaskCategory::Other)))
                }}
            />
            <label>"Link (optional)"</label>
            <input
                type="url"
                placeholder="https://..."
                prop:value=move || link.get()
                on:input=move |ev| set_link.set(event_target_value(&ev))
            />
            <label>"Due date (optional)"</label>
            <input
                type="text"
                placeholder="e.g. Before semester starts"
                prop:value=move || due_date.get()
                on:input=move |ev| set_due_date.set(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <div class="form-actions">
                <button type="submit" class="primary-btn">"Add Task"</button>
                <button type="button" class="outline-btn" on:click=move |_| on_done()>"Cancel"</button>
            </div>
        </form>
    }
}

/// One checklist row
#[component]
fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_portal();
    let toggle_id = task.id.clone();
    let delete_id = task.id.clone();
    let delete_label = format!("Delete \"{}\"", task.title);
    let completed = task.is_completed;

    view! {
        <div class=if completed { "task-row completed" } else { "task-row" }>
            <input
                type="checkbox"
                prop:checked=completed
                on:change=move |_| ctx.dispatch(Action::ToggleTask(toggle_id.clone()))
            />
            <div class="task-body">
                <div class="task-title-row">
                    <span class="task-title">{task.title}</span>
                    <span class=format!("badge category-{}", task.category.as_str())>{task.category.label()}</span>
                    {task.is_mandatory.then(|| view! { <span class="badge secondary">"🔒 Required"</span> })}
                </div>
                {(!task.description.is_empty()).then(|| view! { <p class="task-description">{task.description}</p> })}
                {task.due_date.map(|due| view! { <div class="task-due">"⚠ " {due}</div> })}
            </div>
            <div class="task-actions">
                {task.link.map(|href| view! {
                    <a class="icon-btn" href=href target="_blank" rel="noopener noreferrer" title="Open link">"↗"</a>
                })}
                {(!task.is_mandatory).then(|| view! {
                    <DeleteConfirmButton label=delete_label on_confirm=move |_| ctx.dispatch(Action::DeleteCustomTask(delete_id.clone())) />
                })}
            </div>
        </div>
    }
}

#[component]
pub fn TaskTracker() -> impl IntoView {
    let store = use_app_store();
    let (adding, set_adding) = signal(false);

    let all_tasks = Memo::new(move |_| store.with(views::all_tasks));
    let completed = move || views::completed_count(&all_tasks.get());
    let total = move || all_tasks.get().len();

    view! {
        <div class="card">
            <div class="card-header">
                <h3>"Your Progress"</h3>
                <p class="muted">{move || format!("{} of {} tasks completed", completed(), total())}</p>
            </div>
            <progress max="100" value=move || views::progress_percentage(&all_tasks.get())></progress>
            <div class="progress-legend">
                <span>"✔ " {completed} " Complete"</span>
                <span>"○ " {move || total() - completed()} " Remaining"</span>
            </div>
        </div>

        <div class="card">
            <div class="card-header row">
                <div>
                    <h3>"Tasks"</h3>
                    <p class="muted">"Your personalized checklist"</p>
                </div>
                <Show when=move || !adding.get()>
                    <button class="primary-btn small" on:click=move |_| set_adding.set(true)>"+ Add Task"</button>
                </Show>
            </div>

            <Show when=move || adding.get()>
                <AddTaskForm on_done=move || set_adding.set(false) />
            </Show>

            <div class="task-list">
                <For
                    each=move || all_tasks.get()
                    key=|task| (task.id.clone(), task.is_completed)
                    children=move |task| view! { <TaskRow task=task /> }
                />
                <Show when=move || all_tasks.get().is_empty()>
                    <div class="empty-state">
                        <p>"No tasks yet. Add your first task!"</p>
                    </div>
                </Show>
            </div>
        </div>
    }
}
