//! Dashboard Overview Component
//!
//! Welcome header, compact checklist with inline add, discussion shortcuts
//! for pending categories and the quick links.

use leptos::prelude::*;

use crate::components::{CircularProgress, QuickLinks};
use crate::context::use_portal;
use crate::models::{TaskCategory, TaskDraft};
use crate::routes::{Page, Route};
use crate::store::{use_app_store, Action, AppStateStoreFields};
use crate::validation::validate_task_title;
use crate::views;

const RECENT_DISCUSSIONS: usize = 3;

/// Title-only task input shown at the bottom of the list
#[component]
fn InlineTaskInput(on_close: impl Fn() + Copy + 'static) -> impl IntoView {
    let ctx = use_portal();
    let (title, set_title) = signal(String::new());

    let add = move || {
        if let Ok(title) = validate_task_title(&title.get()) {
            ctx.dispatch(Action::AddCustomTask(TaskDraft { title, ..Default::default() }));
            set_title.set(String::new());
            on_close();
        }
    };

    view! {
        <div class="inline-task-input">
            <input
                type="text"
                placeholder="Enter task title..."
                autofocus=true
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                    "Enter" => add(),
                    "Escape" => on_close(),
                    _ => {}
                }
            />
            <button class="primary-btn small" on:click=move |_| add()>"Add"</button>
            <button class="outline-btn small" on:click=move |_| on_close()>"Cancel"</button>
        </div>
    }
}

#[component]
pub fn DashboardOverview() -> impl IntoView {
    let ctx = use_portal();
    let store = use_app_store();
    let (adding, set_adding) = signal(false);

    let all_tasks = Memo::new(move |_| store.with(views::all_tasks));
    let progress = Signal::derive(move || views::progress_percentage(&all_tasks.get()));
    let pending = move || views::pending_categories(&all_tasks.get());
    let recent =
        move || store.discussions().with(|d| views::recent_discussions(d, RECENT_DISCUSSIONS));

    let first_name = move || {
        store
            .user()
            .with(|u| u.as_ref().map(|u| views::first_name(&u.name).to_string()))
            .unwrap_or_default()
    };
    let nationality = move || {
        store.user().with(|u| u.as_ref().map(|u| u.nationality.label()).unwrap_or_default())
    };
    let degree =
        move || store.user().with(|u| u.as_ref().map(|u| u.degree.clone()).unwrap_or_default());

    view! {
        <div class="overview">
            <div class="welcome-banner">
                <h1>"📚 Welcome back, " {first_name} "!"</h1>
                <p>"Here's your progress at University of Galway"</p>
                <div class="badge-row">
                    <span class="badge pill">"🌍 " {nationality}</span>
                    <span class="badge pill">"🎓 " {degree}</span>
                </div>
            </div>

            <div class="card">
                <div class="card-header row">
                    <div>
                        <h2>"📋 Total Tasks"</h2>
                        <p class="muted">{move || format!("{} tasks in your list", all_tasks.get().len())}</p>
                    </div>
                    <CircularProgress value=progress size=60.0 stroke_width=6.0 />
                </div>

                <div class="task-list compact">
                    <For
                        each=move || all_tasks.get()
                        key=|task| (task.id.clone(), task.is_completed)
                        children=move |task| {
                            let id = task.id.clone();
                            let time_sensitive = views::is_time_sensitive(&task);
                            view! {
                                <div class=if task.is_completed { "task-row compact completed" } else { "task-row compact" }>
                                    <input
                                        type="checkbox"
                                        prop:checked=task.is_completed
                                        on:change=move |_| ctx.dispatch(Action::ToggleTask(id.clone()))
                                    />
                                    <span class="task-emoji">{task.category.emoji()}</span>
                                    <span class="task-title">{task.title}</span>
                                    {time_sensitive.then(|| view! {
                                        <span class="badge warning">"⏱ 90 days after arrival"</span>
                                    })}
                                </div>
                            }
                        }
                    />

                    <Show
                        when=move || adding.get()
                        fallback=move || view! {
                            <Show when=move || all_tasks.get().is_empty()>
                                <p class="empty-state">"No tasks yet. Add one to get started!"</p>
                            </Show>
                            <button class="add-task-btn" on:click=move |_| set_adding.set(true)>"+ Add New Task"</button>
                        }
                    >
                        <InlineTaskInput on_close=move || set_adding.set(false) />
                    </Show>
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <h3>"💬 Discussions"</h3>
                    <p class="muted">"Quick access to topic discussions for your tasks"</p>
                </div>
                <div class="bubble-row">
                    {move || pending().into_iter().map(|category: TaskCategory| view! {
                        <button
                            class=format!("bubble category-{}", category.as_str())
                            on:click=move |_| ctx.navigate(Route::Dashboard(Page::Discussions {
                                category: Some(category.as_str().to_string()),
                            }))
                        >
                            {category.emoji()} " " {category.label()}
                        </button>
                    }).collect_view()}
                    <button
                        class="bubble dashed"
                        on:click=move |_| ctx.navigate(Route::Dashboard(Page::Discussions { category: None }))
                    >
                        "💬 All Discussions"
                    </button>
                </div>

                <div class="recent-discussions">
                    {move || {
                        let recent = recent();
                        if recent.is_empty() {
                            return view! { <p class="muted centered">"No discussions yet"</p> }.into_any();
                        }
                        recent.into_iter().map(|d| {
                            let emoji = TaskCategory::from_key(&d.category).map(|c| c.emoji()).unwrap_or("💬");
                            let category = d.category.clone();
                            view! {
                                <button
                                    class="discussion-preview"
                                    on:click=move |_| ctx.navigate(Route::Dashboard(Page::Discussions {
                                        category: Some(category.clone()),
                                    }))
                                >
                                    <span class="preview-emoji">{emoji}</span>
                                    <div class="preview-text">
                                        <p class="preview-title">{d.title}</p>
                                        <p class="muted">{format!("{} replies", d.replies.len())}</p>
                                    </div>
                                    <span class="badge outline">{d.category}</span>
                                </button>
                            }
                        }).collect_view().into_any()
                    }}
                </div>
            </div>

            <QuickLinks />
        </div>
    }
}
