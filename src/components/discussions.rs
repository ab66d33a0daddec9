//! Discussions Component
//!
//! Topic threads filtered by category, with a create form and inline replies.

use leptos::prelude::*;

use crate::context::use_portal;
use crate::models::{Discussion, TaskCategory};
use crate::store::{use_app_store, Action, AppStateStoreFields};
use crate::validation::{validate_discussion, validate_reply};
use crate::views;

fn category_label(key: &str) -> String {
    TaskCategory::from_key(key)
        .map(|c| c.label().to_string())
        .unwrap_or_else(|| key.to_string())
}

fn empty_message(selected: Option<&str>) -> String {
    match selected {
        Some(key) => format!("No discussions in {} yet.", category_label(key)),
        None => "No discussions yet. Start the conversation!".to_string(),
    }
}

/// Category preselected in the create form: the active filter, else none
fn initial_form_category(filter: Option<&str>) -> String {
    filter.map(str::to_string).unwrap_or_default()
}

/// Form for a new discussion thread
#[component]
fn NewDiscussionForm(
    default_category: Option<String>,
    on_done: impl Fn() + Copy + 'static,
) -> impl IntoView {
    let ctx = use_portal();

    let (title, set_title) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let (category, set_category) = signal(initial_form_category(default_category.as_deref()));
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match validate_discussion(&title.get(), &content.get(), &category.get()) {
            Ok(draft) => {
                ctx.dispatch(Action::AddDiscussion(draft));
                on_done();
            }
            Err(e) => set_error.set(Some(e.message().to_string())),
        }
    };

    view! {
        <form class="card discussion-form" on:submit=on_submit>
            <h4>"Start a Discussion"</h4>
            <input
                type="text"
                placeholder="Discussion title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                placeholder="What would you like to discuss?"
                prop:value=move || content.get()
                on:input=move |ev| set_content.set(event_target_value(&ev))
            ></textarea>
            <select class="category-select" on:change=move |ev| set_category.set(event_target_value(&ev))>
                <option value="" selected=move || category.with(String::is_empty)>"Select category"</option>
                {TaskCategory::ALL.into_iter().map(|c| view! {
                    <option value=c.as_str() selected=move || category.get() == c.as_str()>
                        {c.emoji()} " " {c.label()}
                    </option>
                }).collect_view()}
            </select>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <div class="form-actions">
                <button type="submit" class="primary-btn">"Post Discussion"</button>
                <button type="button" class="outline-btn" on:click=move |_| on_done()>"Cancel"</button>
            </div>
        </form>
    }
}

/// Collapsible thread with its replies
#[component]
fn DiscussionThread(discussion: Discussion) -> impl IntoView {
    let ctx = use_portal();
    let store = use_app_store();
    let (expanded, set_expanded) = signal(false);
    let (reply, set_reply) = signal(String::new());

    let id = StoredValue::new(discussion.id.clone());
    // rows are keyed by id, so replies are read live from the store
    let replies = Memo::new(move |_| {
        let id = id.get_value();
        store
            .discussions()
            .with(|d| d.iter().find(|d| d.id == id).map(|d| d.replies.clone()).unwrap_or_default())
    });

    let send = move || {
        if let Ok(content) = validate_reply(&reply.get()) {
            ctx.dispatch(Action::AddReply { discussion_id: id.get_value(), content });
            set_reply.set(String::new());
        }
    };

    view! {
        <div class="card discussion-thread">
            <div class="thread-header" on:click=move |_| set_expanded.update(|v| *v = !*v)>
                <span class="avatar">{views::initials(&discussion.user_name)}</span>
                <div class="thread-summary">
                    <h4>{discussion.title}</h4>
                    <div class="thread-meta">
                        <span>{discussion.user_name.clone()}</span>
                        <span class="badge outline">{category_label(&discussion.category)}</span>
                        <span class="muted small">{discussion.created_at.format("%d/%m/%Y").to_string()}</span>
                    </div>
                </div>
                <span class="reply-count">{move || format!("💬 {}", replies.with(Vec::len))}</span>
                <span class="chevron">{move || if expanded.get() { "▾" } else { "▸" }}</span>
            </div>
            <p class="thread-content">{discussion.content}</p>

            <Show when=move || expanded.get()>
                <div class="reply-list">
                    {move || replies.get().into_iter().map(|r| view! {
                        <div class="reply">
                            <span class="avatar small">{views::initials(&r.user_name)}</span>
                            <div>
                                <span class="reply-author">{r.user_name.clone()}</span>
                                <span class="muted small">{r.created_at.format("%d/%m/%Y %H:%M").to_string()}</span>
                                <p>{r.content}</p>
                            </div>
                        </div>
                    }).collect_view()}
                    <Show when=move || replies.with(Vec::is_empty)>
                        <p class="muted">"No replies yet."</p>
                    </Show>
                </div>
                <div class="reply-input">
                    <input
                        type="text"
                        placeholder="Write a reply..."
                        prop:value=move || reply.get()
                        on:input=move |ev| set_reply.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                send();
                            }
                        }
                    />
                    <button class="primary-btn small" disabled=move || reply.get().trim().is_empty() on:click=move |_| send()>
                        "Send"
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn Discussions(initial_category: Option<String>) -> impl IntoView {
    let store = use_app_store();
    let (selected, set_selected) = signal(initial_category);
    let (creating, set_creating) = signal(false);

    let filtered = move || {
        let selected = selected.get();
        store.discussions().with(|d| views::filter_discussions(d, selected.as_deref()))
    };

    let chip_class = move |key: Option<&'static str>| {
        let active = selected.with(|s| s.as_deref() == key);
        if active { "chip active" } else { "chip" }
    };

    view! {
        <div class="discussions">
            <div class="page-header row">
                <div>
                    <h1>"Discussions"</h1>
                    <p class="muted">"Ask questions and help fellow students with each task"</p>
                </div>
                <Show when=move || !creating.get()>
                    <button class="primary-btn" on:click=move |_| set_creating.set(true)>"+ New Discussion"</button>
                </Show>
            </div>

            <div class="chip-row">
                <button class=move || chip_class(None) on:click=move |_| set_selected.set(None)>"All"</button>
                {TaskCategory::ALL.into_iter().map(|c| view! {
                    <button
                        class=move || chip_class(Some(c.as_str()))
                        on:click=move |_| set_selected.set(Some(c.as_str().to_string()))
                    >
                        {c.emoji()} " " {c.label()}
                    </button>
                }).collect_view()}
            </div>

            <Show when=move || creating.get()>
                <NewDiscussionForm default_category=selected.get_untracked() on_done=move || set_creating.set(false) />
            </Show>

            <div class="discussion-list">
                <For
                    each=filtered
                    key=|d| d.id.clone()
                    children=move |discussion| view! { <DiscussionThread discussion=discussion /> }
                />
                <Show when=move || filtered().is_empty()>
                    <div class="card empty-state">
                        <p>{move || selected.with(|s| empty_message(s.as_deref()))}</p>
                    </div>
                </Show>
            </div>
        </div>
    }
}
