//! Social Feed Component
//!
//! Experience sharing with keyword sentiment. Negative posts ask for
//! confirmation before they are published.

use leptos::prelude::*;

use crate::components::CategorySelector;
use crate::context::use_portal;
use crate::models::{Comment, CommentDraft, Sentiment, TaskCategory};
use crate::sentiment::analyze_sentiment;
use crate::store::{use_app_store, Action, AppStateStoreFields};
use crate::views;

#[component]
fn CommentCard(comment: Comment) -> impl IntoView {
    let ctx = use_portal();
    let id = comment.id.clone();

    view! {
        <div class="card comment-card">
            <span class="avatar">{views::initials(&comment.user_name)}</span>
            <div class="comment-body">
                <div class="comment-meta">
                    <span class="comment-author">{comment.user_name.clone()}</span>
                    <span class="badge outline">{comment.category.topic_label()}</span>
                    <span class=format!("sentiment {}", comment.sentiment.as_str())>
                        {comment.sentiment.icon()}
                    </span>
                </div>
                <p>{comment.content}</p>
                <div class="comment-footer">
                    <button class="ghost-btn small" on:click=move |_| ctx.dispatch(Action::LikeComment(id.clone()))>
                        "♥ " {comment.likes}
                    </button>
                    <span class="muted small">{comment.created_at.format("%d/%m/%Y").to_string()}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SocialFeed() -> impl IntoView {
    let ctx = use_portal();
    let store = use_app_store();

    let (text, set_text) = signal(String::new());
    let (category, set_category) = signal(Some(TaskCategory::Other));
    let (filter, set_filter) = signal::<Option<TaskCategory>>(None);
    // negative comment waiting for "Post Anyway"
    let (pending, set_pending) = signal::<Option<String>>(None);

    let publish = move |content: String, sentiment: Sentiment| {
        ctx.dispatch(Action::AddComment(CommentDraft {
            content,
            category: category.get().unwrap_or_default(),
            sentiment,
        }));
        set_text.set(String::new());
        set_pending.set(None);
    };

    let submit = move |_| {
        let content = text.get();
        if content.trim().is_empty() {
            return;
        }
        match analyze_sentiment(&content) {
            Sentiment::Negative => set_pending.set(Some(content)),
            sentiment => publish(content, sentiment),
        }
    };

    let filtered = move || store.comments().with(|c| views::filter_comments(c, filter.get()));

    view! {
        <div class="social-feed">
            {move || pending.get().map(|content| view! {
                <div class="alert destructive">
                    <strong>"⚠ Sentiment Warning"</strong>
                    <p>"Your comment appears to have a negative tone. This feedback will still be shared to help other students."</p>
                    <div class="form-actions">
                        <button class="outline-btn small" on:click=move |_| set_pending.set(None)>"Edit Comment"</button>
                        <button
                            class="primary-btn small"
                            on:click=move |_| publish(content.clone(), Sentiment::Negative)
                        >
                            "Post Anyway"
                        </button>
                    </div>
                </div>
            })}

            <div class="card">
                <div class="card-header">
                    <h3>"Share Your Experience"</h3>
                    <p class="muted">"Help other students with tips and insights"</p>
                </div>
                <textarea
                    placeholder="Share a tip or experience about settling in at NUIG..."
                    prop:value=move || text.get()
                    on:input=move |ev| set_text.set(event_target_value(&ev))
                ></textarea>
                <div class="form-actions spread">
                    <CategorySelector
                        current=category
                        on_change={move |c: Option<TaskCategory>| {
                            set_category.set(c.or(Some(TaskCategory::Other)))
                        }}
                        topic_labels=true
                    />
                    <button
                        class="primary-btn"
                        disabled=move || text.get().trim().is_empty()
                        on:click=submit
                    >
                        "💬 Post"
                    </button>
                </div>
            </div>

            <div class="filter-row">
                <span class="muted">"Filter by:"</span>
                <CategorySelector
                    current=filter
                    on_change={move |c: Option<TaskCategory>| set_filter.set(c)}
                    topic_labels=true
                    all_label="All Topics"
                />
            </div>

            <div class="comment-list">
                <For
                    each=filtered
                    key=|c| (c.id.clone(), c.likes)
                    children=move |comment| view! { <CommentCard comment=comment /> }
                />
                <Show when=move || filtered().is_empty()>
                    <div class="card empty-state">
                        <p>"No experiences shared yet. Be the first!"</p>
                    </div>
                </Show>
            </div>
        </div>
    }
}
