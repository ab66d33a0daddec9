//! Sidebar Component
//!
//! Section navigation, signed-in user card and sign out.

use leptos::prelude::*;

use crate::context::use_portal;
use crate::routes::{navigation, Page, Route};
use crate::store::{use_app_store, Action, AppStateStoreFields};
use crate::views::initials;

#[component]
pub fn Sidebar(
    active: Page,
    /// Called after any navigation (closes the mobile drawer)
    #[prop(into)] on_navigate: Callback<()>,
) -> impl IntoView {
    let ctx = use_portal();
    let store = use_app_store();

    let user_name =
        move || store.user().with(|u| u.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let user_degree =
        move || store.user().with(|u| u.as_ref().map(|u| u.degree.clone()).unwrap_or_default());

    let sign_out = move |_| {
        ctx.dispatch(Action::Logout);
        ctx.navigate(Route::Login);
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <span class="brand-icon">"📚"</span>
                <div>
                    <h1>"NUIG Portal"</h1>
                    <p class="muted">"University of Galway"</p>
                </div>
            </div>

            <nav class="sidebar-nav">
                {navigation().into_iter().map(|(name, emoji, page)| {
                    let is_active = page.same_section(&active);
                    view! {
                        <button
                            class=if is_active { "nav-item active" } else { "nav-item" }
                            on:click=move |_| {
                                ctx.navigate(Route::Dashboard(page.clone()));
                                on_navigate.run(());
                            }
                        >
                            <span class="nav-emoji">{emoji}</span>
                            {name}
                        </button>
                    }
                }).collect_view()}
            </nav>

            <div class="sidebar-user">
                <div class="user-row">
                    <span class="avatar">{move || initials(&user_name())}</span>
                    <div class="user-text">
                        <p class="user-name">{user_name}</p>
                        <p class="muted">{user_degree}</p>
                    </div>
                </div>
                <button class="outline-btn full-width" on:click=sign_out>
                    <span>"🚪"</span>
                    "Sign Out"
                </button>
            </div>
        </aside>
    }
}
