//! Quick Links Component

use leptos::prelude::*;

use crate::reference::{quick_link_emoji, QUICK_LINKS};

#[component]
pub fn QuickLinks() -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-header">
                <h3>"🔗 University Resources"</h3>
                <p class="muted">"Quick access to important NUIG services"</p>
            </div>
            <div class="link-grid">
                {QUICK_LINKS.iter().map(|link| view! {
                    <a class="link-card" href=link.url target="_blank" rel="noopener noreferrer">
                        <span class="link-emoji">{quick_link_emoji(link.icon)}</span>
                        <div class="link-text">
                            <span class="link-title">{link.title} " ↗"</span>
                            <p class="muted">{link.description}</p>
                        </div>
                    </a>
                }).collect_view()}
            </div>
        </div>
    }
}
