//! Portal Frontend App
//!
//! Starts the controller, provides context and switches between the login,
//! onboarding and dashboard screens according to the session flags.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    CampusMap, DashboardOverview, Discussions, LoginForm, OnboardingForm, QuickLinks, Sidebar,
    SocialFeed, TaskTracker,
};
use crate::config::PortalConfig;
use crate::context::{use_portal, PortalContext};
use crate::controller::Controller;
use crate::env::{RandomIds, SystemClock};
use crate::persistence::LocalStoragePersistence;
use crate::routes::{guard, Page, Route, SessionPhase};
use crate::store::AppStateStoreFields;
use crate::views;

#[component]
pub fn App() -> impl IntoView {
    let config = PortalConfig::default();
    let persistence = LocalStoragePersistence::new(config.storage_key, config.storage_version);
    let controller = Controller::start(persistence, RandomIds, SystemClock);

    let store = Store::new(controller.state().clone());
    let (route, set_route) = signal(Route::Dashboard(Page::Overview));

    // Provide context to all children
    provide_context(store);
    let portal = PortalContext::new(store, controller, (route, set_route), config);
    provide_context(portal);

    let current = Memo::new(move |_| {
        let phase =
            SessionPhase::from_flags(store.is_authenticated().get(), store.is_onboarded().get());
        guard(portal.route.get(), phase)
    });

    view! {
        {move || match current.get() {
            Route::Login => view! { <LoginScreen /> }.into_any(),
            Route::Onboarding => view! { <OnboardingScreen /> }.into_any(),
            Route::Dashboard(page) => view! { <DashboardLayout page=page /> }.into_any(),
        }}
    }
}

/// Branding panel plus login form
#[component]
fn LoginScreen() -> impl IntoView {
    let features = [
        ("✅", "Task Tracker", "Personalized checklist based on your nationality"),
        ("👥", "Student Community", "Connect and share experiences with fellow students"),
        ("📍", "Campus Map", "Navigate the campus with integrated maps"),
        ("🎓", "Quick Links", "All university resources at your fingertips"),
    ];

    view! {
        <main class="login-screen">
            <div class="brand-panel">
                <div class="brand-header">
                    <span class="brand-icon">"🎓"</span>
                    <div>
                        <h1>"NUIG Student Portal"</h1>
                        <p>"University of Galway"</p>
                    </div>
                </div>
                <h2>"Your Complete Guide to Student Life in Galway"</h2>
                <p>"Track tasks, connect with students, and access all university resources in one place."</p>
                <div class="feature-grid">
                    {features.into_iter().map(|(emoji, title, text)| view! {
                        <div class="feature-card">
                            <span class="feature-icon">{emoji}</span>
                            <h3>{title}</h3>
                            <p>{text}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
            <div class="login-panel">
                <LoginForm />
            </div>
        </main>
    }
}

#[component]
fn OnboardingScreen() -> impl IntoView {
    view! {
        <main class="onboarding-screen">
            <div class="onboarding-logo">"🎓"</div>
            <OnboardingForm />
        </main>
    }
}

/// Sidebar + page content for signed-in, onboarded students
#[component]
fn DashboardLayout(page: Page) -> impl IntoView {
    let ctx = use_portal();
    let (sidebar_open, set_sidebar_open) = signal(false);
    let active = page.clone();
    let progress = move || ctx.store.with(|s| views::progress_percentage(&views::all_tasks(s)));

    let content = match page {
        Page::Overview => view! { <DashboardOverview /> }.into_any(),
        Page::Tasks => view! {
            <PageHeader title="My Tasks" subtitle="Track your progress on essential tasks" />
            <TaskTracker />
        }.into_any(),
        Page::Social => view! {
            <PageHeader title="Student Experiences" subtitle="Read and share experiences with fellow students" />
            <SocialFeed />
        }.into_any(),
        Page::Discussions { category } => {
            view! { <Discussions initial_category=category /> }.into_any()
        }
        Page::Map => view! {
            <PageHeader title="Campus Map" subtitle="Find your way around University of Galway" />
            <CampusMap />
        }.into_any(),
        Page::Links => view! {
            <PageHeader title="University Resources" subtitle="Quick access to all NUIG services and portals" />
            <QuickLinks />
        }.into_any(),
    };

    view! {
        <div class="dashboard-layout">
            <div
                class=move || if sidebar_open.get() { "sidebar-overlay open" } else { "sidebar-overlay" }
                on:click=move |_| set_sidebar_open.set(false)
            ></div>
            <div class=move || if sidebar_open.get() { "sidebar-slot open" } else { "sidebar-slot" }>
                <Sidebar active=active on_navigate=Callback::new(move |_| set_sidebar_open.set(false)) />
            </div>

            <div class="dashboard-main">
                <header class="mobile-header">
                    <button class="menu-btn" on:click=move |_| set_sidebar_open.update(|v| *v = !*v)>
                        {move || if sidebar_open.get() { "✕" } else { "☰" }}
                    </button>
                    <span>"NUIG Portal"</span>
                    <span class="mobile-progress">
                        {move || format!("{:.0}%", progress())}
                    </span>
                </header>
                <main class="page-content">{content}</main>
            </div>
        </div>
    }
}

#[component]
fn PageHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="page-header">
            <h1>{title}</h1>
            <p class="muted">{subtitle}</p>
        </div>
    }
}
