//! UI Components
//!
//! Leptos components. They read the store and dispatch actions; all state
//! rules live in `store` and `views`.

mod login_form;
mod onboarding_form;
mod sidebar;
mod dashboard_overview;
mod task_tracker;
mod social_feed;
mod discussions;
mod campus_map;
mod quick_links;
mod circular_progress;
mod delete_confirm_button;
mod category_selector;

pub use login_form::LoginForm;
pub use onboarding_form::OnboardingForm;
pub use sidebar::Sidebar;
pub use dashboard_overview::DashboardOverview;
pub use task_tracker::TaskTracker;
pub use social_feed::SocialFeed;
pub use discussions::Discussions;
pub use campus_map::CampusMap;
pub use quick_links::QuickLinks;
pub use circular_progress::CircularProgress;
pub use delete_confirm_button::DeleteConfirmButton;
pub use category_selector::CategorySelector;
