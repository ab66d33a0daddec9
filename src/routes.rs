//! Session Routing
//!
//! Which screen to show for the requested route and the current session flags.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Unauthenticated,
    AuthenticatedNotOnboarded,
    Onboarded,
}

impl SessionPhase {
    pub fn from_flags(is_authenticated: bool, is_onboarded: bool) -> Self {
        match (is_authenticated, is_onboarded) {
            (false, _) => SessionPhase::Unauthenticated,
            (true, false) => SessionPhase::AuthenticatedNotOnboarded,
            (true, true) => SessionPhase::Onboarded,
        }
    }
}

#[cfg(test)]
impl SessionPhase {
    pub fn of(state: &crate::store::AppState) -> Self {
        Self::from_flags(state.is_authenticated, state.is_onboarded)
    }
}

/// Dashboard sub-pages
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Overview,
    Tasks,
    Social,
    /// Forum, optionally pre-filtered by a category label
    Discussions { category: Option<String> },
    Map,
    Links,
}

impl Page {
    /// Sidebar highlight ignores the discussion filter
    pub fn same_section(&self, other: &Page) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Onboarding,
    Dashboard(Page),
}

/// Redirect the requested route to the one allowed in `phase`
pub fn guard(requested: Route, phase: SessionPhase) -> Route {
    match phase {
        SessionPhase::Unauthenticated => Route::Login,
        SessionPhase::AuthenticatedNotOnboarded => Route::Onboarding,
        SessionPhase::Onboarded => match requested {
            Route::Dashboard(page) => Route::Dashboard(page),
            Route::Login | Route::Onboarding => Route::Dashboard(Page::Overview),
        },
    }
}

/// Sidebar entries: (name, emoji, page)
pub fn navigation() -> Vec<(&'static str, &'static str, Page)> {
    vec![
        ("Dashboard", "📊", Page::Overview),
        ("My Tasks", "✅", Page::Tasks),
        ("Social", "👥", Page::Social),
        ("Discussions", "💬", Page::Discussions { category: None }),
        ("Campus Map", "🗺️", Page::Map),
        ("Quick Links", "🔗", Page::Links),
    ]
}
