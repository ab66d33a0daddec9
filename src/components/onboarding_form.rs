//! Onboarding Form Component
//!
//! Nationality type and degree programme; completing it materializes the
//! mandatory checklist.

use leptos::prelude::*;

use crate::context::use_portal;
use crate::models::Nationality;
use crate::reference::DEGREES;
use crate::routes::{Page, Route};
use crate::store::{use_app_store, Action, AppStateStoreFields};
use crate::validation::validate_onboarding;
use crate::views::first_name;

#[component]
pub fn OnboardingForm() -> impl IntoView {
    let ctx = use_portal();
    let store = use_app_store();

    let (nationality, set_nationality) = signal::<Option<Nationality>>(None);
    let (degree, set_degree) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let greeting = move || {
        store
            .user()
            .with(|u| u.as_ref().map(|u| first_name(&u.name).to_string()))
            .unwrap_or_default()
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        match validate_onboarding(nationality.get(), &degree.get()) {
            Ok((nationality, degree)) => {
                ctx.dispatch(Action::CompleteOnboarding { nationality, degree });
                ctx.navigate(Route::Dashboard(Page::Overview));
            }
            Err(e) => set_error.set(Some(e.message().to_string())),
        }
    };

    view! {
        <div class="card onboarding-card">
            <div class="card-header centered">
                <h2>"Welcome, " {greeting} "!"</h2>
                <p class="muted">"Let's personalize your experience"</p>
            </div>
            <form class="onboarding-form" on:submit=on_submit>
                <label>"🌍 Nationality Type"</label>
                <select on:change=move |ev| set_nationality.set(Nationality::from_key(&event_target_value(&ev)))>
                    <option value="" selected=move || nationality.get().is_none()>
                        "Select your nationality type"
                    </option>
                    {Nationality::ALL.into_iter().map(|n| view! {
                        <option value=n.as_str() selected=move || nationality.get() == Some(n)>
                            {n.onboarding_label()}
                        </option>
                    }).collect_view()}
                </select>
                <p class="hint">"This helps us show you relevant tasks and requirements"</p>

                <label>"📖 Degree Programme"</label>
                <select on:change=move |ev| set_degree.set(event_target_value(&ev))>
                    <option value="" selected=move || degree.get().is_empty()>"Select your degree"</option>
                    {DEGREES.iter().map(|d| {
                        let d = *d;
                        view! { <option value=d selected=move || degree.get() == d>{d}</option> }
                    }).collect_view()}
                </select>

                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <button type="submit" class="primary-btn full-width">"Get Started →"</button>
            </form>
        </div>
    }
}
