//! Login Form Component
//!
//! University email + name. Validation happens here, the store accepts anything.

use leptos::prelude::*;

use crate::context::use_portal;
use crate::routes::{Page, Route};
use crate::store::Action;
use crate::validation::validate_login;

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_portal();

    let (email, set_email) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        match validate_login(&ctx.config, &email.get(), &name.get()) {
            Ok((email, name)) => {
                ctx.dispatch(Action::Login { email, name });
                // the route guard sends non-onboarded students to onboarding
                ctx.navigate(Route::Dashboard(Page::Overview));
            }
            Err(e) => set_error.set(Some(e.message().to_string())),
        }
    };

    view! {
        <div class="card login-card">
            <div class="card-header centered">
                <div class="login-icon">"🎓"</div>
                <h2>"Welcome to NUIG Portal"</h2>
                <p class="muted">"Sign in with your University of Galway email"</p>
            </div>
            <form class="login-form" on:submit=on_submit>
                <label for="name">"Full Name"</label>
                <input
                    id="name"
                    type="text"
                    placeholder="John Doe"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <label for="email">"University Email"</label>
                <input
                    id="email"
                    type="email"
                    placeholder="student@universityofgalway.ie"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <button type="submit" class="primary-btn full-width">"Continue"</button>
            </form>
            <p class="fine-print">"By continuing, you agree to our Terms of Service and Privacy Policy"</p>
        </div>
    }
}
