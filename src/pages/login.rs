//! Login page: email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::api::{ApiClient, ApiError};
use crate::net::types::{AuthResponse, LoginRequest};
use crate::state::notice::NoticeState;
use crate::state::session::SessionContext;
use crate::util::route::REGISTER_PATH;

/// Trim the form and require both fields.
///
/// # Errors
///
/// Returns the inline message shown under the form.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Credential from a login or registration response, or the message to show.
pub(crate) fn credential_from(result: Result<AuthResponse, ApiError>, fallback: &str) -> Result<String, String> {
    result.map(|resp| resp.token).map_err(|err| err.user_message(fallback))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let api = expect_context::<ApiClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let req = match validate_login_input(&email.get(), &password.get()) {
            Ok(req) => req,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        info.set(String::new());
        busy.set(true);

        leptos::task::spawn_local(async move {
            let result = credential_from(api.login(&req).await, "Please check your credentials and try again.")
                .and_then(|token| session.establish(&token).map_err(|e| e.to_string()));
            busy.set(false);
            match result {
                Ok(_) => {
                    notices.update(|n| {
                        n.success("Welcome back!", "Successfully logged in to your account.");
                    });
                }
                Err(message) => {
                    leptos::logging::warn!("login failed: {message}");
                    notices.update(|n| {
                        n.error("Login failed", message);
                    });
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to your account to continue sharing books"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label" for="login-email">
                        "Email address"
                    </label>
                    <input
                        id="login-email"
                        class="auth-form__input"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="auth-form__label" for="login-password">
                        "Password"
                    </label>
                    <div class="auth-form__password">
                        <input
                            id="login-password"
                            class="auth-form__input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="auth-form__reveal"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <button
                        class="auth-form__submit"
                        type="submit"
                        disabled=move || busy.get() || email.get().trim().is_empty() || password.get().is_empty()
                    >
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                    <Show when=move || !info.get().is_empty()>
                        <p class="auth-form__message">{move || info.get()}</p>
                    </Show>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a href=REGISTER_PATH>"Create one now"</a>
                </p>
            </div>
        </div>
    }
}
