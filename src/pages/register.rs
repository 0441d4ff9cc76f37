//! Registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::RegisterRequest;
use crate::pages::login::credential_from;
use crate::state::notice::NoticeState;
use crate::state::session::SessionContext;
use crate::util::route::LOGIN_PATH;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Live checklist shown under the password fields.
#[must_use]
pub fn password_requirements(password: &str, confirm: &str) -> [(&'static str, bool); 2] {
    [
        ("At least 8 characters", password.chars().count() >= MIN_PASSWORD_LEN),
        ("Passwords match", !password.is_empty() && password == confirm),
    ]
}

#[derive(Debug, PartialEq, Eq)]
pub enum RegisterInputError {
    Incomplete,
    PasswordTooShort,
    Mismatch,
}

/// Trim the form and check it before submitting.
///
/// # Errors
///
/// See [`RegisterInputError`]; a mismatch is reported as a notice, the rest
/// keep the submit button disabled.
pub fn validate_register_input(
    email: &str,
    name: &str,
    password: &str,
    confirm: &str,
) -> Result<RegisterRequest, RegisterInputError> {
    let email = email.trim();
    let name = name.trim();
    if email.is_empty() || name.is_empty() || password.is_empty() || confirm.is_empty() {
        return Err(RegisterInputError::Incomplete);
    }
    if password != confirm {
        return Err(RegisterInputError::Mismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(RegisterInputError::PasswordTooShort);
    }
    Ok(RegisterRequest {
        email: email.to_owned(),
        name: name.to_owned(),
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let api = expect_context::<ApiClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let email = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let form_valid = move || validate_register_input(&email.get(), &name.get(), &password.get(), &confirm.get()).is_ok();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let req = match validate_register_input(&email.get(), &name.get(), &password.get(), &confirm.get()) {
            Ok(req) => req,
            Err(RegisterInputError::Mismatch) => {
                notices.update(|n| {
                    n.error("Password mismatch", "Please make sure your passwords match.");
                });
                return;
            }
            Err(_) => return,
        };
        busy.set(true);

        leptos::task::spawn_local(async move {
            let result = credential_from(api.register(&req).await, "Something went wrong. Please try again.")
                .and_then(|token| session.establish(&token).map_err(|e| e.to_string()));
            busy.set(false);
            match result {
                Ok(_) => {
                    notices.update(|n| {
                        n.success("Account created!", "Welcome to Digital Book Swap. Start sharing books today!");
                    });
                }
                Err(message) => {
                    leptos::logging::warn!("registration failed: {message}");
                    notices.update(|n| {
                        n.error("Registration failed", message);
                    });
                }
            }
        });
    };

    let field_type = move || if show_password.get() { "text" } else { "password" };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <p class="auth-card__subtitle">"Join the community and start sharing books"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label" for="register-email">
                        "Email address"
                    </label>
                    <input
                        id="register-email"
                        class="auth-form__input"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="auth-form__label" for="register-name">
                        "Name"
                    </label>
                    <input
                        id="register-name"
                        class="auth-form__input"
                        type="text"
                        placeholder="Enter your name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <label class="auth-form__label" for="register-password">
                        "Password"
                    </label>
                    <div class="auth-form__password">
                        <input
                            id="register-password"
                            class="auth-form__input"
                            type=field_type
                            placeholder="Create a password"
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
                    <label class="auth-form__label" for="register-confirm">
                        "Confirm password"
                    </label>
                    <input
                        id="register-confirm"
                        class="auth-form__input"
                        type=field_type
                        placeholder="Confirm your password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <ul class="auth-form__requirements">
                        {move || {
                            password_requirements(&password.get(), &confirm.get())
                                .into_iter()
                                .map(|(label, met)| {
                                    view! {
                                        <li class="auth-form__requirement" class:auth-form__requirement--met=met>
                                            {label}
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                    <button class="auth-form__submit" type="submit" disabled=move || busy.get() || !form_valid()>
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href=LOGIN_PATH>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
