//! Login page view.

use dioxus::prelude::*;
use ui::icons::FaWallet;
use ui::{use_session, Button, ButtonVariant, Icon, Input, Label};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_session();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go straight to the dashboard.
    if auth.is_authenticated() {
        nav.replace(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let mut auth = auth.clone();
        spawn(async move {
            error.set(None);

            let user = username().trim().to_string();
            let pass = password();

            if user.is_empty() {
                error.set(Some("Please enter your username or email".to_string()));
                return;
            }
            if pass.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            loading.set(true);
            match auth.login(&user, &pass).await {
                Ok(_) => {
                    nav.replace(Route::Dashboard {});
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            div {
                class: "auth-brand",
                Icon { icon: FaWallet, width: 24, height: 24 }
                span { "Finwatch" }
            }
            p { class: "auth-sub", "Sign in to your account" }

            form {
                onsubmit: handle_login,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                div {
                    Label { html_for: "login-username", "Username or email" }
                    Input {
                        id: "login-username",
                        placeholder: "juan",
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                }

                div {
                    Label { html_for: "login-password", "Password" }
                    Input {
                        id: "login-password",
                        r#type: "password",
                        placeholder: "••••••••",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "auth-switch",
                "Don't have an account? "
                Link { to: Route::Register {}, "Sign up" }
            }
        }
    }
}
