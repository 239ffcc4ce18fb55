//! Registration page view: local validation, then create-account with
//! auto-login.

use api::models::RegisterRequest;
use dioxus::prelude::*;
use ui::icons::FaWallet;
use ui::{use_session, use_toast, Button, ButtonVariant, Icon, Input, Label};

use crate::Route;

fn looks_like_email(value: &str) -> bool {
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// First local validation failure, if any. Cross-field checks (password
/// confirmation) included; none of these ever reach the network.
fn validate(
    full_name: &str,
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Option<String> {
    if full_name.len() < 2 {
        return Some("Please enter your full name".to_string());
    }
    if username.len() < 3 {
        return Some("Username must be at least 3 characters".to_string());
    }
    if !looks_like_email(email) {
        return Some("Please enter a valid email address".to_string());
    }
    if password.len() < 6 {
        return Some("Password must be at least 6 characters".to_string());
    }
    if password != confirm {
        return Some("Passwords do not match".to_string());
    }
    None
}

#[component]
pub fn Register() -> Element {
    let auth = use_session();
    let nav = use_navigator();
    let toast = use_toast();
    let mut full_name = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if auth.is_authenticated() {
        nav.replace(Route::Dashboard {});
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let mut auth = auth.clone();
        spawn(async move {
            error.set(None);

            let name = full_name().trim().to_string();
            let user = username().trim().to_string();
            let mail = email().trim().to_string();
            let pass = password();

            if let Some(problem) = validate(&name, &user, &mail, &pass, &confirm()) {
                error.set(Some(problem));
                return;
            }

            loading.set(true);
            let request = RegisterRequest {
                email: mail,
                username: user,
                full_name: Some(name),
                password: pass,
            };
            match auth.register(&request).await {
                Ok(_) => {
                    toast.success("Account created");
                    nav.replace(Route::Dashboard {});
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let pass = password();

    rsx! {
        div {
            class: "auth-page",

            div {
                class: "auth-brand",
                Icon { icon: FaWallet, width: 24, height: 24 }
                span { "Finwatch" }
            }
            p { class: "auth-sub", "Create your account" }

            form {
                onsubmit: handle_register,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                div {
                    Label { html_for: "reg-name", "Full name" }
                    Input {
                        id: "reg-name",
                        placeholder: "Juan Pérez",
                        value: full_name(),
                        oninput: move |evt: FormEvent| full_name.set(evt.value()),
                    }
                }

                div {
                    Label { html_for: "reg-username", "Username" }
                    Input {
                        id: "reg-username",
                        placeholder: "juan123",
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                }

                div {
                    Label { html_for: "reg-email", "Email" }
                    Input {
                        id: "reg-email",
                        r#type: "email",
                        placeholder: "juan@example.com",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }

                div {
                    Label { html_for: "reg-password", "Password" }
                    Input {
                        id: "reg-password",
                        r#type: "password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                    if !pass.is_empty() {
                        ul {
                            class: "password-hints",
                            li {
                                class: if pass.len() >= 6 { "met" } else { "" },
                                "At least 6 characters"
                            }
                            li {
                                class: if pass.chars().any(|c| c.is_ascii_digit()) { "met" } else { "" },
                                "Contains a number"
                            }
                            li {
                                class: if pass.chars().any(|c| c.is_uppercase()) { "met" } else { "" },
                                "Contains an uppercase letter"
                            }
                        }
                    }
                }

                div {
                    Label { html_for: "reg-confirm", "Confirm password" }
                    Input {
                        id: "reg-confirm",
                        r#type: "password",
                        value: confirm(),
                        oninput: move |evt: FormEvent| confirm.set(evt.value()),
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Create account" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in here" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_field_checks_catch_mismatches() {
        assert!(validate("Juan Pérez", "juan", "juan@example.com", "secret1", "secret2").is_some());
        assert!(validate("Juan Pérez", "juan", "juan@example.com", "secret1", "secret1").is_none());
    }

    #[test]
    fn email_format_is_checked_locally() {
        assert!(!looks_like_email("not-an-email"));
        assert!(!looks_like_email("a@b"));
        assert!(looks_like_email("juan@example.com"));
    }
}
