//! Profile view: edit profile fields, change password.

use api::models::UserUpdate;
use dioxus::prelude::*;
use ui::{
    format, use_session, use_toast, Button, ButtonVariant, Input, Label, PageCard,
};

use super::non_empty;

#[component]
pub fn Profile() -> Element {
    let session = use_session();
    let toast = use_toast();

    let user = session.user();
    let mut full_name = use_signal(|| {
        session
            .user()
            .and_then(|u| u.full_name)
            .unwrap_or_default()
    });
    let mut email = use_signal(|| session.user().map(|u| u.email).unwrap_or_default());
    let mut profile_error = use_signal(|| Option::<String>::None);
    let mut saving_profile = use_signal(|| false);

    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut password_error = use_signal(|| Option::<String>::None);
    let mut saving_password = use_signal(|| false);

    let handle_profile = {
        let session = session.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let mut session = session.clone();
            spawn(async move {
                profile_error.set(None);
                let Some(user) = session.user() else { return };

                let mail = email().trim().to_string();
                if !mail.contains('@') {
                    profile_error.set(Some("Please enter a valid email address".to_string()));
                    return;
                }

                let changes = UserUpdate {
                    email: (mail != user.email).then_some(mail),
                    username: None,
                    full_name: non_empty(full_name()),
                };

                saving_profile.set(true);
                let client = session.client();
                let result = api::users::update_profile(&client, user.id, &changes).await;
                saving_profile.set(false);

                if result.is_ok() {
                    // Merge the confirmed edit into the cached profile; no
                    // re-fetch needed.
                    session.update_user(&changes);
                    toast.success("Profile updated");
                }
            });
        }
    };

    let handle_password = {
        let session = session.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let session = session.clone();
            spawn(async move {
                password_error.set(None);
                let Some(user) = session.user() else { return };

                let current = current_password();
                let new = new_password();
                if current.is_empty() {
                    password_error.set(Some("Enter your current password".to_string()));
                    return;
                }
                if new.len() < 6 {
                    password_error.set(Some("New password must be at least 6 characters".to_string()));
                    return;
                }
                if new != confirm_password() {
                    password_error.set(Some("Passwords do not match".to_string()));
                    return;
                }

                saving_password.set(true);
                let client = session.client();
                let result = api::users::change_password(&client, user.id, &current, &new).await;
                saving_password.set(false);

                if result.is_ok() {
                    current_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                    toast.success("Password changed");
                }
            });
        }
    };

    rsx! {
        div {
            class: "view",
            header {
                class: "view-header",
                div {
                    h1 { "Profile" }
                    if let Some(user) = &user {
                        p {
                            class: "view-header__sub",
                            "@{user.username} · member since {format::date(&user.created_at)}"
                        }
                    }
                }
            }

            div {
                class: "profile-grid",
                PageCard {
                    title: "Account",
                    form {
                        onsubmit: handle_profile,
                        class: "auth-form",
                        if let Some(err) = profile_error() {
                            div { class: "form-error", "{err}" }
                        }
                        div {
                            Label { html_for: "profile-name", "Full name" }
                            Input {
                                id: "profile-name",
                                value: full_name(),
                                oninput: move |evt: FormEvent| full_name.set(evt.value()),
                            }
                        }
                        div {
                            Label { html_for: "profile-email", "Email" }
                            Input {
                                id: "profile-email",
                                r#type: "email",
                                value: email(),
                                oninput: move |evt: FormEvent| email.set(evt.value()),
                            }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: saving_profile(),
                            if saving_profile() { "Saving..." } else { "Save changes" }
                        }
                    }
                }

                PageCard {
                    title: "Change password",
                    form {
                        onsubmit: handle_password,
                        class: "auth-form",
                        if let Some(err) = password_error() {
                            div { class: "form-error", "{err}" }
                        }
                        div {
                            Label { html_for: "password-current", "Current password" }
                            Input {
                                id: "password-current",
                                r#type: "password",
                                value: current_password(),
                                oninput: move |evt: FormEvent| current_password.set(evt.value()),
                            }
                        }
                        div {
                            Label { html_for: "password-new", "New password" }
                            Input {
                                id: "password-new",
                                r#type: "password",
                                value: new_password(),
                                oninput: move |evt: FormEvent| new_password.set(evt.value()),
                            }
                        }
                        div {
                            Label { html_for: "password-confirm", "Confirm new password" }
                            Input {
                                id: "password-confirm",
                                r#type: "password",
                                value: confirm_password(),
                                oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                            }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: saving_password(),
                            if saving_password() { "Changing..." } else { "Change password" }
                        }
                    }
                }
            }
        }
    }
}
