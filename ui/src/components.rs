//! Small building blocks shared by every view: buttons, form fields,
//! cards, stat tiles, modal overlay, empty and loading states.

use dioxus::prelude::*;

use crate::UI_CSS;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Destructive,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn--primary",
            ButtonVariant::Outline => "btn btn--outline",
            ButtonVariant::Destructive => "btn btn--destructive",
            ButtonVariant::Ghost => "btn btn--ghost",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "".to_string())] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "{variant.class()} {class}",
            r#type: r#type.clone(),
            disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "field-label", r#for: "{html_for}", {children} }
    }
}

#[component]
pub fn Input(
    #[props(default = "".to_string())] id: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] value: String,
    #[props(default = "".to_string())] class: String,
    #[props(default)] oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        input {
            class: "input {class}",
            id: "{id}",
            r#type: r#type.clone(),
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

/// A `<select>` in the app's form style; options come in as children.
#[component]
pub fn Select(
    #[props(default = "".to_string())] id: String,
    #[props(default = "".to_string())] value: String,
    #[props(default = "".to_string())] class: String,
    #[props(default)] onchange: Option<EventHandler<FormEvent>>,
    children: Element,
) -> Element {
    rsx! {
        select {
            class: "input {class}",
            id: "{id}",
            value: "{value}",
            onchange: move |evt| {
                if let Some(handler) = &onchange {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

/// Card wrapper for a page section, with an optional header action slot.
#[component]
pub fn PageCard(
    #[props(default = "".to_string())] title: String,
    #[props(default = "".to_string())] class: String,
    #[props(default)] actions: Option<Element>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: UI_CSS }
        section {
            class: "card {class}",
            if !title.is_empty() || actions.is_some() {
                header {
                    class: "card__header",
                    h2 { class: "card__title", "{title}" }
                    if let Some(actions) = actions {
                        div { class: "card__actions", {actions} }
                    }
                }
            }
            div { class: "card__body", {children} }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatTone {
    #[default]
    Neutral,
    Positive,
    Negative,
}

impl StatTone {
    fn class(self) -> &'static str {
        match self {
            StatTone::Neutral => "stat-card__value",
            StatTone::Positive => "stat-card__value stat-card__value--positive",
            StatTone::Negative => "stat-card__value stat-card__value--negative",
        }
    }

    /// Green when the figure is non-negative, red otherwise.
    pub fn from_sign(value: f64) -> Self {
        if value >= 0.0 {
            StatTone::Positive
        } else {
            StatTone::Negative
        }
    }
}

/// Headline number with a label, used in dashboard and list headers.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] tone: StatTone,
    #[props(default = "".to_string())] hint: String,
) -> Element {
    rsx! {
        div {
            class: "stat-card",
            span { class: "stat-card__label", "{label}" }
            span { class: "{tone.class()}", "{value}" }
            if !hint.is_empty() {
                span { class: "stat-card__hint", "{hint}" }
            }
        }
    }
}

#[component]
pub fn EmptyState(
    title: String,
    #[props(default = "".to_string())] message: String,
    #[props(default)] children: Element,
) -> Element {
    rsx! {
        div {
            class: "empty-state",
            p { class: "empty-state__title", "{title}" }
            if !message.is_empty() {
                p { class: "empty-state__message", "{message}" }
            }
            {children}
        }
    }
}

#[component]
pub fn Loading(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "loading",
            span { class: "loading__spinner" }
            span { class: "loading__label", "{label}" }
        }
    }
}

/// Dimmed backdrop with a centered dialog; clicking the backdrop closes.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                // Keep clicks inside the dialog from closing it.
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}
