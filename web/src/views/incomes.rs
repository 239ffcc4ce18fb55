//! Incomes view: list with stats header, create/edit modal, delete
//! confirmation.

use api::incomes::IncomeQuery;
use api::models::{Income, IncomeKind, IncomeStats, IncomeUpdate, NewIncome};
use dioxus::prelude::*;
use store::AppConfig;
use ui::{
    format, use_session, use_toast, Button, ButtonVariant, EmptyState, Input, Label, Loading,
    ModalOverlay, PageCard, Select, StatCard, StatTone,
};

use super::{date_input_value, non_empty, parse_amount, parse_date};

fn parse_kind(raw: &str) -> IncomeKind {
    IncomeKind::ALL
        .iter()
        .copied()
        .find(|kind| kind.as_str() == raw)
        .unwrap_or(IncomeKind::Other)
}

#[component]
pub fn Incomes() -> Element {
    let session = use_session();
    let config = use_context::<AppConfig>();
    let symbol = config.currency_symbol.clone();
    let toast = use_toast();

    let mut incomes = use_signal(|| Option::<Vec<Income>>::None);
    let mut stats = use_signal(|| Option::<IncomeStats>::None);
    let mut kind_filter = use_signal(|| Option::<IncomeKind>::None);

    // Form state
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Income>::None);
    let mut amount = use_signal(String::new);
    let mut source = use_signal(String::new);
    let mut kind = use_signal(|| IncomeKind::Salary);
    let mut description = use_signal(String::new);
    let mut date = use_signal(String::new);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut deleting = use_signal(|| Option::<Income>::None);

    let client = session.client();
    let _load = use_resource(move || {
        let client = client.clone();
        async move {
            let query = IncomeQuery {
                income_type: kind_filter(),
                ..Default::default()
            };
            let list = api::incomes::list(&client, &query).await;
            incomes.set(Some(list.unwrap_or_default()));
            stats.set(api::incomes::stats(&client, None, None).await.ok());
        }
    });

    let refresh = {
        let client = session.client();
        move || {
            let client = client.clone();
            spawn(async move {
                let query = IncomeQuery {
                    income_type: kind_filter(),
                    ..Default::default()
                };
                if let Ok(list) = api::incomes::list(&client, &query).await {
                    incomes.set(Some(list));
                }
                stats.set(api::incomes::stats(&client, None, None).await.ok());
            });
        }
    };

    let mut open_create = move |_| {
        editing.set(None);
        amount.set(String::new());
        source.set(String::new());
        kind.set(IncomeKind::Salary);
        description.set(String::new());
        date.set(String::new());
        form_error.set(None);
        show_form.set(true);
    };

    let mut open_edit = move |income: Income| {
        amount.set(income.amount.to_string());
        source.set(income.source.clone());
        kind.set(income.income_type);
        description.set(income.description.clone().unwrap_or_default());
        date.set(date_input_value(&income.date));
        form_error.set(None);
        editing.set(Some(income));
        show_form.set(true);
    };

    let handle_submit = {
        let client = session.client();
        let refresh = refresh.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            let refresh = refresh.clone();
            spawn(async move {
                form_error.set(None);

                let Some(value) = parse_amount(&amount()) else {
                    form_error.set(Some("Enter a positive amount".to_string()));
                    return;
                };
                let src = source().trim().to_string();
                if src.is_empty() {
                    form_error.set(Some("Enter the income source".to_string()));
                    return;
                }
                let Some(when) = parse_date(&date()) else {
                    form_error.set(Some("Pick a date".to_string()));
                    return;
                };

                saving.set(true);
                let result = match editing() {
                    Some(existing) => {
                        let changes = IncomeUpdate {
                            amount: Some(value),
                            source: Some(src),
                            income_type: Some(kind()),
                            description: non_empty(description()),
                            date: Some(when),
                        };
                        api::incomes::update(&client, existing.id, &changes).await
                    }
                    None => {
                        let new_income = NewIncome {
                            amount: value,
                            source: src,
                            income_type: kind(),
                            description: non_empty(description()),
                            date: when,
                        };
                        api::incomes::create(&client, &new_income).await
                    }
                };
                saving.set(false);

                match result {
                    Ok(_) => {
                        show_form.set(false);
                        toast.success(if editing().is_some() {
                            "Income updated"
                        } else {
                            "Income added"
                        });
                        refresh();
                    }
                    Err(_) => {
                        // Notification already shown by the client; keep the
                        // form open for corrections.
                    }
                }
            });
        }
    };

    let handle_delete = {
        let client = session.client();
        let refresh = refresh.clone();
        move |income: Income| {
            let client = client.clone();
            let refresh = refresh.clone();
            spawn(async move {
                // Pessimistic: the row leaves the list only after the
                // backend confirms.
                if api::incomes::remove(&client, income.id).await.is_ok() {
                    toast.success("Income deleted");
                    refresh();
                }
                deleting.set(None);
            });
        }
    };

    rsx! {
        div {
            class: "view",
            header {
                class: "view-header",
                div {
                    h1 { "Incomes" }
                    p { class: "view-header__sub", "Everything you earn, in one place" }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |evt| open_create(evt),
                    "Add income"
                }
            }

            if let Some(stats) = stats() {
                div {
                    class: "stat-grid",
                    StatCard {
                        label: "Total income",
                        value: format::money(stats.total_income, &symbol),
                        tone: StatTone::Positive,
                    }
                    StatCard {
                        label: "Monthly average",
                        value: format::money(stats.monthly_average, &symbol),
                    }
                    StatCard {
                        label: "Last income",
                        value: stats
                            .last_income_date
                            .map(|d| format::date(&d))
                            .unwrap_or_else(|| "—".to_string()),
                    }
                }
            }

            PageCard {
                title: "History",
                actions: rsx! {
                    Select {
                        id: "income-filter",
                        value: kind_filter().map(|k| k.as_str().to_string()).unwrap_or_default(),
                        onchange: move |evt: FormEvent| {
                            let value = evt.value();
                            kind_filter.set((!value.is_empty()).then(|| parse_kind(&value)));
                        },
                        option { value: "", "All types" }
                        for kind in IncomeKind::ALL {
                            option { value: "{kind.as_str()}", "{format::income_kind_label(kind)}" }
                        }
                    }
                },
                match incomes() {
                    None => rsx! { Loading {} },
                    Some(list) if list.is_empty() => rsx! {
                        EmptyState {
                            title: "No incomes yet",
                            message: "Add your first income to start tracking.",
                        }
                    },
                    Some(list) => rsx! {
                        table {
                            class: "data-table",
                            thead {
                                tr {
                                    th { "Date" }
                                    th { "Source" }
                                    th { "Type" }
                                    th { "Amount" }
                                    th { "" }
                                }
                            }
                            tbody {
                                for income in list {
                                    tr {
                                        key: "{income.id}",
                                        td { "{format::date(&income.date)}" }
                                        td { "{income.source}" }
                                        td {
                                            span { class: "badge", "{format::income_kind_label(income.income_type)}" }
                                        }
                                        td {
                                            span { class: "amount--positive", "+{format::money(income.amount, &symbol)}" }
                                        }
                                        td {
                                            div {
                                                class: "row-actions",
                                                Button {
                                                    variant: ButtonVariant::Ghost,
                                                    onclick: {
                                                        let mut open_edit = open_edit.clone();
                                                        let income = income.clone();
                                                        move |_| open_edit(income.clone())
                                                    },
                                                    "Edit"
                                                }
                                                Button {
                                                    variant: ButtonVariant::Ghost,
                                                    onclick: {
                                                        let income = income.clone();
                                                        move |_| deleting.set(Some(income.clone()))
                                                    },
                                                    "Delete"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                }
            }
        }

        if show_form() {
            ModalOverlay {
                on_close: move |_| show_form.set(false),
                h2 {
                    class: "modal-title",
                    if editing().is_some() { "Edit income" } else { "Add income" }
                }
                form {
                    onsubmit: handle_submit,
                    if let Some(err) = form_error() {
                        div { class: "form-error", "{err}" }
                    }
                    div {
                        class: "form-grid",
                        div {
                            Label { html_for: "income-amount", "Amount" }
                            Input {
                                id: "income-amount",
                                r#type: "number",
                                placeholder: "0.00",
                                value: amount(),
                                oninput: move |evt: FormEvent| amount.set(evt.value()),
                            }
                        }
                        div {
                            Label { html_for: "income-date", "Date" }
                            Input {
                                id: "income-date",
                                r#type: "date",
                                value: date(),
                                oninput: move |evt: FormEvent| date.set(evt.value()),
                            }
                        }
                        div {
                            Label { html_for: "income-source", "Source" }
                            Input {
                                id: "income-source",
                                placeholder: "Acme Corp",
                                value: source(),
                                oninput: move |evt: FormEvent| source.set(evt.value()),
                            }
                        }
                        div {
                            Label { html_for: "income-kind", "Type" }
                            Select {
                                id: "income-kind",
                                value: kind().as_str().to_string(),
                                onchange: move |evt: FormEvent| kind.set(parse_kind(&evt.value())),
                                for option_kind in IncomeKind::ALL {
                                    option {
                                        value: "{option_kind.as_str()}",
                                        "{format::income_kind_label(option_kind)}"
                                    }
                                }
                            }
                        }
                        div {
                            class: "form-field--wide",
                            Label { html_for: "income-description", "Description (optional)" }
                            Input {
                                id: "income-description",
                                value: description(),
                                oninput: move |evt: FormEvent| description.set(evt.value()),
                            }
                        }
                    }
                    div {
                        class: "modal-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| show_form.set(false),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: saving(),
                            if saving() { "Saving..." } else { "Save" }
                        }
                    }
                }
            }
        }

        if let Some(income) = deleting() {
            ModalOverlay {
                on_close: move |_| deleting.set(None),
                h2 { class: "modal-title", "Delete income" }
                p {
                    class: "modal-text",
                    "Delete the income from "
                    strong { "{income.source}" }
                    " of {format::money(income.amount, &symbol)}?"
                }
                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| deleting.set(None),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: {
                            let handle_delete = handle_delete.clone();
                            let income = income.clone();
                            move |_| handle_delete(income.clone())
                        },
                        "Delete"
                    }
                }
            }
        }
    }
}
