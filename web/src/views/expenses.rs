//! Expenses view: filterable list, stats header, category breakdown,
//! create/edit modal, delete confirmation.

use api::expenses::ExpenseQuery;
use api::models::{
    CategorySummary, Expense, ExpenseCategory, ExpenseFrequency, ExpenseStats, ExpenseUpdate,
    NewExpense,
};
use dioxus::prelude::*;
use store::AppConfig;
use ui::charts::{DonutChart, DonutSlice};
use ui::{
    format, use_session, use_toast, Button, ButtonVariant, EmptyState, Input, Label, Loading,
    ModalOverlay, PageCard, Select, StatCard, StatTone,
};

use super::{date_input_value, non_empty, parse_amount, parse_date};

fn parse_category(raw: &str) -> ExpenseCategory {
    ExpenseCategory::ALL
        .iter()
        .copied()
        .find(|category| category.as_str() == raw)
        .unwrap_or(ExpenseCategory::Other)
}

fn parse_frequency(raw: &str) -> ExpenseFrequency {
    ExpenseFrequency::ALL
        .iter()
        .copied()
        .find(|frequency| frequency.as_str() == raw)
        .unwrap_or_default()
}

#[component]
pub fn Expenses() -> Element {
    let session = use_session();
    let config = use_context::<AppConfig>();
    let symbol = config.currency_symbol.clone();
    let toast = use_toast();

    let mut expenses = use_signal(|| Option::<Vec<Expense>>::None);
    let mut stats = use_signal(|| Option::<ExpenseStats>::None);
    let mut breakdown = use_signal(|| Option::<CategorySummary>::None);
    let mut category_filter = use_signal(|| Option::<ExpenseCategory>::None);

    // Form state
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Expense>::None);
    let mut amount = use_signal(String::new);
    let mut category = use_signal(|| ExpenseCategory::Food);
    let mut vendor = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut frequency = use_signal(ExpenseFrequency::default);
    let mut is_recurring = use_signal(|| false);
    let mut date = use_signal(String::new);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut deleting = use_signal(|| Option::<Expense>::None);

    let client = session.client();
    let _load = use_resource(move || {
        let client = client.clone();
        async move {
            let query = ExpenseQuery {
                category: category_filter(),
                ..Default::default()
            };
            let list = api::expenses::list(&client, &query).await;
            expenses.set(Some(list.unwrap_or_default()));
            stats.set(api::expenses::stats(&client, None, None).await.ok());
            breakdown.set(
                api::expenses::categories_summary(&client, None, None)
                    .await
                    .ok(),
            );
        }
    });

    let refresh = {
        let client = session.client();
        move || {
            let client = client.clone();
            spawn(async move {
                let query = ExpenseQuery {
                    category: category_filter(),
                    ..Default::default()
                };
                if let Ok(list) = api::expenses::list(&client, &query).await {
                    expenses.set(Some(list));
                }
                stats.set(api::expenses::stats(&client, None, None).await.ok());
                breakdown.set(
                    api::expenses::categories_summary(&client, None, None)
                        .await
                        .ok(),
                );
            });
        }
    };

    let mut open_create = move |_| {
        editing.set(None);
        amount.set(String::new());
        category.set(ExpenseCategory::Food);
        vendor.set(String::new());
        description.set(String::new());
        frequency.set(ExpenseFrequency::default());
        is_recurring.set(false);
        date.set(String::new());
        form_error.set(None);
        show_form.set(true);
    };

    let mut open_edit = move |expense: Expense| {
        amount.set(expense.amount.to_string());
        category.set(expense.category);
        vendor.set(expense.vendor.clone().unwrap_or_default());
        description.set(expense.description.clone().unwrap_or_default());
        frequency.set(expense.frequency);
        is_recurring.set(expense.is_recurring);
        date.set(date_input_value(&expense.date));
        form_error.set(None);
        editing.set(Some(expense));
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
                let Some(when) = parse_date(&date()) else {
                    form_error.set(Some("Pick a date".to_string()));
                    return;
                };

                saving.set(true);
                let result = match editing() {
                    Some(existing) => {
                        let changes = ExpenseUpdate {
                            amount: Some(value),
                            category: Some(category()),
                            vendor: non_empty(vendor()),
                            description: non_empty(description()),
                            frequency: Some(frequency()),
                            is_recurring: Some(is_recurring()),
                            date: Some(when),
                            ..Default::default()
                        };
                        api::expenses::update(&client, existing.id, &changes).await
                    }
                    None => {
                        let new_expense = NewExpense {
                            amount: value,
                            category: category(),
                            subcategory: None,
                            vendor: non_empty(vendor()),
                            description: non_empty(description()),
                            frequency: frequency(),
                            is_recurring: is_recurring(),
                            date: when,
                        };
                        api::expenses::create(&client, &new_expense).await
                    }
                };
                saving.set(false);

                if result.is_ok() {
                    show_form.set(false);
                    toast.success(if editing().is_some() {
                        "Expense updated"
                    } else {
                        "Expense added"
                    });
                    refresh();
                }
            });
        }
    };

    let handle_delete = {
        let client = session.client();
        let refresh = refresh.clone();
        move |expense: Expense| {
            let client = client.clone();
            let refresh = refresh.clone();
            spawn(async move {
                // No optimistic removal: on failure (e.g. a 404) the row
                // stays in the list and the client has already toasted.
                if api::expenses::remove(&client, expense.id).await.is_ok() {
                    toast.success("Expense deleted");
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
                    h1 { "Expenses" }
                    p { class: "view-header__sub", "Track where the money goes" }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |evt| open_create(evt),
                    "Add expense"
                }
            }

            if let Some(stats) = stats() {
                div {
                    class: "stat-grid",
                    StatCard {
                        label: "Total expenses",
                        value: format::money(stats.total_expenses, &symbol),
                        tone: StatTone::Negative,
                    }
                    StatCard {
                        label: "Monthly average",
                        value: format::money(stats.monthly_average, &symbol),
                    }
                    StatCard {
                        label: "Recurring",
                        value: format::money(stats.recurring_expenses_total, &symbol),
                        hint: format!(
                            "Fixed {} · Variable {}",
                            format::money(stats.fixed_expenses, &symbol),
                            format::money(stats.variable_expenses, &symbol)
                        ),
                    }
                }
            }

            if let Some(summary) = breakdown() {
                if !summary.categories.is_empty() {
                    PageCard {
                        title: "By category",
                        DonutChart {
                            slices: summary
                                .categories
                                .iter()
                                .map(|row| DonutSlice {
                                    label: format!("{} ({})", row.category, format::percent(row.percentage)),
                                    value: row.total,
                                    color: format::category_color(&row.category).to_string(),
                                })
                                .collect::<Vec<_>>(),
                        }
                    }
                }
            }

            PageCard {
                title: "History",
                actions: rsx! {
                    Select {
                        id: "expense-filter",
                        value: category_filter().map(|c| c.as_str().to_string()).unwrap_or_default(),
                        onchange: move |evt: FormEvent| {
                            let value = evt.value();
                            category_filter.set((!value.is_empty()).then(|| parse_category(&value)));
                        },
                        option { value: "", "All categories" }
                        for option_category in ExpenseCategory::ALL {
                            option {
                                value: "{option_category.as_str()}",
                                "{format::expense_category_label(option_category)}"
                            }
                        }
                    }
                },
                match expenses() {
                    None => rsx! { Loading {} },
                    Some(list) if list.is_empty() => rsx! {
                        EmptyState {
                            title: "No expenses yet",
                            message: "Add your first expense to start tracking.",
                        }
                    },
                    Some(list) => rsx! {
                        table {
                            class: "data-table",
                            thead {
                                tr {
                                    th { "Date" }
                                    th { "Category" }
                                    th { "Vendor" }
                                    th { "Frequency" }
                                    th { "Amount" }
                                    th { "" }
                                }
                            }
                            tbody {
                                for expense in list {
                                    tr {
                                        key: "{expense.id}",
                                        td { "{format::date(&expense.date)}" }
                                        td {
                                            span {
                                                class: "badge",
                                                "{format::expense_category_label(expense.category)}"
                                            }
                                        }
                                        td { "{expense.vendor.clone().unwrap_or_default()}" }
                                        td { "{format::frequency_label(expense.frequency)}" }
                                        td {
                                            span { class: "amount--negative", "-{format::money(expense.amount, &symbol)}" }
                                        }
                                        td {
                                            div {
                                                class: "row-actions",
                                                Button {
                                                    variant: ButtonVariant::Ghost,
                                                    onclick: {
                                                        let mut open_edit = open_edit.clone();
                                                        let expense = expense.clone();
                                                        move |_| open_edit(expense.clone())
                                                    },
                                                    "Edit"
                                                }
                                                Button {
                                                    variant: ButtonVariant::Ghost,
                                                    onclick: {
                                                        let expense = expense.clone();
                                                        move |_| deleting.set(Some(expense.clone()))
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
                    if editing().is_some() { "Edit expense" } else { "Add expense" }
                }
                form {
                    onsubmit: handle_submit,
                    if let Some(err) = form_error() {
                        div { class: "form-error", "{err}" }
                    }
                    div {
                        class: "form-grid",
                        div {
                            Label { html_for: "expense-amount", "Amount" }
                            Input {
                                id: "expense-amount",
                                r#type: "number",
                                placeholder: "0.00",
                                value: amount(),
                                oninput: move |evt: FormEvent| amount.set(evt.value()),
                            }
                        }
                        div {
                            Label { html_for: "expense-date", "Date" }
                            Input {
                                id: "expense-date",
                                r#type: "date",
                                value: date(),
                                oninput: move |evt: FormEvent| date.set(evt.value()),
                            }
                        }
                        div {
                            Label { html_for: "expense-category", "Category" }
                            Select {
                                id: "expense-category",
                                value: category().as_str().to_string(),
                                onchange: move |evt: FormEvent| category.set(parse_category(&evt.value())),
                                for option_category in ExpenseCategory::ALL {
                                    option {
                                        value: "{option_category.as_str()}",
                                        "{format::expense_category_label(option_category)}"
                                    }
                                }
                            }
                        }
                        div {
                            Label { html_for: "expense-frequency", "Frequency" }
                            Select {
                                id: "expense-frequency",
                                value: frequency().as_str().to_string(),
                                onchange: move |evt: FormEvent| frequency.set(parse_frequency(&evt.value())),
                                for option_frequency in ExpenseFrequency::ALL {
                                    option {
                                        value: "{option_frequency.as_str()}",
                                        "{format::frequency_label(option_frequency)}"
                                    }
                                }
                            }
                        }
                        div {
                            Label { html_for: "expense-vendor", "Vendor (optional)" }
                            Input {
                                id: "expense-vendor",
                                value: vendor(),
                                oninput: move |evt: FormEvent| vendor.set(evt.value()),
                            }
                        }
                        div {
                            Label { html_for: "expense-recurring", "Recurring" }
                            div {
                                input {
                                    id: "expense-recurring",
                                    r#type: "checkbox",
                                    checked: is_recurring(),
                                    onchange: move |evt: FormEvent| is_recurring.set(evt.checked()),
                                }
                            }
                        }
                        div {
                            class: "form-field--wide",
                            Label { html_for: "expense-description", "Description (optional)" }
                            Input {
                                id: "expense-description",
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

        if let Some(expense) = deleting() {
            ModalOverlay {
                on_close: move |_| deleting.set(None),
                h2 { class: "modal-title", "Delete expense" }
                p {
                    class: "modal-text",
                    "Delete this {format::expense_category_label(expense.category)} expense of "
                    strong { "{format::money(expense.amount, &symbol)}" }
                    "?"
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
                            let expense = expense.clone();
                            move |_| handle_delete(expense.clone())
                        },
                        "Delete"
                    }
                }
            }
        }
    }
}
