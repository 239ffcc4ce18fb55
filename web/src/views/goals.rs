//! Goals view: card grid with progress, contribute/withdraw dialogs,
//! create/edit modal, completed-goals toggle.

use api::goals::GoalQuery;
use api::models::{Goal, GoalPriority, GoalUpdate, GoalsSummary, NewGoal};
use dioxus::prelude::*;
use store::AppConfig;
use ui::{
    format, use_session, use_toast, Button, ButtonVariant, EmptyState, Input, Label, Loading,
    ModalOverlay, PageCard, Select, StatCard,
};

use super::{date_input_value, non_empty, parse_amount, parse_date};

fn parse_priority(raw: &str) -> GoalPriority {
    GoalPriority::ALL
        .iter()
        .copied()
        .find(|priority| priority.as_str() == raw)
        .unwrap_or_default()
}

/// Which money dialog is open, and for which goal.
#[derive(Clone, PartialEq)]
enum MoneyDialog {
    Contribute(Goal),
    Withdraw(Goal),
}

#[component]
pub fn Goals() -> Element {
    let session = use_session();
    let config = use_context::<AppConfig>();
    let symbol = config.currency_symbol.clone();
    let toast = use_toast();

    let mut goals = use_signal(|| Option::<Vec<Goal>>::None);
    let mut summary = use_signal(|| Option::<GoalsSummary>::None);
    let mut show_completed = use_signal(|| false);

    // Create/edit form state
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Goal>::None);
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut target_amount = use_signal(String::new);
    let mut target_date = use_signal(String::new);
    let mut priority = use_signal(GoalPriority::default);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    // Contribute/withdraw dialog state
    let mut money_dialog = use_signal(|| Option::<MoneyDialog>::None);
    let mut money_amount = use_signal(String::new);
    let mut money_error = use_signal(|| Option::<String>::None);
    let mut suggested = use_signal(|| Option::<String>::None);

    let mut deleting = use_signal(|| Option::<Goal>::None);

    let client = session.client();
    let _load = use_resource(move || {
        let client = client.clone();
        async move {
            let query = GoalQuery {
                include_completed: show_completed(),
                ..Default::default()
            };
            goals.set(Some(api::goals::list(&client, &query).await.unwrap_or_default()));
            summary.set(api::goals::summary(&client).await.ok());
        }
    });

    let refresh = {
        let client = session.client();
        move || {
            let client = client.clone();
            spawn(async move {
                let query = GoalQuery {
                    include_completed: show_completed(),
                    ..Default::default()
                };
                if let Ok(list) = api::goals::list(&client, &query).await {
                    goals.set(Some(list));
                }
                summary.set(api::goals::summary(&client).await.ok());
            });
        }
    };

    let mut open_create = move |_| {
        editing.set(None);
        name.set(String::new());
        description.set(String::new());
        target_amount.set(String::new());
        target_date.set(String::new());
        priority.set(GoalPriority::default());
        form_error.set(None);
        show_form.set(true);
    };

    let mut open_edit = move |goal: Goal| {
        name.set(goal.name.clone());
        description.set(goal.description.clone().unwrap_or_default());
        target_amount.set(goal.target_amount.to_string());
        target_date.set(date_input_value(&goal.target_date));
        priority.set(goal.priority);
        form_error.set(None);
        editing.set(Some(goal));
        show_form.set(true);
    };

    // Opening the contribute dialog also asks the backend for the
    // suggested monthly contribution.
    let mut open_contribute = {
        let client = session.client();
        let symbol = symbol.clone();
        move |goal: Goal| {
            let client = client.clone();
            let symbol = symbol.clone();
            money_amount.set(String::new());
            money_error.set(None);
            suggested.set(None);
            let goal_id = goal.id;
            money_dialog.set(Some(MoneyDialog::Contribute(goal)));
            spawn(async move {
                if let Ok(plan) = api::goals::monthly_contribution(&client, goal_id).await {
                    if plan.monthly_contribution > 0.0 {
                        suggested.set(Some(format!(
                            "Suggested monthly contribution: {}",
                            format::money(plan.monthly_contribution, &symbol)
                        )));
                    } else if let Some(message) = plan.message {
                        suggested.set(Some(message));
                    }
                }
            });
        }
    };

    let open_withdraw = move |goal: Goal| {
        money_amount.set(String::new());
        money_error.set(None);
        suggested.set(None);
        money_dialog.set(Some(MoneyDialog::Withdraw(goal)));
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

                let goal_name = name().trim().to_string();
                if goal_name.is_empty() {
                    form_error.set(Some("Enter a name for the goal".to_string()));
                    return;
                }
                let Some(target) = parse_amount(&target_amount()) else {
                    form_error.set(Some("Enter a positive target amount".to_string()));
                    return;
                };
                let Some(when) = parse_date(&target_date()) else {
                    form_error.set(Some("Pick a target date".to_string()));
                    return;
                };

                saving.set(true);
                let result = match editing() {
                    Some(existing) => {
                        let changes = GoalUpdate {
                            name: Some(goal_name),
                            description: non_empty(description()),
                            target_amount: Some(target),
                            target_date: Some(when),
                            priority: Some(priority()),
                            ..Default::default()
                        };
                        api::goals::update(&client, existing.id, &changes).await
                    }
                    None => {
                        let new_goal = NewGoal {
                            name: goal_name,
                            description: non_empty(description()),
                            target_amount: target,
                            target_date: when,
                            priority: priority(),
                            icon: None,
                            color: None,
                            monthly_contribution: None,
                        };
                        api::goals::create(&client, &new_goal).await
                    }
                };
                saving.set(false);

                if result.is_ok() {
                    show_form.set(false);
                    toast.success(if editing().is_some() {
                        "Goal updated"
                    } else {
                        "Goal created"
                    });
                    refresh();
                }
            });
        }
    };

    let handle_money = {
        let client = session.client();
        let refresh = refresh.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            let refresh = refresh.clone();
            spawn(async move {
                money_error.set(None);
                let Some(value) = parse_amount(&money_amount()) else {
                    money_error.set(Some("Enter a positive amount".to_string()));
                    return;
                };

                let result = match money_dialog() {
                    Some(MoneyDialog::Contribute(goal)) => {
                        api::goals::contribute(&client, goal.id, value).await
                    }
                    Some(MoneyDialog::Withdraw(goal)) => {
                        api::goals::withdraw(&client, goal.id, value).await
                    }
                    None => return,
                };

                match result {
                    Ok(updated) => {
                        money_dialog.set(None);
                        if updated.status == api::models::GoalStatus::Completed {
                            toast.success(format!("Goal \"{}\" completed!", updated.name));
                        } else {
                            toast.success("Goal updated");
                        }
                        refresh();
                    }
                    Err(_) => {
                        // The client already toasted the backend's message
                        // (e.g. withdrawing more than is saved).
                    }
                }
            });
        }
    };

    let handle_delete = {
        let client = session.client();
        let refresh = refresh.clone();
        move |goal: Goal| {
            let client = client.clone();
            let refresh = refresh.clone();
            spawn(async move {
                if api::goals::remove(&client, goal.id).await.is_ok() {
                    toast.success("Goal deleted");
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
                    h1 { "Goals" }
                    p { class: "view-header__sub", "Savings targets and their progress" }
                }
                div {
                    class: "row-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| show_completed.set(!show_completed()),
                        if show_completed() { "Hide completed" } else { "Show completed" }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |evt| open_create(evt),
                        "New goal"
                    }
                }
            }

            if let Some(summary) = summary() {
                div {
                    class: "stat-grid",
                    StatCard {
                        label: "Active goals",
                        value: summary.active_goals.to_string(),
                        hint: format!("{} completed", summary.completed_goals),
                    }
                    StatCard {
                        label: "Saved so far",
                        value: format::money(summary.total_saved_amount, &symbol),
                        hint: format!("of {}", format::money(summary.total_target_amount, &symbol)),
                    }
                    StatCard {
                        label: "Overall progress",
                        value: format::percent(summary.overall_progress),
                    }
                }
            }

            match goals() {
                None => rsx! { Loading {} },
                Some(list) if list.is_empty() => rsx! {
                    PageCard {
                        EmptyState {
                            title: "No goals yet",
                            message: "Create a goal to start saving towards something.",
                        }
                    }
                },
                Some(list) => rsx! {
                    div {
                        class: "goal-grid",
                        for goal in list {
                            {
                                let fill_style = format!(
                                    "width: {}%; background: {}",
                                    goal.progress_percentage.clamp(0.0, 100.0),
                                    goal.color.as_deref().unwrap_or("#3b82f6"),
                                );
                                rsx! {
                            div {
                                key: "{goal.id}",
                                class: "goal-card",
                                div {
                                    class: "goal-card__head",
                                    h3 { class: "goal-card__name", "{goal.name}" }
                                    span {
                                        class: "badge",
                                        style: "color: {format::priority_color(goal.priority)}",
                                        "{format::priority_label(goal.priority)}"
                                    }
                                }
                                div {
                                    class: "progress",
                                    div {
                                        class: "progress__fill",
                                        style: "{fill_style}",
                                    }
                                }
                                div {
                                    class: "goal-card__amounts",
                                    span { "{format::money(goal.current_amount, &symbol)}" }
                                    span { "{format::money(goal.target_amount, &symbol)}" }
                                }
                                div {
                                    class: "goal-card__meta",
                                    span { "{format::percent(goal.progress_percentage)} · {format::money(goal.remaining_amount, &symbol)} to go" }
                                    span {
                                        if goal.days_remaining >= 0 {
                                            "{goal.days_remaining} days left"
                                        } else {
                                            "past due"
                                        }
                                    }
                                }
                                div {
                                    class: "goal-card__meta",
                                    span { "{format::goal_status_label(goal.status)}" }
                                    span { "Suggested: {format::money(goal.monthly_contribution_suggested, &symbol)}/mo" }
                                }
                                div {
                                    class: "goal-card__actions",
                                    Button {
                                        variant: ButtonVariant::Primary,
                                        onclick: {
                                            let mut open_contribute = open_contribute.clone();
                                            let goal = goal.clone();
                                            move |_| open_contribute(goal.clone())
                                        },
                                        "Contribute"
                                    }
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        onclick: {
                                            let mut open_withdraw = open_withdraw.clone();
                                            let goal = goal.clone();
                                            move |_| open_withdraw(goal.clone())
                                        },
                                        "Withdraw"
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        onclick: {
                                            let mut open_edit = open_edit.clone();
                                            let goal = goal.clone();
                                            move |_| open_edit(goal.clone())
                                        },
                                        "Edit"
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        onclick: {
                                            let goal = goal.clone();
                                            move |_| deleting.set(Some(goal.clone()))
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

        if show_form() {
            ModalOverlay {
                on_close: move |_| show_form.set(false),
                h2 {
                    class: "modal-title",
                    if editing().is_some() { "Edit goal" } else { "New goal" }
                }
                form {
                    onsubmit: handle_submit,
                    if let Some(err) = form_error() {
                        div { class: "form-error", "{err}" }
                    }
                    div {
                        class: "form-grid",
                        div {
                            class: "form-field--wide",
                            Label { html_for: "goal-name", "Name" }
                            Input {
                                id: "goal-name",
                                placeholder: "Emergency fund",
                                value: name(),
                                oninput: move |evt: FormEvent| name.set(evt.value()),
                            }
                        }
                        div {
                            Label { html_for: "goal-target", "Target amount" }
                            Input {
                                id: "goal-target",
                                r#type: "number",
                                placeholder: "5000",
                                value: target_amount(),
                                oninput: move |evt: FormEvent| target_amount.set(evt.value()),
                            }
                        }
                        div {
                            Label { html_for: "goal-date", "Target date" }
                            Input {
                                id: "goal-date",
                                r#type: "date",
                                value: target_date(),
                                oninput: move |evt: FormEvent| target_date.set(evt.value()),
                            }
                        }
                        div {
                            Label { html_for: "goal-priority", "Priority" }
                            Select {
                                id: "goal-priority",
                                value: priority().as_str().to_string(),
                                onchange: move |evt: FormEvent| priority.set(parse_priority(&evt.value())),
                                for option_priority in GoalPriority::ALL {
                                    option {
                                        value: "{option_priority.as_str()}",
                                        "{format::priority_label(option_priority)}"
                                    }
                                }
                            }
                        }
                        div {
                            class: "form-field--wide",
                            Label { html_for: "goal-description", "Description (optional)" }
                            Input {
                                id: "goal-description",
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

        if let Some(dialog) = money_dialog() {
            {
                let (dialog_title, dialog_action) = match &dialog {
                    MoneyDialog::Contribute(goal) => {
                        (format!("Contribute to {}", goal.name), "Contribute")
                    }
                    MoneyDialog::Withdraw(goal) => {
                        (format!("Withdraw from {}", goal.name), "Withdraw")
                    }
                };
                rsx! {
                    ModalOverlay {
                        on_close: move |_| money_dialog.set(None),
                        h2 { class: "modal-title", "{dialog_title}" }
                        if let Some(hint) = suggested() {
                            p { class: "view-header__sub", "{hint}" }
                        }
                        form {
                            onsubmit: handle_money,
                            if let Some(err) = money_error() {
                                div { class: "form-error", "{err}" }
                            }
                            div {
                                Label { html_for: "money-amount", "Amount" }
                                Input {
                                    id: "money-amount",
                                    r#type: "number",
                                    placeholder: "100",
                                    value: money_amount(),
                                    oninput: move |evt: FormEvent| money_amount.set(evt.value()),
                                }
                            }
                            div {
                                class: "modal-actions",
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| money_dialog.set(None),
                                    "Cancel"
                                }
                                Button {
                                    variant: ButtonVariant::Primary,
                                    r#type: "submit",
                                    "{dialog_action}"
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(goal) = deleting() {
            ModalOverlay {
                on_close: move |_| deleting.set(None),
                h2 { class: "modal-title", "Delete goal" }
                p {
                    class: "modal-text",
                    "Delete the goal "
                    strong { "{goal.name}" }
                    "? The saved amount tracking will be lost."
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
                            let goal = goal.clone();
                            move |_| handle_delete(goal.clone())
                        },
                        "Delete"
                    }
                }
            }
        }
    }
}
