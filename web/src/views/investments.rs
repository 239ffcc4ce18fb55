//! Investments view: holdings with live profit/loss, portfolio summary,
//! market-symbol search when adding, sell dialog, price-history snapshot,
//! fixed-interval price refresh.

use api::investments::InvestmentQuery;
use api::models::{
    Investment, InvestmentKind, InvestmentSale, MarketQuote, NewInvestment, PortfolioSummary,
    PriceHistory,
};
use dioxus::prelude::*;
use store::AppConfig;
use ui::{
    format, use_session, use_toast, Button, ButtonVariant, EmptyState, Input, Label, Loading,
    ModalOverlay, PageCard, Select, StatCard, StatTone,
};

use super::{non_empty, parse_amount, parse_date};

/// Fixed interval for re-fetching market prices.
const PRICE_REFRESH_SECS: u64 = 5 * 60;

fn parse_kind(raw: &str) -> InvestmentKind {
    InvestmentKind::ALL
        .iter()
        .copied()
        .find(|kind| kind.as_str() == raw)
        .unwrap_or(InvestmentKind::Other)
}

#[component]
pub fn Investments() -> Element {
    let session = use_session();
    let config = use_context::<AppConfig>();
    let symbol = config.currency_symbol.clone();
    let toast = use_toast();

    let mut investments = use_signal(|| Option::<Vec<Investment>>::None);
    let mut portfolio = use_signal(|| Option::<PortfolioSummary>::None);
    let mut kind_filter = use_signal(|| Option::<InvestmentKind>::None);

    // Add/edit form state
    let mut show_form = use_signal(|| false);
    let mut ticker = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut kind = use_signal(|| InvestmentKind::Stock);
    let mut quantity = use_signal(String::new);
    let mut purchase_price = use_signal(String::new);
    let mut purchase_date = use_signal(String::new);
    let mut platform = use_signal(String::new);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    // Market search state
    let mut search_results = use_signal(Vec::<MarketQuote>::new);
    let mut searching = use_signal(|| false);

    // Sell dialog state
    let mut selling = use_signal(|| Option::<Investment>::None);
    let mut sale_quantity = use_signal(String::new);
    let mut sale_price = use_signal(String::new);
    let mut sale_error = use_signal(|| Option::<String>::None);

    // History dialog state
    let mut history = use_signal(|| Option::<PriceHistory>::None);

    let mut deleting = use_signal(|| Option::<Investment>::None);

    let client = session.client();
    let _load = use_resource(move || {
        let client = client.clone();
        async move {
            let query = InvestmentQuery {
                investment_type: kind_filter(),
                ..Default::default()
            };
            investments.set(Some(
                api::investments::list(&client, &query).await.unwrap_or_default(),
            ));
            portfolio.set(api::investments::portfolio_summary(&client).await.ok());
        }
    });

    let refresh = {
        let client = session.client();
        move || {
            let client = client.clone();
            spawn(async move {
                let query = InvestmentQuery {
                    investment_type: kind_filter(),
                    ..Default::default()
                };
                if let Ok(list) = api::investments::list(&client, &query).await {
                    investments.set(Some(list));
                }
                portfolio.set(api::investments::portfolio_summary(&client).await.ok());
            });
        }
    };

    // Fixed-interval price refresh. Overlap with a user-triggered refresh
    // is not guarded; the newest response wins the signal.
    #[cfg(target_arch = "wasm32")]
    {
        let refresh = refresh.clone();
        use_effect(move || {
            let refresh = refresh.clone();
            spawn(async move {
                loop {
                    gloo_timers::future::sleep(std::time::Duration::from_secs(PRICE_REFRESH_SECS))
                        .await;
                    refresh();
                }
            });
        });
    }

    let mut open_create = move |_| {
        ticker.set(String::new());
        name.set(String::new());
        kind.set(InvestmentKind::Stock);
        quantity.set(String::new());
        purchase_price.set(String::new());
        purchase_date.set(String::new());
        platform.set(String::new());
        search_results.set(Vec::new());
        form_error.set(None);
        show_form.set(true);
    };

    let handle_search = {
        let client = session.client();
        move |_| {
            let client = client.clone();
            spawn(async move {
                let query = ticker().trim().to_string();
                if query.is_empty() {
                    return;
                }
                searching.set(true);
                match api::investments::market_search(&client, &query).await {
                    Ok(results) => search_results.set(results),
                    Err(_) => search_results.set(Vec::new()),
                }
                searching.set(false);
            });
        }
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

                let symbol_value = ticker().trim().to_uppercase();
                if symbol_value.is_empty() {
                    form_error.set(Some("Enter a ticker symbol".to_string()));
                    return;
                }
                let display_name = name().trim().to_string();
                if display_name.is_empty() {
                    form_error.set(Some("Enter a name".to_string()));
                    return;
                }
                let Some(qty) = parse_amount(&quantity()) else {
                    form_error.set(Some("Enter a positive quantity".to_string()));
                    return;
                };
                let Some(price) = parse_amount(&purchase_price()) else {
                    form_error.set(Some("Enter a positive purchase price".to_string()));
                    return;
                };
                let Some(when) = parse_date(&purchase_date()) else {
                    form_error.set(Some("Pick the purchase date".to_string()));
                    return;
                };

                saving.set(true);
                let new_investment = NewInvestment {
                    symbol: symbol_value,
                    name: display_name,
                    investment_type: kind(),
                    quantity: qty,
                    purchase_price: price,
                    purchase_date: when,
                    purchase_fees: None,
                    platform: non_empty(platform()),
                    notes: None,
                };
                let result = api::investments::create(&client, &new_investment).await;
                saving.set(false);

                if result.is_ok() {
                    show_form.set(false);
                    toast.success("Investment added");
                    refresh();
                }
            });
        }
    };

    let handle_sell = {
        let client = session.client();
        let refresh = refresh.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            let refresh = refresh.clone();
            spawn(async move {
                sale_error.set(None);
                let Some(investment) = selling() else { return };

                let Some(qty) = parse_amount(&sale_quantity()) else {
                    sale_error.set(Some("Enter a positive quantity".to_string()));
                    return;
                };
                if qty > investment.quantity {
                    sale_error.set(Some(format!(
                        "You only hold {} units",
                        investment.quantity
                    )));
                    return;
                }
                let Some(price) = parse_amount(&sale_price()) else {
                    sale_error.set(Some("Enter a positive sale price".to_string()));
                    return;
                };

                let sale = InvestmentSale {
                    quantity: qty,
                    sale_price: price,
                    sale_fees: None,
                };
                if api::investments::sell(&client, investment.id, &sale).await.is_ok() {
                    selling.set(None);
                    toast.success("Sale recorded");
                    refresh();
                }
            });
        }
    };

    let open_history = {
        let client = session.client();
        move |investment: Investment| {
            let client = client.clone();
            spawn(async move {
                match api::investments::history(&client, investment.id, "1mo").await {
                    Ok(snapshot) => history.set(Some(snapshot)),
                    Err(_) => {
                        // Not-found toast already shown when the market has
                        // no data for the symbol.
                    }
                }
            });
        }
    };

    let handle_delete = {
        let client = session.client();
        let refresh = refresh.clone();
        move |investment: Investment| {
            let client = client.clone();
            let refresh = refresh.clone();
            spawn(async move {
                if api::investments::remove(&client, investment.id).await.is_ok() {
                    toast.success("Investment deleted");
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
                    h1 { "Investments" }
                    p { class: "view-header__sub", "Holdings and market performance" }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |evt| open_create(evt),
                    "Add investment"
                }
            }

            if let Some(summary) = portfolio() {
                div {
                    class: "stat-grid",
                    StatCard {
                        label: "Invested",
                        value: format::money(summary.total_invested, &symbol),
                    }
                    StatCard {
                        label: "Current value",
                        value: format::money(summary.current_value, &symbol),
                    }
                    StatCard {
                        label: "Total P/L",
                        value: format!(
                            "{} ({})",
                            format::money(summary.total_profit_loss, &symbol),
                            format::signed_percent(summary.total_profit_loss_percentage)
                        ),
                        tone: StatTone::from_sign(summary.total_profit_loss),
                    }
                    StatCard {
                        label: "Holdings",
                        value: summary.investments_count.to_string(),
                    }
                }
            }

            PageCard {
                title: "Holdings",
                actions: rsx! {
                    Select {
                        id: "investment-filter",
                        value: kind_filter().map(|k| k.as_str().to_string()).unwrap_or_default(),
                        onchange: move |evt: FormEvent| {
                            let value = evt.value();
                            kind_filter.set((!value.is_empty()).then(|| parse_kind(&value)));
                        },
                        option { value: "", "All types" }
                        for option_kind in InvestmentKind::ALL {
                            option {
                                value: "{option_kind.as_str()}",
                                "{format::investment_kind_label(option_kind)}"
                            }
                        }
                    }
                },
                match investments() {
                    None => rsx! { Loading {} },
                    Some(list) if list.is_empty() => rsx! {
                        EmptyState {
                            title: "No investments yet",
                            message: "Add a holding to start tracking your portfolio.",
                        }
                    },
                    Some(list) => rsx! {
                        table {
                            class: "data-table",
                            thead {
                                tr {
                                    th { "Symbol" }
                                    th { "Type" }
                                    th { "Quantity" }
                                    th { "Price" }
                                    th { "Value" }
                                    th { "P/L" }
                                    th { "" }
                                }
                            }
                            tbody {
                                for investment in list {
                                    tr {
                                        key: "{investment.id}",
                                        td {
                                            strong { "{investment.symbol}" }
                                            div { class: "tx-list__meta", "{investment.name}" }
                                        }
                                        td {
                                            span {
                                                class: "badge",
                                                "{format::investment_kind_label(investment.investment_type)}"
                                            }
                                            if investment.status != api::models::InvestmentStatus::Active {
                                                div {
                                                    class: "tx-list__meta",
                                                    "{format::investment_status_label(investment.status)}"
                                                }
                                            }
                                        }
                                        td { "{investment.quantity}" }
                                        td {
                                            {
                                                let live = investment.real_time_price.or(investment.current_price);
                                                match live {
                                                    Some(price) => rsx! { "{format::money(price, &symbol)}" },
                                                    None => rsx! { "—" },
                                                }
                                            }
                                        }
                                        td {
                                            {
                                                match investment.current_value {
                                                    Some(value) => rsx! { "{format::money(value, &symbol)}" },
                                                    None => rsx! { "—" },
                                                }
                                            }
                                        }
                                        td {
                                            {
                                                match (investment.profit_loss, investment.profit_loss_percentage) {
                                                    (Some(pl), Some(pct)) => rsx! {
                                                        span {
                                                            class: if pl >= 0.0 { "amount--positive" } else { "amount--negative" },
                                                            "{format::money(pl, &symbol)} ({format::signed_percent(pct)})"
                                                        }
                                                    },
                                                    _ => rsx! { "—" },
                                                }
                                            }
                                        }
                                        td {
                                            div {
                                                class: "row-actions",
                                                Button {
                                                    variant: ButtonVariant::Ghost,
                                                    onclick: {
                                                        let open_history = open_history.clone();
                                                        let investment = investment.clone();
                                                        move |_| open_history(investment.clone())
                                                    },
                                                    "History"
                                                }
                                                Button {
                                                    variant: ButtonVariant::Outline,
                                                    onclick: {
                                                        let investment = investment.clone();
                                                        move |_| {
                                                            sale_quantity.set(investment.quantity.to_string());
                                                            sale_price.set(String::new());
                                                            sale_error.set(None);
                                                            selling.set(Some(investment.clone()));
                                                        }
                                                    },
                                                    "Sell"
                                                }
                                                Button {
                                                    variant: ButtonVariant::Ghost,
                                                    onclick: {
                                                        let investment = investment.clone();
                                                        move |_| deleting.set(Some(investment.clone()))
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
                h2 { class: "modal-title", "Add investment" }
                form {
                    onsubmit: handle_submit,
                    if let Some(err) = form_error() {
                        div { class: "form-error", "{err}" }
                    }
                    div {
                        class: "form-grid",
                        div {
                            Label { html_for: "inv-symbol", "Symbol" }
                            Input {
                                id: "inv-symbol",
                                placeholder: "AAPL",
                                value: ticker(),
                                oninput: move |evt: FormEvent| ticker.set(evt.value()),
                            }
                        }
                        div {
                            Label { html_for: "inv-search", "Market lookup" }
                            Button {
                                variant: ButtonVariant::Outline,
                                disabled: searching(),
                                onclick: handle_search,
                                if searching() { "Searching..." } else { "Search" }
                            }
                        }
                        if !search_results().is_empty() {
                            div {
                                class: "form-field--wide",
                                ul {
                                    class: "market-results",
                                    for quote in search_results() {
                                        li {
                                            key: "{quote.symbol}",
                                            onclick: {
                                                let quote = quote.clone();
                                                move |_| {
                                                    ticker.set(quote.symbol.clone());
                                                    name.set(quote.name.clone());
                                                    if let Some(price) = quote.current_price {
                                                        purchase_price.set(price.to_string());
                                                    }
                                                    search_results.set(Vec::new());
                                                }
                                            },
                                            span { "{quote.symbol} — {quote.name}" }
                                            {
                                                match quote.current_price {
                                                    Some(price) => rsx! { span { "{format::money(price, &symbol)}" } },
                                                    None => rsx! { span { "" } },
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        div {
                            class: "form-field--wide",
                            Label { html_for: "inv-name", "Name" }
                            Input {
                                id: "inv-name",
                                placeholder: "Apple Inc.",
                                value: name(),
                                oninput: move |evt: FormEvent| name.set(evt.value()),
                            }
                        }
                        div {
                            Label { html_for: "inv-kind", "Type" }
                            Select {
                                id: "inv-kind",
                                value: kind().as_str().to_string(),
                                onchange: move |evt: FormEvent| kind.set(parse_kind(&evt.value())),
                                for option_kind in InvestmentKind::ALL {
                                    option {
                                        value: "{option_kind.as_str()}",
                                        "{format::investment_kind_label(option_kind)}"
                                    }
                                }
                            }
                        }
                        div {
                            Label { html_for: "inv-quantity", "Quantity" }
                            Input {
                                id: "inv-quantity",
                                r#type: "number",
                                value: quantity(),
                                oninput: move |evt: FormEvent| quantity.set(evt.value()),
                            }
                        }
                        div {
                            Label { html_for: "inv-price", "Purchase price" }
                            Input {
                                id: "inv-price",
                                r#type: "number",
                                value: purchase_price(),
                                oninput: move |evt: FormEvent| purchase_price.set(evt.value()),
                            }
                        }
                        div {
                            Label { html_for: "inv-date", "Purchase date" }
                            Input {
                                id: "inv-date",
                                r#type: "date",
                                value: purchase_date(),
                                oninput: move |evt: FormEvent| purchase_date.set(evt.value()),
                            }
                        }
                        div {
                            class: "form-field--wide",
                            Label { html_for: "inv-platform", "Platform (optional)" }
                            Input {
                                id: "inv-platform",
                                placeholder: "Broker name",
                                value: platform(),
                                oninput: move |evt: FormEvent| platform.set(evt.value()),
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
                            if saving() { "Saving..." } else { "Add" }
                        }
                    }
                }
            }
        }

        if let Some(investment) = selling() {
            ModalOverlay {
                on_close: move |_| selling.set(None),
                h2 { class: "modal-title", "Sell {investment.symbol}" }
                p {
                    class: "modal-text",
                    "You hold {investment.quantity} units. Partial sales keep the remainder active."
                }
                form {
                    onsubmit: handle_sell,
                    if let Some(err) = sale_error() {
                        div { class: "form-error", "{err}" }
                    }
                    div {
                        class: "form-grid",
                        div {
                            Label { html_for: "sale-quantity", "Quantity" }
                            Input {
                                id: "sale-quantity",
                                r#type: "number",
                                value: sale_quantity(),
                                oninput: move |evt: FormEvent| sale_quantity.set(evt.value()),
                            }
                        }
                        div {
                            Label { html_for: "sale-price", "Sale price" }
                            Input {
                                id: "sale-price",
                                r#type: "number",
                                value: sale_price(),
                                oninput: move |evt: FormEvent| sale_price.set(evt.value()),
                            }
                        }
                    }
                    div {
                        class: "modal-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| selling.set(None),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            "Sell"
                        }
                    }
                }
            }
        }

        if let Some(snapshot) = history() {
            ModalOverlay {
                on_close: move |_| history.set(None),
                h2 { class: "modal-title", "{snapshot.symbol} — {snapshot.period}" }
                div {
                    class: "history-snapshot",
                    {
                        match snapshot.current_data.price {
                            Some(price) => rsx! { span { "Price: {format::money(price, &symbol)}" } },
                            None => rsx! { span { "Price unavailable" } },
                        }
                    }
                    if let Some(change) = snapshot.current_data.change_percent.clone() {
                        span { "Day change: {change}" }
                    }
                }
                if let Some(message) = snapshot.message.clone() {
                    p { class: "view-header__sub", "{message}" }
                }
                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| history.set(None),
                        "Close"
                    }
                }
            }
        }

        if let Some(investment) = deleting() {
            ModalOverlay {
                on_close: move |_| deleting.set(None),
                h2 { class: "modal-title", "Delete investment" }
                p {
                    class: "modal-text",
                    "Delete "
                    strong { "{investment.symbol}" }
                    " from your portfolio?"
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
                            let investment = investment.clone();
                            move |_| handle_delete(investment.clone())
                        },
                        "Delete"
                    }
                }
            }
        }
    }
}
