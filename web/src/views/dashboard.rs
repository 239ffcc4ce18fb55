//! Dashboard view: one aggregate fetch, several panels.

use api::models::{DashboardData, TransactionKind};
use dioxus::prelude::*;
use store::AppConfig;
use ui::charts::{BarChart, BarPoint, DonutChart, DonutSlice};
use ui::{format, use_session, EmptyState, Loading, PageCard, StatCard, StatTone};

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let config = use_context::<AppConfig>();
    let symbol = config.currency_symbol.clone();

    let mut data = use_signal(|| Option::<Option<DashboardData>>::None);
    let client = session.client();
    let _load = use_resource(move || {
        let client = client.clone();
        async move {
            let result = api::dashboard::data(&client, None, None).await;
            data.set(Some(result.ok()));
        }
    });

    match data() {
        None => rsx! {
            div { class: "view", Loading { label: "Loading dashboard..." } }
        },
        Some(None) => rsx! {
            div {
                class: "view",
                EmptyState {
                    title: "Couldn't load the dashboard",
                    message: "Try again in a moment.",
                }
            }
        },
        Some(Some(dashboard)) => {
            let summary = &dashboard.financial_summary;
            let monthly = &dashboard.monthly_overview;
            let goals = &dashboard.goals_summary;
            let investments = &dashboard.investments_summary;

            let bars: Vec<BarPoint> = dashboard
                .cash_flow
                .iter()
                .map(|point| BarPoint {
                    label: point.date.clone(),
                    income: point.income,
                    expenses: point.expenses,
                })
                .collect();

            let slices: Vec<DonutSlice> = dashboard
                .expenses_by_category
                .iter()
                .map(|entry| DonutSlice {
                    label: format!("{} ({})", entry.category, format::percent(entry.percentage)),
                    value: entry.amount,
                    color: format::category_color(&entry.category).to_string(),
                })
                .collect();

            rsx! {
                div {
                    class: "view",
                    header {
                        class: "view-header",
                        div {
                            h1 { "Dashboard" }
                            p {
                                class: "view-header__sub",
                                "{monthly.month} {monthly.year} · {dashboard.days_until_month_end} days left in the month"
                            }
                        }
                    }

                    for alert in dashboard.alerts.iter() {
                        div {
                            class: "alert {format::alert_class(alert.level)}",
                            span { class: "alert__title", "{alert.title}" }
                            span { class: "alert__message", "{alert.message}" }
                        }
                    }

                    div {
                        class: "stat-grid",
                        StatCard {
                            label: "Total income",
                            value: format::money(summary.total_income, &symbol),
                            tone: StatTone::Positive,
                        }
                        StatCard {
                            label: "Total expenses",
                            value: format::money(summary.total_expenses, &symbol),
                            tone: StatTone::Negative,
                        }
                        StatCard {
                            label: "Net balance",
                            value: format::money(summary.net_balance, &symbol),
                            tone: StatTone::from_sign(summary.net_balance),
                        }
                        StatCard {
                            label: "Savings rate",
                            value: format::percent(summary.savings_rate),
                            hint: format!(
                                "Projected month end: {}",
                                format::money(dashboard.projected_month_end_balance, &symbol)
                            ),
                        }
                    }

                    div {
                        class: "dashboard-columns",
                        div {
                            PageCard {
                                title: "Cash flow (last 6 months)",
                                BarChart { points: bars }
                            }
                            PageCard {
                                title: "Expenses by category",
                                DonutChart { slices: slices }
                            }
                        }
                        div {
                            PageCard {
                                title: "Recent transactions",
                                if dashboard.recent_transactions.is_empty() {
                                    EmptyState {
                                        title: "No transactions yet",
                                        message: "Incomes and expenses will show up here.",
                                    }
                                } else {
                                    ul {
                                        class: "tx-list",
                                        for tx in dashboard.recent_transactions.iter() {
                                            li {
                                                key: "{tx.id}-{tx.date}",
                                                div {
                                                    class: "tx-list__desc",
                                                    "{tx.description}"
                                                    div { class: "tx-list__meta", "{tx.category} · {tx.date}" }
                                                }
                                                match tx.kind {
                                                    TransactionKind::Income => rsx! {
                                                        span {
                                                            class: "amount--positive",
                                                            "+{format::money(tx.amount, &symbol)}"
                                                        }
                                                    },
                                                    TransactionKind::Expense => rsx! {
                                                        span {
                                                            class: "amount--negative",
                                                            "-{format::money(tx.amount, &symbol)}"
                                                        }
                                                    },
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                            PageCard {
                                title: "Goals",
                                p {
                                    "{goals.active_goals} active · {goals.completed_goals} completed"
                                }
                                div {
                                    class: "progress",
                                    div {
                                        class: "progress__fill",
                                        style: "width: {goals.overall_progress.clamp(0.0, 100.0)}%",
                                    }
                                }
                                p {
                                    class: "view-header__sub",
                                    "{format::money(goals.total_saved_amount, &symbol)} of {format::money(goals.total_target_amount, &symbol)} saved"
                                }
                            }
                            PageCard {
                                title: "Investments",
                                p {
                                    "Portfolio value: "
                                    strong { "{format::money(investments.current_value, &symbol)}" }
                                }
                                p {
                                    class: if investments.total_return >= 0.0 { "amount--positive" } else { "amount--negative" },
                                    "{format::money(investments.total_return, &symbol)} ({format::signed_percent(investments.return_percentage)})"
                                }
                                if let Some(best) = &investments.best_performer {
                                    p {
                                        class: "view-header__sub",
                                        "Best: {best.symbol} {format::signed_percent(best.profit_loss_percentage)}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
