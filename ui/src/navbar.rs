//! Application shell: sidebar navigation, quick stats, user block,
//! logout.

use api::models::QuickStats;
use dioxus::prelude::*;
use store::AppConfig;

use crate::icons::{
    FaArrowTrendUp, FaBullseye, FaChartLine, FaChartPie, FaReceipt, FaRightFromBracket, FaUser,
    FaWallet,
};
use crate::{format, use_session, Icon, Toaster, UI_CSS};

/// One sidebar entry.
#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

const NAV_ITEMS: [NavItem; 6] = [
    NavItem { path: "/dashboard", label: "Dashboard" },
    NavItem { path: "/incomes", label: "Incomes" },
    NavItem { path: "/expenses", label: "Expenses" },
    NavItem { path: "/goals", label: "Goals" },
    NavItem { path: "/investments", label: "Investments" },
    NavItem { path: "/profile", label: "Profile" },
];

fn nav_icon(path: &str) -> Element {
    match path {
        "/dashboard" => rsx! { Icon { icon: FaChartPie, width: 16, height: 16 } },
        "/incomes" => rsx! { Icon { icon: FaArrowTrendUp, width: 16, height: 16 } },
        "/expenses" => rsx! { Icon { icon: FaReceipt, width: 16, height: 16 } },
        "/goals" => rsx! { Icon { icon: FaBullseye, width: 16, height: 16 } },
        "/investments" => rsx! { Icon { icon: FaChartLine, width: 16, height: 16 } },
        _ => rsx! { Icon { icon: FaUser, width: 16, height: 16 } },
    }
}

/// Sidebar layout wrapping every authenticated view. `active` is the
/// current path, used to highlight the matching entry.
#[component]
pub fn AppShell(active: String, children: Element) -> Element {
    let session = use_session();
    let nav = use_navigator();
    let config = use_context::<AppConfig>();
    let symbol = config.currency_symbol.clone();

    let mut quick_stats = use_signal(|| Option::<QuickStats>::None);
    let client = session.client();
    let _stats = use_resource(move || {
        let client = client.clone();
        async move {
            quick_stats.set(api::dashboard::quick_stats(&client).await.ok());
        }
    });

    let on_logout = {
        let mut session = session.clone();
        move |_| {
            session.logout();
            nav.replace("/login");
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: UI_CSS }
        div {
            class: "shell",
            aside {
                class: "sidebar",
                div {
                    class: "sidebar__brand",
                    Icon { icon: FaWallet, width: 20, height: 20 }
                    span { "Finwatch" }
                }
                nav {
                    class: "sidebar__nav",
                    for item in NAV_ITEMS.iter() {
                        button {
                            key: "{item.path}",
                            class: if active == item.path { "sidebar__link sidebar__link--active" } else { "sidebar__link" },
                            onclick: {
                                let path = item.path;
                                move |_| { nav.push(path); }
                            },
                            {nav_icon(item.path)}
                            span { "{item.label}" }
                        }
                    }
                }
                div {
                    class: "sidebar__footer",
                    if let Some(stats) = quick_stats() {
                        div {
                            class: "sidebar__user",
                            span { class: "sidebar__user-email", "{stats.month_name}" }
                            span {
                                class: if stats.current_month_balance >= 0.0 { "amount--positive" } else { "amount--negative" },
                                "{format::money(stats.current_month_balance, &symbol)}"
                            }
                        }
                    }
                    if let Some(user) = session.user() {
                        div {
                            class: "sidebar__user",
                            span { class: "sidebar__user-name", "{user.display_name()}" }
                            span { class: "sidebar__user-email", "{user.email}" }
                        }
                    }
                    button {
                        class: "sidebar__link sidebar__link--logout",
                        onclick: on_logout,
                        Icon { icon: FaRightFromBracket, width: 16, height: 16 }
                        span { "Sign out" }
                    }
                }
            }
            main {
                class: "shell__content",
                {children}
            }
        }
        Toaster {}
    }
}
