use dioxus::prelude::*;

use ui::{AppShell, RouteGuard, SessionProvider};
use views::{Dashboard, Expenses, Goals, Incomes, Investments, Login, Profile, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(Protected)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/incomes")]
        Incomes {},
        #[route("/expenses")]
        Expenses {},
        #[route("/goals")]
        Goals {},
        #[route("/investments")]
        Investments {},
        #[route("/profile")]
        Profile {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("starting finwatch");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::UI_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Guard + shell around every authenticated view.
#[component]
fn Protected() -> Element {
    let route = use_route::<Route>();
    let active = match route {
        Route::Incomes {} => "/incomes",
        Route::Expenses {} => "/expenses",
        Route::Goals {} => "/goals",
        Route::Investments {} => "/investments",
        Route::Profile {} => "/profile",
        _ => "/dashboard",
    };

    rsx! {
        RouteGuard {
            AppShell {
                active: active.to_string(),
                Outlet::<Route> {}
            }
        }
    }
}

/// Redirect `/` to `/dashboard`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}

/// Unknown paths land on the dashboard.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}
