//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const UI_CSS: Asset = asset!("/assets/ui.css");

pub mod components;
pub use components::{
    Button, ButtonVariant, EmptyState, Input, Label, Loading, ModalOverlay, PageCard, Select,
    StatCard, StatTone,
};

mod auth;
pub use auth::{use_session, RouteGuard, SessionHandle, SessionProvider};

mod notifications;
pub use notifications::{use_toast, Toast, ToastLevel, Toaster, Toasts};

mod navbar;
pub use navbar::{AppShell, NavItem};

pub mod charts;
pub use charts::{BarChart, BarPoint, DonutChart, DonutSlice};

pub mod format;
