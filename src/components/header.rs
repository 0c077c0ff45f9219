//! Header component
//!
//! The top bar showing the current view title, the last-response status
//! dot, and a manual reload button for the current view.

use leptos::*;
use leptos_router::use_location;

use super::icons::RefreshIcon;
use super::primitives::StatusDot;
use crate::state::{DashboardState, View};

/// Page header with status and reload button
#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let location = use_location();
    let ok = state.diagnostics.last_response_ok;

    let pathname = location.pathname;
    let title = move || View::from_path(&pathname.get()).title();

    let reload = {
        let state = state.clone();
        move |_| state.load_view(View::from_path(&pathname.get_untracked()))
    };

    view! {
        <header class="header" role="banner">
            <div class="header-left">
                <h1 class="header-title" aria-live="polite">{title}</h1>
            </div>
            <div class="header-right">
                <div class="connection-status" role="status" aria-live="polite">
                    <StatusDot connected=ok/>
                    <span>{move || if ok.get() { "OK" } else { "Error" }}</span>
                </div>
                <button
                    class="refresh-btn"
                    on:click=reload
                    title="Reload view"
                    aria-label="Reload current view"
                >
                    <RefreshIcon/>
                </button>
            </div>
        </header>
    }
}
