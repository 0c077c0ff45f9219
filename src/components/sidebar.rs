//! Sidebar navigation component
//!
//! Branding, the three view links with active-state highlighting, and a
//! status footer.

use leptos::*;
use leptos_router::*;

use super::icons::{BrokerIcon, GroupIcon, TopicIcon};
use crate::state::DashboardState;

/// Sidebar navigation
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let ok = state.diagnostics.last_response_ok;

    view! {
        <aside class="sidebar" role="navigation" aria-label="Main navigation">
            <div class="logo" aria-label="Brokkr Dashboard">
                <div class="logo-icon" aria-hidden="true">"B"</div>
                <span class="logo-text">"Brokkr"</span>
                <span class="logo-version">"v0.1"</span>
            </div>

            <nav class="nav" aria-label="Primary">
                <div class="nav-section">
                    <div class="nav-section-title" aria-hidden="true">"Cluster"</div>
                    <A href="/" class="nav-link" active_class="active" exact=true>
                        <TopicIcon/>
                        <span>"Topics"</span>
                    </A>
                    <A href="/brokers" class="nav-link" active_class="active">
                        <BrokerIcon/>
                        <span>"Brokers"</span>
                    </A>
                    <A href="/groups" class="nav-link" active_class="active">
                        <GroupIcon/>
                        <span>"Consumer Groups"</span>
                    </A>
                </div>
            </nav>

            <div class="sidebar-footer" role="status" aria-label="Last response status">
                <div class="sidebar-stat">
                    <span class="sidebar-stat-label">"Last response"</span>
                    <span class="sidebar-stat-value" aria-live="polite">
                        {move || if ok.get() { "OK" } else { "Error" }}
                    </span>
                </div>
            </div>
        </aside>
    }
}
