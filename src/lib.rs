//! Brokkr Dashboard - Leptos-based WebAssembly UI
//!
//! A read-only dashboard for inspecting a Brokkr message-broker cluster.
//! It polls the cluster management REST API and renders brokers, topics,
//! and consumer groups as lazily-expanding trees with embedded tables.
//!
//! ## Features
//!
//! - **Brokers**: host:port per broker, expandable to advertised endpoints
//! - **Topics**: partition/leader/replica tables with out-of-sync replica
//!   highlighting, plus per-topic config overrides
//! - **Consumer Groups**: status summary, member subscriptions, committed
//!   offsets with lag
//! - **Diagnostics**: the raw last request/response pair, shown verbatim
//! - **Zero JavaScript**: 100% Rust compiled to WASM
//! - **Air-Gapped**: no external network requests (fonts, CDNs, etc.)
//!
//! ## Configuration
//!
//! The dashboard supports configuration injection for air-gapped
//! deployments:
//!
//! ```html
//! <!-- Server injects config via meta tags -->
//! <meta name="brokkr:api-url" content="http://brokkr.local:8080">
//! <meta name="brokkr:version" content="0.1.0">
//! ```
//!
//! Or via JavaScript:
//!
//! ```javascript
//! window.__BROKKR_CONFIG__ = {
//!     api_url: "http://brokkr.local:8080",
//!     version: "0.1.0"
//! };
//! ```
//!
//! With neither present, requests go to the current origin.

pub mod api;
pub mod components;
pub mod config;
pub mod state;
pub mod tree;
pub mod viewmodel;

use leptos::*;
use leptos_router::*;

use components::{
    brokers::BrokersView, consumer_groups::ConsumerGroupsView, diagnostics::DiagnosticsPanel,
    header::Header, sidebar::Sidebar, topics::TopicsView,
};
use state::DashboardState;

/// Main dashboard application component
#[component]
pub fn App() -> impl IntoView {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Create global state
    let state = DashboardState::new();
    provide_context(state.clone());

    view! {
        <Router>
            <div class="app">
                <Sidebar/>
                <main class="main">
                    <Header/>
                    <div class="content">
                        <Routes>
                            <Route path="/" view=TopicsView/>
                            <Route path="/brokers" view=BrokersView/>
                            <Route path="/groups" view=ConsumerGroupsView/>
                        </Routes>
                        <DiagnosticsPanel/>
                    </div>
                </main>
            </div>
        </Router>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    mount_to_body(|| view! { <App/> });
}
