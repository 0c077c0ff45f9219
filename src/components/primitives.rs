//! Reusable UI primitive components: badges, indicators, cards, and the
//! empty/loading states the views share.

use leptos::*;

use super::icons::SearchIcon;

/// Badge variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Success,
    Error,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge",
            BadgeVariant::Success => "badge badge-success",
            BadgeVariant::Error => "badge badge-error",
        }
    }
}

/// Badge component with text
#[component]
pub fn Badge<T: IntoView + 'static>(
    text: T,
    #[prop(optional)] variant: BadgeVariant,
) -> impl IntoView {
    view! {
        <span class=variant.class()>{text}</span>
    }
}

/// Status indicator dot
#[component]
pub fn StatusDot(#[prop(into)] connected: MaybeSignal<bool>) -> impl IntoView {
    view! {
        <span
            class="status-dot"
            class:connected=move || connected.get()
            class:disconnected=move || !connected.get()
            role="status"
            aria-label=move || if connected.get() { "Connected" } else { "Disconnected" }
        />
    }
}

/// Generic empty state
#[component]
pub fn EmptyState(
    title: &'static str,
    #[prop(optional)] description: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="empty-state" role="status">
            <div class="empty-text">{title}</div>
            {description.map(|desc| view! { <p class="empty-description">{desc}</p> })}
        </div>
    }
}

/// Small inline loading spinner
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <span class="loading-spinner" role="status" aria-live="polite" aria-label="Loading">
            <svg class="spinner" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
                <circle class="spinner-track" cx="12" cy="12" r="10" fill="none" stroke-width="3"/>
                <circle class="spinner-head" cx="12" cy="12" r="10" fill="none" stroke-width="3"
                        stroke-dasharray="31.4 31.4" stroke-linecap="round"/>
            </svg>
        </span>
    }
}

/// Table card container
#[component]
pub fn TableCard(
    title: &'static str,
    children: Children,
    #[prop(optional)] badge: Option<View>,
) -> impl IntoView {
    view! {
        <div class="table-card">
            <div class="table-header">
                <div class="table-title">{title}</div>
                {badge}
            </div>
            {children()}
        </div>
    }
}

/// Search input bound to a signal
#[component]
pub fn SearchInput(
    #[prop(into)] value: RwSignal<String>,
    #[prop(optional, default = "Search...")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="search-bar">
            <div class="search-icon" aria-hidden="true">
                <SearchIcon/>
            </div>
            <input
                type="search"
                placeholder=placeholder
                class="search-input"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                aria-label=placeholder
            />
        </div>
    }
}
