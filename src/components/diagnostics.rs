//! Diagnostics panel: the most recent request URI and raw response body,
//! shown verbatim for human inspection.

use leptos::*;

use super::primitives::{Badge, BadgeVariant};
use crate::state::DashboardState;

/// Last request/response panel
#[component]
pub fn DiagnosticsPanel() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let diagnostics = state.diagnostics.clone();
    let ok = diagnostics.last_response_ok;

    let status_badge = (move || {
        if ok.get() {
            view! { <Badge text="OK" variant=BadgeVariant::Success/> }.into_view()
        } else {
            view! { <Badge text="Error" variant=BadgeVariant::Error/> }.into_view()
        }
    })
    .into_view();

    view! {
        <section class="table-card diagnostics" role="region" aria-label="Last request">
            <div class="table-header">
                <div class="table-title">"Last Request"</div>
                {status_badge}
            </div>
            <div class="card-body">
                <div class="diagnostics-uri mono" aria-label="Request URI">
                    {move || diagnostics.last_request.get()}
                </div>
                <pre class="diagnostics-body mono" aria-label="Raw response">
                    {move || diagnostics.last_response.get()}
                </pre>
            </div>
        </section>
    }
}
