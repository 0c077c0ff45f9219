//! Brokers view: one node per broker, expandable to its advertised
//! endpoints.

use leptos::*;

use super::primitives::{Badge, EmptyState, TableCard};
use super::tree::Tree;
use crate::state::DashboardState;

/// Broker list view
#[component]
pub fn BrokersView() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    state.load_brokers();

    let brokers = state.brokers;
    let count_badge = view! {
        <Badge text=Signal::derive(move || format!("{} brokers", brokers.get().len()))/>
    }
    .into_view();

    view! {
        <div class="view active" role="main" aria-label="Brokers">
            <TableCard title="Brokers" badge=count_badge>
                <Show
                    when=move || !brokers.get().is_empty()
                    fallback=|| view! {
                        <EmptyState
                            title="No brokers"
                            description="The cluster reported no live brokers"
                        />
                    }
                >
                    <Tree nodes=brokers/>
                </Show>
            </TableCard>
        </div>
    }
}
