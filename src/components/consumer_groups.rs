//! Consumer groups view: one lazy node per group id, expanding into the
//! status summary, members, and committed offsets.

use leptos::*;

use super::primitives::{Badge, EmptyState, TableCard};
use super::tree::Tree;
use crate::state::DashboardState;

/// Consumer group list view
#[component]
pub fn ConsumerGroupsView() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    state.load_consumer_groups();

    let groups = state.consumer_groups;
    let count_badge = view! {
        <Badge text=Signal::derive(move || format!("{} groups", groups.get().len()))/>
    }
    .into_view();

    view! {
        <div class="view active" role="main" aria-label="Consumer Groups">
            <TableCard title="Consumer Groups" badge=count_badge>
                <Show
                    when=move || !groups.get().is_empty()
                    fallback=|| view! {
                        <EmptyState
                            title="No consumer groups"
                            description="Consumer groups appear here once clients commit offsets"
                        />
                    }
                >
                    <Tree nodes=groups/>
                </Show>
            </TableCard>
        </div>
    }
}
