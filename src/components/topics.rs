//! Topics view: searchable tree of topics, each lazily expanding into its
//! partition table and config overrides.

use leptos::*;

use super::primitives::{Badge, EmptyState, SearchInput, TableCard};
use super::tree::Tree;
use crate::state::DashboardState;

/// Topics list view with search
#[component]
pub fn TopicsView() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    // showing the tab (re)loads the collection
    state.load_topics();

    let filtered = state.filtered_topics();
    let count_badge = view! {
        <Badge text=Signal::derive({
            let filtered = filtered.clone();
            move || format!("{} topics", filtered().len())
        })/>
    }
    .into_view();

    view! {
        <div class="view active" role="main" aria-label="Topics">
            <SearchInput value=state.topic_search placeholder="Filter topics..."/>
            <TableCard title="Topics" badge=count_badge>
                <Show
                    when={
                        let filtered = filtered.clone();
                        move || !filtered().is_empty()
                    }
                    fallback=|| view! {
                        <EmptyState
                            title="No topics"
                            description="Nothing matched, or the last load returned no topics"
                        />
                    }
                >
                    <Tree nodes=Signal::derive({
                        let filtered = filtered.clone();
                        move || filtered()
                    })/>
                </Show>
            </TableCard>
        </div>
    }
}
