//! Recursive tree view.
//!
//! Renders a list of [`TreeNode`]s. Clicking a row toggles it; when the
//! toggle (or a refresh) starts a population fetch, the returned future is
//! driven here and its outcome applied back to the node.

use leptos::ev::MouseEvent;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use super::icons::{ChevronIcon, RefreshIcon};
use super::primitives::LoadingSpinner;
use crate::tree::{PopulateFuture, Table, TreeNode};

/// Render a collection of nodes as a tree
#[component]
pub fn Tree(#[prop(into)] nodes: Signal<Vec<TreeNode>>) -> impl IntoView {
    view! {
        <ul class="tree" role="tree">
            {move || nodes.get().into_iter().map(tree_item).collect_view()}
        </ul>
    }
}

/// Drive a population future and apply its outcome to the node
fn drive(node: &TreeNode, started: Option<PopulateFuture>) {
    let Some(fut) = started else { return };
    let node = node.clone();
    spawn_local(async move {
        let outcome = fut.await;
        node.finish_populate(outcome);
    });
}

/// One tree row. Plain function returning `View` so it can recurse for
/// child nodes.
fn tree_item(node: TreeNode) -> View {
    let is_open = node.is_open;
    let is_loading = node.is_loading;

    let on_toggle = {
        let node = node.clone();
        move |_| {
            let started = node.toggle();
            drive(&node, started);
        }
    };

    let refresh_button = {
        let node = node.clone();
        move || {
            node.is_refreshable().then(|| {
                let node = node.clone();
                view! {
                    <button
                        class="tree-refresh"
                        title="Refresh"
                        aria-label="Refresh node"
                        on:click=move |ev: MouseEvent| {
                            ev.stop_propagation();
                            let started = node.refresh();
                            drive(&node, started);
                        }
                    >
                        <RefreshIcon/>
                    </button>
                }
            })
        }
    };

    let expandable = {
        let node = node.clone();
        move || node.is_expandable()
    };
    let arrow_hidden = {
        let expandable = expandable.clone();
        move || !expandable()
    };

    let body = {
        let node = node.clone();
        move || is_open.get().then(|| node_body(&node))
    };

    view! {
        <li class="tree-node" role="treeitem" aria-expanded=move || is_open.get().to_string()>
            <div class="tree-row" class:expandable=expandable on:click=on_toggle>
                <span class="tree-arrow" class:open=move || is_open.get() class:hidden=arrow_hidden>
                    <ChevronIcon/>
                </span>
                <span class="tree-label">{node.label.clone()}</span>
                {move || is_loading.get().then(|| view! { <LoadingSpinner/> })}
                {refresh_button}
            </div>
            {body}
        </li>
    }
    .into_view()
}

/// Expanded body of a node: its table (when present) then its children
fn node_body(node: &TreeNode) -> View {
    let content = node.content.get();
    let table = content.table.filter(|t| !t.is_empty()).map(table_view);
    let children = (!content.children.is_empty()).then(|| {
        view! {
            <ul class="tree" role="group">
                {content.children.into_iter().map(tree_item).collect_view()}
            </ul>
        }
    });

    view! { <div class="tree-body">{table}{children}</div> }.into_view()
}

fn table_view(table: Table) -> View {
    let head = table.headers.map(|headers| {
        view! {
            <thead>
                <tr>
                    {headers
                        .into_iter()
                        .map(|header| view! { <th scope="col">{header}</th> })
                        .collect_view()}
                </tr>
            </thead>
        }
    });

    view! {
        <table class="node-table">
            {head}
            <tbody>
                {table
                    .rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <tr>
                                {row
                                    .into_iter()
                                    .map(|cell| view! { <td class="mono">{cell}</td> })
                                    .collect_view()}
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_view()
}
