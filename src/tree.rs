//! Lazily-populated tree view-model.
//!
//! Every row of a dashboard tree is a [`TreeNode`]: a plain leaf, a node
//! whose content is fixed at construction, or a lazy node that fetches its
//! content the first time it is expanded. Population is request/response
//! shaped: a [`Populator`] hands back a future resolving to the fetched
//! [`NodeContent`], the caller drives it, and [`TreeNode::finish_populate`]
//! applies the outcome. Nothing else writes a populated node's signals.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use leptos::*;

use crate::api::ApiError;

/// Tabular node content: optional header row plus data rows. A key/value
/// table is a headerless table of two-column rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self {
            headers: None,
            rows,
        }
    }

    pub fn with_headers(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            headers: Some(headers),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Content a node displays once known
#[derive(Clone, Default)]
pub struct NodeContent {
    pub table: Option<Table>,
    pub children: Vec<TreeNode>,
}

impl NodeContent {
    pub fn table(table: Table) -> Self {
        Self {
            table: Some(table),
            children: Vec::new(),
        }
    }

    pub fn children(children: Vec<TreeNode>) -> Self {
        Self {
            table: None,
            children,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.table.as_ref().map_or(true, Table::is_empty) && self.children.is_empty()
    }
}

/// Future returned by a populator
pub type PopulateFuture = Pin<Box<dyn Future<Output = Result<NodeContent, ApiError>>>>;

/// Callback that fetches a lazy node's content
#[derive(Clone)]
pub struct Populator(Rc<dyn Fn() -> PopulateFuture>);

impl Populator {
    pub fn new<F>(fetch: F) -> Self
    where
        F: Fn() -> PopulateFuture + 'static,
    {
        Self(Rc::new(fetch))
    }

    fn call(&self) -> PopulateFuture {
        (self.0)()
    }
}

/// How a node obtains its content
#[derive(Clone)]
pub enum NodeKind {
    /// Label only, never expandable
    Leaf,
    /// Content fixed at construction
    Static,
    /// Content fetched on first expansion and on manual refresh
    Lazy(Populator),
}

/// One row of a tree view
#[derive(Clone)]
pub struct TreeNode {
    pub label: String,
    pub kind: NodeKind,
    pub content: RwSignal<NodeContent>,
    pub is_loading: RwSignal<bool>,
    pub is_open: RwSignal<bool>,
}

impl TreeNode {
    fn new(label: impl Into<String>, kind: NodeKind, content: NodeContent) -> Self {
        Self {
            label: label.into(),
            kind,
            content: create_rw_signal(content),
            is_loading: create_rw_signal(false),
            is_open: create_rw_signal(false),
        }
    }

    pub fn leaf(label: impl Into<String>) -> Self {
        Self::new(label, NodeKind::Leaf, NodeContent::default())
    }

    pub fn with_content(label: impl Into<String>, content: NodeContent) -> Self {
        Self::new(label, NodeKind::Static, content)
    }

    pub fn lazy(label: impl Into<String>, populator: Populator) -> Self {
        Self::new(label, NodeKind::Lazy(populator), NodeContent::default())
    }

    /// A node is expandable iff it can ever show content: it has a
    /// populator, or it already carries a table or children.
    pub fn is_expandable(&self) -> bool {
        matches!(self.kind, NodeKind::Lazy(_)) || self.content.with(|c| !c.is_empty())
    }

    /// Manual refresh is offered for lazy nodes that are not mid-fetch
    pub fn is_refreshable(&self) -> bool {
        matches!(self.kind, NodeKind::Lazy(_)) && !self.is_loading.get()
    }

    fn is_uninitialized(&self) -> bool {
        self.content.with(NodeContent::is_empty)
    }

    /// Handle a click on the node row.
    ///
    /// Expanding an uninitialized lazy node starts a fetch and returns the
    /// future the caller must drive to completion; `is_open` is left alone
    /// until [`Self::finish_populate`] applies the outcome. Any other
    /// expandable node just flips `is_open`.
    pub fn toggle(&self) -> Option<PopulateFuture> {
        if !self.is_expandable() {
            return None;
        }
        if self.is_uninitialized() {
            self.begin_populate()
        } else {
            self.is_open.update(|open| *open = !*open);
            None
        }
    }

    /// Re-fetch content regardless of loaded state. A refresh while a
    /// fetch is already in flight is a no-op.
    pub fn refresh(&self) -> Option<PopulateFuture> {
        self.begin_populate()
    }

    fn begin_populate(&self) -> Option<PopulateFuture> {
        let NodeKind::Lazy(populator) = &self.kind else {
            return None;
        };
        if self.is_loading.get_untracked() {
            return None;
        }
        self.is_loading.set(true);
        Some(populator.call())
    }

    /// Apply the outcome of a population fetch. On success the node opens
    /// with the fetched content; on failure it is cleared and collapsed.
    pub fn finish_populate(&self, outcome: Result<NodeContent, ApiError>) {
        self.is_loading.set(false);
        match outcome {
            Ok(content) => {
                self.content.set(content);
                self.is_open.set(true);
            }
            Err(_) => {
                self.content.set(NodeContent::default());
                self.is_open.set(false);
            }
        }
    }
}
