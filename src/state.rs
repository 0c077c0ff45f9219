//! Global dashboard state management
//!
//! The state owns the three top-level node collections, the diagnostics
//! pair for the most recent request, and the populators wired into lazily
//! expanded nodes. Reactive state uses Leptos signals.

use leptos::*;
use serde::de::DeserializeOwned;
use serde_json::Value;
use wasm_bindgen_futures::spawn_local;

use crate::api::{ApiClient, ApiError, BrokerInfo, ConsumerGroup, TopicDetail};
use crate::tree::{NodeContent, Populator, Table, TreeNode};
use crate::viewmodel::{group_children, group_summary, topic_children};

/// Current dashboard view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Topics,
    Brokers,
    ConsumerGroups,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Topics => "Topics",
            View::Brokers => "Brokers",
            View::ConsumerGroups => "Consumer Groups",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            View::Topics => "/",
            View::Brokers => "/brokers",
            View::ConsumerGroups => "/groups",
        }
    }

    pub fn from_path(path: &str) -> Self {
        match path {
            "/brokers" => View::Brokers,
            "/groups" => View::ConsumerGroups,
            _ => View::Topics,
        }
    }
}

/// Most recent request/response pair, surfaced verbatim for debugging
#[derive(Clone)]
pub struct Diagnostics {
    pub last_request: RwSignal<String>,
    pub last_response: RwSignal<String>,
    pub last_response_ok: RwSignal<bool>,
}

impl Diagnostics {
    fn new() -> Self {
        Self {
            last_request: create_rw_signal(String::new()),
            last_response: create_rw_signal(String::new()),
            last_response_ok: create_rw_signal(true),
        }
    }

    fn record_request(&self, uri: &str) {
        self.last_request.set(uri.to_string());
    }

    fn record_ok(&self, body: &Value) {
        self.last_response
            .set(serde_json::to_string_pretty(body).unwrap_or_default());
        self.last_response_ok.set(true);
    }

    fn record_err(&self, err: &ApiError) {
        self.last_response.set(err.to_string());
        self.last_response_ok.set(false);
    }
}

/// Global dashboard state
#[derive(Clone)]
pub struct DashboardState {
    /// Broker nodes
    pub brokers: RwSignal<Vec<TreeNode>>,
    /// Topic nodes
    pub topics: RwSignal<Vec<TreeNode>>,
    /// Consumer group nodes
    pub consumer_groups: RwSignal<Vec<TreeNode>>,
    /// Topic search filter
    pub topic_search: RwSignal<String>,
    /// Last request/response pair
    pub diagnostics: Diagnostics,
}

impl DashboardState {
    /// Create new dashboard state with placeholder collections
    pub fn new() -> Self {
        Self {
            brokers: create_rw_signal(placeholder("brokers")),
            topics: create_rw_signal(placeholder("topics")),
            consumer_groups: create_rw_signal(placeholder("consumer groups")),
            topic_search: create_rw_signal(String::new()),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Reload the collection behind `view`
    pub fn load_view(&self, view: View) {
        match view {
            View::Topics => self.load_topics(),
            View::Brokers => self.load_brokers(),
            View::ConsumerGroups => self.load_consumer_groups(),
        }
    }

    /// Reload the broker list
    pub fn load_brokers(&self) {
        let state = self.clone();
        spawn_local(async move {
            match state.fetch::<Vec<BrokerInfo>>("/api/v1/brokers").await {
                Ok(brokers) => state.brokers.set(broker_nodes(brokers)),
                Err(_) => state.brokers.set(Vec::new()),
            }
        });
    }

    /// Reload the topic list
    pub fn load_topics(&self) {
        let state = self.clone();
        spawn_local(async move {
            match state.fetch::<Vec<String>>("/api/v1/topics").await {
                Ok(names) => {
                    let nodes = lazy_nodes(names, |name| state.topic_populator(name));
                    state.topics.set(nodes);
                }
                Err(_) => state.topics.set(Vec::new()),
            }
        });
    }

    /// Reload the consumer group list
    pub fn load_consumer_groups(&self) {
        let state = self.clone();
        spawn_local(async move {
            match state.fetch::<Vec<String>>("/api/v1/consumers").await {
                Ok(ids) => {
                    let nodes = lazy_nodes(ids, |id| state.group_populator(id));
                    state.consumer_groups.set(nodes);
                }
                Err(_) => state.consumer_groups.set(Vec::new()),
            }
        });
    }

    /// GET `path`, recording the request and its outcome for the
    /// diagnostics panel. HTTP, transport, and decode failures all land in
    /// the same "request failed" bucket.
    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.diagnostics.record_request(path);
        let outcome = async {
            let body = ApiClient::from_origin().get_json(path).await?;
            let value: T = serde_json::from_value(body.clone())?;
            Ok::<(T, Value), ApiError>((value, body))
        }
        .await;

        match outcome {
            Ok((value, body)) => {
                self.diagnostics.record_ok(&body);
                Ok(value)
            }
            Err(err) => {
                self.diagnostics.record_err(&err);
                Err(err)
            }
        }
    }

    /// Populator for one topic node: fetches the topic detail and reshapes
    /// it into partition/config children.
    fn topic_populator(&self, name: &str) -> Populator {
        let state = self.clone();
        let path = format!("/api/v1/topics/{name}");
        Populator::new(move || {
            let state = state.clone();
            let path = path.clone();
            Box::pin(async move {
                let detail = state.fetch::<TopicDetail>(&path).await?;
                Ok(NodeContent::children(topic_children(&detail)))
            })
        })
    }

    /// Populator for one consumer group node: fetches the group detail and
    /// reshapes it into the summary table plus members/offsets children.
    fn group_populator(&self, id: &str) -> Populator {
        let state = self.clone();
        let path = format!("/api/v1/consumers/{id}");
        Populator::new(move || {
            let state = state.clone();
            let path = path.clone();
            Box::pin(async move {
                match state.fetch::<ConsumerGroup>(&path).await {
                    Ok(group) => Ok(NodeContent {
                        table: Some(group_summary(&group.status)),
                        children: group_children(&group),
                    }),
                    Err(err) => {
                        logging::error!("consumer group fetch failed: {err}");
                        Err(err)
                    }
                }
            })
        })
    }

    /// Topic nodes filtered by the search box
    pub fn filtered_topics(&self) -> impl Fn() -> Vec<TreeNode> + Clone {
        let topics = self.topics;
        let search = self.topic_search;
        move || {
            let needle = search.get().to_lowercase();
            if needle.is_empty() {
                topics.get()
            } else {
                topics
                    .get()
                    .into_iter()
                    .filter(|node| node.label.to_lowercase().contains(&needle))
                    .collect()
            }
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Node builders
// ============================================================================

fn placeholder(what: &str) -> Vec<TreeNode> {
    vec![TreeNode::leaf(format!("loading {what} ..."))]
}

/// Broker nodes: one per broker, expandable to its advertised endpoints
pub fn broker_nodes(brokers: Vec<BrokerInfo>) -> Vec<TreeNode> {
    brokers
        .into_iter()
        .map(|broker| {
            let label = format!("{}:{}", broker.host, broker.port);
            let rows = broker.endpoints.into_iter().map(|ep| vec![ep]).collect();
            TreeNode::with_content(label, NodeContent::table(Table::new(rows)))
        })
        .collect()
}

/// Lazy nodes for a list of names: sorted lexicographically, one node per
/// name, each fetching its content on first expansion.
pub fn lazy_nodes(mut labels: Vec<String>, populator: impl Fn(&str) -> Populator) -> Vec<TreeNode> {
    labels.sort();
    labels
        .into_iter()
        .map(|label| {
            let populate = populator(&label);
            TreeNode::lazy(label, populate)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop_populator(_: &str) -> Populator {
        Populator::new(|| Box::pin(async { Ok(NodeContent::default()) }))
    }

    #[test]
    fn topics_load_yields_sorted_collapsed_unloaded_nodes() {
        let runtime = create_runtime();
        let nodes = lazy_nodes(vec!["topicB".into(), "topicA".into()], noop_populator);
        let labels: Vec<&str> = nodes.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["topicA", "topicB"]);
        for node in &nodes {
            assert!(node.is_expandable());
            assert!(!node.is_open.get_untracked());
            assert!(!node.is_loading.get_untracked());
            assert!(node.content.get_untracked().is_empty());
        }
        runtime.dispose();
    }

    #[test]
    fn broker_nodes_show_endpoints_as_single_column_table() {
        let runtime = create_runtime();
        let nodes = broker_nodes(vec![BrokerInfo {
            host: "broker-0".into(),
            port: 9092,
            endpoints: vec!["PLAINTEXT://broker-0:9092".into()],
        }]);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].label, "broker-0:9092");
        let table = nodes[0].content.get_untracked().table.unwrap();
        assert!(table.headers.is_none());
        assert_eq!(table.rows, vec![vec!["PLAINTEXT://broker-0:9092"]]);
        assert!(!nodes[0].is_refreshable());
        runtime.dispose();
    }

    #[test]
    fn broker_without_endpoints_is_not_expandable() {
        let runtime = create_runtime();
        let nodes = broker_nodes(vec![BrokerInfo {
            host: "broker-1".into(),
            port: 9093,
            endpoints: Vec::new(),
        }]);
        assert!(!nodes[0].is_expandable());
        runtime.dispose();
    }

    #[test]
    fn view_paths_round_trip() {
        for view in [View::Topics, View::Brokers, View::ConsumerGroups] {
            assert_eq!(View::from_path(view.path()), view);
        }
        assert_eq!(View::from_path("/nonsense"), View::Topics);
    }
}
