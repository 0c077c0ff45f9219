//! REST API client for the cluster management API.
//!
//! Provides typed HTTP requests using gloo-net. Responses are fetched as
//! raw JSON documents first so the diagnostics panel can show them
//! verbatim; typed views are decoded from the same document.

use gloo_net::http::Request;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::config::DashboardConfig;

/// API client for the cluster management API
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Create an API client from dashboard configuration
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.api_url())
    }

    /// Create an API client that uses the current origin
    /// Falls back to localhost:8080 if origin cannot be determined
    pub fn from_origin() -> Self {
        let config = DashboardConfig::load();
        Self::from_config(&config)
    }

    /// GET a JSON document from `path` (e.g. `/api/v1/topics`).
    pub async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = Request::get(&url).send().await?;

        if resp.ok() {
            Ok(resp.json().await?)
        } else {
            Err(ApiError::Http(resp.status()))
        }
    }
}

// ============================================================================
// API Response Types
// ============================================================================

/// One broker as reported by `/api/v1/brokers`
#[derive(Debug, Clone, Deserialize)]
pub struct BrokerInfo {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub endpoints: Vec<String>,
}

/// Topic detail from `/api/v1/topics/{name}`
#[derive(Debug, Clone, Deserialize)]
pub struct TopicDetail {
    #[serde(default)]
    pub partitions: Vec<PartitionInfo>,
    /// Per-topic config overrides, in document order
    #[serde(default)]
    pub config: IndexMap<String, Value>,
}

/// One partition of a topic
#[derive(Debug, Clone, Deserialize)]
pub struct PartitionInfo {
    pub partition: i32,
    pub leader: i32,
    #[serde(default)]
    pub replicas: Vec<i32>,
    #[serde(default)]
    pub isr: Vec<i32>,
}

/// Consumer group detail from `/api/v1/consumers/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct ConsumerGroup {
    pub status: GroupStatus,
    #[serde(default)]
    pub offsets: Vec<OffsetInfo>,
}

/// Group status: a detail object for live groups, or a bare state string
/// such as `"Dead"` or `"Empty"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GroupStatus {
    Detail(GroupDetail),
    State(String),
}

/// Status detail of a live group. A group mid-rebalance has no elected
/// leader or protocol yet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroupDetail {
    #[serde(default)]
    pub leader: Option<String>,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub members: Vec<MemberInfo>,
}

/// One group member
#[derive(Debug, Clone, Deserialize)]
pub struct MemberInfo {
    pub member_id: String,
    #[serde(default)]
    pub session_timeout: Value,
    #[serde(default)]
    pub client_id: Value,
    #[serde(default)]
    pub client_host: Value,
    #[serde(default)]
    pub subscription: Subscription,
}

/// A member's topic subscription
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Subscription {
    #[serde(default)]
    pub version: Value,
    #[serde(default)]
    pub userdata: Value,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// One committed offset record
#[derive(Debug, Clone, Deserialize)]
pub struct OffsetInfo {
    pub topic: String,
    pub partition: i32,
    pub offset: i64,
    /// Collected by a separate flow; may lag behind the committed offset
    #[serde(default)]
    pub high_wm_offset: Option<i64>,
    #[serde(default)]
    pub commit_time: Option<i64>,
    #[serde(default)]
    pub expire_time: Option<i64>,
    #[serde(default)]
    pub metadata: Value,
}

// ============================================================================
// Error Types
// ============================================================================

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(u16),

    #[error("Network error: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_status_decodes_detail_or_bare_state() {
        let detail: GroupStatus =
            serde_json::from_str(r#"{"leader":"m1","protocol":"range"}"#).unwrap();
        assert!(matches!(
            detail,
            GroupStatus::Detail(GroupDetail { leader: Some(_), protocol: Some(_), .. })
        ));

        let state: GroupStatus = serde_json::from_str(r#""Dead""#).unwrap();
        assert!(matches!(state, GroupStatus::State(s) if s == "Dead"));
    }

    #[test]
    fn topic_detail_tolerates_missing_config() {
        let detail: TopicDetail = serde_json::from_str(
            r#"{"partitions":[{"partition":0,"leader":1,"replicas":[1,2],"isr":[1]}]}"#,
        )
        .unwrap();
        assert!(detail.config.is_empty());
        assert_eq!(detail.partitions[0].replicas, vec![1, 2]);
    }
}
