//! Pure transforms from API responses to tree content.
//!
//! Everything here is synchronous and side-effect free: raw response
//! structs go in, [`Table`]s and [`TreeNode`] subtrees come out. Cells are
//! built as JSON values and normalized at the edge — structured values
//! render as their JSON text, `null` renders blank.

use chrono::{Local, TimeZone};
use serde_json::{json, Value};

use crate::api::{ConsumerGroup, GroupStatus, MemberInfo, OffsetInfo, PartitionInfo, TopicDetail};
use crate::tree::{NodeContent, Table, TreeNode};

pub const PARTITION_HEADERS: [&str; 4] = ["partition", "leader", "replicas", "out-of-sync-replicas"];

pub const OFFSET_HEADERS: [&str; 7] = [
    "topic",
    "partition",
    "offset",
    "lagging",
    "commit_time",
    "expire_time",
    "metadata",
];

/// Replace structured cells with their JSON text; primitives pass through.
pub fn normalize_table(rows: Vec<Vec<Value>>) -> Vec<Vec<Value>> {
    rows.into_iter()
        .map(|row| row.into_iter().map(normalize_cell).collect())
        .collect()
}

fn normalize_cell(cell: Value) -> Value {
    match cell {
        Value::Array(_) | Value::Object(_) => {
            Value::String(serde_json::to_string(&cell).unwrap_or_default())
        }
        primitive => primitive,
    }
}

/// Render one cell for display. `null` marks an absent field and renders
/// blank rather than as literal text.
pub fn cell_text(cell: &Value) -> String {
    match cell {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn table_rows(rows: Vec<Vec<Value>>) -> Vec<Vec<String>> {
    normalize_table(rows)
        .iter()
        .map(|row| row.iter().map(cell_text).collect())
        .collect()
}

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|h| h.to_string()).collect()
}

/// Subsequence of `replicas` absent from `in_sync`, order preserved.
/// Both inputs must be sorted ascending.
pub fn out_of_sync_replicas<T: Ord + Clone>(replicas: &[T], in_sync: &[T]) -> Vec<T> {
    let mut out = Vec::new();
    let mut cursor = 0;
    for replica in replicas {
        while cursor < in_sync.len() && in_sync[cursor] < *replica {
            cursor += 1;
        }
        if cursor < in_sync.len() && in_sync[cursor] == *replica {
            cursor += 1;
        } else {
            out.push(replica.clone());
        }
    }
    out
}

/// `[partition, leader, replicas, out-of-sync-replicas]`; the last cell is
/// blank when every replica is in sync.
pub fn partition_row(p: &PartitionInfo) -> Vec<Value> {
    let mut replicas = p.replicas.clone();
    let mut isr = p.isr.clone();
    replicas.sort_unstable();
    isr.sort_unstable();

    let out_of_sync = out_of_sync_replicas(&replicas, &isr);
    let out_of_sync_cell = if out_of_sync.is_empty() {
        Value::String(String::new())
    } else {
        json!(out_of_sync)
    };

    vec![
        json!(p.partition),
        json!(p.leader),
        json!(replicas),
        out_of_sync_cell,
    ]
}

/// Child nodes for an expanded topic: the partition table plus, when the
/// topic carries config overrides, a config table.
pub fn topic_children(detail: &TopicDetail) -> Vec<TreeNode> {
    let rows = detail.partitions.iter().map(partition_row).collect();
    let partitions = TreeNode::with_content(
        "partitions",
        NodeContent::table(Table::with_headers(
            headers(&PARTITION_HEADERS),
            table_rows(rows),
        )),
    );

    let mut children = vec![partitions];
    if !detail.config.is_empty() {
        let rows = detail
            .config
            .iter()
            .map(|(key, value)| vec![Value::String(key.clone()), value.clone()])
            .collect();
        children.push(TreeNode::with_content(
            "config",
            NodeContent::table(Table::new(table_rows(rows))),
        ));
    }
    children
}

/// Key/value summary table for a consumer group's status field.
pub fn group_summary(status: &GroupStatus) -> Table {
    let rows = match status {
        GroupStatus::Detail(detail) => match (&detail.leader, &detail.protocol) {
            (Some(leader), Some(protocol)) => vec![
                vec![json!("leader"), json!(leader)],
                vec![json!("protocol"), json!(protocol)],
            ],
            // no elected leader/protocol yet: the group is mid-rebalance
            _ => vec![vec![json!("status"), json!("rebalancing")]],
        },
        GroupStatus::State(state) => vec![vec![json!("status"), json!(state)]],
    };
    Table::new(table_rows(rows))
}

/// Child nodes for an expanded consumer group: members (when the status
/// object carries any) and committed offsets (when any exist).
pub fn group_children(group: &ConsumerGroup) -> Vec<TreeNode> {
    let mut children = Vec::new();

    if let GroupStatus::Detail(detail) = &group.status {
        if !detail.members.is_empty() {
            let members = detail.members.iter().map(member_node).collect();
            children.push(TreeNode::with_content(
                "members",
                NodeContent::children(members),
            ));
        }
    }

    if !group.offsets.is_empty() {
        children.push(offsets_node(&group.offsets));
    }
    children
}

fn member_node(member: &MemberInfo) -> TreeNode {
    let sub = &member.subscription;

    let topics = sub.topics.iter().map(|t| TreeNode::leaf(t.clone())).collect();
    let topics_node = TreeNode::with_content("topics", NodeContent::children(topics));

    let subscription_table = Table::new(table_rows(vec![
        vec![json!("version"), sub.version.clone()],
        vec![json!("userdata"), sub.userdata.clone()],
    ]));
    let subscription = TreeNode::with_content(
        "subscription",
        NodeContent {
            table: Some(subscription_table),
            children: vec![topics_node],
        },
    );

    let member_table = Table::new(table_rows(vec![
        vec![json!("session_timeout"), member.session_timeout.clone()],
        vec![json!("client_id"), member.client_id.clone()],
        vec![json!("client_host"), member.client_host.clone()],
    ]));
    TreeNode::with_content(
        member.member_id.clone(),
        NodeContent {
            table: Some(member_table),
            children: vec![subscription],
        },
    )
}

fn offsets_node(offsets: &[OffsetInfo]) -> TreeNode {
    let mut records = offsets.to_vec();
    records.sort_by(|a, b| {
        (&a.topic, a.partition, a.offset).cmp(&(&b.topic, b.partition, b.offset))
    });

    let rows = records.iter().map(offset_row).collect();
    TreeNode::with_content(
        "offsets",
        NodeContent::table(Table::with_headers(
            headers(&OFFSET_HEADERS),
            table_rows(rows),
        )),
    )
}

fn offset_row(record: &OffsetInfo) -> Vec<Value> {
    let time = |t: Option<i64>| {
        t.map(format_timestamp)
            .map(Value::String)
            .unwrap_or(Value::Null)
    };
    vec![
        json!(record.topic),
        json!(record.partition),
        json!(record.offset),
        lagging_cell(record),
        time(record.commit_time),
        time(record.expire_time),
        record.metadata.clone(),
    ]
}

/// Consumer lag for one offset row. The high watermark is collected by a
/// separate flow; when it is missing or behind the committed offset the lag
/// is unknown and rendered as `?`.
fn lagging_cell(record: &OffsetInfo) -> Value {
    match record.high_wm_offset {
        Some(high_wm) if high_wm >= record.offset => json!(high_wm - record.offset),
        _ => json!("?"),
    }
}

/// `YYYY-MM-DD  HH:MM:SS` in local time, fields zero-padded.
pub fn format_timestamp(epoch_millis: i64) -> String {
    Local
        .timestamp_millis_opt(epoch_millis)
        .single()
        .map(|dt| dt.format("%Y-%m-%d  %H:%M:%S").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{GroupDetail, Subscription};
    use leptos::create_runtime;
    use proptest::prelude::*;

    #[test]
    fn out_of_sync_examples() {
        assert_eq!(out_of_sync_replicas(&[1, 2, 3, 4], &[1, 3]), vec![2, 4]);
        assert_eq!(out_of_sync_replicas(&[1, 2, 3], &[]), vec![1, 2, 3]);
        let none: Vec<i32> = Vec::new();
        assert_eq!(out_of_sync_replicas(&[1, 2, 3], &[1, 2, 3]), none);
    }

    proptest! {
        /// For sorted replicas and any in-sync subset, the result is the
        /// ordered set difference.
        #[test]
        fn out_of_sync_is_ordered_set_difference(
            entries in prop::collection::btree_map(0i32..1000, any::<bool>(), 0..32),
        ) {
            let replicas: Vec<i32> = entries.keys().copied().collect();
            let in_sync: Vec<i32> = entries
                .iter()
                .filter(|(_, in_sync)| **in_sync)
                .map(|(id, _)| *id)
                .collect();
            let expected: Vec<i32> = entries
                .iter()
                .filter(|(_, in_sync)| !**in_sync)
                .map(|(id, _)| *id)
                .collect();
            prop_assert_eq!(out_of_sync_replicas(&replicas, &in_sync), expected);
        }
    }

    #[test]
    fn normalize_table_stringifies_structured_cells() {
        let rows = normalize_table(vec![vec![json!(1), json!([2, 3])]]);
        assert_eq!(rows, vec![vec![json!(1), json!("[2,3]")]]);
    }

    #[test]
    fn cell_text_renders_null_blank() {
        assert_eq!(cell_text(&Value::Null), "");
        assert_eq!(cell_text(&json!("plain")), "plain");
        assert_eq!(cell_text(&json!(42)), "42");
        assert_eq!(cell_text(&json!(true)), "true");
    }

    #[test]
    fn partition_row_blanks_out_of_sync_when_all_in_sync() {
        let p = PartitionInfo {
            partition: 0,
            leader: 1,
            replicas: vec![2, 1],
            isr: vec![1, 2],
        };
        let row = partition_row(&p);
        assert_eq!(row, vec![json!(0), json!(1), json!([1, 2]), json!("")]);
    }

    #[test]
    fn partition_row_lists_lagging_replicas() {
        let p = PartitionInfo {
            partition: 3,
            leader: 2,
            replicas: vec![3, 1, 2],
            isr: vec![2],
        };
        let row = partition_row(&p);
        assert_eq!(row[3], json!([1, 3]));
    }

    #[test]
    fn topic_children_includes_config_only_when_present() {
        let runtime = create_runtime();
        let bare: TopicDetail = serde_json::from_value(json!({
            "partitions": [{"partition": 0, "leader": 1, "replicas": [1], "isr": [1]}],
        }))
        .unwrap();
        let children = topic_children(&bare);
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].label, "partitions");
        let table = children[0].content.get_untracked().table.unwrap();
        assert_eq!(table.headers.as_deref().unwrap()[3], "out-of-sync-replicas");
        assert_eq!(table.rows, vec![vec!["0", "1", "[1]", ""]]);

        let configured: TopicDetail = serde_json::from_value(json!({
            "partitions": [],
            "config": {"retention.ms": "86400000", "cleanup.policy": "compact"},
        }))
        .unwrap();
        let children = topic_children(&configured);
        assert_eq!(children.len(), 2);
        assert_eq!(children[1].label, "config");
        let config = children[1].content.get_untracked().table.unwrap();
        // document order, not alphabetical
        assert_eq!(
            config.rows,
            vec![
                vec!["retention.ms".to_string(), "86400000".to_string()],
                vec!["cleanup.policy".to_string(), "compact".to_string()],
            ]
        );
        runtime.dispose();
    }

    #[test]
    fn group_summary_covers_all_status_shapes() {
        let stable = GroupStatus::Detail(GroupDetail {
            leader: Some("b1".into()),
            protocol: Some("range".into()),
            members: Vec::new(),
        });
        assert_eq!(
            group_summary(&stable).rows,
            vec![
                vec!["leader".to_string(), "b1".to_string()],
                vec!["protocol".to_string(), "range".to_string()],
            ]
        );

        let rebalancing = GroupStatus::Detail(GroupDetail::default());
        assert_eq!(
            group_summary(&rebalancing).rows,
            vec![vec!["status".to_string(), "rebalancing".to_string()]]
        );

        let dead = GroupStatus::State("Dead".into());
        assert_eq!(
            group_summary(&dead).rows,
            vec![vec!["status".to_string(), "Dead".to_string()]]
        );
    }

    #[test]
    fn member_subtree_has_subscription_and_topic_leaves() {
        let runtime = create_runtime();
        let member = MemberInfo {
            member_id: "consumer-1".into(),
            session_timeout: json!(30000),
            client_id: json!("app"),
            client_host: Value::Null,
            subscription: Subscription {
                version: json!(0),
                userdata: Value::Null,
                topics: vec!["events".into(), "audit".into()],
            },
        };
        let node = member_node(&member);
        assert_eq!(node.label, "consumer-1");

        let table = node.content.get_untracked().table.unwrap();
        // absent client_host renders blank
        assert_eq!(table.rows[2], vec!["client_host".to_string(), String::new()]);

        let subscription = node.content.get_untracked().children[0].clone();
        assert_eq!(subscription.label, "subscription");
        let topics = subscription.content.get_untracked().children[0].clone();
        let labels: Vec<String> = topics
            .content
            .get_untracked()
            .children
            .iter()
            .map(|n| n.label.clone())
            .collect();
        assert_eq!(labels, vec!["events", "audit"]);
        runtime.dispose();
    }

    fn offset(topic: &str, partition: i32, offset: i64, high_wm: Option<i64>) -> OffsetInfo {
        OffsetInfo {
            topic: topic.into(),
            partition,
            offset,
            high_wm_offset: high_wm,
            commit_time: None,
            expire_time: None,
            metadata: Value::Null,
        }
    }

    #[test]
    fn offsets_rows_are_sorted_and_lag_is_guarded() {
        let runtime = create_runtime();
        let group: ConsumerGroup = ConsumerGroup {
            status: GroupStatus::State("Stable".into()),
            offsets: vec![
                offset("b-topic", 0, 5, Some(12)),
                offset("a-topic", 1, 7, None),
                offset("a-topic", 0, 9, Some(3)),
            ],
        };
        let children = group_children(&group);
        assert_eq!(children.len(), 1);
        let table = children[0].content.get_untracked().table.unwrap();
        assert_eq!(table.headers.as_deref().unwrap().len(), 7);
        // sorted by (topic, partition); unknown or stale high watermark -> '?'
        assert_eq!(table.rows[0][..4], ["a-topic", "0", "9", "?"]);
        assert_eq!(table.rows[1][..4], ["a-topic", "1", "7", "?"]);
        assert_eq!(table.rows[2][..4], ["b-topic", "0", "5", "7"]);
        runtime.dispose();
    }

    #[test]
    fn members_node_requires_status_detail() {
        let runtime = create_runtime();
        let group = ConsumerGroup {
            status: GroupStatus::State("Empty".into()),
            offsets: Vec::new(),
        };
        assert!(group_children(&group).is_empty());
        runtime.dispose();
    }

    #[test]
    fn timestamp_shape_is_fixed() {
        for ts in [0i64, 1_700_000_000_000] {
            let text = format_timestamp(ts);
            assert_eq!(text.len(), 20, "{text}");
            let bytes = text.as_bytes();
            assert_eq!(bytes[4], b'-');
            assert_eq!(bytes[7], b'-');
            assert_eq!(&text[10..12], "  ");
            assert_eq!(bytes[14], b':');
            assert_eq!(bytes[17], b':');
        }
    }
}
