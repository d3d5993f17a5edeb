//! This module provides an extension for `Node` to render its detail as a
//! two-column table.

use k8s_openapi::api::core::v1::Node;
use kube::ResourceExt;

use crate::ext::NodeExt;

/// Extension trait for `Node` to provide detail rendering.
pub trait NodeDetailExt {
    /// Renders the node's name and status attributes into a human-readable
    /// label/value table.
    ///
    /// The rows are "Node Name", "OS Image", "Kernel Version", "CRI
    /// Version", "Kubelet Version" and "IP Address". Attributes the node
    /// does not report render as empty values.
    fn render_detail(&self) -> String;
}

impl NodeDetailExt for Node {
    fn render_detail(&self) -> String {
        let info = self.system_info();
        let value_of = |field: fn(&k8s_openapi::api::core::v1::NodeSystemInfo) -> &str| {
            info.map(field).unwrap_or_default().to_string()
        };

        let rows = [
            ["Node Name:".to_string(), self.name_any()],
            ["OS Image:".to_string(), value_of(|i| i.os_image.as_str())],
            ["Kernel Version:".to_string(), value_of(|i| i.kernel_version.as_str())],
            ["CRI Version:".to_string(), value_of(|i| i.container_runtime_version.as_str())],
            ["Kubelet Version:".to_string(), value_of(|i| i.kubelet_version.as_str())],
            ["IP Address:".to_string(), self.first_address().unwrap_or_default().to_string()],
        ];

        comfy_table::Table::new()
            .load_preset(comfy_table::presets::NOTHING)
            .set_content_arrangement(comfy_table::ContentArrangement::Dynamic)
            .add_rows(rows)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use k8s_openapi::{
        api::core::v1::{NodeAddress, NodeStatus, NodeSystemInfo},
        apimachinery::pkg::apis::meta::v1::ObjectMeta,
    };

    use super::*;

    fn sample_node() -> Node {
        Node {
            metadata: ObjectMeta { name: Some("n1".to_string()), ..ObjectMeta::default() },
            status: Some(NodeStatus {
                node_info: Some(NodeSystemInfo {
                    os_image: "Ubuntu 24.04.1 LTS".to_string(),
                    kernel_version: "6.8.0-41-generic".to_string(),
                    container_runtime_version: "containerd://1.7.12".to_string(),
                    kubelet_version: "v1.31.0".to_string(),
                    ..NodeSystemInfo::default()
                }),
                addresses: Some(vec![NodeAddress {
                    address: "10.0.0.1".to_string(),
                    type_: "InternalIP".to_string(),
                }]),
                ..NodeStatus::default()
            }),
            ..Node::default()
        }
    }

    #[test]
    fn test_detail_lists_every_status_attribute() {
        let detail = sample_node().render_detail();

        assert!(detail.contains("Node Name:"));
        assert!(detail.contains("n1"));
        assert!(detail.contains("OS Image:"));
        assert!(detail.contains("Ubuntu 24.04.1 LTS"));
        assert!(detail.contains("Kernel Version:"));
        assert!(detail.contains("6.8.0-41-generic"));
        assert!(detail.contains("CRI Version:"));
        assert!(detail.contains("containerd://1.7.12"));
        assert!(detail.contains("Kubelet Version:"));
        assert!(detail.contains("v1.31.0"));
        assert!(detail.contains("IP Address:"));
        assert!(detail.contains("10.0.0.1"));
    }

    #[test]
    fn test_detail_of_node_without_status() {
        let node = Node {
            metadata: ObjectMeta { name: Some("bare".to_string()), ..ObjectMeta::default() },
            ..Node::default()
        };
        let detail = node.render_detail();
        assert!(detail.contains("Node Name:"));
        assert!(detail.contains("bare"));
        assert!(detail.contains("OS Image:"));
    }
}
