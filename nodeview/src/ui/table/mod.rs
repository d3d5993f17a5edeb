//! This module provides tabular rendering for Kubernetes node detail.

mod node_detail_ext;

pub use self::node_detail_ext::NodeDetailExt;
