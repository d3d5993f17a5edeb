//! Plain-text listing lines written to standard output.
//!
//! Rendering is kept free of I/O so the exact text emitted for a given
//! cluster snapshot can be asserted on directly.

use k8s_openapi::api::core::v1::{Container, Node, Pod};
use kube::ResourceExt;

use crate::ext::PodExt;

/// Renders one node's header line.
///
/// The header is independent of the node's pods, so it can be written before
/// the pod listing for that node is issued.
#[must_use]
pub fn node_header(node: &Node) -> String { format!("Node: {}\n", node.name_any()) }

/// Renders one line per pod and, in verbose mode, one line per container.
///
/// Pods and containers appear in the order the API returned them; no re-sort
/// is applied.
#[must_use]
pub fn pod_lines(pods: &[Pod], verbose: bool) -> String {
    let mut out = String::new();
    for pod in pods {
        out.push_str(&format!("  pod: {}\n", pod.name_any()));
        if verbose {
            for container in pod.containers() {
                out.push_str(&container_line(container));
            }
        }
    }
    out
}

/// Renders one container's name and image reference.
#[must_use]
pub fn container_line(container: &Container) -> String {
    let name = container.name.as_str();
    let image = container.image.as_deref().unwrap_or_default();
    format!("    container: {name:<30} image: {image}\n")
}

/// The informational notice printed when no pod matches the requested name.
#[must_use]
pub fn pod_missing_notice(pod_name: &str) -> String {
    format!("couldn't find pod {pod_name}\n")
}
