use clap::Args;
use k8s_openapi::api::core::v1::{Node, Pod};
use snafu::ResultExt;
use tokio::io::AsyncWriteExt;

use crate::{
    cli::error::{self, Error},
    client::{ClusterClient, Filter},
    ext::PodExt,
    ui::{report, table::NodeDetailExt},
};

#[derive(Args, Clone)]
pub struct FindPodCommand {
    /// Name of the pod to locate.
    #[arg(help = "Name of the pod whose hosting node should be reported.")]
    pub podname: String,

    /// Print full detail of the hosting node instead of only its name.
    #[arg(short, long, help = "Print full detail of the hosting node.")]
    pub verbose: bool,
}

impl FindPodCommand {
    /// Executes the `findpod` command: scans all pods for an exact name match
    /// and reports the hosting node.
    ///
    /// "No such pod" is a normal negative result and exits successfully with
    /// an informational notice.
    ///
    /// # Errors
    ///
    /// Returns `Error::Query` when a listing call fails and
    /// `Error::StalePlacement` when, in verbose mode, the pod's recorded node
    /// is no longer present in the node collection.
    pub async fn run(self, client: ClusterClient) -> Result<(), Error> {
        let Self { podname, verbose } = self;

        // The hosting node is not known in advance, so the scan cannot be
        // pre-filtered server-side.
        let pods = client.list_pods(&Filter::All).await?;

        let mut stdout = tokio::io::stdout();
        let Some(pod) = locate(&pods, &podname) else {
            stdout
                .write_all(report::pod_missing_notice(&podname).as_bytes())
                .await
                .context(error::WriteStdoutSnafu)?;
            return Ok(());
        };

        let node_name = pod.placement().unwrap_or_default().to_string();
        let output = if verbose {
            let nodes = client.list_nodes(&Filter::node_named(node_name.as_str())).await?;
            let node = hosting_node(&nodes, &podname, &node_name)?;
            format!("{}\n", node.render_detail())
        } else {
            format!("{node_name}\n")
        };

        stdout.write_all(output.as_bytes()).await.context(error::WriteStdoutSnafu)
    }
}

/// Returns the first pod whose name equals `pod_name`. Matching is exact,
/// case-sensitive and without wildcards.
fn locate<'a>(pods: &'a [Pod], pod_name: &str) -> Option<&'a Pod> {
    pods.iter().find(|pod| pod.metadata.name.as_deref() == Some(pod_name))
}

/// Picks the hosting node out of the re-queried node collection.
///
/// An empty collection means the pod's recorded placement points to a node
/// that has vanished between the two reads; that inconsistency is surfaced,
/// never silently skipped.
fn hosting_node<'a>(nodes: &'a [Node], pod_name: &str, node_name: &str) -> Result<&'a Node, Error> {
    nodes.first().ok_or_else(|| error::StalePlacementSnafu { pod_name, node_name }.build())
}

#[cfg(test)]
mod tests {
    use k8s_openapi::{
        api::core::v1::PodSpec,
        apimachinery::pkg::apis::meta::v1::ObjectMeta,
    };

    use super::*;

    fn placed_pod(pod_name: &str, node_name: &str) -> Pod {
        Pod {
            metadata: ObjectMeta { name: Some(pod_name.to_string()), ..ObjectMeta::default() },
            spec: Some(PodSpec {
                node_name: Some(node_name.to_string()),
                ..PodSpec::default()
            }),
            ..Pod::default()
        }
    }

    #[test]
    fn test_locate_exact_match() {
        let pods = vec![placed_pod("p1", "n1"), placed_pod("p2", "n2")];
        let found = locate(&pods, "p2").expect("Should find p2");
        assert_eq!(found.placement(), Some("n2"));
    }

    #[test]
    fn test_locate_is_case_sensitive() {
        let pods = vec![placed_pod("Foo", "n1")];
        assert!(locate(&pods, "foo").is_none());
        assert!(locate(&pods, "Foo").is_some());
    }

    #[test]
    fn test_locate_first_match_wins() {
        let pods = vec![placed_pod("dup", "n1"), placed_pod("dup", "n2")];
        let found = locate(&pods, "dup").expect("Should find dup");
        assert_eq!(found.placement(), Some("n1"));
    }

    #[test]
    fn test_locate_missing_pod() {
        let pods = vec![placed_pod("p1", "n1")];
        assert!(locate(&pods, "p9").is_none());
        assert!(locate(&[], "p9").is_none());
    }

    #[test]
    fn test_vanished_hosting_node_is_stale_placement() {
        let err = hosting_node(&[], "p1", "n1")
            .expect_err("A recorded placement onto an absent node must be an error");
        assert!(matches!(
            err,
            Error::StalePlacement { ref pod_name, ref node_name }
                if pod_name == "p1" && node_name == "n1"
        ));
    }

    #[test]
    fn test_present_hosting_node_is_returned() {
        let nodes = vec![Node {
            metadata: ObjectMeta { name: Some("n1".to_string()), ..ObjectMeta::default() },
            ..Node::default()
        }];
        let node = hosting_node(&nodes, "p1", "n1").expect("The hosting node is present");
        assert_eq!(node.metadata.name.as_deref(), Some("n1"));
    }
}
