use clap::Args;
use k8s_openapi::api::core::v1::Node;
use kube::ResourceExt;
use snafu::ResultExt;
use tokio::io::AsyncWriteExt;

use crate::{
    cli::error::{self, Error},
    client::{ClusterClient, Filter},
    ui::report,
};

#[derive(Args, Clone)]
pub struct ListCommand {
    /// Restrict the listing to the node with this name.
    #[arg(short, long, help = "Name of the node to print info for. Defaults to all nodes.")]
    pub nodename: Option<String>,

    /// Also print every pod's containers and image references.
    #[arg(short, long, help = "Also print container name and image for every pod.")]
    pub verbose: bool,
}

impl ListCommand {
    /// Executes the `list` command: for each node (optionally restricted to
    /// one by name), fetches and prints the pods scheduled to it.
    ///
    /// Nodes and pods are printed in the order the API server returned them,
    /// one blank-line-separated block per node, without a summary line.
    ///
    /// # Errors
    ///
    /// Returns `Error::NodeNotFound` when an explicit node-name filter yields
    /// zero results, `Error::Query` when a listing call fails (the first pod
    /// listing failure aborts the remaining nodes), and `Error::WriteStdout`
    /// when output cannot be written.
    pub async fn run(self, client: ClusterClient) -> Result<(), Error> {
        let Self { nodename, verbose } = self;

        let node_filter = nodename.as_deref().map_or(Filter::All, Filter::node_named);
        let nodes = client.list_nodes(&node_filter).await?;
        ensure_explicit_filter_matched(nodename, &nodes)?;

        let mut stdout = tokio::io::stdout();
        stdout.write_u8(b'\n').await.context(error::WriteStdoutSnafu)?;
        for node in &nodes {
            stdout
                .write_all(report::node_header(node).as_bytes())
                .await
                .context(error::WriteStdoutSnafu)?;
            let pods = client.list_pods(&Filter::pods_on_node(node.name_any())).await?;
            stdout
                .write_all(report::pod_lines(&pods, verbose).as_bytes())
                .await
                .context(error::WriteStdoutSnafu)?;
            stdout.write_u8(b'\n').await.context(error::WriteStdoutSnafu)?;
        }
        stdout.flush().await.context(error::WriteStdoutSnafu)
    }
}

/// An explicit filter that yields zero results is always "target not found",
/// never "cluster empty".
fn ensure_explicit_filter_matched(nodename: Option<String>, nodes: &[Node]) -> Result<(), Error> {
    if let Some(node_name) = nodename
        && nodes.is_empty()
    {
        return error::NodeNotFoundSnafu { node_name }.fail();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    use super::*;

    fn named_node(name: &str) -> Node {
        Node {
            metadata: ObjectMeta { name: Some(name.to_string()), ..ObjectMeta::default() },
            ..Node::default()
        }
    }

    #[test]
    fn test_explicit_filter_with_empty_result_is_node_not_found() {
        let err = ensure_explicit_filter_matched(Some("n3".to_string()), &[])
            .expect_err("An explicitly requested node that is absent must be an error");
        assert!(matches!(err, Error::NodeNotFound { ref node_name } if node_name == "n3"));
        assert_eq!(err.to_string(), "node n3 not found!");
    }

    #[test]
    fn test_empty_cluster_without_filter_is_not_an_error() {
        assert!(ensure_explicit_filter_matched(None, &[]).is_ok());
    }

    #[test]
    fn test_explicit_filter_with_a_match_passes() {
        let nodes = vec![named_node("n1")];
        assert!(ensure_explicit_filter_matched(Some("n1".to_string()), &nodes).is_ok());
    }
}
