use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("{source}"))]
    Configuration { source: crate::config::Error },

    #[snafu(display("{source}"))]
    Query { source: crate::client::Error },

    /// An explicit node-name filter produced zero results. This is distinct
    /// from "cluster has no nodes".
    #[snafu(display("node {node_name} not found!"))]
    NodeNotFound { node_name: String },

    /// A pod's recorded placement points to a node that is no longer present
    /// in the node collection. The two collections are read at different
    /// instants, so this race is observable and must be surfaced.
    #[snafu(display(
        "pod {pod_name} is placed on node {node_name}, but that node is no longer present"
    ))]
    StalePlacement { pod_name: String, node_name: String },

    #[snafu(display("Failed to write to stdout, error: {source}"))]
    WriteStdout { source: std::io::Error },

    #[snafu(display("Failed to create tokio runtime, error: {source}"))]
    InitializeTokioRuntime { source: std::io::Error },
}

impl From<crate::config::Error> for Error {
    fn from(source: crate::config::Error) -> Self { Self::Configuration { source } }
}

impl From<crate::client::Error> for Error {
    fn from(source: crate::client::Error) -> Self { Self::Query { source } }
}
