//! The query client wrapping a connection to the cluster control plane.
//!
//! It translates logical requests ("all nodes", "node named X", "pods on
//! node X") into single listing calls against the API server and returns the
//! raw result collections. One response is treated as the complete answer;
//! there is no retry and no continuation handling.

pub mod error;
mod filter;

use std::path::{Path, PathBuf};

use k8s_openapi::api::core::v1::{Node, Pod};
use kube::{
    Api,
    config::{KubeConfigOptions, Kubeconfig},
};
use snafu::ResultExt;

pub use self::{error::Error, filter::Filter};

/// A read-only handle on the cluster control plane.
#[derive(Clone)]
pub struct ClusterClient {
    client: kube::Client,
}

impl ClusterClient {
    /// Builds a client from the given kubeconfig file, or from the standard
    /// discovery chain (`$KUBECONFIG`, `~/.kube/config`, in-cluster) when no
    /// path is supplied.
    ///
    /// # Errors
    ///
    /// Returns an `Error` if the kubeconfig cannot be read or the client
    /// cannot be constructed from it.
    pub async fn connect(kubeconfig: Option<PathBuf>) -> Result<Self, Error> {
        let client = match kubeconfig {
            Some(path) => Self::connect_with_kubeconfig(&path).await?,
            None => kube::Client::try_default().await.context(error::CreateClientSnafu)?,
        };
        Ok(Self { client })
    }

    async fn connect_with_kubeconfig(path: &Path) -> Result<kube::Client, Error> {
        tracing::debug!(path = %path.display(), "reading kubeconfig");
        let kubeconfig =
            Kubeconfig::read_from(path).context(error::ReadKubeconfigSnafu { path })?;
        let config = kube::Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
            .await
            .context(error::BuildClientConfigSnafu)?;
        kube::Client::try_from(config).context(error::CreateClientSnafu)
    }

    /// Lists the nodes matching `filter`, in the order the API server
    /// returned them.
    ///
    /// # Errors
    ///
    /// Returns an `Error` if the listing call does not succeed; the caller
    /// must surface it and terminate, since a failed node listing invalidates
    /// any follow-on pod correlation.
    pub async fn list_nodes(&self, filter: &Filter) -> Result<Vec<Node>, Error> {
        tracing::debug!(%filter, "listing nodes");
        let nodes = Api::<Node>::all(self.client.clone())
            .list(&filter.to_list_params())
            .await
            .context(error::ListNodesSnafu)?;
        Ok(nodes.items)
    }

    /// Lists the pods matching `filter` across all namespaces, in the order
    /// the API server returned them.
    ///
    /// # Errors
    ///
    /// Returns an `Error` if the listing call does not succeed.
    pub async fn list_pods(&self, filter: &Filter) -> Result<Vec<Pod>, Error> {
        tracing::debug!(%filter, "listing pods");
        let pods = Api::<Pod>::all(self.client.clone())
            .list(&filter.to_list_params())
            .await
            .with_context(|_| error::ListPodsSnafu { filter: filter.to_string() })?;
        Ok(pods.items)
    }

    /// The version of the API server, or `"unknown"` when it cannot be
    /// queried.
    pub async fn server_version(&self) -> String {
        self.client
            .apiserver_version()
            .await
            .map_or_else(|_| "unknown".to_string(), |info| format!("{}.{}", info.major, info.minor))
    }
}
