use std::path::PathBuf;

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Failed to read kubeconfig from {}, error: {source}", path.display()))]
    ReadKubeconfig { path: PathBuf, source: kube::config::KubeconfigError },

    #[snafu(display("Failed to build client configuration from kubeconfig, error: {source}"))]
    BuildClientConfig { source: kube::config::KubeconfigError },

    #[snafu(display("Failed to initialize Kubernetes client, error: {source}"))]
    CreateClient {
        #[snafu(source(from(kube::Error, Box::new)))]
        source: Box<kube::Error>,
    },

    #[snafu(display("Failed to list nodes, error: {source}"))]
    ListNodes {
        #[snafu(source(from(kube::Error, Box::new)))]
        source: Box<kube::Error>,
    },

    #[snafu(display("Failed to list pods (filter: {filter}), error: {source}"))]
    ListPods {
        filter: String,
        #[snafu(source(from(kube::Error, Box::new)))]
        source: Box<kube::Error>,
    },
}
