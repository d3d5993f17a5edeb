//! Nodeview-specific Kubernetes definitions.

pub mod fields {
    //! Field-selector field names understood by the API server.

    /// The identity field of a `Node` object.
    pub const NODE_NAME: &str = "metadata.name";

    /// The placement field of a `Pod` object, naming the node the pod is
    /// scheduled to.
    pub const POD_NODE_NAME: &str = "spec.nodeName";
}
